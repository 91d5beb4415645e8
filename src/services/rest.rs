//! HTTP backend for the order and pizza API.

use super::{CatalogService, OrderService, TransportError};
use crate::config::Settings;
use crate::model::{Order, OrderId, OrderStatus, PizzaCreate, PizzaId, PizzaItem, PizzaUpdate, SubmissionPayload};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Unavailable(e.to_string())
        }
    }
}

/// Body of `PUT /api/orders/{id}`: pizzas travel as `[{id}]` objects there.
#[derive(Debug, Serialize)]
struct OrderUpdateBody<'a> {
    nickname: &'a str,
    status: OrderStatus,
    pizzas: Vec<PizzaRef>,
}

#[derive(Debug, Serialize)]
struct PizzaRef {
    id: PizzaId,
}

impl<'a> From<&'a SubmissionPayload> for OrderUpdateBody<'a> {
    fn from(payload: &'a SubmissionPayload) -> Self {
        Self {
            nickname: &payload.nickname,
            status: payload.status,
            pizzas: payload.pizza_ids.iter().map(|&id| PizzaRef { id }).collect(),
        }
    }
}

/// Client for the REST server.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: Client,
    base_url: String,
}

impl RestBackend {
    /// `base_url` is the server root, e.g. `http://localhost:8080`; a trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        Self::new(
            settings.api_base_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn checked(request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let message = response.text().await.unwrap_or_default();
        warn!(%status, %url, "Request failed");
        if status == StatusCode::NOT_FOUND {
            Err(TransportError::NotFound(url))
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, TransportError> {
        Ok(Self::checked(request).await?.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogService for RestBackend {
    #[instrument(skip(self))]
    async fn list_pizzas(&self) -> Result<Vec<PizzaItem>, TransportError> {
        debug!("Sending request");
        Self::fetch(self.http.get(self.url("/api/pizzas"))).await
    }

    #[instrument(skip(self))]
    async fn create_pizza(&self, description: &str) -> Result<PizzaItem, TransportError> {
        let body = PizzaCreate {
            description: description.to_string(),
        };
        Self::fetch(self.http.post(self.url("/api/pizzas")).json(&body)).await
    }

    #[instrument(skip(self))]
    async fn update_pizza(&self, id: PizzaId, description: &str) -> Result<PizzaItem, TransportError> {
        let body = PizzaUpdate {
            description: description.to_string(),
        };
        Self::fetch(self.http.put(self.url(&format!("/api/pizzas/{}", id.0))).json(&body)).await
    }

    #[instrument(skip(self))]
    async fn delete_pizza(&self, id: PizzaId) -> Result<(), TransportError> {
        Self::checked(self.http.delete(self.url(&format!("/api/pizzas/{}", id.0)))).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderService for RestBackend {
    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, TransportError> {
        debug!("Sending request");
        Self::fetch(self.http.get(self.url("/api/orders"))).await
    }

    #[instrument(skip(self))]
    async fn list_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, TransportError> {
        Self::fetch(self.http.get(self.url(&format!("/api/orders/status/{}", status.code())))).await
    }

    #[instrument(skip(self, payload))]
    async fn create_order(&self, payload: &SubmissionPayload) -> Result<Order, TransportError> {
        debug!(?payload, "create_order called");
        Self::fetch(self.http.post(self.url("/api/orders/create")).json(payload)).await
    }

    #[instrument(skip(self, payload))]
    async fn update_order(&self, id: OrderId, payload: &SubmissionPayload) -> Result<Order, TransportError> {
        debug!(?payload, "update_order called");
        let body = OrderUpdateBody::from(payload);
        Self::fetch(self.http.put(self.url(&format!("/api/orders/{}", id.0))).json(&body)).await
    }

    #[instrument(skip(self))]
    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, TransportError> {
        let request = self
            .http
            .put(self.url(&format!("/api/orders/update-status/{}", id.0)))
            .query(&[("status", status.code())]);
        Self::fetch(request).await
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, id: OrderId) -> Result<(), TransportError> {
        // The server answers with a plain-text confirmation; only the status matters.
        Self::checked(self.http.delete(self.url(&format!("/api/orders/{}", id.0)))).await?;
        Ok(())
    }
}
