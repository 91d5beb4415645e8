//! Entity trait implementation for [`PizzaItem`].

use super::CatalogError;
use crate::framework::ActorEntity;
use crate::model::{PizzaCreate, PizzaId, PizzaItem, PizzaUpdate};
use async_trait::async_trait;
use std::convert::Infallible;

fn required(description: String) -> Result<String, CatalogError> {
    if description.trim().is_empty() {
        Err(CatalogError::MissingDescription)
    } else {
        Ok(description)
    }
}

#[async_trait]
impl ActorEntity for PizzaItem {
    type Id = PizzaId;
    type Create = PizzaCreate;
    type Update = PizzaUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: PizzaId, params: PizzaCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            description: required(params.description)?,
        })
    }

    async fn on_update(&mut self, update: PizzaUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.description = required(update.description)?;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
