use pizza_console::clients::{actor_client::ActorClient, CatalogClient};
use pizza_console::framework::{mock::MockClient, FrameworkError};
use pizza_console::model::{OrderId, OrderStatus, PizzaId, PizzaItem, SubmissionPayload};
use pizza_console::order_actor::OrderError;

fn payload(nickname: &str, ids: &[u64]) -> SubmissionPayload {
    SubmissionPayload {
        nickname: nickname.to_string(),
        status: OrderStatus::Processing,
        pizza_ids: ids.iter().copied().map(PizzaId).collect(),
    }
}

/// Real order actor, mocked catalog: pizza resolution happens in `on_create`.
#[tokio::test]
async fn test_order_actor_resolves_pizzas_from_catalog() {
    let mut catalog_mock = MockClient::<PizzaItem>::new();
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(1, "Margherita"), PizzaItem::new(2, "Diavola")]);

    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let order = order_client
        .create_order(payload("Mario", &[2, 1]))
        .await
        .expect("Order creation failed");

    assert_eq!(order.id, OrderId(1));
    assert_eq!(
        order.pizzas,
        vec![PizzaItem::new(2, "Diavola"), PizzaItem::new(1, "Margherita")]
    );

    let stored = order_client.get(order.id).await.unwrap();
    assert_eq!(stored, Some(order));

    catalog_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_pizza_rejects_create_and_keeps_id() {
    let mut catalog_mock = MockClient::<PizzaItem>::new();
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(1, "Margherita")]);
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(1, "Margherita")]);

    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let err = order_client
        .create_order(payload("Mario", &[1, 7]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidPizzas(vec![PizzaId(7)]));
    assert!(order_client.list_orders().await.unwrap().is_empty());

    let order = order_client.create_order(payload("Mario", &[1])).await.unwrap();
    assert_eq!(order.id, OrderId(1));
    catalog_mock.verify();
}

#[tokio::test]
async fn test_failed_update_leaves_order_unchanged() {
    let mut catalog_mock = MockClient::<PizzaItem>::new();
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(1, "Margherita")]);
    catalog_mock
        .expect_list()
        .return_err(FrameworkError::ActorClosed);

    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let order = order_client.create_order(payload("Mario", &[1])).await.unwrap();
    let err = order_client
        .update_order(order.id, payload("Maria", &[1]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::CatalogUnavailable(_)));

    let stored = order_client.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored.nickname, "Mario");
    catalog_mock.verify();
}

#[tokio::test]
async fn test_empty_nickname_never_reaches_catalog() {
    let catalog_mock = MockClient::<PizzaItem>::new();
    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let err = order_client.create_order(payload("", &[1])).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));
    catalog_mock.verify();
}

#[tokio::test]
async fn test_status_change_skips_catalog() {
    let mut catalog_mock = MockClient::<PizzaItem>::new();
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(3, "Capricciosa")]);

    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let order = order_client.create_order(payload("Lucia", &[3])).await.unwrap();
    let updated = order_client
        .set_status(order.id, OrderStatus::Fulfilled)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Fulfilled);
    assert_eq!(updated.pizzas, order.pizzas);

    let missing = order_client.set_status(OrderId(99), OrderStatus::Pending).await;
    assert_eq!(missing, Err(OrderError::NotFound("order_99".into())));
    catalog_mock.verify();
}

#[tokio::test]
async fn test_whitespace_nickname_is_accepted() {
    let mut catalog_mock = MockClient::<PizzaItem>::new();
    catalog_mock
        .expect_list()
        .return_ok(vec![PizzaItem::new(1, "Margherita")]);

    let (order_actor, order_client) = pizza_console::order_actor::new(8);
    tokio::spawn(order_actor.run(CatalogClient::new(catalog_mock.client())));

    let order = order_client.create_order(payload(" ", &[1])).await.unwrap();
    assert_eq!(order.nickname, " ");
    catalog_mock.verify();
}
