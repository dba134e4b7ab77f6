//! Real Order actor with a mocked Restaurant dependency.
//!
//! Exercises the actor's `on_create` validation and status actions while
//! keeping the restaurant side scripted.

use order_up::clients::{ActorClient, RestaurantClient};
use order_up::framework::mock::MockClient;
use order_up::model::{Menu, MenuItem, OrderCreate, OrderStatus, OrderUpdate, Restaurant};
use order_up::order_actor::OrderError;

fn draft_for(slug: &str) -> OrderCreate {
    OrderCreate {
        restaurant: slug.to_string(),
        name: "Alice".to_string(),
        address: "123 Main St".to_string(),
        phone: "555-0100".to_string(),
        items: vec![
            MenuItem::new("Gunthorp Chicken", 21.99),
            MenuItem::new("Steamed Mussels", 21.99),
        ],
    }
}

#[tokio::test]
async fn order_creation_validates_restaurant_through_context() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock.expect_get().return_ok(Some(Restaurant::new(
        "cheese-curd-city",
        "Cheese Curd City",
        Menu::default(),
    )));
    let restaurant_client = RestaurantClient::new(restaurant_mock.client());

    let (order_actor, order_client) = order_up::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(restaurant_client));

    let order_id = order_client
        .place_order(draft_for("cheese-curd-city"))
        .await
        .expect("order should be accepted");
    assert_eq!(order_id, "order_1");

    let order = order_client
        .get(order_id.clone())
        .await
        .unwrap()
        .expect("order should be stored");
    assert_eq!(order.restaurant, "cheese-curd-city");
    assert_eq!(order.status, OrderStatus::New);
    assert!((order.total() - 43.98).abs() < 1e-9);

    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn order_for_unknown_restaurant_is_rejected() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock.expect_get().return_ok(None);
    let restaurant_client = RestaurantClient::new(restaurant_mock.client());

    let (order_actor, order_client) = order_up::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(restaurant_client));

    let result = order_client.place_order(draft_for("no-such-place")).await;
    assert_eq!(
        result,
        Err(OrderError::InvalidRestaurant("no-such-place".to_string()))
    );

    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn status_actions_and_updates_mutate_the_stored_order() {
    let mut restaurant_mock = MockClient::<Restaurant>::new();
    restaurant_mock.expect_get().return_ok(Some(Restaurant::new(
        "cheese-curd-city",
        "Cheese Curd City",
        Menu::default(),
    )));
    let restaurant_client = RestaurantClient::new(restaurant_mock.client());

    let (order_actor, order_client) = order_up::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(restaurant_client));

    let order_id = order_client
        .place_order(draft_for("cheese-curd-city"))
        .await
        .unwrap();

    let status = order_client
        .set_status(order_id.clone(), OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(status, OrderStatus::Preparing);

    let updated = order_client
        .update_order(
            order_id.clone(),
            OrderUpdate {
                name: None,
                address: Some("456 Oak Ave".to_string()),
                phone: None,
                items: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.address, "456 Oak Ave");
    assert_eq!(updated.status, OrderStatus::Preparing);

    // Operations on ids the actor never issued come back as NotFound.
    let missing = order_client
        .set_status("order_99".to_string(), OrderStatus::Delivered)
        .await;
    assert_eq!(missing, Err(OrderError::NotFound("order_99".to_string())));

    restaurant_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
