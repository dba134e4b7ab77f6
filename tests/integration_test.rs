//! Full end-to-end tests with all real actors.

use order_up::clients::ActorClient;
use order_up::lifecycle::OrderingSystem;
use order_up::model::{OrderStatus, RestaurantCreate};
use order_up::restaurant_actor::RestaurantError;
use order_up::session::{SaveStatus, SessionError};

fn catalog() -> Vec<RestaurantCreate> {
    serde_json::from_str(include_str!("../data/restaurants.json"))
        .expect("demo catalog should parse")
}

#[tokio::test]
async fn full_order_flow() {
    let system = OrderingSystem::new(catalog())
        .await
        .expect("seeding should succeed");

    // Catalog is queryable.
    let restaurants = system.restaurant_client.list().await.unwrap();
    assert_eq!(restaurants.len(), 3);

    // Assemble and place an order through a session.
    let mut session = system.session("cheese-curd-city");
    let dinner = session.restaurant().await.unwrap().menu.dinner.clone();
    assert!(!dinner.is_empty());

    {
        let draft = session.order_mut();
        draft.name = "Alice".to_string();
        draft.address = "123 Main St".to_string();
        draft.phone = "555-0100".to_string();
        draft.items.extend(dinner.clone());
    }
    let expected_total: f64 = dinner.iter().map(|i| i.price).sum();

    let order_id = session.place_order().await.expect("order should save");
    assert_eq!(*session.save_status(), SaveStatus::Saved(order_id.clone()));

    // The stored order carries the stamped restaurant and the items' total.
    let order = system
        .order_client
        .get(order_id.clone())
        .await
        .unwrap()
        .expect("order should be stored");
    assert_eq!(order.restaurant, "cheese-curd-city");
    assert_eq!(order.name, "Alice");
    assert_eq!(order.status, OrderStatus::New);
    assert!((order.total() - expected_total).abs() < 1e-9);

    // Kitchen-side status advance.
    let status = system
        .order_client
        .set_status(order_id.clone(), OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(status, OrderStatus::Preparing);

    // Same session, next customer: fresh draft, new restaurant.
    session.start_new_order();
    assert!(session.order().is_empty());

    session.set_slug("taco-joint");
    let lunch = session.restaurant().await.unwrap().menu.lunch.clone();
    session.order_mut().name = "Bob".to_string();
    session.order_mut().items.extend(lunch);
    let second_id = session.place_order().await.unwrap();
    assert_ne!(second_id, order_id);

    let history = system.order_client.history().await.unwrap();
    assert_eq!(history.len(), 2);

    system.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn order_against_unknown_restaurant_fails_end_to_end() {
    let system = OrderingSystem::new(catalog()).await.unwrap();

    let mut session = system.session("no-such-place");
    let err = session.place_order().await.unwrap_err();
    assert_eq!(
        err,
        SessionError::UnknownRestaurant("no-such-place".to_string())
    );
    assert_eq!(*session.save_status(), SaveStatus::NotSubmitted);

    // Nothing reached the order actor.
    assert!(system.order_client.history().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn duplicate_catalog_slugs_fail_seeding() {
    let mut entries = catalog();
    entries.push(RestaurantCreate {
        slug: "taco-joint".to_string(),
        name: "Taco Joint Impostor".to_string(),
        menu: Default::default(),
    });

    let result = OrderingSystem::new(entries).await;
    assert!(matches!(
        result,
        Err(RestaurantError::DuplicateSlug(slug)) if slug == "taco-joint"
    ));
}

#[tokio::test]
async fn concurrent_sessions_place_independent_orders() {
    let system = OrderingSystem::new(catalog()).await.unwrap();

    let mut handles = vec![];
    for i in 0..8 {
        let slug = if i % 2 == 0 {
            "cheese-curd-city"
        } else {
            "poutine-palace"
        };
        let mut session = system.session(slug);
        handles.push(tokio::spawn(async move {
            let menu = session.restaurant().await?.menu.clone();
            let draft = session.order_mut();
            draft.name = format!("Customer {}", i);
            draft.items.extend(menu.lunch);
            session.place_order().await
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("order should save");
        ids.insert(id);
    }
    assert_eq!(ids.len(), 8, "every session gets its own order id");

    let history = system.order_client.history().await.unwrap();
    assert_eq!(history.len(), 8);

    system.shutdown().await.unwrap();
}
