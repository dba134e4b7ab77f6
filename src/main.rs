//! Demo binary: seed the catalog, walk one order-creation session end to
//! end, then shut the system down.

use order_up::clients::ActorClient;
use order_up::lifecycle::{setup_tracing, OrderingSystem};
use order_up::model::RestaurantCreate;
use order_up::session::SaveStatus;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order placement system");

    let catalog: Vec<RestaurantCreate> =
        serde_json::from_str(include_str!("../data/restaurants.json"))
            .map_err(|e| format!("invalid catalog file: {}", e))?;

    let system = OrderingSystem::new(catalog)
        .await
        .map_err(|e| e.to_string())?;

    let mut session = system.session("cheese-curd-city");

    // Resolve the restaurant for the session's slug and pick dinner items
    // off its menu.
    let span = tracing::info_span!("restaurant_lookup");
    let dinner = async {
        info!(slug = session.slug(), "Resolving restaurant");
        let restaurant = session.restaurant().await.map_err(|e| e.to_string())?;
        info!(name = %restaurant.name, "Restaurant resolved");
        Ok::<_, String>(restaurant.menu.dinner.clone())
    }
    .instrument(span)
    .await?;

    {
        let draft = session.order_mut();
        draft.name = "Alice".to_string();
        draft.address = "123 Main St".to_string();
        draft.phone = "555-0100".to_string();
        draft.items.extend(dinner);
    }
    info!(total = session.order().total(), "Draft assembled");

    let span = tracing::info_span!("order_placement");
    let placed = async {
        info!("Placing order");
        session.place_order().await
    }
    .instrument(span)
    .await;

    match placed {
        Ok(order_id) => info!(%order_id, "Order placed successfully"),
        Err(e) => error!(error = %e, "Order placement failed"),
    }
    if let SaveStatus::Saved(order_id) = session.save_status() {
        let order = system
            .order_client
            .get(order_id.clone())
            .await
            .map_err(|e| e.to_string())?
            .ok_or("placed order missing")?;
        info!(status = %order.status, total = order.total(), "Order on file");
    }

    // Fresh draft for the next customer.
    session.start_new_order();
    info!(empty = session.order().is_empty(), "Session reset");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
