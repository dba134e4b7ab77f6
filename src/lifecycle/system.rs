use crate::clients::{OrderClient, RestaurantClient};
use crate::model::RestaurantCreate;
use crate::restaurant_actor::RestaurantError;
use crate::session::NewOrderSession;
use tracing::{error, info};

/// The runtime orchestrator for the ordering system.
///
/// Responsible for starting both actors, wiring the restaurant client into
/// the order actor's context, seeding the restaurant catalog and shutting
/// everything down cleanly.
///
/// # Example
///
/// ```ignore
/// let system = OrderingSystem::new(catalog).await?;
/// let mut session = system.session("cheese-curd-city");
/// session.order_mut().items.push(item);
/// let order_id = session.place_order().await?;
/// system.shutdown().await?;
/// ```
pub struct OrderingSystem {
    /// Client for the Restaurant actor.
    pub restaurant_client: RestaurantClient,

    /// Client for the Order actor.
    pub order_client: OrderClient,

    /// Task handles for the running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderingSystem {
    /// Spawns both actors and seeds the catalog.
    ///
    /// The restaurant actor has no dependencies; the order actor receives a
    /// clone of the restaurant client as its context so order creation can
    /// validate restaurant references. Seeding goes through the normal
    /// create path, so a catalog with duplicate slugs fails here rather
    /// than at lookup time.
    pub async fn new(catalog: Vec<RestaurantCreate>) -> Result<Self, RestaurantError> {
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(restaurant_client.clone()));

        let seeded = catalog.len();
        for entry in catalog {
            restaurant_client.add_restaurant(entry).await?;
        }
        info!(seeded, "Catalog seeded");

        Ok(Self {
            restaurant_client,
            order_client,
            handles: vec![restaurant_handle, order_handle],
        })
    }

    /// Opens an order-creation session for the restaurant identified by
    /// `slug`: one session per rendered view.
    pub fn session(&self, slug: impl Into<String>) -> NewOrderSession {
        NewOrderSession::new(slug, self.restaurant_client.clone(), self.order_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains
    /// its queue and exits its loop. Any panicked actor task surfaces as an
    /// error here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The order actor's context holds a clone of the restaurant client,
        // so the restaurant actor only sees its channel close once the
        // order actor has exited. Await in reverse spawn order.
        drop(self.order_client);
        drop(self.restaurant_client);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
