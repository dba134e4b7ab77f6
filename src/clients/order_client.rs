use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderAction, OrderCreate, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// `place_order` is the save operation the session stores the outcome of;
/// restaurant validation happens in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists a draft order, returning the assigned order id.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<String, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");

        self.inner
            .create(params)
            .await
            .map_err(Self::map_error)
    }

    /// Edits contact details or items of an already placed order.
    #[instrument(skip(self, update))]
    pub async fn update_order(&self, id: String, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Moves an order to the given delivery status.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: String,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)
    }

    /// All orders placed so far (the order-history view).
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(e) => match e.downcast::<OrderError>() {
                Ok(order_err) => *order_err,
                Err(e) => OrderError::ActorCommunicationError(e.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
