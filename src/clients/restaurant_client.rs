use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Restaurant, RestaurantCreate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
///
/// This is the lookup collaborator the order session consumes: `get(slug)`
/// resolves to the restaurant record, or `None` when the slug is unknown.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    /// Adds a restaurant to the catalog, keyed by its slug.
    #[instrument(skip(self, params), fields(slug = %params.slug))]
    pub async fn add_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<String, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::AlreadyExists(slug) => RestaurantError::DuplicateSlug(slug),
            FrameworkError::EntityError(e) => match e.downcast::<RestaurantError>() {
                Ok(err) => *err,
                Err(e) => RestaurantError::ActorCommunicationError(e.to_string()),
            },
            other => RestaurantError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RestaurantError::ActorCommunicationError(e.to_string())
    }
}
