//! [`ActorEntity`] implementation for [`Restaurant`].

use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = String;
    type Create = RestaurantCreate;
    // Reference data: no updates, no custom actions.
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RestaurantError;

    fn id(&self) -> String {
        self.slug.clone()
    }

    fn create_id(params: &RestaurantCreate) -> Option<String> {
        Some(params.slug.clone())
    }

    fn from_create_params(id: String, params: RestaurantCreate) -> Result<Self, RestaurantError> {
        if id.is_empty() {
            return Err(RestaurantError::InvalidSlug);
        }
        Ok(Restaurant {
            slug: id,
            name: params.name,
            menu: params.menu,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), RestaurantError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), RestaurantError> {
        Ok(())
    }
}
