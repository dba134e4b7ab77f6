//! [`ActorEntity`] implementation for [`Order`].

use crate::clients::{ActorClient, RestaurantClient};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderAction, OrderCreate, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = RestaurantClient;
    type Error = OrderError;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order {
            id,
            restaurant: params.restaurant,
            name: params.name,
            address: params.address,
            phone: params.phone,
            status: OrderStatus::New,
            items: params.items,
        })
    }

    /// Persistence-side validation: the restaurant the draft was stamped
    /// with must exist in the catalog.
    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), OrderError> {
        let found = restaurants
            .get(self.restaurant.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if found.is_none() {
            return Err(OrderError::InvalidRestaurant(self.restaurant.clone()));
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &RestaurantClient,
    ) -> Result<(), OrderError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(items) = update.items {
            self.items = items;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &RestaurantClient,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::SetStatus(status) => {
                self.status = status;
                Ok(self.status)
            }
        }
    }
}
