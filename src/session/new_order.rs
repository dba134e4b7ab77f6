use crate::clients::{ActorClient, OrderClient, RestaurantClient};
use crate::model::{MenuItem, OrderCreate, Restaurant};
use crate::order_actor::OrderError;
use crate::session::SessionError;
use tracing::{debug, info, instrument};

/// An order being assembled, not yet persisted.
///
/// `restaurant` starts empty and is stamped with the resolved restaurant's
/// slug when the order is placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub restaurant: Option<String>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub items: Vec<MenuItem>,
}

impl OrderDraft {
    pub fn is_empty(&self) -> bool {
        *self == OrderDraft::default()
    }

    /// Sum of the selected items' prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Outcome of the most recent save attempt, or `NotSubmitted` if the current
/// draft has not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SaveStatus {
    #[default]
    NotSubmitted,
    Saved(String),
    Failed(OrderError),
}

/// State and behavior backing one rendered "new order" view.
///
/// The session owns exactly one draft at a time. There is no guard against
/// discarding unsaved work: [`start_new_order`](Self::start_new_order)
/// always replaces the draft.
pub struct NewOrderSession {
    slug: String,
    restaurants: RestaurantClient,
    orders: OrderClient,
    /// Resolved restaurant for the current slug, cached after first fetch.
    restaurant: Option<Restaurant>,
    order: OrderDraft,
    save_status: SaveStatus,
}

impl NewOrderSession {
    /// Opens a session for the restaurant identified by `slug`. The draft
    /// starts empty and nothing is fetched until the restaurant is read.
    pub fn new(
        slug: impl Into<String>,
        restaurants: RestaurantClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            slug: slug.into(),
            restaurants,
            orders,
            restaurant: None,
            order: OrderDraft::default(),
            save_status: SaveStatus::NotSubmitted,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Points the session at a different restaurant. The cached record is
    /// invalidated; the next read fetches for the new slug.
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if slug != self.slug {
            self.slug = slug;
            self.restaurant = None;
        }
    }

    /// Resolves the restaurant for the current slug.
    ///
    /// The first successful read issues a fetch and caches the record;
    /// later reads return the cache without touching the actor.
    #[instrument(skip(self), fields(slug = %self.slug))]
    pub async fn restaurant(&mut self) -> Result<&Restaurant, SessionError> {
        if let Some(ref restaurant) = self.restaurant {
            return Ok(restaurant);
        }
        debug!("Resolving restaurant");
        let fetched = self
            .restaurants
            .get(self.slug.clone())
            .await?
            .ok_or_else(|| SessionError::UnknownRestaurant(self.slug.clone()))?;
        Ok(self.restaurant.insert(fetched))
    }

    /// The in-progress draft.
    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    /// Mutable access for the view layer to fill contact fields and items.
    pub fn order_mut(&mut self) -> &mut OrderDraft {
        &mut self.order
    }

    /// Outcome of the last save attempt.
    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Submits the current draft.
    ///
    /// Stamps the draft's `restaurant` field with the resolved restaurant's
    /// slug before the save is attempted, then records the outcome in
    /// [`save_status`](Self::save_status) and returns it. The draft is left
    /// in place either way; starting over is the caller's call.
    #[instrument(skip(self), fields(slug = %self.slug))]
    pub async fn place_order(&mut self) -> Result<String, SessionError> {
        let restaurant_slug = self.restaurant().await?.slug.clone();
        self.order.restaurant = Some(restaurant_slug.clone());

        let params = OrderCreate {
            restaurant: restaurant_slug,
            name: self.order.name.clone(),
            address: self.order.address.clone(),
            phone: self.order.phone.clone(),
            items: self.order.items.clone(),
        };

        match self.orders.place_order(params).await {
            Ok(order_id) => {
                info!(%order_id, "Order placed");
                self.save_status = SaveStatus::Saved(order_id.clone());
                Ok(order_id)
            }
            Err(e) => {
                self.save_status = SaveStatus::Failed(e.clone());
                Err(SessionError::Save(e))
            }
        }
    }

    /// Discards the current draft for a fresh empty one and clears the save
    /// status. Applies regardless of prior state.
    pub fn start_new_order(&mut self) {
        debug!("Starting new order");
        self.order = OrderDraft::default();
        self.save_status = SaveStatus::NotSubmitted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_total_follows_items() {
        let mut draft = OrderDraft::default();
        assert!(draft.is_empty());
        assert_eq!(draft.total(), 0.0);

        draft.items.push(MenuItem::new("Truffle Noodles", 14.99));
        draft.items.push(MenuItem::new("Garlic Fries", 15.99));
        assert!(!draft.is_empty());
        assert!((draft.total() - 30.98).abs() < 1e-9);
    }
}
