use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Delivery lifecycle of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Delivery,
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivery => "delivery",
            OrderStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

/// A placed order.
///
/// `restaurant` holds the slug of the restaurant the order was placed
/// against; it is stamped by the session before the save is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub restaurant: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub status: OrderStatus,
    pub items: Vec<MenuItem>,
}

impl Order {
    /// Sum of the selected items' prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Payload for persisting a draft order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub restaurant: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub items: Vec<MenuItem>,
}

/// Payload for editing an order that is already placed.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub items: Option<Vec<MenuItem>>,
}

/// Order-specific operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order to the given delivery status.
    SetStatus(OrderStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_item_prices() {
        let order = Order {
            id: "order_1".into(),
            restaurant: "cheese-curd-city".into(),
            name: "Alice".into(),
            address: "123 Main St".into(),
            phone: "555-0100".into(),
            status: OrderStatus::New,
            items: vec![
                MenuItem::new("Spinach Fennel Watercress Ravioli", 35.99),
                MenuItem::new("Herring in Lavender Dill Reduction", 45.99),
            ],
        };
        assert!((order.total() - 81.98).abs() < 1e-9);
    }

    #[test]
    fn total_of_empty_order_is_zero() {
        let order = Order {
            id: "order_1".into(),
            restaurant: "cheese-curd-city".into(),
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            status: OrderStatus::New,
            items: vec![],
        };
        assert_eq!(order.total(), 0.0);
    }
}
