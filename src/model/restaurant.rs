use serde::{Deserialize, Serialize};

/// A single dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A restaurant's menu, split into lunch and dinner sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub lunch: Vec<MenuItem>,
    pub dinner: Vec<MenuItem>,
}

/// A restaurant record: read-only reference data.
///
/// Restaurants are keyed by their URL slug (e.g. `cheese-curd-city`), which
/// is the identifier drafts carry in their `restaurant` field. Nothing in
/// the system mutates a restaurant after it enters the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub slug: String,
    pub name: String,
    pub menu: Menu,
}

impl Restaurant {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, menu: Menu) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            menu,
        }
    }
}

/// Payload for adding a restaurant to the catalog.
///
/// Same shape as [`Restaurant`]; the slug doubles as the natural key under
/// which the actor stores the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub menu: Menu,
}
