//! Restaurants and menus the user bookmarked.
use resource_hooks::Identified;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for saved restaurants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub String);

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for saved menus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(pub String);

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRestaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub distance_km: f32,
}

impl Identified for SavedRestaurant {
    type Id = RestaurantId;

    fn id(&self) -> &RestaurantId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMenu {
    pub id: MenuId,
    pub name: String,
    pub restaurant_name: String,
    pub calories: u32,
}

impl Identified for SavedMenu {
    type Id = MenuId;

    fn id(&self) -> &MenuId {
        &self.id
    }
}

/// Backend document holding the saved restaurants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantList {
    pub items: Vec<SavedRestaurant>,
}

impl RestaurantList {
    pub fn sample() -> Self {
        Self {
            items: vec![
                SavedRestaurant {
                    id: "r1".into(),
                    name: "Green Bowl".to_string(),
                    cuisine: "Healthy".to_string(),
                    rating: 4.6,
                    distance_km: 1.2,
                },
                SavedRestaurant {
                    id: "r2".into(),
                    name: "Sakura Sushi".to_string(),
                    cuisine: "Japanese".to_string(),
                    rating: 4.4,
                    distance_km: 2.8,
                },
            ],
        }
    }
}

/// Backend document holding the saved menus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuList {
    pub items: Vec<SavedMenu>,
}

impl MenuList {
    pub fn sample() -> Self {
        Self {
            items: vec![
                SavedMenu {
                    id: "m1".into(),
                    name: "Quinoa Power Bowl".to_string(),
                    restaurant_name: "Green Bowl".to_string(),
                    calories: 520,
                },
                SavedMenu {
                    id: "m2".into(),
                    name: "Salmon Avocado Roll".to_string(),
                    restaurant_name: "Sakura Sushi".to_string(),
                    calories: 410,
                },
            ],
        }
    }
}

/// Both saved lists, as one screen shows them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedItems {
    pub restaurants: Vec<SavedRestaurant>,
    pub menus: Vec<SavedMenu>,
}
