use serde::{Deserialize, Serialize};

/// Topping offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, also what customers put on a pizza
    pub name: String,
    /// Relative image path served by the storefront
    pub image: String,
}

impl Ingredient {
    /// Ingredient whose image follows the `images/<lowercase-name>.png` convention
    pub fn with_default_image(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: format!("images/{}.png", name.to_lowercase()),
        }
    }
}
