pub mod models;

use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use pizzeria_kernel::{InitCtx, Module};
use serde_json::json;

use models::Ingredient;

/// Names on the menu, in display order
const CATALOG: [&str; 6] = ["Sauce", "Cheese", "Corn", "Mushrooms", "Peppers", "Onions"];

/// Fixed ingredient catalog, rebuilt on every call
pub fn catalog() -> Vec<Ingredient> {
    CATALOG
        .iter()
        .map(|name| Ingredient::with_default_image(name))
        .collect()
}

/// Serves the ingredient catalog
pub struct IngredientsModule;

impl IngredientsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for IngredientsModule {
    fn name(&self) -> &'static str {
        "ingredients"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            ingredients = CATALOG.len(),
            "ingredients module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new().route("/", get(list_ingredients))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List ingredients",
                        "tags": ["Ingredients"],
                        "responses": {
                            "200": {
                                "description": "Ingredient catalog in display order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Ingredient"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Ingredient": {
                        "type": "object",
                        "properties": {
                            "name": {
                                "type": "string",
                                "description": "Ingredient name"
                            },
                            "image": {
                                "type": "string",
                                "description": "Relative image path"
                            }
                        },
                        "required": ["name", "image"]
                    }
                }
            }
        }))
    }
}

/// List ingredients endpoint
async fn list_ingredients() -> Json<Vec<Ingredient>> {
    Json(catalog())
}

/// Create a new instance of the ingredients module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(IngredientsModule::new())
}
