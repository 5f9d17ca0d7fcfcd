pub mod models;
pub mod registry;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};
use pizzeria_kernel::{InitCtx, Module};
use serde_json::json;

use registry::OrderRegistry;

/// Order submission and lookup, backed by an in-memory [`OrderRegistry`]
pub struct OrdersModule {
    registry: Arc<OrderRegistry>,
}

impl OrdersModule {
    pub fn new(registry: Arc<OrderRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Module for OrdersModule {
    fn name(&self) -> &'static str {
        "orders"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "orders module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(routes::submit_order))
            .route("/{code}", get(routes::fetch_order))
            .with_state(Arc::clone(&self.registry))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Submit order",
                        "tags": ["Orders"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Order"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Code assigned to the new order",
                                "content": {
                                    "text/plain": {
                                        "schema": {
                                            "type": "string"
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Body is not valid JSON",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            },
                            "422": {
                                "description": "Body does not have the shape of an order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{code}": {
                    "get": {
                        "summary": "Fetch order by code",
                        "tags": ["Orders"],
                        "parameters": [
                            {
                                "name": "code",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Registered order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Order"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "No order under this code",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
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
                    "Address": {
                        "type": "object",
                        "properties": {
                            "street": { "type": "string" },
                            "houseNumber": { "type": "string" },
                            "city": { "type": "string" }
                        }
                    },
                    "Pizza": {
                        "type": "object",
                        "properties": {
                            "ingredients": {
                                "type": "array",
                                "items": { "type": "string" },
                                "description": "Ingredient names, free text"
                            },
                            "price": { "type": "number" }
                        }
                    },
                    "Order": {
                        "type": "object",
                        "description": "Order total is the sum of pizza prices and is not stored",
                        "properties": {
                            "code": {
                                "type": "string",
                                "description": "Assigned by the server; ignored on submit"
                            },
                            "firstName": { "type": "string" },
                            "lastName": { "type": "string" },
                            "address": { "$ref": "#/components/schemas/Address" },
                            "phoneNumber": { "type": "string" },
                            "pizzas": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Pizza" }
                            }
                        }
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "orders module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let discarded = self.registry.len().await;
        tracing::info!(module = self.name(), discarded, "orders module stopped");
        Ok(())
    }
}

/// Create the orders module around a shared registry
pub fn create_module(registry: Arc<OrderRegistry>) -> Arc<dyn Module> {
    Arc::new(OrdersModule::new(registry))
}
