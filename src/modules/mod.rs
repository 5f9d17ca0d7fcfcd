pub mod ingredients;
pub mod orders;

use std::sync::Arc;

use pizzeria_kernel::ModuleRegistry;

use orders::registry::OrderRegistry;

/// Register all shop modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(ingredients::create_module());
    registry.register(orders::create_module(Arc::new(OrderRegistry::new())));
}
