//! Pizza shop order backend
//!
//! Wires the shop modules (ingredient catalog, order registry) into the
//! module kernel and serves them over HTTP.

pub mod modules;

use std::future::Future;

use anyhow::Context;
use pizzeria_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Registry with every shop module registered
pub fn module_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run the backend until `shutdown` resolves.
///
/// Modules are initialized and started before the server binds, and stopped
/// once it has drained.
pub async fn run<F>(settings: Settings, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let registry = module_registry();
    tracing::info!(modules = registry.len(), "shop modules registered");
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = pizzeria_http::start_server(&registry, &settings, shutdown).await;

    registry
        .stop_all()
        .await
        .context("failed to stop modules cleanly")?;

    served
}
