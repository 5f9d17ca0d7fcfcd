use anyhow::Context;
use pizzeria_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load pizzeria settings")?;
    pizzeria_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.bind_address(),
        "pizzeria-app bootstrap starting"
    );

    pizzeria_app::run(settings, pizzeria_http::shutdown_signal()).await?;

    tracing::info!("pizzeria-app shut down");
    Ok(())
}
