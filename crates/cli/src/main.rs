use anyhow::Context;
use clap::{Parser, Subcommand};
use pizzeria_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "pizzeria",
    about = "Pizza shop order backend",
    after_help = "Examples:\n  pizzeria serve\n  PIZZERIA_ENV=production pizzeria config\n  pizzeria openapi > openapi.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Serve the HTTP API until Ctrl-C")]
    Serve,
    #[command(about = "Print the effective configuration as JSON")]
    Config,
    #[command(about = "Print the merged OpenAPI document as JSON")]
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => serve().await,
        Command::Config => {
            let settings = load_settings()?;
            print_json(&serde_json::to_value(&settings)?)
        }
        Command::Openapi => {
            let registry = pizzeria_app::module_registry();
            print_json(&pizzeria_http::router::openapi_document(&registry))
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let settings = load_settings()?;
    pizzeria_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.bind_address(),
        "pizzeria serve starting"
    );

    pizzeria_app::run(settings, pizzeria_http::shutdown_signal()).await
}

fn load_settings() -> anyhow::Result<Settings> {
    Settings::load().with_context(|| "failed to load pizzeria settings")
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
