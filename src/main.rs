use cap_tracker::server::{config::Config, model::app::AppState, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), cap_tracker::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let router = startup::build_router(&config, AppState::from(db));

    startup::serve(&config, router).await
}
