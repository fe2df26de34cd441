use digimon::config::{database, load_app_configuration};
use digimon::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env file (non-fatal, env vars can be set externally)
    let dotenv_loaded = dotenv().is_ok();

    // 2. Load the application configuration (config.toml + env overrides)
    let app_config = load_app_configuration()?;

    // 3. Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level)),
        )
        .init();
    info!(dotenv_loaded, "Configuration loaded.");

    // 4. Connect and ensure tables; failure here aborts startup
    let db = database::init_db(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve until shutdown; the connection is closed on the way out
    let addr = app_config.socket_addr()?;
    digimon::http::run_server(db, addr)
        .await
        .inspect_err(|e| error!("Server error: {}", e))?;

    Ok(())
}
