//! Housekeeping entry point: initializes the database and runs one reminder
//! scan so alert records are synchronized before the UI layer starts reading.

use chrono::Utc;
use dotenvy::dotenv;
use labstock::{config, core::reminder, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Run a reminder scan so alerts reflect the current inventory state
    let today = Utc::now().date_naive();
    let outcome = reminder::scan_with_window(&db, today, app_config.expiry_window_days).await?;
    info!(
        low_stock = outcome.low_stock_created,
        expiry = outcome.expiry_created,
        "Reminder scan complete."
    );

    let open = reminder::unresolved(&db).await?;
    info!(count = open.len(), "Unresolved reminders on file.");

    Ok(())
}
