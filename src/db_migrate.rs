use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use luct_db::{create_pool, schema::initialize_database};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable not set")?;

    info!("Connecting to database...");
    let db_pool = create_pool(&database_url, 1, Duration::from_secs(10)).await?;

    info!("Initializing database schema...");
    initialize_database(&db_pool).await?;
    info!("Database schema initialized successfully.");

    Ok(())
}
