use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use luct_api::config::ApiConfig;
use luct_db::{create_pool, schema::initialize_database, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await?;

    // Schema creation is idempotent, so every start brings the database up to date
    initialize_database(&db_pool).await?;

    luct_api::start_server(config, Arc::new(PgStore::new(db_pool))).await?;

    Ok(())
}
