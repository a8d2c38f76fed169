//! Default seed script - creates the placeholder consumers, providers and requests
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use anyhow::Context;
use seed_data::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("An error occurred while attempting to seed the database: {err:#}");
        return Err(err);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = SeedConfig::from_env().context("invalid seed configuration")?;
    let data = PlaceholderData::load(&config).context("failed to load placeholder data")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool.clone()).with_hash_cost(config.hash_cost);
    let result = seeder.seed_all(&data).await;
    pool.close().await;
    let report = result?;

    // Summary output
    tracing::info!("Seed completed!");
    for group in EntityGroup::ALL {
        let counts = report.group(group);
        tracing::info!(
            "  {group}: {} attempted, {} inserted, {} already present",
            counts.attempted,
            counts.inserted,
            counts.skipped()
        );
    }

    Ok(())
}
