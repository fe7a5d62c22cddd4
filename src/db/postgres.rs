use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::{config::Config, errors::AppResult};

pub async fn connect(config: &Config) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .connect(&config.postgres_url())
        .await?;

    log::info!("Connected to PostgreSQL at {}", config.postgres_host);
    Ok(pool)
}

/// Pool that does not open a connection until first used.
#[cfg(test)]
pub fn lazy_pool(config: &Config) -> AppResult<PgPool> {
    Ok(PgPoolOptions::new().connect_lazy(&config.postgres_url())?)
}
