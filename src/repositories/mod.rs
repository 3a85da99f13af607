use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::{config::Config, Result};

#[cfg(test)]
pub mod memory;
pub mod posts_repo;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Opens the connection pool and brings the schema up to date.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.pg_connect_options()?)
        .await?;
    info!("✅ Conexão com o banco de dados estabelecida!");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrações do banco de dados aplicadas");

    Ok(pool)
}
