use std::env;

use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, PoolConfig, Runtime};
use tokio_postgres::NoTls;

/// Build the postgres pool from PG_* environment variables.
pub fn get_pg_pool() -> Result<Pool> {
    let mut cfg = Config::new();
    cfg.host = Some(env::var("PG_HOST").context("PG_HOST not set")?);
    cfg.user = Some(env::var("PG_USER").context("PG_USER not set")?);
    cfg.password = env::var("PG_PASS").ok();
    cfg.dbname = Some(env::var("PG_DB").context("PG_DB not set")?);
    if let Ok(port) = env::var("PG_PORT") {
        cfg.port = Some(port.parse().context("PG_PORT is not a number")?);
    }

    let max_size = env::var("PG_POOL_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);
    if cfg.pool.is_none() {
        cfg.pool = Some(PoolConfig::default());
    }
    if let Some(ref mut pcfg) = cfg.pool {
        pcfg.max_size = max_size;
    }

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .context("failed to create postgres pool")
}
