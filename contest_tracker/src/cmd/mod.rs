pub mod serve;
pub mod sync;

use anyhow::{Context, Result};
use clap::ValueEnum;
use contest_tracker_libs::{
    sources::{codechef::CodechefSource, codeforces::CodeforcesSource, ContestSource},
    store::postgres::MIGRATOR,
    types::Platform,
};
use sqlx::{postgres::Postgres, Pool};
use std::{env, fmt, str::FromStr, sync::Arc};
use tokio::time::Duration;

#[derive(Debug, ValueEnum, Clone)]
pub enum TargetPlatform {
    Codeforces,
    Codechef,
    All,
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetPlatform::Codeforces => write!(f, "codeforces"),
            TargetPlatform::Codechef => write!(f, "codechef"),
            TargetPlatform::All => write!(f, "all"),
        }
    }
}

pub async fn connect_pool() -> Result<Pool<Postgres>> {
    let database_url: String = env::var("DATABASE_URL").with_context(|| {
        let message = "DATABASE_URL must be configured.";
        tracing::error!(message);
        message
    })?;

    let pool: Pool<Postgres> = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .with_context(|| {
            let message = "Failed to create database connection pool.";
            tracing::error!(message);
            message
        })?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// Builds a source for every platform named in ENABLED_PLATFORMS. Endpoint
/// and timeout come from the environment with the same defaults the original
/// deployment used.
pub fn enabled_sources() -> Result<Vec<Arc<dyn ContestSource>>> {
    let enabled = env::var("ENABLED_PLATFORMS").unwrap_or_else(|_| {
        String::from("codeforces,codechef")
    });
    let base_url = env::var("CODEFORCES_API_URL").unwrap_or_else(|_| {
        tracing::warn!("CODEFORCES_API_URL environment variable is not set. Default value `https://codeforces.com/api` will be used.");
        String::from("https://codeforces.com/api")
    });
    let timeout_seconds: u64 = env::var("FETCH_TIMEOUT_SECONDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10);
    let timeout = Duration::from_secs(timeout_seconds);

    let mut sources: Vec<Arc<dyn ContestSource>> = Vec::new();
    for name in enabled.split(',') {
        match Platform::from_str(name.trim()) {
            Ok(Platform::Codeforces) => {
                sources.push(Arc::new(CodeforcesSource::new(&base_url, timeout)?))
            }
            Ok(Platform::Codechef) => sources.push(Arc::new(CodechefSource::new())),
            Err(e) => anyhow::bail!("invalid ENABLED_PLATFORMS entry: {}", e),
        }
    }

    Ok(sources)
}
