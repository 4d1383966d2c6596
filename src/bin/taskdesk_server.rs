//! Runs the task board REST server.
//!
//! Usage:
//!
//! ```text
//! taskdesk-server [--bind ADDR] [--store memory|postgres] [--database-url URL]
//!                 [--pool-size N] [--log-level FILTER]
//! ```
//!
//! Each flag has an environment fallback; see `taskdesk::config`.

use std::sync::Arc;

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use taskdesk::{
    api::build_router,
    config::{ServerConfig, StoreKind},
    task::{
        adapters::{
            memory::{InMemoryDeletedTaskRepository, InMemoryTaskRepository},
            postgres::{
                PostgresDeletedTaskRepository, PostgresTaskRepository, TaskPgPool, apply_schema,
            },
        },
        services::TaskLifecycleService,
    },
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_level)?;
    config.validate().wrap_err("invalid configuration")?;

    info!(bind = %config.bind, store = ?config.store, "starting taskdesk server");

    let router = match config.store {
        StoreKind::Memory => build_router(TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryDeletedTaskRepository::new()),
            Arc::new(DefaultClock),
        )),
        StoreKind::Postgres => {
            let pool = connect_postgres(&config)?;
            apply_schema(&pool)
                .await
                .wrap_err("apply task schema")?;
            info!(pool_size = config.pool_size, "postgres store ready");
            build_router(TaskLifecycleService::new(
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresDeletedTaskRepository::new(pool)),
                Arc::new(DefaultClock),
            ))
        }
    };

    let listener = TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("bind {}", config.bind))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("serve http")?;

    info!("server stopped");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).wrap_err("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| eyre!(err))
        .wrap_err("initialize tracing subscriber")?;
    Ok(())
}

fn connect_postgres(config: &ServerConfig) -> Result<TaskPgPool> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| eyre!("database url missing"))?;
    Pool::builder()
        .max_size(config.pool_size)
        .build(ConnectionManager::<PgConnection>::new(url))
        .wrap_err("build postgres connection pool")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
