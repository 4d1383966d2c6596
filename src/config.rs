//! Server configuration.
//!
//! Every option can be given on the command line or through the environment.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Backing store for both task lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Process-local maps; contents are lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` via a Diesel connection pool.
    Postgres,
}

/// Configuration for the task board server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskdesk-server", version, about = "Task board REST server")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TASKDESK_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Store backend.
    #[arg(long, env = "TASKDESK_STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// `PostgreSQL` connection URL, required for the postgres store.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKDESK_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Log filter directive, e.g. `info` or `taskdesk=debug`.
    #[arg(long, env = "TASKDESK_LOG", default_value = "info")]
    pub log_level: String,
}

/// Errors raised by [`ServerConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The postgres store was selected without a database URL.
    #[error("--database-url (or DATABASE_URL) is required when --store=postgres")]
    MissingDatabaseUrl,

    /// The pool cannot hold any connection.
    #[error("--pool-size must be at least 1")]
    EmptyPool,
}

impl ServerConfig {
    /// Checks option combinations that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the postgres store lacks a URL or the
    /// pool size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store == StoreKind::Postgres {
            let has_url = self
                .database_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty());
            if !has_url {
                return Err(ConfigError::MissingDatabaseUrl);
            }
            if self.pool_size == 0 {
                return Err(ConfigError::EmptyPool);
            }
        }
        Ok(())
    }
}
