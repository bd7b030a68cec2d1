//! Database wiring: connection parameters and the MySQL pool factory.
//!
//! The pool is built lazily so startup never blocks on (or fails because of)
//! an unreachable database; connection errors surface on first use.

use crate::config::Config;
use crate::error::ShippingError;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use tracing::info;

/// Fixed service account; the schema grants it access to `cities` only.
pub const DB_USER: &str = "shipping";
pub const DB_NAME: &str = "cities";

/// Connection URL for the cities database on the given host.
/// Deterministic: everything except the host is fixed.
pub fn database_url(host: &str) -> String {
    format!("mysql://{host}/{DB_NAME}?ssl-mode=disabled")
}

/// Connection parameters resolved once at startup. Host and password come
/// from the configuration; username and database are fixed.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub host: String,
    pub username: &'static str,
    pub database: &'static str,
    pub password: String,
}

impl ConnectionParams {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            host: cfg.db_host.clone(),
            username: DB_USER,
            database: DB_NAME,
            password: cfg.db_password.clone(),
        }
    }

    pub fn url(&self) -> String {
        database_url(&self.host)
    }

    /// Driver-level options: SSL off (in-cluster traffic), credentials and
    /// database carried out-of-band rather than in the URL.
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .database(self.database)
            .username(self.username)
            .password(&self.password)
            .ssl_mode(MySqlSslMode::Disabled)
    }
}

/// Build the shared connection pool from the resolved configuration.
///
/// Stale connections are re-checked before reuse, so the pool transparently
/// reconnects after a database restart.
pub fn pool(cfg: &Config) -> MySqlPool {
    let params = ConnectionParams::from_config(cfg);

    info!(url = %params.url(), "database url");
    info!("using DB_PASSWORD from environment for authentication");

    MySqlPoolOptions::new()
        .test_before_acquire(true)
        .connect_lazy_with(params.connect_options())
}

/// One-shot reachability probe, used after wiring to log whether the
/// database is already up.
pub async fn ping(pool: &MySqlPool) -> Result<(), ShippingError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
