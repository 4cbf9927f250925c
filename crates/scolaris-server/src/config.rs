//! Server configuration from the environment.

use std::net::SocketAddr;

use scolaris_db::DbConfig;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to
    /// local-development defaults. Panics on unparseable values so a
    /// misconfigured deployment fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("SCOLARIS_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("SCOLARIS_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("SCOLARIS_PORT must be a number");
        let listen_addr = SocketAddr::new(
            host.parse().expect("SCOLARIS_HOST must be an IP address"),
            port,
        );

        let defaults = DbConfig::default();
        let db = DbConfig {
            url: env_or("SCOLARIS_DB_URL", defaults.url),
            namespace: env_or("SCOLARIS_DB_NS", defaults.namespace),
            database: env_or("SCOLARIS_DB_NAME", defaults.database),
            username: env_or("SCOLARIS_DB_USER", defaults.username),
            password: env_or("SCOLARIS_DB_PASS", defaults.password),
        };

        Self { listen_addr, db }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}
