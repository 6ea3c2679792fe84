//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider: `"memory"` or `"postgres"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Name of the collection holding service records.
    #[serde(default = "default_services_collection")]
    pub services_collection: String,
    /// Name of the collection holding booking records.
    #[serde(default = "default_bookings_collection")]
    pub bookings_collection: String,
    /// PostgreSQL settings, used when `provider = "postgres"`.
    #[serde(default)]
    pub postgres: PostgresConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            services_collection: default_services_collection(),
            bookings_collection: default_bookings_collection(),
            postgres: PostgresConfig::default(),
        }
    }
}

/// PostgreSQL connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// PostgreSQL connection URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Run embedded migrations on start-up.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_services_collection() -> String {
    "services".to_string()
}

fn default_bookings_collection() -> String {
    "bookings".to_string()
}

fn default_url() -> String {
    "postgres://localhost:5432/car_doctor".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_run_migrations() -> bool {
    true
}
