//! Store manager that opens the two named collections on the configured provider.

use std::sync::Arc;

use tracing::info;

use cardoctor_core::config::StoreConfig;
use cardoctor_core::error::AppError;
use cardoctor_core::result::AppResult;
use cardoctor_core::traits::DocumentCollection;

/// Holds the `services` and `bookings` collections.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    services: Arc<dyn DocumentCollection>,
    bookings: Arc<dyn DocumentCollection>,
}

impl StoreManager {
    /// Open both collections from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            #[cfg(feature = "postgres")]
            "postgres" => {
                info!("Initializing PostgreSQL document store");
                let db = crate::postgres::DatabasePool::connect(&config.postgres).await?;
                if config.postgres.run_migrations {
                    crate::postgres::migration::run_migrations(db.pool()).await?;
                }
                let services =
                    crate::postgres::PgCollection::open(db.pool().clone(), &config.services_collection)
                        .await?;
                let bookings =
                    crate::postgres::PgCollection::open(db.pool().clone(), &config.bookings_collection)
                        .await?;
                Ok(Self::from_collections(Arc::new(services), Arc::new(bookings)))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                Ok(Self::in_memory(config))
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: memory, postgres"
            ))),
        }
    }

    /// Create a manager over fresh in-memory collections.
    #[cfg(feature = "memory")]
    pub fn in_memory(config: &StoreConfig) -> Self {
        Self::from_collections(
            Arc::new(crate::memory::MemoryCollection::new(
                config.services_collection.clone(),
            )),
            Arc::new(crate::memory::MemoryCollection::new(
                config.bookings_collection.clone(),
            )),
        )
    }

    /// Create a manager from existing collections (for testing).
    pub fn from_collections(
        services: Arc<dyn DocumentCollection>,
        bookings: Arc<dyn DocumentCollection>,
    ) -> Self {
        Self { services, bookings }
    }

    /// The collection holding service records.
    pub fn services(&self) -> Arc<dyn DocumentCollection> {
        Arc::clone(&self.services)
    }

    /// The collection holding booking records.
    pub fn bookings(&self) -> Arc<dyn DocumentCollection> {
        Arc::clone(&self.bookings)
    }

    /// Pings the backing store.
    pub async fn ping(&self) -> AppResult<bool> {
        Ok(self.services.health_check().await? && self.bookings.health_check().await?)
    }
}
