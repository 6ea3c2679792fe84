//! PostgreSQL-backed document collections.

pub mod collection;
pub mod connection;
pub mod migration;

pub use collection::PgCollection;
pub use connection::DatabasePool;
