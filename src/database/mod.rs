//! Postgres connection handling for the optional database-backed store.

pub mod pool;

pub use pool::{create_pool, run_migrations, DatabaseError};
