//! Common test infrastructure for database integration tests.

use menu_config::DatabaseConfig;
use menu_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;

/// Private, migrated in-memory SQLite database.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database and runs migrations.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns the pool behind the repository interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }
}
