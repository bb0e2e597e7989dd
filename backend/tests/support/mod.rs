//! Shared helpers for integration tests.

use std::sync::{Mutex, PoisonError};

use registrar::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use uuid::Uuid;

static MIGRATED: Mutex<bool> = Mutex::new(false);

/// Database URL for PostgreSQL-backed suites, or `None` to skip them.
pub fn database_url() -> Option<String> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-DATABASE: DATABASE_URL is not set");
            None
        }
    }
}

/// Migrate the database once per test binary and return a fresh pool.
#[expect(
    clippy::await_holding_lock,
    reason = "serialises migrations across test threads, each on its own runtime"
)]
pub async fn migrated_pool(database_url: &str) -> DbPool {
    let mut migrated = MIGRATED.lock().unwrap_or_else(PoisonError::into_inner);
    if !*migrated {
        run_migrations(database_url).await.expect("migrations apply");
        *migrated = true;
    }
    drop(migrated);

    DbPool::new(
        PoolConfig::new(database_url)
            .with_max_size(4)
            .with_min_idle(None),
    )
    .await
    .expect("pool builds")
}

/// A surname no other test run will use, so row lookups stay local to a test.
pub fn unique_surname(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
