//! # Menu Repository
//!
//! Durable storage of memoized translations.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn TranslationCacheRepository>  (store interface)
//! SqliteTranslationCacheRepository          (SQLx queries)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```
//!
//! The table carries a unique constraint over the four key columns, so
//! concurrent writers of the same key converge on a single row.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
