//! SQLite implementations of the repository traits.

mod translation_cache_repository;

pub use translation_cache_repository::SqliteTranslationCacheRepository;
