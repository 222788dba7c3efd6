//! Domain types of the translation cache.

pub mod translation_cache_entry;

pub use translation_cache_entry::*;
