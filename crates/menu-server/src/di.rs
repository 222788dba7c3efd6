//! Dependency injection module using Shaku.
//!
//! Every layer talks to the next one through a trait object:
//!
//! ```text
//! TranslationService  <- CacheThroughTranslationService
//!   ├─ TranslationCacheRepository <- SqliteTranslationCacheRepository <- DatabasePool
//!   ├─ TranslationEngine          <- TimeoutEngine(HttpTranslationEngine)
//!   └─ TranslationObserver        <- TracingTranslationObserver
//! ```
//!
//! The pool and the wrapped engine are created outside the module and
//! handed in as component parameters. Tests replace the engine or the
//! observer with `with_component_override`.

use menu_config::{AppConfig, TranslationConfig};
use menu_core::{HealthCheck, MenuResult};
use menu_repository::{
    DatabaseHealthCheck, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    SqliteTranslationCacheRepository,
};
use menu_service::{
    CacheThroughTranslationService, HttpTranslationEngine, TimeoutEngine, TimeoutEngineParameters,
    TracingTranslationObserver, TranslationEngine, TranslationService,
};
use shaku::{module, HasComponent, ModuleBuilder};
use std::sync::Arc;
use tracing::info;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            SqliteTranslationCacheRepository,
            TimeoutEngine,
            TracingTranslationObserver,
            CacheThroughTranslationService,
        ],
        providers = [],
    }
}

/// Starts an [`AppModule`] builder with its parameters filled in.
///
/// `engine` is wrapped in the timeout from `translation`, so injected
/// engines are bounded the same way as the HTTP one.
pub fn app_module_builder(
    db_pool: &DatabasePool,
    engine: Arc<dyn TranslationEngine>,
    translation: &TranslationConfig,
) -> ModuleBuilder<AppModule> {
    AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<TimeoutEngine>(TimeoutEngineParameters {
            inner: engine,
            timeout: translation.request_timeout(),
        })
}

/// Opens the cache database and wires the production graph from configuration.
pub async fn build_app_module(config: &AppConfig) -> MenuResult<Arc<AppModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;
    let engine = HttpTranslationEngine::new(&config.translation)?;

    let module = app_module_builder(&db_pool, Arc::new(engine), &config.translation).build();

    info!(engine = %module.engine().name(), "Application module built");
    Ok(Arc::new(module))
}

/// Resolves the translation components.
pub trait ServiceResolver {
    /// The translation service exposed to the REST layer.
    fn translation_service(&self) -> Arc<dyn TranslationService>;

    /// The engine behind the service.
    fn engine(&self) -> Arc<dyn TranslationEngine>;
}

impl ServiceResolver for AppModule {
    fn translation_service(&self) -> Arc<dyn TranslationService> {
        self.resolve()
    }

    fn engine(&self) -> Arc<dyn TranslationEngine> {
        self.resolve()
    }
}

/// Resolves the cache database.
pub trait DatabaseResolver {
    /// The cache database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    /// Components reported by the readiness endpoint.
    fn health_checks(&self) -> Vec<Arc<dyn HealthCheck>> {
        vec![Arc::new(DatabaseHealthCheck::new(self.database_pool()))]
    }
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
