//! # Menu Translation Server
//!
//! Main entry point. Loads configuration, wires the translation service
//! over the SQLite cache and the inference engine, and serves the REST API
//! until SIGINT or SIGTERM.

use menu_config::{AppConfig, ConfigLoader};
use menu_core::telemetry::shutdown_telemetry;
use menu_core::{MenuError, MenuResult};
use menu_rest::{create_router, AppState};
use menu_server::di::{build_app_module, DatabaseResolver, ServiceResolver};
use menu_server::startup::{print_banner, print_startup_info};
use menu_service::register_metrics;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    print_banner();
    info!("Starting menu translation server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let result = run(config).await;
    shutdown_telemetry();

    if let Err(e) = result {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> MenuResult<()> {
    info!("Environment: {}", config.app.environment);

    let metrics = if config.observability.metrics_enabled {
        Some(install_metrics_recorder()?)
    } else {
        None
    };

    let module = build_app_module(&config).await?;

    let mut state = AppState::new(module.translation_service())
        .with_source_language(config.translation.source_language.clone())
        .with_default_target_language(config.translation.default_target_language.clone());
    for check in module.health_checks() {
        state = state.with_health_check(check);
    }
    if let Some(handle) = metrics {
        state = state.with_metrics(handle);
    }

    let router = create_router(state, &config.server, &config.observability);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MenuError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);
    info!("Translation engine: {}", module.engine().name());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MenuError::Internal(format!("REST server error: {}", e)))?;

    module.database_pool().close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn install_metrics_recorder() -> MenuResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        MenuError::Configuration(format!("Failed to install metrics recorder: {}", e))
    })?;
    register_metrics();
    Ok(handle)
}

fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let observability = &config.observability;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},menu=debug,tower_http=debug",
            observability.log_level
        ))
    });

    let json = observability
        .is_json()
        .then(|| fmt::layer().json().with_target(true).with_current_span(true));
    let pretty = (!observability.is_json()).then(|| fmt::layer().with_target(true));

    let registry = tracing_subscriber::registry().with(filter).with(json).with(pretty);

    #[cfg(feature = "telemetry")]
    {
        let telemetry = observability.telemetry(&config.app.name);
        match menu_core::telemetry::init_tracer(&telemetry) {
            Ok(tracer) => registry
                .with(tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t)))
                .init(),
            Err(e) => {
                registry.init();
                error!("Span export disabled: {}", e);
            }
        }
    }

    #[cfg(not(feature = "telemetry"))]
    registry.init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
