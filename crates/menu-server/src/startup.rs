//! Server startup utilities.

use menu_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    __  ___                     ______                      __      __
   /  |/  /__  ____  __  __    /_  __/________ _____  _____/ /___ _/ /____
  / /|_/ / _ \/ __ \/ / / /     / / / ___/ __ `/ __ \/ ___/ / __ `/ __/ _ \
 / /  / /  __/ / / / /_/ /     / / / /  / /_/ / / / (__  ) / /_/ / /_/  __/
/_/  /_/\___/_/ /_/\__,_/     /_/ /_/   \__,_/_/ /_/____/_/\__,_/\__/\___/
    "#);
}

/// Lines describing where the running server can be reached.
pub fn startup_lines(config: &AppConfig) -> Vec<String> {
    let base = format!("http://{}", config.server.addr());
    let mut lines = vec![
        format!("REST API:  {}/api/v1", base),
        format!("Health:    {}/health", base),
        format!("API Docs:  {}/swagger-ui", base),
    ];
    if config.observability.metrics_enabled {
        lines.push(format!("Metrics:   {}{}", base, config.observability.metrics_path));
    }
    lines.push(format!("Engine:    {}", config.translation.engine_url));
    lines.push(format!(
        "Languages: {} -> {} (default)",
        config.translation.source_language, config.translation.default_target_language
    ));
    lines
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    for line in startup_lines(config) {
        info!("{}", line);
    }
    info!("{}", separator);
}
