use tracing::info;
use v6ready_domain::Config;

pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(log_level)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
}
