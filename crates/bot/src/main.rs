use anyhow::Result;
use bot::config::Config;
use booking_shared::bootstrap;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_env();

    // The guard must outlive the dispatcher so buffered log lines are flushed
    let _guard = bootstrap::init_tracing("bot");

    tracing::info!("Starting booking bot");

    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded (calendar locale: {})",
        config.core.calendar_locale
    );

    bot::run_bot(config).await
}
