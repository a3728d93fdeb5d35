use kind_words_bot::config::BotConfig;
use kind_words_bot::telegram::{self, BotController};
use kind_words_content::HttpAdviceSource;
use std::sync::Arc;
use teloxide::Bot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration; is TELEGRAM_BOT_TOKEN set?");
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "Loaded configuration");

    let source = match HttpAdviceSource::new(&config.content) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Content Service client");
            std::process::exit(1);
        }
    };
    tracing::info!(api_url = %source.endpoint(), "Starting kind-words bot");

    let controller: Arc<BotController> =
        Arc::new(BotController::new(source, config.content.timeout()));

    // Spawn periodic idle-session eviction
    let eviction_controller = Arc::clone(&controller);
    let Some(idle_ttl) = config.session.idle_ttl() else {
        tracing::error!(
            idle_ttl_minutes = config.session.idle_ttl_minutes,
            "Invalid session idle TTL"
        );
        std::process::exit(1);
    };
    let cleanup_interval_secs = config.session.cleanup_interval_seconds.max(1);
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(cleanup_interval_secs));
        loop {
            interval.tick().await;
            let evicted = eviction_controller.sessions().evict_idle(idle_ttl);
            if evicted > 0 {
                tracing::debug!(
                    evicted_sessions = evicted,
                    remaining_sessions = eviction_controller.sessions().len(),
                    "Periodic session eviction"
                );
            }
        }
    });

    telegram::run(Bot::new(config.telegram_bot_token), controller).await;
}
