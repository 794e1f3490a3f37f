use dotenvy::dotenv;
use homework_status_bot::api::ReviewClient;
use homework_status_bot::config::{Settings, ENDPOINT, POLL_INTERVAL};
use homework_status_bot::notify::TelegramNotifier;
use homework_status_bot::poller::Poller;
use teloxide::types::ChatId;
use teloxide::Bot;
use tracing::{error, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    init_logging();

    info!("Starting homework status bot...");

    let settings = init_settings();

    let api = ReviewClient::new(ENDPOINT, settings.practicum_token.as_str());
    let bot = Bot::new(settings.telegram_token.clone());
    let notifier = TelegramNotifier::new(bot, ChatId(settings.telegram_chat_id));

    info!("Entering poll loop (interval: {}s)", POLL_INTERVAL.as_secs());

    Poller::new(api, notifier).run().await;
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_settings() -> Settings {
    match Settings::new() {
        Ok(s) => {
            info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    }
}
