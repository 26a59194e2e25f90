use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use edit_guardian::bot::{self, AppState};
use edit_guardian::config::Config;
use edit_guardian::database::{Database, MongoDirectory};
use edit_guardian::health;
use edit_guardian::platform::TeloxidePlatform;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("edit_guardian=info,teloxide=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Edit Guardian bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    match config.admin_ids.as_slice() {
        [] => warn!("No admin IDs configured (ADMIN_ID / ADMIN_IDS); admin commands are disabled"),
        [admin] => info!("Bot admin: {}", admin),
        admins => warn!("Multiple bot admins configured, review this list: {:?}", admins),
    }

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongo_url, &config.mongo_database).await?;
    let directory = Arc::new(MongoDirectory::new(&db));
    info!("Database connected");

    let bot = Bot::new(&config.bot_token);

    // Fails fast on a bad token
    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    if let Some(name) = &config.bot_username {
        info!("Using configured bot username: @{}", name);
    }

    // Without BOT_USERNAME the platform resolves it through getMe on first use
    let platform = Arc::new(TeloxidePlatform::new(bot.clone(), config.bot_username.clone()));

    let listener = health::bind(config.port).await?;
    health::spawn(listener);

    let state = AppState::new(platform, directory, config.admin_ids.clone(), config.links.clone());
    let dispatcher = bot::build_dispatcher(bot.clone(), state);

    info!("🟢 Edit Guardian bot started");
    bot::run(bot, dispatcher).await;

    Ok(())
}
