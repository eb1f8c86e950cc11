//! FarewellBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::Context;
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::{prelude::*, types::{ChatMemberUpdated, Update}};
use tracing::{error, info, warn};

use FarewellBuddy::{
    config::Settings,
    handlers::{handle_chat_member_update, handle_command, Command},
    i18n::I18n,
    services::{LeaveFeedbackService, ServiceFactory},
    utils::logging,
    webhook,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", FarewellBuddy::info());
    match settings.bot.target_group_id {
        Some(group_id) => info!(target_group_id = group_id, "Watching a single group"),
        None => warn!("No target group configured, watching every group the bot administers"),
    }

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;
    info!(default_language = i18n.default_language(), "Translations loaded");
    let i18n_arc = Arc::new(i18n);

    // Initialize bot and services
    let bot = Bot::new(&settings.bot.token);
    let services = ServiceFactory::new(bot.clone(), &settings, i18n_arc.clone())?;
    let leave_feedback_arc = Arc::new(services.leave_feedback.clone());

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![leave_feedback_arc, i18n_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build();

    if settings.uses_webhook() {
        info!(port = settings.webhook.port, "Starting bot in webhook mode...");
        let listener = webhook::setup_listener(&bot, &settings.bot.token, &settings.webhook)
            .await
            .context("failed to set up webhook")?;

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    } else {
        info!("No webhook URL configured, starting bot with polling mode...");
        dispatcher.dispatch().await;
    }

    info!("FarewellBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands),
        )
        .branch(
            // Membership changes of other users in groups where the bot is admin
            Update::filter_chat_member().endpoint(handle_member_updates),
        )
}

/// Handle bot commands
async fn handle_commands(bot: Bot, msg: Message, cmd: Command, i18n: Arc<I18n>) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, i18n).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle chat member updates
async fn handle_member_updates(
    update: ChatMemberUpdated,
    service: Arc<LeaveFeedbackService>,
) -> HandlerResult {
    handle_chat_member_update(update, service).await;
    Ok(())
}
