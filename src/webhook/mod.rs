//! Webhook listener
//!
//! Serves the Telegram webhook with teloxide's axum integration and adds a
//! plain health route on the same HTTP server.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::routing::get;
use teloxide::{
    payloads::SetWebhookSetters,
    prelude::*,
    types::AllowedUpdate,
    update_listeners::{webhooks, UpdateListener},
};
use tracing::{error, info};
use url::Url;

use crate::config::WebhookConfig;
use crate::utils::errors::{FarewellError, Result};
use crate::utils::logging;

/// Body of the health route
pub const HEALTH_RESPONSE: &str = "Bot is running!";

/// Update kinds the bot needs; `chat_member` is only delivered when requested
pub fn allowed_updates() -> Vec<AllowedUpdate> {
    vec![AllowedUpdate::Message, AllowedUpdate::ChatMember]
}

/// Public webhook URL: the configured base with the bot token as last segment
pub fn webhook_url(base: &str, token: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| FarewellError::Config(format!("Webhook URL '{}' cannot be a base", base)))?
        .pop_if_empty()
        .push(token);
    Ok(url)
}

async fn health() -> &'static str {
    HEALTH_RESPONSE
}

/// Add the `GET /` health route to the webhook router
pub fn with_health_route(router: axum::Router) -> axum::Router {
    router.route("/", get(health))
}

/// Register the webhook with Telegram
async fn register_webhook(bot: &Bot, url: &Url, config: &WebhookConfig) -> Result<()> {
    let mut request = bot
        .set_webhook(url.clone())
        .allowed_updates(allowed_updates())
        .drop_pending_updates(config.drop_pending_updates);

    if let Some(ref secret) = config.secret_token {
        request = request.secret_token(secret.clone());
    }

    request.await?;
    Ok(())
}

/// Register the webhook, start the HTTP server and return the update listener
pub async fn setup_listener(
    bot: &Bot,
    token: &str,
    config: &WebhookConfig,
) -> Result<impl UpdateListener<Err = Infallible>> {
    let base = config
        .url
        .as_deref()
        .ok_or_else(|| FarewellError::Config("Webhook URL is not configured".to_string()))?;
    let url = webhook_url(base, token)?;
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));

    let mut options = webhooks::Options::new(address, url.clone());
    if let Some(ref secret) = config.secret_token {
        options = options.secret_token(secret.clone());
    }

    let (listener, stop_flag, router) = webhooks::axum_no_setup(options);
    let app = with_health_route(router);

    if let Err(e) = register_webhook(bot, &url, config).await {
        logging::log_api_error("setWebhook", &e.to_string(), Some(base));
        return Err(e);
    }
    info!(address = %address, "Webhook registered");

    let tcp_listener = tokio::net::TcpListener::bind(address).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp_listener, app)
            .with_graceful_shutdown(stop_flag)
            .await
        {
            error!(error = %e, "Webhook server failed");
        }
    });

    Ok(listener)
}
