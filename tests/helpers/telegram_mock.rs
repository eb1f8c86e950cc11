//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::{test_bot_token, test_user_id};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            custom_response: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose requests go to this mock server
    pub fn create_bot(&self) -> teloxide::Bot {
        let api_url = self.server.uri().parse().expect("mock server uri is a valid url");
        teloxide::Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Matches the Bot API method path regardless of the method name casing
    fn endpoint_path(endpoint: &str) -> String {
        format!("(?i)^/bot[^/]+/{}$", endpoint)
    }

    fn is_endpoint(request: &wiremock::Request, endpoint: &str) -> bool {
        request
            .url
            .path()
            .to_lowercase()
            .ends_with(&format!("/{}", endpoint.to_lowercase()))
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let (status, response_body) = if config.success {
            (200, config.custom_response.unwrap_or_else(|| json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "FarewellBuddy",
                        "username": "farewell_buddy_bot"
                    },
                    "chat": {
                        "id": test_user_id(),
                        "first_name": "Asha",
                        "type": "private"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            })))
        } else {
            (400, config.custom_response.unwrap_or_else(|| json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: message text is empty"
            })))
        };

        let response = ResponseTemplate::new(status).set_body_json(response_body);

        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint_path("sendMessage")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup sendMessage to answer like a user who blocked the bot
    pub async fn mock_send_message_blocked(&self) {
        Mock::given(method("POST"))
            .and(path_regex(Self::endpoint_path("sendMessage")))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            })))
            .mount(&self.server)
            .await;
    }

    /// Verify that an endpoint was called a specific number of times
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let requests = self.server.received_requests().await.unwrap_or_default();
        let count = requests
            .iter()
            .filter(|req| Self::is_endpoint(req, endpoint))
            .count();

        assert_eq!(count, times, "Expected {} calls to {}, got {}", times, endpoint, count);
    }

    /// JSON bodies of the requests sent to `endpoint`
    pub async fn request_bodies(&self, endpoint: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| Self::is_endpoint(req, endpoint))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }
}

