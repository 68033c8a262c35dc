//! # Y.U.V.A. Share Dispatch
//!
//! The share action tries the platform's native share capability first. Here
//! that capability is a Telegram bot; when it is not configured, or the
//! request fails, the summary is surfaced as an alert instead.

use crate::error::AlerterError;
use configuration::TelegramConfig;
use events::SharePayload;
use reqwest::Client;
use serde::Serialize;
pub mod error;

/// The JSON payload for the Telegram `sendMessage` endpoint.
#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str, // To allow for formatting like bold, italics etc.
}

/// A client for sharing summaries through the Telegram Bot API.
pub struct TelegramShare {
    client: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramShare {
    /// Creates a new `TelegramShare`.
    ///
    /// Returns `None` if the token or chat_id is missing from the configuration,
    /// which makes the share action fall back to an alert.
    pub fn new(config: &TelegramConfig) -> Option<Self> {
        Self::with_base_url(config, "https://api.telegram.org")
    }

    /// Like `new`, but against a different API host.
    pub fn with_base_url(config: &TelegramConfig, base_url: &str) -> Option<Self> {
        if config.token.is_empty() || config.chat_id.is_empty() {
            tracing::debug!("Native share is not configured (missing token or chat_id).");
            return None;
        }
        Some(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Sends the shared summary to the configured Telegram chat.
    pub async fn share(&self, payload: &SharePayload) -> Result<(), AlerterError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let text = format!(
            "*{}*\n{}",
            escape_markdown(&payload.title),
            escape_markdown(&payload.text)
        );

        let body = SendMessagePayload {
            chat_id: &self.chat_id,
            text: &text,
            parse_mode: "MarkdownV2", // Use Markdown for rich formatting
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(AlerterError::ApiError(error_text));
        }

        Ok(())
    }
}

/// How a share request was fulfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through the native share capability.
    Shared,
    /// No native capability was usable; the caller must show this text to
    /// the user right away.
    Alerted(String),
}

/// Shares `payload` through `native` when available, otherwise falls back to
/// an alert. A share never fails silently: a failed native request is logged
/// and turned into an alert.
pub async fn share_results(native: Option<&TelegramShare>, payload: &SharePayload) -> ShareOutcome {
    if let Some(native) = native {
        match native.share(payload).await {
            Ok(()) => {
                tracing::info!("Results shared via Telegram.");
                return ShareOutcome::Shared;
            }
            Err(e) => {
                tracing::error!(error = ?e, "Native share failed, falling back to alert.");
            }
        }
    }
    ShareOutcome::Alerted(payload.text.clone())
}

/// A helper function to escape characters that have special meaning in Telegram's MarkdownV2.
fn escape_markdown(text: &str) -> String {
    const SPECIAL_CHARS: &str = r"\_*[]()~`>#+-=|{}.!";
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
