//! Slack Web API delivery.
//!
//! Posts a finished message to `chat.postMessage` once per channel, with the
//! channel written into the payload's root `channel` property. Slack reports
//! most failures with HTTP 200 and an `error` field in the body, so the body
//! is always inspected.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;

use crate::{
	services::notification::{
		payload_builder::{add_root_property, apply_to_root_object},
		NotificationError,
	},
	utils::{CHANNEL_PROPERTY, DEFAULT_SLACK_API_URL, POST_MESSAGE_PATH, REQUEST_TIMEOUT},
};

/// Posts a message payload to one channel
#[async_trait]
pub trait MessagePoster: Send + Sync {
	/// Sends `payload` to `channel`
	///
	/// # Returns
	/// * `Result<u16, NotificationError>` - The HTTP status code on success
	async fn post_message(
		&self,
		payload: &str,
		channel: &str,
		access_token: &str,
	) -> Result<u16, NotificationError>;
}

/// Body returned by the Slack Web API
#[derive(Debug, Deserialize)]
struct SlackApiResponse {
	#[serde(default)]
	ok: Option<bool>,
	#[serde(default)]
	error: Option<String>,
}

/// Client for the Slack Web API
#[derive(Debug, Clone)]
pub struct SlackClient {
	/// API base URL, without a trailing slash
	base_url: String,
	/// HTTP client with the per-request timeout applied
	client: Client,
}

impl SlackClient {
	/// Creates a client for `base_url`, or the public Slack API when `None`
	pub fn new(base_url: Option<String>) -> Result<Self, NotificationError> {
		let base_url = base_url.unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string());
		let client = Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.map_err(|e| NotificationError::config_error(format!("Failed to build HTTP client: {}", e)))?;

		Ok(Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			client,
		})
	}

	/// Full URL of the post message endpoint
	pub fn endpoint(&self) -> String {
		format!("{}{}", self.base_url, POST_MESSAGE_PATH)
	}
}

#[async_trait]
impl MessagePoster for SlackClient {
	async fn post_message(
		&self,
		payload: &str,
		channel: &str,
		access_token: &str,
	) -> Result<u16, NotificationError> {
		let body = apply_to_root_object(payload, add_root_property(CHANNEL_PROPERTY, channel))?;
		tracing::info!(channel, payload = %body, "Posting message to Slack");

		let response = self
			.client
			.post(self.endpoint())
			.bearer_auth(access_token)
			.header(CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await
			.map_err(|e| NotificationError::network_error(format!("Failed to post to {}: {}", channel, e)))?;

		let status = response.status();
		let text = response.text().await.map_err(|e| {
			NotificationError::network_error(format!("Failed to read response for {}: {}", channel, e))
		})?;
		tracing::debug!(channel, status = status.as_u16(), response = %text, "Slack API response");

		let parsed = serde_json::from_str::<SlackApiResponse>(&text);

		if !status.is_success() {
			let message = parsed
				.ok()
				.and_then(|r| r.error)
				.filter(|e| !e.is_empty())
				.unwrap_or(text);
			return Err(NotificationError::api_error(status.as_u16(), message));
		}

		let parsed = parsed.map_err(|e| NotificationError::response_error(e.to_string()))?;

		if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
			return Err(NotificationError::api_error(status.as_u16(), error));
		}
		if parsed.ok == Some(false) {
			return Err(NotificationError::api_error(
				status.as_u16(),
				"response reported ok=false without an error",
			));
		}

		Ok(status.as_u16())
	}
}
