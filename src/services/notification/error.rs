//! Notification error types and handling.
//!
//! Provides error types for building and delivering Slack messages,
//! including template problems, malformed payloads and API failures.

use std::{error::Error, fmt};

use crate::services::{notification::PayloadError, template::TemplateError};

/// Represents possible errors during notification operations
#[derive(Debug)]
pub enum NotificationError {
	/// Transport failures (connection refused, timeout, unreadable body)
	NetworkError(String),
	/// The Slack API rejected the message
	ApiError { status: u16, message: String },
	/// The Slack API response was not a JSON object
	ResponseError(String),
	/// Client setup failures
	ConfigError(String),
	/// No usable template could be selected
	TemplateError(TemplateError),
	/// The template is not a JSON object or could not be expanded
	PayloadError(PayloadError),
}

impl NotificationError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::NetworkError(msg) => format!("Network error: {}", msg),
			Self::ApiError { status, message } => {
				format!("Slack API error (HTTP {}): {}", status, message)
			}
			Self::ResponseError(msg) => format!("Invalid Slack API response: {}", msg),
			Self::ConfigError(msg) => format!("Config error: {}", msg),
			Self::TemplateError(err) => format!("Template error: {}", err),
			Self::PayloadError(err) => format!("Payload error: {}", err),
		}
	}

	/// Creates a new network error
	pub fn network_error(msg: impl Into<String>) -> Self {
		Self::NetworkError(msg.into())
	}

	/// Creates a new API error
	pub fn api_error(status: u16, message: impl Into<String>) -> Self {
		Self::ApiError {
			status,
			message: message.into(),
		}
	}

	/// Creates a new response error
	pub fn response_error(msg: impl Into<String>) -> Self {
		Self::ResponseError(msg.into())
	}

	/// Creates a new configuration error
	pub fn config_error(msg: impl Into<String>) -> Self {
		Self::ConfigError(msg.into())
	}
}

impl From<TemplateError> for NotificationError {
	fn from(err: TemplateError) -> Self {
		Self::TemplateError(err)
	}
}

impl From<PayloadError> for NotificationError {
	fn from(err: PayloadError) -> Self {
		Self::PayloadError(err)
	}
}

impl fmt::Display for NotificationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for NotificationError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::TemplateError(err) => Some(err),
			Self::PayloadError(err) => Some(err),
			_ => None,
		}
	}
}
