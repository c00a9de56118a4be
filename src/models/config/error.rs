//! Configuration error types.
//!
//! This module defines the error types that can occur while loading the
//! notifier configuration from the environment.

use std::{error::Error, fmt};

use crate::utils::{ExpansionError, DOCUMENTATION_URL};

use super::{ACCESS_TOKEN_VAR, CHANNEL_VAR};

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A required environment variable is not set
	MissingVariable(String),

	/// Expanding `${...}` references in a field failed
	ExpansionError { field: String, message: String },

	/// An environment file could not be loaded
	FileError(String),
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::MissingVariable(var) if var == ACCESS_TOKEN_VAR => format!(
				"In order to use the Slack Orb an OAuth token must be present via the {} \
				 environment variable.\nFollow the setup guide available in the wiki: {}.",
				ACCESS_TOKEN_VAR, DOCUMENTATION_URL
			),
			Self::MissingVariable(var) if var == CHANNEL_VAR => format!(
				"No channel was provided. Please provide one or more channels using the \"{}\" \
				 environment variable or the \"channel\" parameter.",
				CHANNEL_VAR
			),
			Self::MissingVariable(var) => format!(
				"Configuration validation failed: Environment variable not set: {}",
				var
			),
			Self::ExpansionError { field, message } => {
				format!("Error expanding {}: {}", field, message)
			}
			Self::FileError(msg) => format!("File error: {}", msg),
		}
	}

	/// Create a new missing variable error
	pub fn missing_variable(var: impl Into<String>) -> Self {
		Self::MissingVariable(var.into())
	}

	/// Create a new expansion error
	pub fn expansion_error(field: impl Into<String>, source: &ExpansionError) -> Self {
		Self::ExpansionError {
			field: field.into(),
			message: source.to_string(),
		}
	}

	/// Create a new file error
	pub fn file_error(msg: impl Into<String>) -> Self {
		Self::FileError(msg.into())
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<dotenvy::Error> for ConfigError {
	fn from(err: dotenvy::Error) -> Self {
		Self::file_error(err.to_string())
	}
}
