//! Notifier configuration loaded from environment variables.

use zeroize::Zeroizing;

use crate::{
	models::{
		config::error::ConfigError,
		core::{DeliveryOptions, NotificationContext},
	},
	utils::{expand, parse_bool, VariableSource},
};

use super::*;

/// Raw configuration values, one per environment variable.
///
/// Boolean flags and the channel list are kept as strings until the
/// configuration is turned into a [`NotificationContext`] and
/// [`DeliveryOptions`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NotifierConfig {
	pub access_token: String,
	pub branch_pattern: String,
	pub channels: String,
	pub named_template_ref: String,
	pub event: String,
	pub inline_template: String,
	pub invert_match: String,
	pub job_branch: String,
	pub job_status: String,
	pub job_tag: String,
	pub tag_pattern: String,
	pub ignore_errors: String,
}

impl std::fmt::Debug for NotifierConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotifierConfig")
			.field("access_token", &"<redacted>")
			.field("branch_pattern", &self.branch_pattern)
			.field("channels", &self.channels)
			.field("named_template_ref", &self.named_template_ref)
			.field("event", &self.event)
			.field("inline_template", &self.inline_template)
			.field("invert_match", &self.invert_match)
			.field("job_branch", &self.job_branch)
			.field("job_status", &self.job_status)
			.field("job_tag", &self.job_tag)
			.field("tag_pattern", &self.tag_pattern)
			.field("ignore_errors", &self.ignore_errors)
			.finish()
	}
}

impl NotifierConfig {
	/// Reads every configuration variable from `source`.
	///
	/// Unset variables become empty strings; nothing is validated here.
	pub fn from_source<S: VariableSource + ?Sized>(source: &S) -> Self {
		let get = |name: &str| source.get_var(name).unwrap_or_default();
		Self {
			access_token: get(ACCESS_TOKEN_VAR),
			branch_pattern: get(BRANCH_PATTERN_VAR),
			channels: get(CHANNEL_VAR),
			named_template_ref: get(TEMPLATE_VAR),
			event: get(EVENT_VAR),
			inline_template: get(CUSTOM_TEMPLATE_VAR),
			invert_match: get(INVERT_MATCH_VAR),
			job_branch: get(JOB_BRANCH_VAR),
			job_status: get(JOB_STATUS_VAR),
			job_tag: get(JOB_TAG_VAR),
			tag_pattern: get(TAG_PATTERN_VAR),
			ignore_errors: get(IGNORE_ERRORS_VAR),
		}
	}

	/// Expands `${...}` references in the parameter fields.
	///
	/// The inline template and the job facts are left alone: the template is
	/// expanded later as JSON, and the job facts come straight from the CI.
	pub fn expand_env_variables<S: VariableSource + ?Sized>(
		&mut self,
		source: &S,
	) -> Result<(), ConfigError> {
		let fields: [(&str, &mut String); 8] = [
			(ACCESS_TOKEN_VAR, &mut self.access_token),
			(BRANCH_PATTERN_VAR, &mut self.branch_pattern),
			(CHANNEL_VAR, &mut self.channels),
			(TEMPLATE_VAR, &mut self.named_template_ref),
			(EVENT_VAR, &mut self.event),
			(INVERT_MATCH_VAR, &mut self.invert_match),
			(IGNORE_ERRORS_VAR, &mut self.ignore_errors),
			(TAG_PATTERN_VAR, &mut self.tag_pattern),
		];

		for (name, value) in fields {
			*value = expand(value.as_str(), source).map_err(|e| ConfigError::expansion_error(name, &e))?;
		}

		Ok(())
	}

	/// Checks that the credential and the channel list are present
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.access_token.is_empty() {
			return Err(ConfigError::missing_variable(ACCESS_TOKEN_VAR));
		}
		if self.channel_list().is_empty() {
			return Err(ConfigError::missing_variable(CHANNEL_VAR));
		}
		Ok(())
	}

	/// Splits the channel string on commas, dropping blank entries
	pub fn channel_list(&self) -> Vec<String> {
		self.channels
			.split(',')
			.map(str::trim)
			.filter(|channel| !channel.is_empty())
			.map(String::from)
			.collect()
	}

	pub fn notification_context(&self) -> NotificationContext {
		NotificationContext {
			status: self.job_status.clone(),
			branch: self.job_branch.clone(),
			tag: self.job_tag.clone(),
			event: self.event.clone(),
			branch_pattern: self.branch_pattern.clone(),
			tag_pattern: self.tag_pattern.clone(),
			invert_match: parse_bool(&self.invert_match),
			inline_template: self.inline_template.clone(),
			named_template_ref: self.named_template_ref.clone(),
		}
	}

	pub fn delivery_options(&self) -> DeliveryOptions {
		DeliveryOptions {
			access_token: Zeroizing::new(self.access_token.clone()),
			channels: self.channel_list(),
			ignore_errors: parse_bool(&self.ignore_errors),
		}
	}

	/// Loads, expands and validates the configuration in one step.
	///
	/// # Returns
	/// * `Result<(NotificationContext, DeliveryOptions), ConfigError>` - The
	///   immutable inputs for one notification run
	pub fn load<S: VariableSource + ?Sized>(
		source: &S,
	) -> Result<(NotificationContext, DeliveryOptions), ConfigError> {
		let mut config = Self::from_source(source);
		config.expand_env_variables(source)?;
		config.validate()?;
		Ok((config.notification_context(), config.delivery_options()))
	}
}
