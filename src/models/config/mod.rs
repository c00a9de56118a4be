//! Configuration loading.
//!
//! The notifier is configured entirely through environment variables set by
//! the CI job (and the env files loaded at startup). The names below are the
//! variables the Slack orb exports.

mod error;
mod notifier_config;

pub use error::ConfigError;
pub use notifier_config::NotifierConfig;

/// OAuth token for the Slack API
pub const ACCESS_TOKEN_VAR: &str = "SLACK_ACCESS_TOKEN";
/// Comma-separated list of channels
pub const CHANNEL_VAR: &str = "SLACK_PARAM_CHANNEL";
pub const BRANCH_PATTERN_VAR: &str = "SLACK_PARAM_BRANCHPATTERN";
pub const TAG_PATTERN_VAR: &str = "SLACK_PARAM_TAGPATTERN";
/// Job status that triggers a message, or `always`
pub const EVENT_VAR: &str = "SLACK_PARAM_EVENT";
/// Inline JSON template
pub const CUSTOM_TEMPLATE_VAR: &str = "SLACK_PARAM_CUSTOM";
/// Name of the variable that holds the template
pub const TEMPLATE_VAR: &str = "SLACK_PARAM_TEMPLATE";
pub const INVERT_MATCH_VAR: &str = "SLACK_PARAM_INVERT_MATCH";
pub const IGNORE_ERRORS_VAR: &str = "SLACK_PARAM_IGNORE_ERRORS";
pub const JOB_STATUS_VAR: &str = "CCI_STATUS";
pub const JOB_BRANCH_VAR: &str = "CIRCLE_BRANCH";
pub const JOB_TAG_VAR: &str = "CIRCLE_TAG";
/// Points at the job's shell environment file
pub const BASH_ENV_VAR: &str = "BASH_ENV";
