//! Startup wiring for the notifier binary.
//!
//! Loads the orb's env files, builds the Slack client and runs one
//! notification against the process environment. Every function here returns
//! an error instead of exiting; `main` decides the process exit code.

use anyhow::Context;
use std::path::PathBuf;

use crate::{
	models::{config::BASH_ENV_VAR, ConfigError, NotifierConfig},
	services::notification::{MessagePoster, NotificationOutcome, NotificationService, SlackClient},
	utils::{load_env_file, VariableSource, JOB_STATUS_FILE},
};

/// Result type used by the startup helpers
pub type Result<T> = anyhow::Result<T>;

/// Env files loaded when none are given on the command line.
///
/// The file named by `BASH_ENV` comes first, then the job status file the orb
/// writes on job completion.
pub fn default_env_files<S: VariableSource + ?Sized>(source: &S) -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Some(bash_env) = source.get_var(BASH_ENV_VAR).filter(|path| !path.is_empty()) {
		files.push(PathBuf::from(bash_env));
	}
	files.push(PathBuf::from(JOB_STATUS_FILE));
	files
}

/// Loads each env file in order; missing files are skipped
pub fn load_env_files(paths: &[PathBuf]) -> Result<()> {
	for path in paths {
		load_env_file(path)
			.map_err(ConfigError::from)
			.with_context(|| format!("Error loading {:?} file", path))?;
	}
	Ok(())
}

/// Builds the notification service backed by the Slack Web API
pub fn initialize_service(base_url: Option<String>) -> Result<NotificationService<SlackClient>> {
	let client = SlackClient::new(base_url).context("Failed to initialize the Slack client")?;
	Ok(NotificationService::new(client))
}

/// Loads the configuration from `source` and runs the notification flow.
///
/// # Errors
/// Configuration, template and payload errors. Delivery failures are not
/// errors; they are reported through [`NotificationOutcome::Failed`] or the
/// delivery report.
pub async fn run_notification<T, S>(
	service: &NotificationService<T>,
	source: &S,
) -> Result<NotificationOutcome>
where
	T: MessagePoster,
	S: VariableSource + ?Sized,
{
	let (context, options) = NotifierConfig::load(source)?;
	tracing::debug!(?context, channels = ?options.channels, "Loaded configuration");

	let outcome = service.execute(&context, &options, source).await?;
	Ok(outcome)
}
