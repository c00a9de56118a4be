//! CI Slack notifier entry point.
//!
//! # Flow
//! 1. Loads the orb's env files (`$BASH_ENV` and the job status file)
//! 2. Reads and validates the configuration from the environment
//! 3. Skips the run if the job status or branch/tag do not qualify
//! 4. Builds the message from its template and posts it to every channel
//!
//! Exits with status 1 on configuration or template errors, and on delivery
//! failures unless errors are ignored.

use ci_slack_notify::{
	bootstrap::{default_env_files, initialize_service, load_env_files, run_notification},
	services::notification::NotificationOutcome,
	utils::{logging::setup_logging, ProcessEnv},
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
	env::{set_var, var},
	path::PathBuf,
	process::ExitCode,
};
use tracing::{error, info};

fn build_cli() -> Command {
	Command::new("ci-slack-notify")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Posts a Slack message describing the outcome of a CI job to one or more channels. \
			 All settings are read from SLACK_* and CircleCI environment variables.",
		)
		.arg(
			Arg::new("env-file")
				.long("env-file")
				.help("Dotenv file to load before reading the configuration (repeatable)")
				.value_name("PATH")
				.action(ArgAction::Append),
		)
		.arg(
			Arg::new("base-url")
				.long("base-url")
				.help("Slack API base URL (default: https://slack.com/api)")
				.value_name("URL"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
}

fn env_files(matches: &ArgMatches) -> Vec<PathBuf> {
	match matches.get_many::<String>("env-file") {
		Some(paths) => paths.map(PathBuf::from).collect(),
		None => default_env_files(&ProcessEnv),
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let matches = build_cli().get_matches();

	// RUST_LOG from the environment wins over the flag
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	if let Err(e) = load_env_files(&env_files(&matches)) {
		error!("{:#}", e);
		return ExitCode::FAILURE;
	}

	let base_url = matches.get_one::<String>("base-url").cloned();
	let service = match initialize_service(base_url) {
		Ok(service) => service,
		Err(e) => {
			error!("{:#}", e);
			return ExitCode::FAILURE;
		}
	};

	let outcome = match run_notification(&service, &ProcessEnv).await {
		Ok(outcome) => outcome,
		Err(e) => {
			error!("{:#}", e);
			return ExitCode::FAILURE;
		}
	};

	match &outcome {
		NotificationOutcome::Failed(report) => error!(
			failed = report.failures.len(),
			delivered = report.delivered.len(),
			"Aborting after a failed delivery"
		),
		NotificationOutcome::Delivered(report) => info!(
			delivered = report.delivered.len(),
			ignored_failures = report.failures.len(),
			"Notification run finished"
		),
		NotificationOutcome::SkippedEvent { .. } | NotificationOutcome::SkippedCondition => {}
	}

	if outcome.is_success() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}
