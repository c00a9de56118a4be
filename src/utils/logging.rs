//! Logging setup.
//!
//! Output goes to stdout so it shows up inline in the CI job log. The level
//! is controlled through `RUST_LOG` and defaults to `info`. ANSI colors are
//! only enabled when stdout is a terminal.
use std::io::IsTerminal;

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Installs the global subscriber writing to stdout
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	let ansi = std::io::stdout().is_terminal();
	setup_logging_with_writer(std::io::stdout, ansi)
}

/// Installs the global subscriber writing to `writer`
///
/// Fails if a global subscriber has already been installed.
pub fn setup_logging_with_writer<W>(
	writer: W,
	ansi: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_ansi(ansi)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(false)
						.with_thread_ids(false)
						.with_thread_names(false)
						.compact(),
				),
		)
		.try_init()?;
	Ok(())
}
