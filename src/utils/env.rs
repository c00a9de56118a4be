//! Access to environment variables.
//!
//! The notifier reads every input from environment variables, but the core
//! services never touch the process environment directly. They read through
//! the [`VariableSource`] trait so a fixed map can stand in for the
//! environment in tests.

use std::{collections::HashMap, path::Path};

/// A read-only source of named string variables
pub trait VariableSource {
	/// Returns the value of `name`, or `None` when it is not set
	fn get_var(&self, name: &str) -> Option<String>;
}

/// [`VariableSource`] backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
	fn get_var(&self, name: &str) -> Option<String> {
		std::env::var(name).ok()
	}
}

impl VariableSource for HashMap<String, String> {
	fn get_var(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

impl<T: VariableSource + ?Sized> VariableSource for &T {
	fn get_var(&self, name: &str) -> Option<String> {
		(**self).get_var(name)
	}
}

/// Parses a boolean flag string.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true` and `True` as true. Every other
/// value, including the empty string and unparsable input, is false.
pub fn parse_bool(value: &str) -> bool {
	matches!(value, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Loads a dotenv-style file into the process environment.
///
/// Variables that are already set are left untouched. A missing file is not
/// an error.
///
/// # Returns
/// * `Ok(true)` - The file existed and was loaded
/// * `Ok(false)` - The file does not exist and was skipped
/// * `Err` - The file exists but could not be parsed
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
	if !path.is_file() {
		tracing::info!(path = %path.display(), "Environment file does not exist, skipping");
		return Ok(false);
	}

	tracing::info!(path = %path.display(), "Loading environment file");
	dotenvy::from_path(path)?;
	Ok(true)
}
