//! Shell-style variable expansion.
//!
//! Supports `${NAME}`, `${NAME:-default}` and `${NAME-default}` references.
//! A `$` that does not open a `${...}` reference is kept as literal text.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::utils::env::VariableSource;

lazy_static! {
	static ref REFERENCE: Regex = Regex::new(r"\$\{([^{}]*)\}").unwrap();
	static ref SUBSTITUTION: Regex =
		Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)(?:(:?-)(.*))?$").unwrap();
}

/// Errors raised while expanding variable references
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpansionError {
	/// A `${` with no matching `}`
	#[error("unterminated variable reference in {0:?}")]
	Unterminated(String),

	/// The text inside `${...}` is not a valid substitution
	#[error("bad substitution: ${{{0}}}")]
	BadSubstitution(String),
}

/// Expands every variable reference in `input` using `source`.
///
/// # Arguments
/// * `input` - Text containing `${...}` references
/// * `source` - Where variable values are read from
///
/// # Returns
/// * `Result<String, ExpansionError>` - The expanded text
pub fn expand<S: VariableSource + ?Sized>(
	input: &str,
	source: &S,
) -> Result<String, ExpansionError> {
	let mut out = String::with_capacity(input.len());
	let mut last = 0;

	for caps in REFERENCE.captures_iter(input) {
		let Some(whole) = caps.get(0) else {
			continue;
		};
		let literal = &input[last..whole.start()];
		check_literal(literal, input)?;
		out.push_str(literal);

		let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
		out.push_str(&substitute(inner, source)?);

		last = whole.end();
	}

	let rest = &input[last..];
	check_literal(rest, input)?;
	out.push_str(rest);

	Ok(out)
}

fn check_literal(literal: &str, input: &str) -> Result<(), ExpansionError> {
	if literal.contains("${") {
		return Err(ExpansionError::Unterminated(input.to_string()));
	}
	Ok(())
}

fn substitute<S: VariableSource + ?Sized>(
	inner: &str,
	source: &S,
) -> Result<String, ExpansionError> {
	let caps = SUBSTITUTION
		.captures(inner)
		.ok_or_else(|| ExpansionError::BadSubstitution(inner.to_string()))?;

	let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
	let value = source.get_var(name);

	let Some(operator) = caps.get(2).map(|m| m.as_str()) else {
		return Ok(value.unwrap_or_default());
	};
	let default = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

	let use_default = match operator {
		":-" => value.as_deref().is_none_or(str::is_empty),
		_ => value.is_none(),
	};

	if use_default {
		Ok(default.to_string())
	} else {
		Ok(value.unwrap_or_default())
	}
}
