//! Message payload transformations.
//!
//! Slack messages are treated as opaque JSON objects. The only edits made to
//! them are root-level property writes and `${VAR}` expansion inside string
//! values, both applied through [`apply_to_root_object`] so the document is
//! always parsed and re-serialized by `serde_json` and never spliced as text.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::utils::{expand, ExpansionError, VariableSource};

/// The root-level map of a message document
pub type RootObject = Map<String, Value>;

/// Errors raised while transforming a message document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
	#[error("malformed JSON: {0}")]
	MalformedJson(String),

	#[error("error expanding {path}: {source}")]
	Expansion {
		/// Location of the offending string, e.g. `blocks[0].text.text`
		path: String,
		#[source]
		source: ExpansionError,
	},
}

/// Parses `document`, applies `transform` to its root object and serializes
/// the result.
///
/// An empty document passes through as an empty string without calling
/// `transform`. Keys keep their original order; new keys are appended.
///
/// # Errors
/// * [`PayloadError::MalformedJson`] if the document is not a JSON object
/// * Any error returned by `transform`
pub fn apply_to_root_object<F>(document: &str, transform: F) -> Result<String, PayloadError>
where
	F: FnOnce(&mut RootObject) -> Result<(), PayloadError>,
{
	if document.is_empty() {
		return Ok(String::new());
	}

	let value: Value =
		serde_json::from_str(document).map_err(|e| PayloadError::MalformedJson(e.to_string()))?;

	let mut root = match value {
		Value::Object(map) => map,
		other => {
			return Err(PayloadError::MalformedJson(format!(
				"expected a JSON object, found {}",
				describe(&other)
			)))
		}
	};

	transform(&mut root)?;

	serde_json::to_string(&root).map_err(|e| PayloadError::MalformedJson(e.to_string()))
}

/// Sets `root[key] = value`, overwriting any existing value in place
pub fn add_root_property(
	key: impl Into<String>,
	value: impl Into<Value>,
) -> impl FnOnce(&mut RootObject) -> Result<(), PayloadError> {
	let key = key.into();
	let value = value.into();
	move |root| {
		root.insert(key, value);
		Ok(())
	}
}

/// Expands `${VAR}` references in every string value of the document,
/// at any depth. Keys and non-string values are left as they are.
pub fn expand_env_vars<S: VariableSource + ?Sized>(
	source: &S,
) -> impl FnOnce(&mut RootObject) -> Result<(), PayloadError> + '_ {
	move |root| {
		for (key, value) in root.iter_mut() {
			expand_value(value, key, source)?;
		}
		Ok(())
	}
}

fn expand_value<S: VariableSource + ?Sized>(
	value: &mut Value,
	path: &str,
	source: &S,
) -> Result<(), PayloadError> {
	match value {
		Value::String(text) => {
			*text = expand(text.as_str(), source).map_err(|e| PayloadError::Expansion {
				path: path.to_string(),
				source: e,
			})?;
		}
		Value::Array(items) => {
			for (idx, item) in items.iter_mut().enumerate() {
				expand_value(item, &format!("{}[{}]", path, idx), source)?;
			}
		}
		Value::Object(map) => {
			for (key, item) in map.iter_mut() {
				expand_value(item, &format!("{}.{}", path, key), source)?;
			}
		}
		Value::Null | Value::Bool(_) | Value::Number(_) => {}
	}
	Ok(())
}

fn describe(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
