use thiserror::Error;

/// Errors raised while choosing the message template
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
	/// No inline or named template was given and the status has no default
	#[error("no default template for job status {0:?}; set an inline or named template")]
	UnknownStatus(String),

	/// The resolved template variable is unset or empty
	#[error("the template {0:?} is empty")]
	EmptyTemplate(String),
}
