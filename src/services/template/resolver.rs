//! Template selection.
//!
//! The message body comes from the first source that is present:
//! 1. the inline template, used verbatim
//! 2. the environment variable named by the template reference
//! 3. the environment variable of the default template for the job status

use crate::{services::template::TemplateError, utils::VariableSource};

/// Default template for successful jobs
pub const DEFAULT_SUCCESS_TEMPLATE: &str = "basic_success_1";
/// Default template for failed jobs
pub const DEFAULT_FAIL_TEMPLATE: &str = "basic_fail_1";

/// Where a resolved template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
	Inline,
	/// Looked up through the explicit template reference
	Named(String),
	/// Looked up through the default name for the job status
	StatusDefault(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
	pub body: String,
	pub origin: TemplateOrigin,
}

/// Maps a job status to the name of its default template
pub fn template_name_from_status(status: &str) -> Result<&'static str, TemplateError> {
	match status {
		"success" | "pass" => Ok(DEFAULT_SUCCESS_TEMPLATE),
		"fail" => Ok(DEFAULT_FAIL_TEMPLATE),
		_ => Err(TemplateError::UnknownStatus(status.to_string())),
	}
}

/// Picks the template body for this run.
///
/// Whether the reference was named explicitly or derived from the status is
/// decided only by `named_ref` being non-empty; the template content is
/// never inspected.
///
/// # Arguments
/// * `inline` - Inline template; wins whenever it is non-empty
/// * `status` - Job status, used only when no template name is given
/// * `named_ref` - Name of the variable holding the template
/// * `source` - Where template variables are looked up
pub fn resolve_template<S: VariableSource + ?Sized>(
	inline: &str,
	status: &str,
	named_ref: &str,
	source: &S,
) -> Result<ResolvedTemplate, TemplateError> {
	if !inline.is_empty() {
		return Ok(ResolvedTemplate {
			body: inline.to_string(),
			origin: TemplateOrigin::Inline,
		});
	}

	let (name, origin) = if named_ref.is_empty() {
		let name = template_name_from_status(status)?;
		(name, TemplateOrigin::StatusDefault(name.to_string()))
	} else {
		(named_ref, TemplateOrigin::Named(named_ref.to_string()))
	};

	match source.get_var(name) {
		Some(body) if !body.is_empty() => Ok(ResolvedTemplate { body, origin }),
		_ => Err(TemplateError::EmptyTemplate(name.to_string())),
	}
}
