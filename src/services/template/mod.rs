//! Message template selection.

mod error;
mod resolver;

pub use error::TemplateError;
pub use resolver::{
	resolve_template, template_name_from_status, ResolvedTemplate, TemplateOrigin,
	DEFAULT_FAIL_TEMPLATE, DEFAULT_SUCCESS_TEMPLATE,
};
