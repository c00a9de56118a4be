use std::error::Error;
use std::fmt;


#[derive(Debug)]
pub enum FilterError {
	InvalidPattern { pattern: String, message: String },
}

impl FilterError {
	fn format_message(&self) -> String {
		match self {
			FilterError::InvalidPattern { pattern, message } => {
				format!("Invalid pattern {:?}: {}", pattern, message)
			}
		}
	}

	pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
		FilterError::InvalidPattern {
			pattern: pattern.into(),
			message: message.into(),
		}
	}
}

impl fmt::Display for FilterError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for FilterError {}
