//! Regex predicate used for branch and tag filtering.

use regex::Regex;

use crate::services::filter::FilterError;

/// Checks whether `pattern` matches anywhere in `candidate`.
///
/// An empty pattern places no restriction and always matches, even an empty
/// candidate. A non-empty pattern never matches an empty candidate. The
/// match is unanchored unless the pattern anchors itself.
///
/// # Errors
/// Returns [`FilterError::InvalidPattern`] if the pattern does not compile
pub fn is_pattern_matching(pattern: &str, candidate: &str) -> Result<bool, FilterError> {
	if pattern.is_empty() {
		return Ok(true);
	}
	if candidate.is_empty() {
		return Ok(false);
	}

	let re = Regex::new(pattern).map_err(|e| FilterError::invalid_pattern(pattern, e.to_string()))?;
	Ok(re.is_match(candidate))
}
