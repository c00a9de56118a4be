//! Delivery gates.
//!
//! A message is only posted when both gates pass:
//! - the event gate: the job status matches the configured event
//! - the post condition: the branch or tag matches its pattern, XOR invert

use crate::{
	models::NotificationContext,
	services::filter::pattern::is_pattern_matching,
	utils::ALWAYS_EVENT,
};

/// Event gate: the configured event equals the job status, or is `always`
pub fn is_event_matching_status(event: &str, status: &str) -> bool {
	event == status || event == ALWAYS_EVENT
}

/// Combines the branch and tag matches with the invert flag
pub fn is_post_condition_met(branch_matches: bool, tag_matches: bool, invert_match: bool) -> bool {
	(branch_matches || tag_matches) != invert_match
}

/// Evaluates the delivery gates against a [`NotificationContext`]
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterService {}

impl FilterService {
	pub fn new() -> Self {
		FilterService {}
	}

	pub fn event_matches(&self, context: &NotificationContext) -> bool {
		is_event_matching_status(&context.event, &context.status)
	}

	/// Checks the branch/tag patterns against the job.
	///
	/// A pattern that fails to compile counts as "no match" for its side; the
	/// error is logged and evaluation continues.
	pub fn post_condition_met(&self, context: &NotificationContext) -> bool {
		let branch_matches = Self::side_matches("branch", &context.branch_pattern, &context.branch);
		let tag_matches = Self::side_matches("tag", &context.tag_pattern, &context.tag);
		is_post_condition_met(branch_matches, tag_matches, context.invert_match)
	}

	fn side_matches(side: &str, pattern: &str, candidate: &str) -> bool {
		match is_pattern_matching(pattern, candidate) {
			Ok(matches) => matches,
			Err(e) => {
				tracing::warn!(side, error = %e, "Ignoring invalid pattern");
				false
			}
		}
	}
}
