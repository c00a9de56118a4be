//! Branch, tag and event filtering.
//!
//! Decides whether the current job qualifies for a notification before any
//! template work or network I/O happens.

mod condition;
mod error;
mod pattern;

pub use condition::{is_event_matching_status, is_post_condition_met, FilterService};
pub use error::FilterError;
pub use pattern::is_pattern_matching;
