/// Snapshot of the job facts and delivery rules for one run.
///
/// Built once at startup from the environment and never mutated afterwards.
/// Empty strings mean "not provided" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContext {
	/// Job status reported by the CI run (e.g. `pass`, `fail`)
	pub status: String,
	/// Branch the job ran on
	pub branch: String,
	/// Tag the job ran on
	pub tag: String,
	/// Status that should trigger a message, or `always`
	pub event: String,
	/// Regex the branch must match; empty matches anything
	pub branch_pattern: String,
	/// Regex the tag must match; empty matches anything
	pub tag_pattern: String,
	/// Flips the result of the branch/tag match
	pub invert_match: bool,
	/// Raw JSON message that overrides every other template source
	pub inline_template: String,
	/// Name of an environment variable holding the template
	pub named_template_ref: String,
}
