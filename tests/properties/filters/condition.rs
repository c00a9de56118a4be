use crate::properties::strategies::{ref_name_strategy, status_strategy};
use ci_slack_notify::services::filter::{
	is_event_matching_status, is_pattern_matching, is_post_condition_met,
};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_empty_pattern_matches_anything(candidate in any::<String>()) {
		prop_assert!(is_pattern_matching("", &candidate).unwrap());
	}

	#[test]
	fn test_pattern_never_matches_empty_candidate(pattern in "[a-z.*^$]{1,10}") {
		prop_assert!(!is_pattern_matching(&pattern, "").unwrap());
	}

	#[test]
	fn test_catch_all_pattern_matches_any_ref(name in ref_name_strategy()) {
		prop_assert!(is_pattern_matching(".+", &name).unwrap());
	}

	#[test]
	fn test_escaped_name_matches_itself(name in ref_name_strategy()) {
		let pattern = format!("^{}$", regex::escape(&name));
		prop_assert!(is_pattern_matching(&pattern, &name).unwrap());
	}

	#[test]
	fn test_always_event_matches_every_status(status in status_strategy()) {
		prop_assert!(is_event_matching_status("always", &status));
	}

	#[test]
	fn test_event_matches_only_equal_status(
		event in status_strategy(),
		status in status_strategy()
	) {
		prop_assume!(event != "always");
		prop_assert_eq!(is_event_matching_status(&event, &status), event == status);
	}

	#[test]
	fn test_invert_flips_post_condition(
		branch_matches in any::<bool>(),
		tag_matches in any::<bool>()
	) {
		let plain = is_post_condition_met(branch_matches, tag_matches, false);
		let inverted = is_post_condition_met(branch_matches, tag_matches, true);

		prop_assert_eq!(plain, branch_matches || tag_matches);
		prop_assert_eq!(inverted, !plain);
	}
}
