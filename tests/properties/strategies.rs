use proptest::prelude::*;
use serde_json::{Map, Number, Value};

const MAX_KEYS: usize = 8;

pub fn status_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("success".to_string()),
		Just("pass".to_string()),
		Just("fail".to_string()),
		"[a-z]{1,10}".prop_map(|s| s.to_string()),
	]
}

/// Branch or tag names as CI reports them
pub fn ref_name_strategy() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9_./-]{1,30}".prop_map(|s| s.to_string())
}

/// Root-level objects with scalar values; keys never collide with `channel`.
///
/// Numbers include big integers and exponent forms that must survive a
/// round-trip untouched.
pub fn root_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
	prop::collection::vec(
		(
			"[a-z]{1,10}_key".prop_map(|s| s.to_string()),
			prop_oneof![
				any::<String>().prop_map(Value::from),
				any::<i64>().prop_map(Value::from),
				any::<f64>().prop_map(Value::from),
				number_literal_strategy().prop_map(Value::Number),
				any::<bool>().prop_map(Value::from),
				Just(Value::Null),
			],
		),
		0..MAX_KEYS,
	)
	.prop_map(|pairs| pairs.into_iter().collect())
}

/// JSON number literals outside the i64/f64 range or in exponent form
pub fn number_literal_strategy() -> impl Strategy<Value = Number> {
	prop_oneof![
		"-?[1-9][0-9]{19,40}",
		"-?[1-9][0-9]{0,5}\\.[0-9]{1,20}",
		"-?[1-9][0-9]{0,3}[eE][+-]?[0-9]{1,3}",
	]
	.prop_filter_map("not a JSON number", |literal| literal.parse::<Number>().ok())
}
