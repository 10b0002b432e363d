//! Comparing submitted values with checkbox, radio and option values
//!
//! Submitted values usually arrive as strings while option keys are often
//! integers, so two comparison modes exist. [`ValueMatch::Loose`] treats
//! `"2"` and `2` as equal, [`ValueMatch::Strict`] requires the same JSON type
//! and value. Which one checkboxes and selects use is set per form through
//! [`MatchPolicy`].

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Value comparison mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMatch {
	/// Numeric-string tolerant comparison
	Loose,
	/// Same type and same value
	Strict,
}

impl ValueMatch {
	pub fn matches(self, stored: &Value, candidate: &Value) -> bool {
		match self {
			ValueMatch::Loose => loose_eq(stored, candidate),
			ValueMatch::Strict => stored == candidate,
		}
	}
}

/// Comparison modes used by a [`Form`](crate::Form)
///
/// The default checks checkboxes and radios loosely and selects options
/// strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
	/// Checkbox and radio `checked` state
	pub checked: ValueMatch,
	/// Select and multi-select `selected` state
	pub selected: ValueMatch,
}

impl Default for MatchPolicy {
	fn default() -> Self {
		Self {
			checked: ValueMatch::Loose,
			selected: ValueMatch::Strict,
		}
	}
}

impl MatchPolicy {
	/// Use `mode` everywhere
	pub fn uniform(mode: ValueMatch) -> Self {
		Self {
			checked: mode,
			selected: mode,
		}
	}
}

/// Loose equality between two JSON values
///
/// - numbers and numeric strings compare numerically, integers exactly
/// - other strings compare by content
/// - null equals only the empty string among strings
/// - booleans and null otherwise compare by truthiness
/// - arrays and objects compare member by member
pub fn loose_eq(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
		(Value::Null, other) | (other, Value::Null) => !truthy(other),
		(Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == truthy(other),
		(Value::Number(x), Value::Number(y)) => number(x) == number(y),
		(Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
			match numeric(s) {
				Some(parsed) => number(n) == Some(parsed),
				None => n.to_string() == *s,
			}
		}
		(Value::String(x), Value::String(y)) => match (numeric(x), numeric(y)) {
			(Some(x), Some(y)) => x == y,
			_ => x == y,
		},
		(Value::Array(xs), Value::Array(ys)) => {
			xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
		}
		(Value::Object(xs), Value::Object(ys)) => {
			xs.len() == ys.len()
				&& xs
					.iter()
					.all(|(key, x)| ys.get(key).is_some_and(|y| loose_eq(x, y)))
		}
		_ => false,
	}
}

/// Parsed numeric value; integers are kept exact
#[derive(Debug, Clone, Copy)]
enum Numeric {
	Int(i128),
	Float(f64),
}

impl Numeric {
	fn as_f64(self) -> f64 {
		match self {
			Numeric::Int(n) => n as f64,
			Numeric::Float(f) => f,
		}
	}
}

impl PartialEq for Numeric {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Numeric::Int(x), Numeric::Int(y)) => x == y,
			_ => self.as_f64() == other.as_f64(),
		}
	}
}

fn number(n: &Number) -> Option<Numeric> {
	n.as_i64()
		.map(i128::from)
		.or_else(|| n.as_u64().map(i128::from))
		.map(Numeric::Int)
		.or_else(|| n.as_f64().map(Numeric::Float))
}

fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty() && s != "0",
		Value::Array(items) => !items.is_empty(),
		Value::Object(fields) => !fields.is_empty(),
	}
}

/// Parse a decimal numeric string such as `" 12"`, `"-1.5"` or `"1e3"`
///
/// Words like `inf` or `NaN` are not numeric.
fn numeric(s: &str) -> Option<Numeric> {
	let trimmed = s.trim();
	let has_digit = trimmed.bytes().any(|b| b.is_ascii_digit());
	let well_formed = trimmed
		.bytes()
		.all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
	if !has_digit || !well_formed {
		return None;
	}
	match trimmed.parse::<i128>() {
		Ok(n) => Some(Numeric::Int(n)),
		Err(_) => trimmed.parse().ok().map(Numeric::Float),
	}
}
