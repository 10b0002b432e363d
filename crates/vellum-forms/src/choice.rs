//! Select option keys

use serde_json::Value;
use std::fmt;

/// Key of a select option: an integer or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceKey {
	Int(i64),
	Str(String),
}

impl ChoiceKey {
	/// The key as a JSON value, for comparison with submitted values
	pub fn to_value(&self) -> Value {
		match self {
			ChoiceKey::Int(n) => Value::from(*n),
			ChoiceKey::Str(s) => Value::String(s.clone()),
		}
	}
}

impl fmt::Display for ChoiceKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChoiceKey::Int(n) => write!(f, "{}", n),
			ChoiceKey::Str(s) => f.write_str(s),
		}
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for ChoiceKey {
				fn from(n: $ty) -> Self {
					ChoiceKey::Int(i64::from(n))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for ChoiceKey {
	fn from(s: &str) -> Self {
		ChoiceKey::Str(s.to_string())
	}
}

impl From<String> for ChoiceKey {
	fn from(s: String) -> Self {
		ChoiceKey::Str(s)
	}
}

impl From<&String> for ChoiceKey {
	fn from(s: &String) -> Self {
		ChoiceKey::Str(s.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_to_value_keeps_type() {
		assert_eq!(ChoiceKey::from(2).to_value(), json!(2));
		assert_eq!(ChoiceKey::from("2").to_value(), json!("2"));
	}

	#[test]
	fn test_display() {
		assert_eq!(ChoiceKey::from(-7i64).to_string(), "-7");
		assert_eq!(ChoiceKey::from("nl").to_string(), "nl");
	}
}
