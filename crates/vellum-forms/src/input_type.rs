//! HTML input types and their fixed per-type behaviour

use std::fmt;
use std::str::FromStr;

/// `type` attribute of an `<input>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
	Checkbox,
	Color,
	Date,
	/// Date and time (time includes fraction of a second, no time zone)
	DatetimeLocal,
	Email,
	File,
	Hidden,
	/// Image submit button
	Image,
	/// Month and year
	Month,
	Number,
	/// Masked characters
	Password,
	Radio,
	/// Slider, 0 to 100 unless `min`/`max` say otherwise
	Range,
	Search,
	/// Telephone number
	Tel,
	Text,
	Time,
	Url,
	/// Week and year
	Week,
}

impl InputType {
	pub const ALL: [InputType; 19] = [
		InputType::Checkbox,
		InputType::Color,
		InputType::Date,
		InputType::DatetimeLocal,
		InputType::Email,
		InputType::File,
		InputType::Hidden,
		InputType::Image,
		InputType::Month,
		InputType::Number,
		InputType::Password,
		InputType::Radio,
		InputType::Range,
		InputType::Search,
		InputType::Tel,
		InputType::Text,
		InputType::Time,
		InputType::Url,
		InputType::Week,
	];

	/// Value of the `type` attribute
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Checkbox => "checkbox",
			InputType::Color => "color",
			InputType::Date => "date",
			InputType::DatetimeLocal => "datetime-local",
			InputType::Email => "email",
			InputType::File => "file",
			InputType::Hidden => "hidden",
			InputType::Image => "image",
			InputType::Month => "month",
			InputType::Number => "number",
			InputType::Password => "password",
			InputType::Radio => "radio",
			InputType::Range => "range",
			InputType::Search => "search",
			InputType::Tel => "tel",
			InputType::Text => "text",
			InputType::Time => "time",
			InputType::Url => "url",
			InputType::Week => "week",
		}
	}

	/// Fixed `pattern` attribute for browsers without a native picker
	///
	/// Overrides any `pattern` the caller passes.
	pub fn pattern(&self) -> Option<&'static str> {
		match self {
			InputType::Date => Some("[0-9]{4}-[0-9]{2}-[0-9]{2}"),
			InputType::Month => Some("[0-9]{4}-[0-9]{2}"),
			InputType::Time => Some("[0-9]{2}:[0-9]{2}"),
			InputType::Week => Some("[0-9]{4}-W[0-9]{2}"),
			_ => None,
		}
	}

	/// Whether a submitted value must never be echoed back into `value`
	///
	/// File inputs cannot be pre-filled, passwords must not round-trip and
	/// image buttons use `value` for something else.
	pub fn withholds_value(&self) -> bool {
		matches!(self, InputType::File | InputType::Image | InputType::Password)
	}
}

impl fmt::Display for InputType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown input type: {0}")]
pub struct UnknownInputType(pub String);

impl FromStr for InputType {
	type Err = UnknownInputType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		InputType::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownInputType(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_round_trips_through_type_name() {
		for kind in InputType::ALL {
			assert_eq!(kind.as_str().parse::<InputType>(), Ok(kind));
		}
	}

	#[rstest]
	#[case("DATETIME-LOCAL", InputType::DatetimeLocal)]
	#[case("Tel", InputType::Tel)]
	fn test_parse_ignores_case(#[case] name: &str, #[case] expected: InputType) {
		assert_eq!(name.parse::<InputType>(), Ok(expected));
	}

	#[test]
	fn test_unknown_type() {
		assert_eq!(
			"submit".parse::<InputType>(),
			Err(UnknownInputType("submit".to_string()))
		);
	}

	#[test]
	fn test_only_sensitive_types_withhold_values() {
		let withheld: Vec<_> = InputType::ALL
			.into_iter()
			.filter(InputType::withholds_value)
			.collect();

		assert_eq!(
			withheld,
			vec![InputType::File, InputType::Image, InputType::Password]
		);
	}

	#[test]
	fn test_patterns() {
		let patterned: Vec<_> = InputType::ALL
			.into_iter()
			.filter(|kind| kind.pattern().is_some())
			.collect();

		assert_eq!(
			patterned,
			vec![InputType::Date, InputType::Month, InputType::Time, InputType::Week]
		);
		assert_eq!(InputType::Week.pattern(), Some("[0-9]{4}-W[0-9]{2}"));
	}
}
