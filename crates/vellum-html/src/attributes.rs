//! Ordered HTML attribute lists
//!
//! An attribute is either a bare flag (`required`, `checked`) or a
//! `name="value"` pair. Pairs behave like keys of an ordered map: setting an
//! existing key replaces its value without moving it, while new keys and flags
//! are appended.

use crate::escape::{QuoteMode, escape};

/// A single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
	/// Boolean attribute rendered without a value
	Flag(String),
	/// Attribute rendered as `name="value"`
	Pair(String, String),
}

impl Attribute {
	/// The attribute name (for flags, the flag itself)
	pub fn name(&self) -> &str {
		match self {
			Attribute::Flag(name) | Attribute::Pair(name, _) => name,
		}
	}

	fn write(&self, out: &mut String, mode: QuoteMode) {
		match self {
			Attribute::Flag(name) => out.push_str(name),
			Attribute::Pair(name, value) => {
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(&escape(value, mode));
				out.push('"');
			}
		}
	}
}

/// Ordered list of attributes
///
/// # Examples
///
/// ```
/// use vellum_html::Attributes;
///
/// let attrs = Attributes::new()
/// 	.with("type", "text")
/// 	.flag("required")
/// 	.with("placeholder", "Type here...");
///
/// assert_eq!(attrs.render(), r#" type="text" required placeholder="Type here...""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
	items: Vec<Attribute>,
}

impl Attributes {
	/// Create an empty attribute list
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`set`](Self::set)
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	/// Builder form of [`push_flag`](Self::push_flag)
	pub fn flag(mut self, name: impl Into<String>) -> Self {
		self.push_flag(name);
		self
	}

	/// Set a `name="value"` pair, replacing an existing pair in place
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.position(&name) {
			Some(index) => self.items[index] = Attribute::Pair(name, value),
			None => self.items.push(Attribute::Pair(name, value)),
		}
	}

	/// Append a flag attribute
	pub fn push_flag(&mut self, name: impl Into<String>) {
		self.items.push(Attribute::Flag(name.into()));
	}

	/// Value of the pair named `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.items.iter().find_map(|attr| match attr {
			Attribute::Pair(key, value) if key == name => Some(value.as_str()),
			_ => None,
		})
	}

	/// Whether a pair named `name` is present
	pub fn contains_key(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	/// Whether a flag named `name` is present
	pub fn has_flag(&self, name: &str) -> bool {
		self.items
			.iter()
			.any(|attr| matches!(attr, Attribute::Flag(flag) if flag == name))
	}

	/// Remove the pair named `name`, returning its value
	pub fn remove(&mut self, name: &str) -> Option<String> {
		let index = self.position(name)?;
		match self.items.remove(index) {
			Attribute::Pair(_, value) => Some(value),
			Attribute::Flag(_) => None,
		}
	}

	/// Merge `other` into `self`: pairs overwrite in place, flags are appended
	pub fn merge(&mut self, other: Attributes) {
		for attr in other.items {
			match attr {
				Attribute::Pair(name, value) => self.set(name, value),
				Attribute::Flag(name) => self.push_flag(name),
			}
		}
	}

	/// Builder form of [`merge`](Self::merge)
	pub fn merged(mut self, other: Attributes) -> Self {
		self.merge(other);
		self
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
		self.items.iter()
	}

	/// Serialize with a leading space before every attribute
	///
	/// Values are escaped with [`QuoteMode::Double`].
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.write_to(&mut out, QuoteMode::Double);
		out
	}

	/// Append the serialized attributes to `out`, one leading space each
	pub fn write_to(&self, out: &mut String, mode: QuoteMode) {
		for attr in &self.items {
			out.push(' ');
			attr.write(out, mode);
		}
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.items
			.iter()
			.position(|attr| matches!(attr, Attribute::Pair(key, _) if key == name))
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = &'a Attribute;
	type IntoIter = std::slice::Iter<'a, Attribute>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
