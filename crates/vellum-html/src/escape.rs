//! HTML escaping for text content and attribute values
//!
//! `&`, `<` and `>` are always escaped. Quotes depend on where the text ends
//! up:
//!
//! - [`QuoteMode::NoQuotes`]: element body text, where quotes carry no meaning.
//! - [`QuoteMode::Double`]: values emitted inside double quotes by
//!   [`Element`](crate::Element). Single quotes are left alone.
//! - [`QuoteMode::Both`]: everything [`Html`](crate::Html) renders. Single
//!   quotes become `&apos;`.
//!
//! Escaping is not idempotent: escaping twice double-escapes `&`. Store raw
//! values and escape exactly once when rendering.

use std::borrow::Cow;

/// Which quote characters are converted to entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
	/// Leave both quote characters alone
	NoQuotes,
	/// Escape double quotes only
	#[default]
	Double,
	/// Escape both double and single quotes
	Both,
}

impl QuoteMode {
	fn entity(self, ch: char) -> Option<&'static str> {
		match ch {
			'&' => Some("&amp;"),
			'<' => Some("&lt;"),
			'>' => Some("&gt;"),
			'"' if self != QuoteMode::NoQuotes => Some("&quot;"),
			'\'' if self == QuoteMode::Both => Some("&apos;"),
			_ => None,
		}
	}
}

/// Escape HTML special characters
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use vellum_html::escape::{QuoteMode, escape};
///
/// assert_eq!(escape("Just saying", QuoteMode::Both), "Just saying");
/// assert_eq!(escape("<>&'\"", QuoteMode::NoQuotes), "&lt;&gt;&amp;'\"");
/// assert_eq!(escape("<>\"&'", QuoteMode::Double), "&lt;&gt;&quot;&amp;'");
/// assert_eq!(escape("<>&\"'", QuoteMode::Both), "&lt;&gt;&amp;&quot;&apos;");
/// ```
pub fn escape(text: &str, mode: QuoteMode) -> Cow<'_, str> {
	let Some(first) = text.find(|ch: char| mode.entity(ch).is_some()) else {
		return Cow::Borrowed(text);
	};

	let mut result = String::with_capacity(text.len() + 16);
	result.push_str(&text[..first]);
	for ch in text[first..].chars() {
		match mode.entity(ch) {
			Some(entity) => result.push_str(entity),
			None => result.push(ch),
		}
	}
	Cow::Owned(result)
}

/// Escape element body text
pub fn escape_text(text: &str) -> Cow<'_, str> {
	escape(text, QuoteMode::NoQuotes)
}

/// Escape a value placed inside a double-quoted attribute
pub fn escape_attr(text: &str) -> Cow<'_, str> {
	escape(text, QuoteMode::Double)
}
