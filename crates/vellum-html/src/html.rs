//! Standalone tag rendering
//!
//! [`Html`] renders tags straight to strings without building an
//! [`Element`](crate::Element) tree. Attribute values and body text are both
//! escaped with [`QuoteMode::Both`], so single quotes become `&apos;`.

use crate::attributes::Attributes;
use crate::escape::{QuoteMode, escape};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
	#[error("Unsupported character encoding: {0}")]
	UnsupportedEncoding(String),
}

pub type HtmlResult<T> = Result<T, HtmlError>;

/// Character encodings accepted for rendered documents
///
/// The escaper only rewrites ASCII characters, so output is identical for
/// every supported encoding. The encoding is kept so views can announce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
	#[default]
	Utf8,
	Iso8859_1,
	Iso8859_5,
	Iso8859_15,
	Windows1251,
	Windows1252,
	Koi8R,
	Big5,
	Gb2312,
	ShiftJis,
	EucJp,
}

impl Encoding {
	/// Canonical name, e.g. `UTF-8`
	pub fn as_str(&self) -> &'static str {
		match self {
			Encoding::Utf8 => "UTF-8",
			Encoding::Iso8859_1 => "ISO-8859-1",
			Encoding::Iso8859_5 => "ISO-8859-5",
			Encoding::Iso8859_15 => "ISO-8859-15",
			Encoding::Windows1251 => "Windows-1251",
			Encoding::Windows1252 => "Windows-1252",
			Encoding::Koi8R => "KOI8-R",
			Encoding::Big5 => "BIG5",
			Encoding::Gb2312 => "GB2312",
			Encoding::ShiftJis => "Shift_JIS",
			Encoding::EucJp => "EUC-JP",
		}
	}
}

impl FromStr for Encoding {
	type Err = HtmlError;

	/// Parse an encoding name, ignoring case and accepting common aliases
	fn from_str(name: &str) -> HtmlResult<Self> {
		let encoding = match name.trim().to_ascii_lowercase().as_str() {
			"utf-8" | "utf8" => Encoding::Utf8,
			"iso-8859-1" | "iso8859-1" | "latin1" => Encoding::Iso8859_1,
			"iso-8859-5" | "iso8859-5" => Encoding::Iso8859_5,
			"iso-8859-15" | "iso8859-15" | "latin9" => Encoding::Iso8859_15,
			"windows-1251" | "cp1251" | "win-1251" | "1251" => Encoding::Windows1251,
			"windows-1252" | "cp1252" | "1252" => Encoding::Windows1252,
			"koi8-r" | "koi8-ru" | "koi8r" => Encoding::Koi8R,
			"big5" | "950" => Encoding::Big5,
			"gb2312" | "936" => Encoding::Gb2312,
			"shift_jis" | "sjis" | "932" => Encoding::ShiftJis,
			"euc-jp" | "eucjp" => Encoding::EucJp,
			_ => return Err(HtmlError::UnsupportedEncoding(name.to_string())),
		};
		Ok(encoding)
	}
}

impl TryFrom<String> for Encoding {
	type Error = HtmlError;

	fn try_from(name: String) -> HtmlResult<Self> {
		name.parse()
	}
}

impl From<Encoding> for String {
	fn from(encoding: Encoding) -> Self {
		encoding.as_str().to_string()
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Tag renderer
///
/// # Examples
///
/// ```
/// use vellum_html::{Attributes, Html};
///
/// let html = Html::new();
/// let link = html.tag("a", &Attributes::from([("href", "/?a=1&b=2")]), "Tom's page");
/// assert_eq!(link, r#"<a href="/?a=1&amp;b=2">Tom&apos;s page</a>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Html {
	encoding: Encoding,
}

impl Html {
	/// Create a renderer for UTF-8 output
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a renderer for a named encoding
	///
	/// # Examples
	///
	/// ```
	/// use vellum_html::{Encoding, Html};
	///
	/// let html = Html::with_encoding("iso-8859-1").unwrap();
	/// assert_eq!(html.encoding(), Encoding::Iso8859_1);
	/// assert!(Html::with_encoding("EBCDIC").is_err());
	/// ```
	pub fn with_encoding(name: &str) -> HtmlResult<Self> {
		let encoding = name.parse::<Encoding>().inspect_err(|_| {
			tracing::warn!(encoding = name, "rejected unsupported HTML encoding");
		})?;
		Ok(Self { encoding })
	}

	pub fn from_encoding(encoding: Encoding) -> Self {
		Self { encoding }
	}

	pub fn encoding(&self) -> Encoding {
		self.encoding
	}

	/// Escape text, converting both quote characters
	pub fn escape<'a>(&self, content: &'a str) -> Cow<'a, str> {
		escape(content, QuoteMode::Both)
	}

	/// Render an open tag
	///
	/// # Examples
	///
	/// ```
	/// use vellum_html::{Attributes, Html};
	///
	/// let html = Html::new();
	/// assert_eq!(html.open_tag("br", &Attributes::new()), "<br>");
	/// assert_eq!(
	/// 	html.open_tag("input", &Attributes::new().with("name", "q").flag("autofocus")),
	/// 	r#"<input name="q" autofocus>"#
	/// );
	/// ```
	pub fn open_tag(&self, element: &str, attributes: &Attributes) -> String {
		let mut out = String::with_capacity(element.len() + 2);
		out.push('<');
		out.push_str(element);
		attributes.write_to(&mut out, QuoteMode::Both);
		out.push('>');
		out
	}

	/// Render a close tag
	pub fn close_tag(&self, element: &str) -> String {
		format!("</{}>", element)
	}

	/// Render an open tag, escaped text content and a close tag
	pub fn tag(&self, element: &str, attributes: &Attributes, content: &str) -> String {
		let mut out = self.open_tag(element, attributes);
		out.push_str(&self.escape(content));
		out.push_str(&self.close_tag(element));
		out
	}
}
