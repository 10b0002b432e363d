//! Renderable HTML elements
//!
//! An [`Element`] is a tag name, an ordered attribute list and optional
//! content. Without content it renders as an open tag only (`<br>`); with
//! content it renders the open tag, the content and the close tag.
//!
//! Text content and attribute values are escaped once, at render time:
//! attribute values escape double quotes, body text leaves quotes alone.
//! Nested elements are rendered verbatim and never re-escaped.

use crate::attributes::Attributes;
use crate::escape::{QuoteMode, escape_text};
use std::fmt;

/// Element content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// A single text run
	Text(String),
	/// A sequence of text runs and nested elements
	Nodes(Vec<Node>),
}

/// An item of [`Content::Nodes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Element(Element),
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

impl From<Vec<Node>> for Content {
	fn from(nodes: Vec<Node>) -> Self {
		Content::Nodes(nodes)
	}
}

impl From<Vec<Element>> for Content {
	fn from(elements: Vec<Element>) -> Self {
		Content::Nodes(elements.into_iter().map(Node::Element).collect())
	}
}

/// An HTML element
///
/// # Examples
///
/// ```
/// use vellum_html::{Attributes, Element};
///
/// assert_eq!(Element::new("br").to_string(), "<br>");
///
/// let input = Element::new("input").with_attributes(Attributes::new().flag("required"));
/// assert_eq!(input.to_string(), "<input required>");
///
/// let div = Element::new("div").with_content("<>&'\"");
/// assert_eq!(div.to_string(), "<div>&lt;&gt;&amp;'\"</div>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	name: String,
	attributes: Attributes,
	content: Option<Content>,
}

impl Element {
	/// Create an element without attributes or content
	///
	/// # Panics
	///
	/// Panics if `name` is empty.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		assert!(!name.is_empty(), "element tag name must not be empty");
		Self {
			name,
			attributes: Attributes::new(),
			content: None,
		}
	}

	/// Replace the attribute list
	pub fn with_attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Set the content
	pub fn with_content(mut self, content: impl Into<Content>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Set the content when `content` is `Some`, leave it absent otherwise
	pub fn with_optional_content<C: Into<Content>>(mut self, content: Option<C>) -> Self {
		self.content = content.map(Into::into);
		self
	}

	/// Tag name
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn content_ref(&self) -> Option<&Content> {
		self.content.as_ref()
	}

	/// Open tag, e.g. `<input type="text">`
	pub fn open(&self) -> String {
		let mut out = String::with_capacity(self.name.len() + 2);
		self.write_open(&mut out);
		out
	}

	/// Rendered content; empty when the content is absent
	pub fn content(&self) -> String {
		let mut out = String::new();
		self.write_content(&mut out);
		out
	}

	/// Close tag, e.g. `</div>`
	pub fn close(&self) -> String {
		format!("</{}>", self.name)
	}

	/// Full render
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.write_to(&mut out);
		out
	}

	fn write_to(&self, out: &mut String) {
		self.write_open(out);
		if self.content.is_some() {
			self.write_content(out);
			out.push_str("</");
			out.push_str(&self.name);
			out.push('>');
		}
	}

	fn write_open(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.name);
		self.attributes.write_to(out, QuoteMode::Double);
		out.push('>');
	}

	fn write_content(&self, out: &mut String) {
		match &self.content {
			None => {}
			Some(Content::Text(text)) => out.push_str(&escape_text(text)),
			Some(Content::Nodes(nodes)) => {
				for node in nodes {
					match node {
						Node::Text(text) => out.push_str(&escape_text(text)),
						Node::Element(element) => element.write_to(out),
					}
				}
			}
		}
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
