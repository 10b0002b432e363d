//! HTML building blocks for server-side views
//!
//! This crate provides:
//! - [`Element`]: an immutable tag/attributes/content value that renders itself
//! - [`Attributes`]: ordered flag and `name="value"` attribute lists
//! - [`Html`]: a standalone tag renderer that works on plain strings
//! - [`escape`]: the escaping rules both of them share
//! - [`view`]: the view model contract handed to templates

pub mod attributes;
pub mod element;
pub mod escape;
pub mod html;
pub mod view;

pub use attributes::{Attribute, Attributes};
pub use element::{Content, Element, Node};
pub use escape::{QuoteMode, escape_attr, escape_text};
pub use html::{Encoding, Html, HtmlError, HtmlResult};
pub use view::{View, ViewModel};
