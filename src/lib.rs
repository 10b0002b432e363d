//! # Vellum
//!
//! HTML rendering helpers for server-side views.
//!
//! Vellum produces markup that reflects earlier user input without ever
//! trusting it: every attribute value and every piece of text is escaped once,
//! at render time.
//!
//! ## Building Blocks
//!
//! - [`html::Element`]: an immutable tag with ordered attributes and content
//! - [`html::Html`]: a string-only tag renderer for callers that don't need
//!   an element tree
//! - [`forms::Form`]: builds inputs, selects, textareas, buttons, labels and
//!   error lists from submitted values and validation errors
//! - [`html::view::ViewModel`]: the template/data pair handed to a view layer
//!
//! ## Feature Flags
//!
//! The element model, escaping and tag rendering are always available.
//!
//! - `forms` - Form control builders
//! - `settings` - TOML configuration for encodings and value matching
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use vellum::prelude::*;
//!
//! let form = Form::builder()
//! 	.caption("name", "Your name")
//! 	.value("name", "Ada <Lovelace>")
//! 	.error("name", ":field is too long")
//! 	.build();
//!
//! let markup = format!(
//! 	"{}{}{}{}",
//! 	form.open(Attributes::from([("method", "post")])),
//! 	form.label("name", Attributes::new()),
//! 	form.text("name", Attributes::new().flag("required")).unwrap(),
//! 	form.close(),
//! );
//!
//! assert_eq!(
//! 	markup,
//! 	r#"<form method="post"><label>Your name</label><input type="text" name="name" value="Ada &lt;Lovelace&gt;" required></form>"#
//! );
//! assert_eq!(form.error("name"), Some("Your name is too long"));
//! # }
//! ```

/// Element model, escaping, tag rendering and view models
pub mod html {
	pub use vellum_html::*;
}

/// Form control builders
#[cfg(feature = "forms")]
pub mod forms {
	pub use vellum_forms::*;
}

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "settings")]
pub use settings::{Settings, SettingsError};

pub mod prelude {
	pub use vellum_html::{
		Attribute, Attributes, Content, Element, Encoding, Html, Node, View, ViewModel,
	};

	#[cfg(feature = "forms")]
	pub use vellum_forms::{
		ChoiceKey, Form, FormBuilder, FormError, FormResult, InputType, MatchPolicy, ValueMatch,
	};
}
