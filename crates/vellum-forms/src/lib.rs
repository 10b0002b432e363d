//! Form control builders for server-side views
//!
//! A [`Form`] holds the captions, submitted values and validation errors of a
//! single form render and produces [`Element`](vellum_html::Element)s for every
//! HTML control:
//! - inputs of every [`InputType`], pre-filled with the submitted value
//!   (except file, image and password inputs)
//! - checkboxes, radios, selects and multi-selects that reflect the
//!   submitted choice according to a [`MatchPolicy`]
//! - textareas, labels, buttons and an error list

pub mod choice;
pub mod form;
pub mod input_type;
pub mod matching;

pub use choice::ChoiceKey;
pub use form::{FIELD_PLACEHOLDER, Form, FormBuilder, FormError, FormResult};
pub use input_type::{InputType, UnknownInputType};
pub use matching::{MatchPolicy, ValueMatch, loose_eq};
