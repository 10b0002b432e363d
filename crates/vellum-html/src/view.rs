//! View models handed from application code to a view layer

use serde::Serialize;
use serde_json::{Map, Value};

/// A view: the template to render and the data it is rendered with
pub trait ViewModel {
	/// Template name
	fn template(&self) -> &str;

	/// Template data
	fn data(&self) -> Map<String, Value>;
}

/// Plain [`ViewModel`] holding a template name and a data map
///
/// # Examples
///
/// ```
/// use vellum_html::view::{View, ViewModel};
/// use serde_json::json;
///
/// let view = View::new("users/edit").with("title", "Edit user").with("id", 7);
/// assert_eq!(view.template(), "users/edit");
/// assert_eq!(view.data()["id"], json!(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct View {
	template: String,
	data: Map<String, Value>,
}

impl View {
	pub fn new(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			data: Map::new(),
		}
	}

	/// Add a data entry
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.data.insert(key.into(), value.into());
		self
	}

	/// Add every field of a serializable value as a data entry
	///
	/// Values that do not serialize to a JSON object are stored under
	/// `key` instead.
	pub fn with_serialized<T: Serialize>(
		mut self,
		key: impl Into<String>,
		value: &T,
	) -> serde_json::Result<Self> {
		match serde_json::to_value(value)? {
			Value::Object(fields) => self.data.extend(fields),
			other => {
				self.data.insert(key.into(), other);
			}
		}
		Ok(self)
	}
}

impl ViewModel for View {
	fn template(&self) -> &str {
		&self.template
	}

	fn data(&self) -> Map<String, Value> {
		self.data.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[derive(Serialize)]
	struct Profile {
		name: String,
		age: u32,
	}

	#[test]
	fn test_view_data() {
		let view = View::new("home").with("greeting", "hello");

		assert_eq!(view.template(), "home");
		assert_eq!(view.data().get("greeting"), Some(&json!("hello")));
	}

	#[test]
	fn test_with_serialized_flattens_objects() {
		let profile = Profile {
			name: "Ada".to_string(),
			age: 36,
		};
		let view = View::new("profile").with_serialized("profile", &profile).unwrap();

		assert_eq!(view.data()["name"], json!("Ada"));
		assert_eq!(view.data()["age"], json!(36));
		assert!(!view.data().contains_key("profile"));
	}

	#[test]
	fn test_with_serialized_keeps_scalars_under_key() {
		let view = View::new("count").with_serialized("total", &3).unwrap();
		assert_eq!(view.data()["total"], json!(3));
	}

	#[test]
	fn test_trait_object() {
		let view: Box<dyn ViewModel> = Box::new(View::new("list"));
		assert_eq!(view.template(), "list");
		assert!(view.data().is_empty());
	}
}
