use crate::choice::ChoiceKey;
use crate::input_type::InputType;
use crate::matching::MatchPolicy;
use indexmap::IndexMap;
use serde_json::{Number, Value};
use vellum_html::{Attributes, Element, Node};

/// Placeholder in error templates replaced by the field caption
pub const FIELD_PLACEHOLDER: &str = ":field";

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Field {field} holds {kind} value that cannot be rendered as text")]
	NonScalarValue { field: String, kind: &'static str },
}

pub type FormResult<T> = Result<T, FormError>;

/// Builder for [`Form`]
///
/// Error templates are resolved against the captions in [`build`](Self::build),
/// so captions may be added in any order.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
	captions: IndexMap<String, String>,
	values: IndexMap<String, Value>,
	errors: IndexMap<String, String>,
	policy: MatchPolicy,
}

impl FormBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a field caption
	pub fn caption(mut self, name: impl Into<String>, caption: impl Into<String>) -> Self {
		self.captions.insert(name.into(), caption.into());
		self
	}

	/// Add a submitted value
	pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Add an error template for a field
	pub fn error(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
		self.errors.insert(name.into(), template.into());
		self
	}

	pub fn captions<K, V>(mut self, captions: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.captions
			.extend(captions.into_iter().map(|(k, v)| (k.into(), v.into())));
		self
	}

	pub fn values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.values
			.extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
		self
	}

	pub fn errors<K, V>(mut self, errors: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.errors
			.extend(errors.into_iter().map(|(k, v)| (k.into(), v.into())));
		self
	}

	/// Set how stored values are compared with checkbox and option values
	pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn build(self) -> Form {
		Form::with_policy(self.captions, self.values, self.errors, self.policy)
	}
}

/// Form control builder bound to submitted values and errors
///
/// A `Form` is a snapshot: captions, values and errors are copied in at
/// construction and never change afterwards.
///
/// # Examples
///
/// ```
/// use vellum_forms::Form;
/// use vellum_html::Attributes;
///
/// let form = Form::builder()
/// 	.caption("email", "E-mail address")
/// 	.value("email", "ada@example.com")
/// 	.error("email", ":field is already taken")
/// 	.build();
///
/// assert_eq!(form.label("email", Attributes::new()).to_string(), "<label>E-mail address</label>");
/// assert_eq!(
/// 	form.email("email", Attributes::new()).unwrap().to_string(),
/// 	r#"<input type="email" name="email" value="ada@example.com">"#
/// );
/// assert_eq!(form.error("email"), Some("E-mail address is already taken"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Form {
	captions: IndexMap<String, String>,
	values: IndexMap<String, Value>,
	errors: IndexMap<String, String>,
	policy: MatchPolicy,
}

impl Form {
	/// Create a form from captions, submitted values and error templates
	///
	/// Every `:field` in an error template is replaced by the field caption,
	/// or by the field name when the field has no caption.
	pub fn new(
		captions: IndexMap<String, String>,
		values: IndexMap<String, Value>,
		errors: IndexMap<String, String>,
	) -> Self {
		Self::with_policy(captions, values, errors, MatchPolicy::default())
	}

	pub fn with_policy(
		captions: IndexMap<String, String>,
		values: IndexMap<String, Value>,
		errors: IndexMap<String, String>,
		policy: MatchPolicy,
	) -> Self {
		let errors = errors
			.into_iter()
			.map(|(field, template)| {
				let caption = captions.get(&field).map_or(field.as_str(), String::as_str);
				let message = template.replace(FIELD_PLACEHOLDER, caption);
				tracing::trace!(field = %field, message = %message, "resolved form error");
				(field, message)
			})
			.collect();

		Self {
			captions,
			values,
			errors,
			policy,
		}
	}

	pub fn builder() -> FormBuilder {
		FormBuilder::new()
	}

	pub fn captions(&self) -> &IndexMap<String, String> {
		&self.captions
	}

	/// Caption of a field, defaulting to the field name
	pub fn caption<'a>(&'a self, name: &'a str) -> &'a str {
		self.captions.get(name).map_or(name, String::as_str)
	}

	pub fn values(&self) -> &IndexMap<String, Value> {
		&self.values
	}

	/// Submitted value of a field; `null` counts as absent
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name).filter(|value| !value.is_null())
	}

	pub fn errors(&self) -> &IndexMap<String, String> {
		&self.errors
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	pub fn match_policy(&self) -> MatchPolicy {
		self.policy
	}

	/// `<ul>` with one `<li>` per error, or `None` without errors
	pub fn error_list(&self, attributes: Attributes) -> Option<Element> {
		if self.errors.is_empty() {
			return None;
		}

		let items: Vec<Element> = self
			.errors
			.values()
			.map(|message| Element::new("li").with_content(message.as_str()))
			.collect();
		Some(Element::new("ul").with_attributes(attributes).with_content(items))
	}

	/// Form open tag
	pub fn open(&self, attributes: Attributes) -> String {
		Element::new("form").with_attributes(attributes).open()
	}

	/// Form close tag
	pub fn close(&self) -> String {
		Element::new("form").close()
	}

	/// `<label>` holding the field caption
	pub fn label(&self, name: &str, attributes: Attributes) -> Element {
		Element::new("label")
			.with_attributes(attributes)
			.with_content(self.caption(name))
	}

	/// `<input>` of any type
	///
	/// Starts from `type` and `name`, adds the submitted value unless the
	/// caller passed a `value` or the type withholds values, then merges the
	/// caller attributes. Types with a fixed pattern always get that pattern.
	pub fn input(
		&self,
		kind: InputType,
		name: &str,
		mut attributes: Attributes,
	) -> FormResult<Element> {
		if let Some(pattern) = kind.pattern() {
			attributes.set("pattern", pattern);
		}

		let mut input = Attributes::new()
			.with("type", kind.as_str())
			.with("name", name);
		if !attributes.contains_key("value")
			&& let Some(value) = self.value(name)
		{
			if kind.withholds_value() {
				tracing::debug!(field = name, input_type = %kind, "withholding submitted value");
			} else {
				input.set("value", scalar_text(name, value)?);
			}
		}
		input.merge(attributes);

		Ok(Element::new("input").with_attributes(input))
	}

	/// Checkbox, checked when the submitted value matches `value`
	pub fn checkbox(&self, name: &str, value: &str, attributes: Attributes) -> Element {
		self.checkable(InputType::Checkbox, name, value, attributes)
	}

	/// Radio button, checked when the submitted value matches `value`
	pub fn radio(&self, name: &str, value: &str, attributes: Attributes) -> Element {
		self.checkable(InputType::Radio, name, value, attributes)
	}

	fn checkable(
		&self,
		kind: InputType,
		name: &str,
		value: &str,
		mut attributes: Attributes,
	) -> Element {
		attributes.set("value", value);
		let candidate = Value::from(value);
		if self
			.value(name)
			.is_some_and(|stored| self.policy.checked.matches(stored, &candidate))
		{
			attributes.push_flag("checked");
		}

		let input = Attributes::new()
			.with("type", kind.as_str())
			.with("name", name)
			.merged(attributes);
		Element::new("input").with_attributes(input)
	}

	pub fn color(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Color, name, attributes)
	}

	pub fn date(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Date, name, attributes)
	}

	pub fn datetime_local(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::DatetimeLocal, name, attributes)
	}

	pub fn email(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Email, name, attributes)
	}

	/// File input; submitted values are never echoed back
	pub fn file(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::File, name, attributes)
	}

	pub fn hidden(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Hidden, name, attributes)
	}

	/// Image submit button; submitted values are never echoed back
	pub fn image(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Image, name, attributes)
	}

	pub fn month(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Month, name, attributes)
	}

	pub fn number(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Number, name, attributes)
	}

	/// Password input; submitted values are never echoed back
	pub fn password(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Password, name, attributes)
	}

	pub fn range(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Range, name, attributes)
	}

	pub fn search(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Search, name, attributes)
	}

	pub fn tel(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Tel, name, attributes)
	}

	pub fn text(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Text, name, attributes)
	}

	pub fn time(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Time, name, attributes)
	}

	pub fn url(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Url, name, attributes)
	}

	pub fn week(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		self.input(InputType::Week, name, attributes)
	}

	/// `<select>` with one option per choice
	///
	/// A `placeholder` attribute is not rendered on the select. It becomes a
	/// leading disabled, hidden option instead, selected while the field has
	/// no submitted value.
	///
	/// # Examples
	///
	/// ```
	/// use vellum_forms::Form;
	/// use vellum_html::Attributes;
	///
	/// let form = Form::builder().value("size", 2).build();
	/// let select = form.select("size", [(1, "S"), (2, "M")], Attributes::new());
	///
	/// assert_eq!(
	/// 	select.to_string(),
	/// 	r#"<select name="size"><option value="1">S</option><option value="2" selected>M</option></select>"#
	/// );
	/// ```
	pub fn select<K, L>(
		&self,
		name: &str,
		choices: impl IntoIterator<Item = (K, L)>,
		attributes: Attributes,
	) -> Element
	where
		K: Into<ChoiceKey>,
		L: Into<String>,
	{
		let stored = self.value(name);
		self.choice_list(name, choices, attributes, stored.is_none(), |key| {
			stored.is_some_and(|stored| self.policy.selected.matches(stored, key))
		})
	}

	/// `<select multiple>` selecting every choice in the submitted list
	///
	/// A submitted scalar counts as a one-element list. The `multiple` flag is
	/// added unless already present.
	pub fn multi_select<K, L>(
		&self,
		name: &str,
		choices: impl IntoIterator<Item = (K, L)>,
		mut attributes: Attributes,
	) -> Element
	where
		K: Into<ChoiceKey>,
		L: Into<String>,
	{
		let stored: &[Value] = match self.value(name) {
			None => &[],
			Some(Value::Array(items)) => items,
			Some(scalar) => std::slice::from_ref(scalar),
		};
		if !attributes.has_flag("multiple") {
			attributes.push_flag("multiple");
		}

		self.choice_list(name, choices, attributes, stored.is_empty(), |key| {
			stored
				.iter()
				.any(|item| self.policy.selected.matches(item, key))
		})
	}

	fn choice_list<K, L>(
		&self,
		name: &str,
		choices: impl IntoIterator<Item = (K, L)>,
		mut attributes: Attributes,
		nothing_stored: bool,
		is_selected: impl Fn(&Value) -> bool,
	) -> Element
	where
		K: Into<ChoiceKey>,
		L: Into<String>,
	{
		let mut options: Vec<Node> = Vec::new();
		if let Some(placeholder) = attributes.remove("placeholder") {
			let mut flags = Attributes::new();
			if nothing_stored {
				flags.push_flag("selected");
			}
			let flags = flags
				.flag("disabled")
				.flag("value")
				.with("style", "display: none;");
			options.push(self.option(Some(placeholder.as_str()), None, flags).into());
		}

		for (key, label) in choices {
			let key: ChoiceKey = key.into();
			let label: String = label.into();
			let mut flags = Attributes::new();
			if is_selected(&key.to_value()) {
				flags.push_flag("selected");
			}
			let value = key.to_string();
			options.push(
				self.option(Some(label.as_str()), Some(value.as_str()), flags)
					.into(),
			);
		}

		let attributes = Attributes::new().with("name", name).merged(attributes);
		Element::new("select")
			.with_attributes(attributes)
			.with_content(options)
	}

	/// `<option>`; the `value` attribute comes first when given
	///
	/// Without a label the option renders as an open tag only.
	pub fn option(
		&self,
		label: Option<&str>,
		value: Option<&str>,
		attributes: Attributes,
	) -> Element {
		let attributes = match value {
			Some(value) => Attributes::new().with("value", value).merged(attributes),
			None => attributes,
		};
		Element::new("option")
			.with_attributes(attributes)
			.with_optional_content(label)
	}

	/// `<textarea>` holding the submitted value as its content
	pub fn textarea(&self, name: &str, attributes: Attributes) -> FormResult<Element> {
		let content = match self.value(name) {
			Some(value) => scalar_text(name, value)?,
			None => String::new(),
		};
		let attributes = Attributes::new().with("name", name).merged(attributes);

		Ok(Element::new("textarea")
			.with_attributes(attributes)
			.with_content(content))
	}

	/// `<button type="button">`
	pub fn button(&self, label: &str, attributes: Attributes) -> Element {
		button("button", label, attributes)
	}

	/// `<button type="reset">`
	pub fn reset(&self, label: &str, attributes: Attributes) -> Element {
		button("reset", label, attributes)
	}

	/// `<button type="submit">`
	pub fn submit(&self, label: &str, attributes: Attributes) -> Element {
		button("submit", label, attributes)
	}
}

fn button(kind: &str, label: &str, mut attributes: Attributes) -> Element {
	attributes.set("type", kind);
	Element::new("button")
		.with_attributes(attributes)
		.with_content(label)
}

/// Text form of a scalar submitted value
///
/// Booleans follow form conventions: `true` is `"1"`, `false` is empty.
/// Whole floats drop their fraction, so `1.0` renders as `1`.
fn scalar_text(field: &str, value: &Value) -> FormResult<String> {
	match value {
		Value::Null => Ok(String::new()),
		Value::Bool(true) => Ok("1".to_string()),
		Value::Bool(false) => Ok(String::new()),
		Value::Number(n) => Ok(number_text(n)),
		Value::String(s) => Ok(s.clone()),
		Value::Array(_) => Err(FormError::NonScalarValue {
			field: field.to_string(),
			kind: "a list",
		}),
		Value::Object(_) => Err(FormError::NonScalarValue {
			field: field.to_string(),
			kind: "an object",
		}),
	}
}

fn number_text(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
		_ => n.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::matching::ValueMatch;
	use serde_json::json;

	fn none() -> Attributes {
		Attributes::new()
	}

	#[test]
	fn test_form_tags() {
		let form = Form::default();

		assert_eq!(form.open(none()), "<form>");
		assert_eq!(
			form.open(Attributes::from([("onsubmit", "alert('hi');")])),
			r#"<form onsubmit="alert('hi');">"#
		);
		assert_eq!(form.close(), "</form>");
	}

	#[test]
	fn test_empty_form_defaults() {
		let form = Form::default();

		assert!(form.captions().is_empty());
		assert!(form.values().is_empty());
		assert!(form.errors().is_empty());
		assert_eq!(form.caption("test"), "test");
		assert_eq!(form.value("test"), None);
		assert_eq!(form.error("test"), None);
		assert!(form.error_list(none()).is_none());
	}

	#[test]
	fn test_error_placeholder_uses_caption_or_name() {
		let form = Form::builder()
			.caption("email", "E-mail")
			.error("email", ":field is required")
			.error("age", ":field must be a number, :field!")
			.build();

		assert_eq!(form.error("email"), Some("E-mail is required"));
		assert_eq!(form.error("age"), Some("age must be a number, age!"));
	}

	#[test]
	fn test_error_substitution_happens_once() {
		let form = Form::builder()
			.caption("a", ":field")
			.error("a", "bad :field")
			.build();

		assert_eq!(form.error("a"), Some("bad :field"));
	}

	#[test]
	fn test_error_list_keeps_insertion_order() {
		let form = Form::builder()
			.error("b", "second <b>")
			.error("a", "first")
			.build();

		assert_eq!(
			form.error_list(Attributes::from([("class", "errors")]))
				.map(|list| list.to_string()),
			Some(r#"<ul class="errors"><li>second &lt;b&gt;</li><li>first</li></ul>"#.to_string())
		);
	}

	#[test]
	fn test_null_value_counts_as_absent() {
		let form = Form::builder().value("name", Value::Null).build();

		assert_eq!(form.value("name"), None);
		assert_eq!(
			form.text("name", none()).unwrap().to_string(),
			r#"<input type="text" name="name">"#
		);
	}

	#[test]
	fn test_caller_value_wins_over_stored_value() {
		let form = Form::builder().value("q", "stored").build();

		assert_eq!(
			form.search("q", Attributes::from([("value", "given")]))
				.unwrap()
				.to_string(),
			r#"<input type="search" name="q" value="given">"#
		);
	}

	#[test]
	fn test_caller_attributes_override_defaults() {
		let form = Form::default();
		let input = form
			.text("q", Attributes::new().with("type", "search").flag("required"))
			.unwrap();

		assert_eq!(input.to_string(), r#"<input type="search" name="q" required>"#);
	}

	#[test]
	fn test_fixed_pattern_overrides_caller_pattern() {
		let form = Form::default();
		let input = form
			.date("d", Attributes::from([("pattern", ".*"), ("class", "x")]))
			.unwrap();

		assert_eq!(
			input.to_string(),
			r#"<input type="date" name="d" pattern="[0-9]{4}-[0-9]{2}-[0-9]{2}" class="x">"#
		);
	}

	#[test]
	fn test_withheld_types_ignore_stored_values() {
		let form = Form::builder()
			.value("secret", "hunter2")
			.value("upload", json!({"name": "a.txt"}))
			.build();

		assert_eq!(
			form.password("secret", none()).unwrap().to_string(),
			r#"<input type="password" name="secret">"#
		);
		assert_eq!(
			form.image("secret", none()).unwrap().to_string(),
			r#"<input type="image" name="secret">"#
		);
		assert_eq!(
			form.file("upload", none()).unwrap().to_string(),
			r#"<input type="file" name="upload">"#
		);
	}

	#[test]
	fn test_non_scalar_value_is_rejected() {
		let form = Form::builder()
			.value("tags", json!(["a", "b"]))
			.value("meta", json!({"k": 1}))
			.build();

		assert_eq!(
			form.text("tags", none()).unwrap_err(),
			FormError::NonScalarValue {
				field: "tags".to_string(),
				kind: "a list"
			}
		);
		assert_eq!(
			form.textarea("meta", none()).unwrap_err().to_string(),
			"Field meta holds an object value that cannot be rendered as text"
		);
	}

	#[test]
	fn test_whole_floats_render_without_fraction() {
		let form = Form::builder()
			.value("whole", json!(1.0))
			.value("half", json!(2.5))
			.value("negative", json!(-3.0))
			.value("int", json!(42))
			.build();

		assert_eq!(
			form.number("whole", none()).unwrap().to_string(),
			r#"<input type="number" name="whole" value="1">"#
		);
		assert_eq!(
			form.number("half", none()).unwrap().attributes().get("value"),
			Some("2.5")
		);
		assert_eq!(
			form.number("negative", none()).unwrap().attributes().get("value"),
			Some("-3")
		);
		assert_eq!(
			form.number("int", none()).unwrap().attributes().get("value"),
			Some("42")
		);
	}

	#[test]
	fn test_boolean_values() {
		let form = Form::builder()
			.value("yes", true)
			.value("no", false)
			.build();

		assert_eq!(
			form.hidden("yes", none()).unwrap().to_string(),
			r#"<input type="hidden" name="yes" value="1">"#
		);
		assert_eq!(
			form.hidden("no", none()).unwrap().to_string(),
			r#"<input type="hidden" name="no" value="">"#
		);
	}

	#[test]
	fn test_checkbox_loose_match() {
		let form = Form::builder().value("count", 1).build();

		assert_eq!(
			form.checkbox("count", "1", none()).to_string(),
			r#"<input type="checkbox" name="count" value="1" checked>"#
		);
		assert_eq!(
			form.radio("count", "01.0", none()).to_string(),
			r#"<input type="radio" name="count" value="01.0" checked>"#
		);
	}

	#[test]
	fn test_checkbox_strict_match() {
		let form = Form::builder()
			.value("count", 1)
			.match_policy(MatchPolicy::uniform(ValueMatch::Strict))
			.build();

		assert_eq!(
			form.checkbox("count", "1", none()).to_string(),
			r#"<input type="checkbox" name="count" value="1">"#
		);
	}

	#[test]
	fn test_checkbox_value_overrides_caller_value() {
		let form = Form::default();
		let checkbox = form.checkbox("agree", "yes", Attributes::from([("value", "no")]));

		assert_eq!(
			checkbox.to_string(),
			r#"<input type="checkbox" name="agree" value="yes">"#
		);
	}

	#[test]
	fn test_select_strict_by_default() {
		let form = Form::builder().value("n", "2").build();
		let select = form.select("n", [(1, "one"), (2, "two")], none());

		assert_eq!(
			select.to_string(),
			r#"<select name="n"><option value="1">one</option><option value="2">two</option></select>"#
		);
	}

	#[test]
	fn test_select_loose_policy() {
		let form = Form::builder()
			.value("n", "2")
			.match_policy(MatchPolicy::uniform(ValueMatch::Loose))
			.build();
		let select = form.select("n", [(1, "one"), (2, "two")], none());

		assert!(select.to_string().contains(r#"<option value="2" selected>two</option>"#));
	}

	#[test]
	fn test_select_placeholder_without_value() {
		let form = Form::default();
		let select = form.select(
			"c",
			[("nl", "Netherlands"), ("be", "Belgium")],
			Attributes::from([("placeholder", "Choose..."), ("class", "pick")]),
		);

		assert_eq!(
			select.to_string(),
			concat!(
				r#"<select name="c" class="pick">"#,
				r#"<option selected disabled value style="display: none;">Choose...</option>"#,
				r#"<option value="nl">Netherlands</option>"#,
				r#"<option value="be">Belgium</option>"#,
				"</select>"
			)
		);
	}

	#[test]
	fn test_select_placeholder_with_value() {
		let form = Form::builder().value("c", "be").build();
		let select = form.select(
			"c",
			[("nl", "Netherlands"), ("be", "Belgium")],
			Attributes::from([("placeholder", "Choose...")]),
		);

		assert_eq!(
			select.to_string(),
			concat!(
				r#"<select name="c">"#,
				r#"<option disabled value style="display: none;">Choose...</option>"#,
				r#"<option value="nl">Netherlands</option>"#,
				r#"<option value="be" selected>Belgium</option>"#,
				"</select>"
			)
		);
	}

	#[test]
	fn test_multi_select() {
		let form = Form::builder().value("tags", json!([1, 3])).build();
		let select = form.multi_select("tags", [(1, "a"), (2, "b"), (3, "c")], none());

		assert_eq!(
			select.to_string(),
			concat!(
				r#"<select name="tags" multiple>"#,
				r#"<option value="1" selected>a</option>"#,
				r#"<option value="2">b</option>"#,
				r#"<option value="3" selected>c</option>"#,
				"</select>"
			)
		);
	}

	#[test]
	fn test_multi_select_keeps_existing_multiple_flag() {
		let form = Form::default();
		let select = form.multi_select(
			"tags",
			[("x", "X")],
			Attributes::new().flag("multiple").with("placeholder", "Any"),
		);

		assert_eq!(
			select.to_string(),
			concat!(
				r#"<select name="tags" multiple>"#,
				r#"<option selected disabled value style="display: none;">Any</option>"#,
				r#"<option value="x">X</option>"#,
				"</select>"
			)
		);
	}

	#[test]
	fn test_multi_select_adds_flag_despite_multiple_values() {
		let form = Form::default();
		let select = form.multi_select(
			"tags",
			[("a", "A")],
			Attributes::from([("class", "multiple"), ("data-mode", "multiple")]),
		);

		assert_eq!(
			select.to_string(),
			concat!(
				r#"<select name="tags" class="multiple" data-mode="multiple" multiple>"#,
				r#"<option value="a">A</option>"#,
				"</select>"
			)
		);
	}

	#[test]
	fn test_multi_select_scalar_value() {
		let form = Form::builder().value("tags", "x").build();
		let select = form.multi_select("tags", [("x", "X"), ("y", "Y")], none());

		assert!(select.to_string().contains(r#"<option value="x" selected>X</option>"#));
		assert!(select.to_string().contains(r#"<option value="y">Y</option>"#));
	}

	#[test]
	fn test_option() {
		let form = Form::default();

		assert_eq!(form.option(None, None, none()).to_string(), "<option>");
		assert_eq!(
			form.option(Some("One"), Some("1"), Attributes::new().flag("selected"))
				.to_string(),
			r#"<option value="1" selected>One</option>"#
		);
		assert_eq!(
			form.option(Some("One"), Some("1"), Attributes::from([("value", "2")]))
				.to_string(),
			r#"<option value="2">One</option>"#
		);
	}

	#[test]
	fn test_textarea() {
		let form = Form::builder().value("bio", "<b>hi</b> & \"bye\"").build();

		assert_eq!(
			form.textarea("bio", Attributes::from([("rows", "3")]))
				.unwrap()
				.to_string(),
			r#"<textarea name="bio" rows="3">&lt;b&gt;hi&lt;/b&gt; &amp; "bye"</textarea>"#
		);
		assert_eq!(
			form.textarea("other", none()).unwrap().to_string(),
			r#"<textarea name="other"></textarea>"#
		);
	}

	#[test]
	fn test_buttons_force_type() {
		let form = Form::default();

		assert_eq!(
			form.submit("Save", Attributes::from([("type", "button"), ("class", "primary")]))
				.to_string(),
			r#"<button type="submit" class="primary">Save</button>"#
		);
		assert_eq!(
			form.reset("Undo", Attributes::from([("class", "link")]))
				.to_string(),
			r#"<button class="link" type="reset">Undo</button>"#
		);
	}
}
