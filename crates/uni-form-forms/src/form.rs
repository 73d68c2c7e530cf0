use crate::bound_field::BoundField;
use crate::field::FormField;
use std::collections::HashMap;

/// Special key for form-level (non-field-specific) errors.
pub const ALL_FIELDS_KEY: &str = "_all";

/// An ordered collection of fields together with bound data and errors
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	initial: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
	prefix: String,
	form_html: Option<String>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::with_prefix(String::new())
	}
	/// Create a new form with a field prefix
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::Form;
	///
	/// let form = Form::with_prefix("user".to_string());
	/// assert_eq!(form.prefix(), "user");
	/// assert_eq!(form.add_prefix("email"), "user-email");
	/// ```
	pub fn with_prefix(prefix: String) -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			initial: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
			prefix,
			form_html: None,
		}
	}
	/// Create a new form with initial data
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use serde_json::json;
	/// use uni_form_forms::Form;
	///
	/// let mut initial = HashMap::new();
	/// initial.insert("name".to_string(), json!("John"));
	///
	/// let form = Form::with_initial(initial);
	/// assert_eq!(form.initial().get("name"), Some(&json!("John")));
	/// ```
	pub fn with_initial(initial: HashMap<String, serde_json::Value>) -> Self {
		let mut form = Self::new();
		form.initial = initial;
		form
	}
	/// Add a field to the form; fields render in the order they were added
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Form};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("username".to_string())));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}
	/// Builder-style variant of [`Form::add_field`]
	pub fn field(mut self, field: impl FormField + 'static) -> Self {
		self.fields.push(Box::new(field));
		self
	}
	/// Bind submitted data
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use serde_json::json;
	/// use uni_form_forms::Form;
	///
	/// let mut form = Form::new();
	/// let mut data = HashMap::new();
	/// data.insert("username".to_string(), json!("john"));
	///
	/// form.bind(data);
	/// assert!(form.is_bound());
	/// ```
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}
	/// Attach an error message to a field, or to the form itself with
	/// [`ALL_FIELDS_KEY`]
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{ALL_FIELDS_KEY, Form};
	///
	/// let mut form = Form::new();
	/// form.add_error("email", "Enter a valid email address.");
	/// form.add_error(ALL_FIELDS_KEY, "Passwords do not match.");
	///
	/// assert_eq!(form.errors()["email"], vec!["Enter a valid email address."]);
	/// assert_eq!(form.non_field_errors(), ["Passwords do not match."]);
	/// ```
	pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
		self.errors
			.entry(field.to_string())
			.or_default()
			.push(message.into());
	}
	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}
	pub fn has_errors(&self) -> bool {
		self.errors.values().any(|messages| !messages.is_empty())
	}
	pub fn non_field_errors(&self) -> &[String] {
		self.errors
			.get(ALL_FIELDS_KEY)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}
	pub fn is_bound(&self) -> bool {
		self.is_bound
	}
	pub fn data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}
	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}
	pub fn initial(&self) -> &HashMap<String, serde_json::Value> {
		&self.initial
	}
	pub fn set_initial(&mut self, initial: HashMap<String, serde_json::Value>) {
		self.initial = initial;
	}
	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}
	pub fn field_count(&self) -> usize {
		self.fields.len()
	}
	pub fn prefix(&self) -> &str {
		&self.prefix
	}
	pub fn set_prefix(&mut self, prefix: String) {
		self.prefix = prefix;
	}
	pub fn add_prefix(&self, field_name: &str) -> String {
		if self.prefix.is_empty() {
			field_name.to_string()
		} else {
			format!("{}-{}", self.prefix, field_name)
		}
	}
	/// Whether the form must be submitted as `multipart/form-data`
	pub fn is_multipart(&self) -> bool {
		self.fields.iter().any(|f| f.widget().needs_multipart_form())
	}
	/// Bind a single field by name
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Form};
	///
	/// let form = Form::with_prefix("form-0".to_string())
	///     .field(CharField::new("email".to_string()));
	///
	/// let bound = form.get_bound_field("email").unwrap();
	/// assert_eq!(bound.auto_id(), "id_form-0-email");
	/// assert!(form.get_bound_field("missing").is_none());
	/// ```
	pub fn get_bound_field<'a>(&'a self, name: &str) -> Option<BoundField<'a>> {
		self.get_field(name).map(|field| self.bind_field(field))
	}
	/// Every field bound to this form, in declaration order
	pub fn bound_fields(&self) -> impl Iterator<Item = BoundField<'_>> {
		self.fields.iter().map(|f| self.bind_field(f.as_ref()))
	}
	fn bind_field<'a>(&'a self, field: &'a dyn FormField) -> BoundField<'a> {
		let data = if self.is_bound {
			self.data.get(field.name())
		} else {
			self.initial.get(field.name())
		};
		let errors = self
			.errors
			.get(field.name())
			.map(Vec::as_slice)
			.unwrap_or(&[]);
		BoundField::new(field, data, errors, &self.prefix)
	}
	/// Markup produced for this form by a layout during a formset render
	pub fn form_html(&self) -> Option<&str> {
		self.form_html.as_deref()
	}
	pub fn set_form_html(&mut self, html: String) {
		self.form_html = Some(html);
	}
	pub fn clear_form_html(&mut self) {
		self.form_html = None;
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Form {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Form")
			.field(
				"fields",
				&self.fields.iter().map(|f| f.name()).collect::<Vec<_>>(),
			)
			.field("prefix", &self.prefix)
			.field("is_bound", &self.is_bound)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::Widget;
	use crate::fields::{BooleanField, CharField};
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn signup_form() -> Form {
		Form::new()
			.field(BooleanField::new("is_company".to_string()).with_label("company"))
			.field(CharField::new("email".to_string()).required())
			.field(CharField::new("first_name".to_string()))
	}

	#[rstest]
	fn test_bound_fields_keep_declaration_order(signup_form: Form) {
		let names: Vec<String> = signup_form
			.bound_fields()
			.map(|f| f.name().to_string())
			.collect();

		assert_eq!(names, vec!["is_company", "email", "first_name"]);
	}

	#[rstest]
	fn test_unbound_form_uses_initial(mut signup_form: Form) {
		let mut initial = HashMap::new();
		initial.insert("email".to_string(), json!("me@example.com"));
		signup_form.set_initial(initial);

		let bound = signup_form.get_bound_field("email").unwrap();

		assert_eq!(bound.value(), Some(&json!("me@example.com")));
	}

	#[rstest]
	fn test_bound_form_ignores_initial(mut signup_form: Form) {
		let mut initial = HashMap::new();
		initial.insert("email".to_string(), json!("me@example.com"));
		signup_form.set_initial(initial);
		signup_form.bind(HashMap::new());

		let bound = signup_form.get_bound_field("email").unwrap();

		assert_eq!(bound.value(), None);
	}

	#[rstest]
	fn test_field_errors_reach_bound_field(mut signup_form: Form) {
		signup_form.add_error("email", "This field is required.");

		let bound = signup_form.get_bound_field("email").unwrap();

		assert!(signup_form.has_errors());
		assert_eq!(bound.errors(), ["This field is required."]);
		assert!(signup_form.non_field_errors().is_empty());
	}

	#[rstest]
	fn test_multipart_detection(signup_form: Form) {
		assert!(!signup_form.is_multipart());

		let upload = signup_form.field(CharField::new("cv".to_string()).with_widget(Widget::FileInput));

		assert!(upload.is_multipart());
	}

	#[rstest]
	fn test_form_html_slot(mut signup_form: Form) {
		assert_eq!(signup_form.form_html(), None);

		signup_form.set_form_html("<fieldset></fieldset>".to_string());
		assert_eq!(signup_form.form_html(), Some("<fieldset></fieldset>"));

		signup_form.clear_form_html();
		assert_eq!(signup_form.form_html(), None);
	}
}
