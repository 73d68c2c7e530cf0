use crate::field::{FormField, Widget};

/// BoundField represents a field bound to a form's data, errors and prefix
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	data: Option<&'a serde_json::Value>,
	errors: &'a [String],
	prefix: &'a str,
}

impl<'a> BoundField<'a> {
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BoundField, CharField, FormField};
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("name".to_string()));
	/// let data = serde_json::json!("John");
	///
	/// let bound = BoundField::new(field.as_ref(), Some(&data), &[], "");
	/// assert_eq!(bound.name(), "name");
	/// assert_eq!(bound.value(), Some(&data));
	/// ```
	pub fn new(
		field: &'a dyn FormField,
		data: Option<&'a serde_json::Value>,
		errors: &'a [String],
		prefix: &'a str,
	) -> Self {
		Self {
			field,
			data,
			errors,
			prefix,
		}
	}
	pub fn name(&self) -> &str {
		self.field.name()
	}
	/// Get the HTML name attribute (with prefix)
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BoundField, CharField, FormField};
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("email".to_string()));
	///
	/// let bound = BoundField::new(field.as_ref(), None, &[], "");
	/// assert_eq!(bound.html_name(), "email");
	///
	/// let bound_prefixed = BoundField::new(field.as_ref(), None, &[], "form-0");
	/// assert_eq!(bound_prefixed.html_name(), "form-0-email");
	/// ```
	pub fn html_name(&self) -> String {
		if self.prefix.is_empty() {
			self.field.name().to_string()
		} else {
			format!("{}-{}", self.prefix, self.field.name())
		}
	}
	/// The element id used for the widget and as the label anchor
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BoundField, CharField, FormField};
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("is_company".to_string()));
	/// let bound = BoundField::new(field.as_ref(), None, &[], "form-1");
	///
	/// assert_eq!(bound.auto_id(), "id_form-1-is_company");
	/// ```
	pub fn auto_id(&self) -> String {
		format!("id_{}", self.html_name())
	}
	/// Display label: the declared label, or the field name made readable
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BoundField, CharField, FormField};
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("first_name".to_string()));
	/// let bound = BoundField::new(field.as_ref(), None, &[], "");
	/// assert_eq!(bound.label(), "First name");
	/// ```
	pub fn label(&self) -> String {
		match self.field.label() {
			Some(label) => label.to_string(),
			None => pretty_name(self.field.name()),
		}
	}
	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data.or_else(|| self.field.initial())
	}
	pub fn errors(&self) -> &[String] {
		self.errors
	}
	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}
	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}
	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}
	pub fn is_required(&self) -> bool {
		self.field.required()
	}
	pub fn is_hidden(&self) -> bool {
		self.field.widget().is_hidden()
	}
	/// Render the widget markup for this field
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BoundField, CharField, FormField};
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("email".to_string()).with_max_length(30));
	/// let bound = BoundField::new(field.as_ref(), None, &[], "");
	///
	/// assert_eq!(
	///     bound.as_widget(),
	///     r#"<input type="text" name="email" id="id_email" maxlength="30" />"#
	/// );
	/// ```
	pub fn as_widget(&self) -> String {
		self.field.widget().render(
			&self.html_name(),
			&self.auto_id(),
			self.value(),
			&self.field.widget_attrs(),
		)
	}
}

fn pretty_name(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
