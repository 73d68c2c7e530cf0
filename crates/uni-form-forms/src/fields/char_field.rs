//! Character field for text input

use crate::field::{FormField, Widget};

/// Character field rendered as a text-like input
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string());
	/// assert_eq!(field.name, "username");
	/// assert!(!field.required);
	/// assert_eq!(field.max_length, None);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
		}
	}
	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
	/// Set the maximum length, rendered as the `maxlength` attribute
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).with_max_length(30);
	/// assert_eq!(field.max_length, Some(30));
	/// ```
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}
	/// Set the label for the field
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::fields::CharField;
	///
	/// let field = CharField::new("email".to_string()).with_label("email");
	/// assert_eq!(field.label, Some("email".to_string()));
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
	pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
		self.initial = Some(serde_json::json!(initial.into()));
		self
	}
	/// Set the widget for the field
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Widget};
	///
	/// let field = CharField::new("password1".to_string()).with_widget(Widget::PasswordInput);
	/// assert_eq!(field.widget, Widget::PasswordInput);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}
}

impl FormField for CharField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn widget_attrs(&self) -> Vec<(String, String)> {
		match (self.max_length, &self.widget) {
			(Some(max), Widget::TextInput | Widget::PasswordInput | Widget::EmailInput) => {
				vec![("maxlength".to_string(), max.to_string())]
			}
			_ => Vec::new(),
		}
	}
}
