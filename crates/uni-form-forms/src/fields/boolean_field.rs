//! Boolean field rendered as a checkbox

use crate::field::{FormField, Widget};

#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
}

impl BooleanField {
	/// Create a new optional BooleanField
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{BooleanField, Widget};
	///
	/// let field = BooleanField::new("is_company".to_string());
	/// assert_eq!(field.widget, Widget::CheckboxInput);
	/// assert!(!field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::CheckboxInput,
			initial: None,
		}
	}
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
	pub fn with_initial(mut self, initial: bool) -> Self {
		self.initial = Some(serde_json::Value::Bool(initial));
		self
	}
}

impl FormField for BooleanField {
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
}
