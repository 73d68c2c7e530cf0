//! Choice field rendered as a select box

use crate::field::{FormField, Widget};

#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
}

impl ChoiceField {
	/// Create a ChoiceField from `(value, label)` pairs
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{ChoiceField, Widget};
	///
	/// let field = ChoiceField::new(
	///     "country".to_string(),
	///     vec![("jp".to_string(), "Japan".to_string())],
	/// );
	/// assert!(matches!(field.widget, Widget::Select { ref choices } if choices.len() == 1));
	/// ```
	pub fn new(name: String, choices: Vec<(String, String)>) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::Select { choices },
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
	pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
		self.initial = Some(serde_json::json!(initial.into()));
		self
	}
}

impl FormField for ChoiceField {
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
