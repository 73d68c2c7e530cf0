//! Field trait and widgets
//!
//! Fields describe what a form collects; widgets turn a bound value into the
//! control markup. Validation is the host application's business: a form only
//! carries the errors it is given.

use serde_json::Value;
use uni_form_templates::escape_html;

/// Widget used to render a field's control
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
	TextInput,
	PasswordInput,
	EmailInput,
	TextArea,
	CheckboxInput,
	HiddenInput,
	FileInput,
	/// `(value, label)` pairs in display order
	Select { choices: Vec<(String, String)> },
}

impl Widget {
	/// The `type` attribute for `<input>`-based widgets
	pub fn input_type(&self) -> Option<&'static str> {
		match self {
			Widget::TextInput => Some("text"),
			Widget::PasswordInput => Some("password"),
			Widget::EmailInput => Some("email"),
			Widget::CheckboxInput => Some("checkbox"),
			Widget::HiddenInput => Some("hidden"),
			Widget::FileInput => Some("file"),
			Widget::TextArea | Widget::Select { .. } => None,
		}
	}

	pub fn is_hidden(&self) -> bool {
		matches!(self, Widget::HiddenInput)
	}

	/// Whether a form containing this widget must be submitted as
	/// `multipart/form-data`
	pub fn needs_multipart_form(&self) -> bool {
		matches!(self, Widget::FileInput)
	}

	/// Render the control markup
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use uni_form_forms::Widget;
	///
	/// let html = Widget::TextInput.render("email", "id_email", Some(&json!("a@b.c")), &[]);
	/// assert_eq!(html, r#"<input type="text" name="email" id="id_email" value="a@b.c" />"#);
	///
	/// let html = Widget::CheckboxInput.render("is_company", "id_is_company", None, &[]);
	/// assert_eq!(html, r#"<input type="checkbox" name="is_company" id="id_is_company" />"#);
	/// ```
	pub fn render(
		&self,
		name: &str,
		id: &str,
		value: Option<&Value>,
		attrs: &[(String, String)],
	) -> String {
		let extra = render_attrs(attrs);
		let name = escape_html(name);
		let id = escape_html(id);
		match self {
			Widget::TextArea => format!(
				r#"<textarea name="{}" id="{}" rows="10" cols="40"{}>{}</textarea>"#,
				name,
				id,
				extra,
				value.map(value_text).map(|v| escape_html(&v)).unwrap_or_default()
			),
			Widget::Select { choices } => {
				let selected = value.map(value_text);
				let mut html = format!(r#"<select name="{}" id="{}"{}>"#, name, id, extra);
				for (choice_value, label) in choices {
					let is_selected = selected.as_deref() == Some(choice_value.as_str());
					html.push_str(&format!(
						r#"<option value="{}"{}>{}</option>"#,
						escape_html(choice_value),
						if is_selected {
							r#" selected="selected""#
						} else {
							""
						},
						escape_html(label)
					));
				}
				html.push_str("</select>");
				html
			}
			Widget::CheckboxInput => {
				let checked = value.is_some_and(is_checked);
				format!(
					r#"<input type="checkbox" name="{}" id="{}"{}{} />"#,
					name,
					id,
					if checked { r#" checked="checked""# } else { "" },
					extra
				)
			}
			// Passwords and files are never echoed back
			Widget::PasswordInput | Widget::FileInput => format!(
				r#"<input type="{}" name="{}" id="{}"{} />"#,
				self.input_type().unwrap_or("text"),
				name,
				id,
				extra
			),
			Widget::TextInput | Widget::EmailInput | Widget::HiddenInput => {
				let value_attr = value
					.map(value_text)
					.filter(|v| !v.is_empty())
					.map(|v| format!(r#" value="{}""#, escape_html(&v)))
					.unwrap_or_default();
				format!(
					r#"<input type="{}" name="{}" id="{}"{}{} />"#,
					self.input_type().unwrap_or("text"),
					name,
					id,
					value_attr,
					extra
				)
			}
		}
	}
}

fn render_attrs(attrs: &[(String, String)]) -> String {
	attrs
		.iter()
		.map(|(k, v)| format!(r#" {}="{}""#, escape_html(k), escape_html(v)))
		.collect()
}

fn value_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn is_checked(value: &Value) -> bool {
	match value {
		Value::Bool(b) => *b,
		Value::String(s) => !s.is_empty() && s != "false",
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::Null => false,
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

/// A field declared on a form
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;
	fn label(&self) -> Option<&str>;
	fn required(&self) -> bool;
	fn help_text(&self) -> Option<&str>;
	fn widget(&self) -> &Widget;
	fn initial(&self) -> Option<&Value>;

	/// Extra attributes rendered on the widget, e.g. `maxlength`
	fn widget_attrs(&self) -> Vec<(String, String)> {
		Vec::new()
	}
}
