//! Form helpers
//!
//! A [`FormHelper`] carries everything about a rendered `<form>` that is not
//! part of the form itself: its id, classes, method and action, the buttons
//! shown under the fields, an optional [`Layout`] and the set of fields that
//! the jquery directive turns into click-to-edit fields.

use crate::error::UniFormResult;
use crate::input::Input;
use crate::layout::Layout;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uni_form_forms::Form;
use uni_form_templates::TemplateRenderer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormHelpersError {
	#[error("Only GET and POST are valid in the form_method helper attribute, got '{0}'")]
	InvalidMethod(String),
}

/// HTTP method of the rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
	Get,
	#[default]
	Post,
}

impl FormMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			FormMethod::Get => "GET",
			FormMethod::Post => "POST",
		}
	}
}

impl fmt::Display for FormMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FormMethod {
	type Err = FormHelpersError;

	/// # Examples
	///
	/// ```
	/// use uni_form_tags::FormMethod;
	///
	/// assert_eq!("get".parse::<FormMethod>().unwrap(), FormMethod::Get);
	/// assert_eq!(" POST ".parse::<FormMethod>().unwrap(), FormMethod::Post);
	/// assert!("put".parse::<FormMethod>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"get" => Ok(FormMethod::Get),
			"post" => Ok(FormMethod::Post),
			_ => Err(FormHelpersError::InvalidMethod(s.to_string())),
		}
	}
}

/// Field identifiers (`auto_id`) rendered as toggle fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggle {
	fields: BTreeSet<String>,
}

impl Toggle {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn add_field(&mut self, field: impl Into<String>) {
		self.fields.insert(field.into());
	}
	pub fn fields(&self) -> &BTreeSet<String> {
		&self.fields
	}
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains(field)
	}
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

/// Attributes a helper (or a parsed attribute string) hands to the templates
///
/// Unset attributes are `None` and are left out of the serialized `attrs`
/// mapping; the directives apply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HelperAttributes {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub form_method: Option<FormMethod>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub form_action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub class: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub inputs: Vec<Input>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub toggle_fields: Option<BTreeSet<String>>,
	/// Keys with no meaning to the directives, kept verbatim
	#[serde(flatten)]
	pub extra: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct FormHelper {
	pub form_id: String,
	pub form_class: String,
	pub form_action: String,
	pub form_method: FormMethod,
	pub toggle: Toggle,
	inputs: Vec<Input>,
	layout: Option<Layout>,
}

impl FormHelper {
	/// # Examples
	///
	/// ```
	/// use uni_form_tags::{FormHelper, FormMethod};
	///
	/// let helper = FormHelper::new();
	/// assert_eq!(helper.form_method, FormMethod::Post);
	/// assert!(helper.inputs().is_empty());
	/// assert!(helper.layout().is_none());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
		self.form_id = form_id.into();
		self
	}
	pub fn with_form_class(mut self, form_class: impl Into<String>) -> Self {
		self.form_class = form_class.into();
		self
	}
	pub fn with_form_action(mut self, form_action: impl Into<String>) -> Self {
		self.form_action = form_action.into();
		self
	}
	pub fn with_form_method(mut self, form_method: FormMethod) -> Self {
		self.form_method = form_method;
		self
	}
	/// Set the method from its textual form
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_tags::{FormHelper, FormHelpersError, FormMethod};
	///
	/// let mut helper = FormHelper::new();
	/// helper.set_form_method("get").unwrap();
	/// assert_eq!(helper.form_method, FormMethod::Get);
	///
	/// assert_eq!(
	///     helper.set_form_method("DELETE"),
	///     Err(FormHelpersError::InvalidMethod("DELETE".to_string()))
	/// );
	/// assert_eq!(helper.form_method, FormMethod::Get);
	/// ```
	pub fn set_form_method(&mut self, method: &str) -> Result<(), FormHelpersError> {
		self.form_method = method.parse()?;
		Ok(())
	}
	/// Append an input; inputs render in insertion order
	pub fn add_input(&mut self, input: Input) {
		self.inputs.push(input);
	}
	pub fn inputs(&self) -> &[Input] {
		&self.inputs
	}
	/// Attach a layout, replacing any previous one
	pub fn add_layout(&mut self, layout: Layout) {
		self.layout = Some(layout);
	}
	pub fn layout(&self) -> Option<&Layout> {
		self.layout.as_ref()
	}
	pub fn has_layout(&self) -> bool {
		self.layout.is_some()
	}
	/// Mark a field (by `auto_id`) as a toggle field
	pub fn toggle_field(&mut self, auto_id: impl Into<String>) {
		self.toggle.add_field(auto_id);
	}
	/// Attributes for the templates; empty strings count as unset
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_tags::{FormHelper, FormMethod};
	///
	/// let attrs = FormHelper::new().with_form_id("this-form-rocks").get_attr();
	/// assert_eq!(attrs.id.as_deref(), Some("this-form-rocks"));
	/// assert_eq!(attrs.class, None);
	/// assert_eq!(attrs.form_method, Some(FormMethod::Post));
	/// assert_eq!(attrs.toggle_fields, None);
	/// ```
	pub fn get_attr(&self) -> HelperAttributes {
		HelperAttributes {
			form_method: Some(self.form_method),
			form_action: non_empty(&self.form_action),
			id: non_empty(&self.form_id),
			class: non_empty(&self.form_class),
			inputs: self.inputs.clone(),
			toggle_fields: (!self.toggle.is_empty()).then(|| self.toggle.fields().clone()),
			extra: IndexMap::new(),
		}
	}
	/// Render the attached layout against `form`; empty without a layout
	pub fn render_layout(
		&self,
		form: &Form,
		renderer: &dyn TemplateRenderer,
	) -> UniFormResult<String> {
		match &self.layout {
			Some(layout) => layout.render(form, renderer),
			None => Ok(String::new()),
		}
	}
}

fn non_empty(value: &str) -> Option<String> {
	let value = value.trim();
	(!value.is_empty()).then(|| value.to_string())
}
