//! Page rendering context
//!
//! Directives name their arguments; a [`TemplateContext`] resolves those
//! names to forms, formsets, helpers and plain text values.

use crate::error::{UniFormError, UniFormResult};
use crate::helper::FormHelper;
use std::collections::HashMap;
use uni_form_forms::{BoundField, Form, FormSet};

/// A value stored under a name in the page context
#[derive(Debug)]
pub enum ContextValue {
	Form(Form),
	FormSet(FormSet),
	Helper(FormHelper),
	Text(String),
}

impl ContextValue {
	/// Human readable kind, used in type mismatch errors
	pub fn kind(&self) -> &'static str {
		match self {
			ContextValue::Form(_) => "form",
			ContextValue::FormSet(_) => "formset",
			ContextValue::Helper(_) => "helper",
			ContextValue::Text(_) => "text",
		}
	}
}

impl From<Form> for ContextValue {
	fn from(form: Form) -> Self {
		ContextValue::Form(form)
	}
}

impl From<FormSet> for ContextValue {
	fn from(formset: FormSet) -> Self {
		ContextValue::FormSet(formset)
	}
}

impl From<FormHelper> for ContextValue {
	fn from(helper: FormHelper) -> Self {
		ContextValue::Helper(helper)
	}
}

impl From<String> for ContextValue {
	fn from(text: String) -> Self {
		ContextValue::Text(text)
	}
}

impl From<&str> for ContextValue {
	fn from(text: &str) -> Self {
		ContextValue::Text(text.to_string())
	}
}

/// Named values visible to the directives of one page render
///
/// # Examples
///
/// ```
/// use uni_form_forms::{CharField, Form};
/// use uni_form_tags::{FormHelper, TemplateContext, UniFormError};
///
/// let mut context = TemplateContext::new();
/// context.insert("form", Form::new().field(CharField::new("email".to_string())));
/// context.insert("helper", FormHelper::new());
///
/// assert!(context.form("form").is_ok());
/// assert!(matches!(
///     context.form("helper"),
///     Err(UniFormError::UnexpectedVariableType { .. })
/// ));
/// assert!(matches!(
///     context.form("missing"),
///     Err(UniFormError::VariableDoesNotExist(_))
/// ));
/// ```
#[derive(Debug, Default)]
pub struct TemplateContext {
	values: HashMap<String, ContextValue>,
}

impl TemplateContext {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ContextValue>) {
		self.values.insert(name.into(), value.into());
	}
	pub fn remove(&mut self, name: &str) -> Option<ContextValue> {
		self.values.remove(name)
	}
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}
	pub fn get(&self, name: &str) -> Option<&ContextValue> {
		self.values.get(name)
	}
	/// Look a name up, failing when it is not defined
	pub fn resolve(&self, name: &str) -> UniFormResult<&ContextValue> {
		self.values
			.get(name)
			.ok_or_else(|| UniFormError::VariableDoesNotExist(name.to_string()))
	}
	fn resolve_mut(&mut self, name: &str) -> UniFormResult<&mut ContextValue> {
		self.values
			.get_mut(name)
			.ok_or_else(|| UniFormError::VariableDoesNotExist(name.to_string()))
	}
	pub fn form(&self, name: &str) -> UniFormResult<&Form> {
		match self.resolve(name)? {
			ContextValue::Form(form) => Ok(form),
			_ => Err(unexpected(name, "form")),
		}
	}
	pub fn form_mut(&mut self, name: &str) -> UniFormResult<&mut Form> {
		match self.resolve_mut(name)? {
			ContextValue::Form(form) => Ok(form),
			_ => Err(unexpected(name, "form")),
		}
	}
	pub fn formset(&self, name: &str) -> UniFormResult<&FormSet> {
		match self.resolve(name)? {
			ContextValue::FormSet(formset) => Ok(formset),
			_ => Err(unexpected(name, "formset")),
		}
	}
	pub fn formset_mut(&mut self, name: &str) -> UniFormResult<&mut FormSet> {
		match self.resolve_mut(name)? {
			ContextValue::FormSet(formset) => Ok(formset),
			_ => Err(unexpected(name, "formset")),
		}
	}
	pub fn helper(&self, name: &str) -> UniFormResult<&FormHelper> {
		match self.resolve(name)? {
			ContextValue::Helper(helper) => Ok(helper),
			_ => Err(unexpected(name, "helper")),
		}
	}
	pub fn text(&self, name: &str) -> UniFormResult<&str> {
		match self.resolve(name)? {
			ContextValue::Text(text) => Ok(text),
			_ => Err(unexpected(name, "text")),
		}
	}
	/// Every text value with its name, in no particular order
	pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().filter_map(|(name, value)| match value {
			ContextValue::Text(text) => Some((name.as_str(), text.as_str())),
			_ => None,
		})
	}
	/// Resolve a `form.field` path to a bound field
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Form};
	/// use uni_form_tags::TemplateContext;
	///
	/// let mut context = TemplateContext::new();
	/// context.insert("form", Form::new().field(CharField::new("email".to_string())));
	///
	/// assert_eq!(context.bound_field("form.email").unwrap().auto_id(), "id_email");
	/// assert!(context.bound_field("form.phone").is_err());
	/// assert!(context.bound_field("form").is_err());
	/// ```
	pub fn bound_field(&self, path: &str) -> UniFormResult<BoundField<'_>> {
		let (form_name, field_name) = path
			.split_once('.')
			.ok_or_else(|| unexpected(path, "field"))?;
		self.form(form_name)?
			.get_bound_field(field_name)
			.ok_or_else(|| UniFormError::VariableDoesNotExist(path.to_string()))
	}
}

fn unexpected(name: &str, expected: &'static str) -> UniFormError {
	UniFormError::UnexpectedVariableType {
		name: name.to_string(),
		expected,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use uni_form_forms::{CharField, formset_factory};

	fn email_form() -> Form {
		Form::new().field(CharField::new("email".to_string()))
	}

	#[fixture]
	fn context() -> TemplateContext {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());
		context.insert("formset", formset_factory(email_form, 2));
		context.insert("helper", FormHelper::new().with_form_id("signup"));
		context.insert("MEDIA_URL", "/static/");
		context
	}

	#[rstest]
	fn test_resolves_each_kind(context: TemplateContext) {
		assert_eq!(context.form("form").unwrap().field_count(), 1);
		assert_eq!(context.formset("formset").unwrap().total_form_count(), 2);
		assert_eq!(context.helper("helper").unwrap().form_id, "signup");
		assert_eq!(context.text("MEDIA_URL").unwrap(), "/static/");
	}

	#[rstest]
	#[case("form", "formset")]
	#[case("formset", "helper")]
	#[case("helper", "form")]
	fn test_wrong_kind(context: TemplateContext, #[case] name: &str, #[case] expected: &str) {
		let err = match expected {
			"formset" => context.formset(name).map(|_| ()).unwrap_err(),
			"helper" => context.helper(name).map(|_| ()).unwrap_err(),
			_ => context.form(name).map(|_| ()).unwrap_err(),
		};

		match err {
			UniFormError::UnexpectedVariableType {
				name: got,
				expected: kind,
			} => {
				assert_eq!(got, name);
				assert_eq!(kind, expected);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[rstest]
	fn test_missing_variable(context: TemplateContext) {
		let err = context.helper("other_helper").unwrap_err();

		assert!(matches!(err, UniFormError::VariableDoesNotExist(name) if name == "other_helper"));
	}

	#[rstest]
	fn test_mutable_access(mut context: TemplateContext) {
		context
			.formset_mut("formset")
			.unwrap()
			.forms_mut()[1]
			.set_form_html("<p>x</p>".to_string());

		assert_eq!(
			context.formset("formset").unwrap().forms()[1].form_html(),
			Some("<p>x</p>")
		);
	}

	#[rstest]
	fn test_bound_field_path(context: TemplateContext) {
		assert_eq!(context.bound_field("form.email").unwrap().html_name(), "email");
		assert!(matches!(
			context.bound_field("form.phone"),
			Err(UniFormError::VariableDoesNotExist(_))
		));
		assert!(matches!(
			context.bound_field("helper.email"),
			Err(UniFormError::UnexpectedVariableType { .. })
		));
	}
}
