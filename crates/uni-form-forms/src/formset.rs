//! Formsets: ordered collections of structurally identical forms

use crate::field::Widget;
use crate::form::Form;

/// Prefix used when none is given, producing ids like `id_form-0-email`
pub const DEFAULT_PREFIX: &str = "form";

pub const TOTAL_FORM_COUNT: &str = "TOTAL_FORMS";
pub const INITIAL_FORM_COUNT: &str = "INITIAL_FORMS";
pub const MAX_NUM_FORM_COUNT: &str = "MAX_NUM_FORMS";

#[derive(Debug)]
pub struct FormSet {
	prefix: String,
	forms: Vec<Form>,
	initial_form_count: usize,
	max_num: Option<usize>,
	non_form_errors: Vec<String>,
}

impl FormSet {
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::FormSet;
	///
	/// let formset = FormSet::new("addresses");
	/// assert_eq!(formset.prefix(), "addresses");
	/// assert_eq!(formset.total_form_count(), 0);
	/// ```
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			forms: Vec::new(),
			initial_form_count: 0,
			max_num: None,
			non_form_errors: Vec::new(),
		}
	}
	pub fn prefix(&self) -> &str {
		&self.prefix
	}
	/// Append a form, re-prefixing it with its position in the set
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Form, FormSet};
	///
	/// let mut formset = FormSet::new("form");
	/// formset.add_form(Form::new().field(CharField::new("email".to_string())));
	/// formset.add_form(Form::new().field(CharField::new("email".to_string())));
	///
	/// assert_eq!(formset.forms()[1].prefix(), "form-1");
	/// ```
	pub fn add_form(&mut self, mut form: Form) {
		form.set_prefix(format!("{}-{}", self.prefix, self.forms.len()));
		self.forms.push(form);
	}
	pub fn forms(&self) -> &[Form] {
		&self.forms
	}
	pub fn forms_mut(&mut self) -> &mut [Form] {
		&mut self.forms
	}
	pub fn total_form_count(&self) -> usize {
		self.forms.len()
	}
	pub fn initial_form_count(&self) -> usize {
		self.initial_form_count
	}
	pub fn set_initial_form_count(&mut self, count: usize) {
		self.initial_form_count = count;
	}
	pub fn max_num(&self) -> Option<usize> {
		self.max_num
	}
	pub fn set_max_num(&mut self, max_num: Option<usize>) {
		self.max_num = max_num;
	}
	pub fn non_form_errors(&self) -> &[String] {
		&self.non_form_errors
	}
	pub fn add_non_form_error(&mut self, message: impl Into<String>) {
		self.non_form_errors.push(message.into());
	}
	pub fn is_multipart(&self) -> bool {
		self.forms.iter().any(Form::is_multipart)
	}
	/// Hidden inputs carrying the form counts back to the server
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::FormSet;
	///
	/// let formset = FormSet::new("form");
	/// let html = formset.management_form_html();
	/// assert!(html.contains(r#"name="form-TOTAL_FORMS" id="id_form-TOTAL_FORMS" value="0""#));
	/// ```
	pub fn management_form_html(&self) -> String {
		let max_num = self.max_num.map(|n| n.to_string()).unwrap_or_default();
		[
			(TOTAL_FORM_COUNT, self.total_form_count().to_string()),
			(INITIAL_FORM_COUNT, self.initial_form_count.to_string()),
			(MAX_NUM_FORM_COUNT, max_num),
		]
		.iter()
		.map(|(key, value)| {
			let name = format!("{}-{}", self.prefix, key);
			// Empty counts still need a value attribute for the server side
			let rendered = Widget::HiddenInput.render(
				&name,
				&format!("id_{}", name),
				Some(&serde_json::Value::String(value.clone())),
				&[],
			);
			if value.is_empty() {
				rendered.replace(" />", r#" value="" />"#)
			} else {
				rendered
			}
		})
		.collect()
	}
}

impl Default for FormSet {
	fn default() -> Self {
		Self::new(DEFAULT_PREFIX)
	}
}

/// Builds formsets from a form constructor
///
/// # Examples
///
/// ```
/// use uni_form_forms::{BooleanField, Form, FormSetFactory};
///
/// let formset = FormSetFactory::new(|| {
///     Form::new().field(BooleanField::new("is_company".to_string()))
/// })
/// .extra(2)
/// .build();
///
/// assert_eq!(formset.total_form_count(), 2);
/// assert_eq!(
///     formset.forms()[1].get_bound_field("is_company").unwrap().auto_id(),
///     "id_form-1-is_company"
/// );
/// ```
pub struct FormSetFactory<F> {
	form_builder: F,
	prefix: String,
	extra: usize,
	max_num: Option<usize>,
}

impl<F> FormSetFactory<F>
where
	F: Fn() -> Form,
{
	pub fn new(form_builder: F) -> Self {
		Self {
			form_builder,
			prefix: DEFAULT_PREFIX.to_string(),
			extra: 1,
			max_num: None,
		}
	}
	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
	/// Number of blank forms to create
	pub fn extra(mut self, extra: usize) -> Self {
		self.extra = extra;
		self
	}
	pub fn max_num(mut self, max_num: usize) -> Self {
		self.max_num = Some(max_num);
		self
	}
	pub fn build(&self) -> FormSet {
		let mut formset = FormSet::new(self.prefix.clone());
		formset.set_max_num(self.max_num);
		let count = match self.max_num {
			Some(max) => self.extra.min(max),
			None => self.extra,
		};
		for _ in 0..count {
			formset.add_form((self.form_builder)());
		}
		formset
	}
}

/// Shorthand for `FormSetFactory::new(form_builder).extra(extra).build()`
pub fn formset_factory<F>(form_builder: F, extra: usize) -> FormSet
where
	F: Fn() -> Form,
{
	FormSetFactory::new(form_builder).extra(extra).build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::CharField;
	use rstest::rstest;

	fn email_form() -> Form {
		Form::new().field(CharField::new("email".to_string()))
	}

	#[rstest]
	#[case(0)]
	#[case(2)]
	#[case(5)]
	fn test_extra_controls_form_count(#[case] extra: usize) {
		let formset = formset_factory(email_form, extra);

		assert_eq!(formset.total_form_count(), extra);
		for (index, form) in formset.forms().iter().enumerate() {
			assert_eq!(form.prefix(), format!("form-{}", index));
		}
	}

	#[rstest]
	fn test_max_num_caps_extra() {
		let formset = FormSetFactory::new(email_form).extra(5).max_num(3).build();

		assert_eq!(formset.total_form_count(), 3);
		assert_eq!(formset.max_num(), Some(3));
	}

	#[rstest]
	fn test_custom_prefix() {
		let formset = FormSetFactory::new(email_form)
			.prefix("contacts")
			.extra(1)
			.build();

		let bound = formset.forms()[0].get_bound_field("email").unwrap();
		assert_eq!(bound.auto_id(), "id_contacts-0-email");
	}

	#[rstest]
	fn test_management_form() {
		let formset = formset_factory(email_form, 2);

		let html = formset.management_form_html();

		assert_eq!(
			html,
			concat!(
				r#"<input type="hidden" name="form-TOTAL_FORMS" id="id_form-TOTAL_FORMS" value="2" />"#,
				r#"<input type="hidden" name="form-INITIAL_FORMS" id="id_form-INITIAL_FORMS" value="0" />"#,
				r#"<input type="hidden" name="form-MAX_NUM_FORMS" id="id_form-MAX_NUM_FORMS" value="" />"#,
			)
		);
	}
}
