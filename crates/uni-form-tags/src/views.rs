//! Serializable views of forms handed to the templates
//!
//! Templates never see [`Form`] or [`BoundField`] directly. Each render
//! flattens them into these views so every key a template reads is present,
//! with `null` standing in for absent values.

use serde::Serialize;
use std::collections::HashSet;
use uni_form_forms::{ALL_FIELDS_KEY, BoundField, Form, FormSet};

/// One bound field as the field template sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
	pub name: String,
	pub html_name: String,
	pub auto_id: String,
	pub label: String,
	/// Rendered widget markup
	pub widget: String,
	pub errors: Vec<String>,
	pub help_text: Option<String>,
	pub required: bool,
	pub is_hidden: bool,
}

impl FieldView {
	pub fn from_bound(field: &BoundField<'_>) -> Self {
		Self {
			name: field.name().to_string(),
			html_name: field.html_name(),
			auto_id: field.auto_id(),
			label: field.label(),
			widget: field.as_widget(),
			errors: field.errors().to_vec(),
			help_text: field.help_text().map(str::to_string),
			required: field.is_required(),
			is_hidden: field.is_hidden(),
		}
	}
}

/// Messages attached to one field (or to the form as a whole)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
	pub field: String,
	pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
	pub fields: Vec<FieldView>,
	pub non_field_errors: Vec<String>,
	pub errors: Vec<ErrorEntry>,
	pub is_multipart: bool,
	pub form_html: Option<String>,
}

impl FormView {
	/// Errors are listed in field order, then form-wide errors, then anything
	/// attached to names the form does not declare, sorted by name.
	pub fn from_form(form: &Form) -> Self {
		Self {
			fields: form.bound_fields().map(|f| FieldView::from_bound(&f)).collect(),
			non_field_errors: form.non_field_errors().to_vec(),
			errors: error_entries(form),
			is_multipart: form.is_multipart(),
			form_html: form.form_html().map(str::to_string),
		}
	}
}

fn error_entries(form: &Form) -> Vec<ErrorEntry> {
	let errors = form.errors();
	let mut seen: HashSet<&str> = HashSet::new();
	let mut entries = Vec::new();

	for field in form.fields() {
		seen.insert(field.name());
		if let Some(messages) = errors.get(field.name()).filter(|m| !m.is_empty()) {
			entries.push(ErrorEntry {
				field: field.name().to_string(),
				messages: messages.clone(),
			});
		}
	}

	seen.insert(ALL_FIELDS_KEY);
	if !form.non_field_errors().is_empty() {
		entries.push(ErrorEntry {
			field: ALL_FIELDS_KEY.to_string(),
			messages: form.non_field_errors().to_vec(),
		});
	}

	let mut leftovers: Vec<&String> = errors
		.keys()
		.filter(|key| !seen.contains(key.as_str()))
		.collect();
	leftovers.sort();
	for key in leftovers {
		if let Some(messages) = errors.get(key).filter(|m| !m.is_empty()) {
			entries.push(ErrorEntry {
				field: key.clone(),
				messages: messages.clone(),
			});
		}
	}

	entries
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSetView {
	/// Rendered hidden count inputs
	pub management_form: String,
	pub forms: Vec<FormView>,
	pub non_form_errors: Vec<String>,
	pub is_multipart: bool,
}

impl FormSetView {
	pub fn from_formset(formset: &FormSet) -> Self {
		Self {
			management_form: formset.management_form_html(),
			forms: formset.forms().iter().map(FormView::from_form).collect(),
			non_form_errors: formset.non_form_errors().to_vec(),
			is_multipart: formset.is_multipart(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use uni_form_forms::{BooleanField, CharField, Widget, formset_factory};

	fn contact_form() -> Form {
		Form::new()
			.field(CharField::new("email".to_string()).required())
			.field(CharField::new("first_name".to_string()).with_help_text("As on your ID"))
			.field(BooleanField::new("is_company".to_string()))
	}

	#[rstest]
	fn test_field_view_keys() {
		let form = contact_form();
		let field = form.get_bound_field("first_name").unwrap();

		let view = serde_json::to_value(FieldView::from_bound(&field)).unwrap();

		assert_eq!(view["auto_id"], json!("id_first_name"));
		assert_eq!(view["label"], json!("First name"));
		assert_eq!(view["help_text"], json!("As on your ID"));
		assert_eq!(view["required"], json!(false));
		assert_eq!(view["errors"], json!([]));
		assert!(view["widget"].as_str().unwrap().contains(r#"id="id_first_name""#));
	}

	#[rstest]
	fn test_absent_help_text_serializes_as_null() {
		let form = contact_form();
		let field = form.get_bound_field("email").unwrap();

		let view = serde_json::to_value(FieldView::from_bound(&field)).unwrap();

		assert!(view["help_text"].is_null());
	}

	#[rstest]
	fn test_error_entries_order() {
		let mut form = contact_form();
		form.add_error("zeta", "Unknown field problem");
		form.add_error("is_company", "Pick one");
		form.add_error(ALL_FIELDS_KEY, "Passwords differ");
		form.add_error("email", "Required");
		form.add_error("alpha", "Another stray error");

		let view = FormView::from_form(&form);
		let fields: Vec<&str> = view.errors.iter().map(|e| e.field.as_str()).collect();

		assert_eq!(fields, vec!["email", "is_company", "_all", "alpha", "zeta"]);
		assert_eq!(view.non_field_errors, vec!["Passwords differ".to_string()]);
	}

	#[rstest]
	fn test_form_view_always_carries_form_html() {
		let mut form = contact_form();

		let empty = serde_json::to_value(FormView::from_form(&form)).unwrap();
		form.set_form_html("<fieldset></fieldset>".to_string());
		let filled = serde_json::to_value(FormView::from_form(&form)).unwrap();

		assert!(empty.as_object().unwrap().contains_key("form_html"));
		assert!(empty["form_html"].is_null());
		assert_eq!(filled["form_html"], json!("<fieldset></fieldset>"));
	}

	#[rstest]
	fn test_form_view_multipart() {
		let form = Form::new().field(CharField::new("avatar".to_string()).with_widget(Widget::FileInput));

		assert!(FormView::from_form(&form).is_multipart);
		assert!(!FormView::from_form(&contact_form()).is_multipart);
	}

	#[rstest]
	fn test_formset_view_prefixes_each_form() {
		let formset = formset_factory(contact_form, 2);

		let view = FormSetView::from_formset(&formset);

		assert_eq!(view.forms.len(), 2);
		assert_eq!(view.forms[0].fields[2].auto_id, "id_form-0-is_company");
		assert_eq!(view.forms[1].fields[2].auto_id, "id_form-1-is_company");
		assert!(view.management_form.contains("form-TOTAL_FORMS"));
	}
}
