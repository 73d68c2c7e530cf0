//! Formset tests
//!
//! Prefixing, management forms and bound data across a formset.

use rstest::{fixture, rstest};
use serde_json::json;
use std::collections::HashMap;
use uni_form_forms::{BooleanField, CharField, Form, FormSet, FormSetFactory, Widget};

fn contact_form() -> Form {
	Form::new()
		.field(BooleanField::new("is_company".to_string()))
		.field(CharField::new("email".to_string()).with_max_length(30))
}

#[fixture]
fn formset() -> FormSet {
	FormSetFactory::new(contact_form).extra(2).build()
}

#[rstest]
fn test_each_form_gets_indexed_ids(formset: FormSet) {
	let ids: Vec<String> = formset
		.forms()
		.iter()
		.map(|form| form.get_bound_field("is_company").unwrap().auto_id())
		.collect();

	assert_eq!(ids, vec!["id_form-0-is_company", "id_form-1-is_company"]);
}

#[rstest]
fn test_custom_prefix() {
	let formset = FormSetFactory::new(contact_form)
		.prefix("contacts")
		.extra(1)
		.build();

	let field = formset.forms()[0].get_bound_field("email").unwrap();

	assert_eq!(field.html_name(), "contacts-0-email");
	assert!(
		formset
			.management_form_html()
			.contains(r#"name="contacts-TOTAL_FORMS""#)
	);
}

#[rstest]
fn test_max_num_caps_extra_forms() {
	let formset = FormSetFactory::new(contact_form).extra(5).max_num(3).build();

	assert_eq!(formset.total_form_count(), 3);
	assert!(
		formset
			.management_form_html()
			.contains(r#"name="form-MAX_NUM_FORMS" id="id_form-MAX_NUM_FORMS" value="3""#)
	);
}

#[rstest]
fn test_management_form_without_max_num(formset: FormSet) {
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

#[rstest]
fn test_bound_data_is_rendered_per_form(mut formset: FormSet) {
	let mut data = HashMap::new();
	data.insert("email".to_string(), json!("second@example.com"));
	data.insert("is_company".to_string(), json!(true));
	formset.forms_mut()[1].bind(data);

	let first = formset.forms()[0].get_bound_field("email").unwrap().as_widget();
	let second = formset.forms()[1].get_bound_field("email").unwrap().as_widget();
	let checkbox = formset.forms()[1]
		.get_bound_field("is_company")
		.unwrap()
		.as_widget();

	assert!(!first.contains("value="));
	assert!(second.contains(r#"value="second@example.com""#));
	assert!(checkbox.contains(r#"checked="checked""#));
}

#[rstest]
fn test_multipart_when_any_form_has_file_input() {
	let mut formset = FormSet::new("uploads");
	formset.add_form(contact_form());
	assert!(!formset.is_multipart());

	formset.add_form(
		contact_form().field(CharField::new("avatar".to_string()).with_widget(Widget::FileInput)),
	);

	assert!(formset.is_multipart());
}
