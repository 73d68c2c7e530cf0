//! Response contexts
//!
//! Every directive renders a fixed template against a [`ResponseContext`].
//! The context carries the form-level attributes with their defaults applied,
//! plus whichever of `form`, `formset`, `form_html` and `toggle_fields` the
//! directive fills in. Unused keys serialize as `null` or empty lists so the
//! templates can test them without failing on a missing variable.

use crate::error::{UniFormError, UniFormResult};
use crate::helper::{FormHelper, FormMethod, HelperAttributes};
use crate::input::Input;
use crate::views::{FieldView, FormSetView, FormView};
use serde::Serialize;
use serde_json::Value;
use uni_form_forms::{Form, FormSet};
use uni_form_templates::TemplateRenderer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseContext {
	pub form_action: String,
	pub form_method: FormMethod,
	pub form_class: String,
	pub form_id: String,
	pub inputs: Vec<Input>,
	/// Attributes exactly as the helper or attribute string provided them
	pub attrs: HelperAttributes,
	pub form: Option<FormView>,
	pub formset: Option<FormSetView>,
	/// Layout output for the whole-form template
	pub form_html: Option<String>,
	pub toggle_fields: Vec<FieldView>,
}

impl ResponseContext {
	/// Apply the defaults: `POST` and empty action, class and id
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_tags::{FormMethod, HelperAttributes, ResponseContext};
	///
	/// let context = ResponseContext::from_attrs(HelperAttributes::default());
	/// assert_eq!(context.form_method, FormMethod::Post);
	/// assert_eq!(context.form_action, "");
	/// assert!(context.inputs.is_empty());
	/// ```
	pub fn from_attrs(attrs: HelperAttributes) -> Self {
		Self {
			form_action: attrs.form_action.clone().unwrap_or_default(),
			form_method: attrs.form_method.unwrap_or_default(),
			form_class: attrs.class.clone().unwrap_or_default(),
			form_id: attrs.id.clone().unwrap_or_default(),
			inputs: attrs.inputs.clone(),
			attrs,
			form: None,
			formset: None,
			form_html: None,
			toggle_fields: Vec::new(),
		}
	}

	/// Context for a single form
	///
	/// With a helper that has a layout, the layout output becomes `form_html`.
	/// Fields whose `auto_id` is listed in `toggle_fields` are collected in
	/// form order.
	pub fn for_form(
		form: &Form,
		helper: Option<&FormHelper>,
		renderer: &dyn TemplateRenderer,
	) -> UniFormResult<Self> {
		let attrs = helper.map(FormHelper::get_attr).unwrap_or_default();
		let mut context = Self::for_form_with_attrs(form, attrs);
		if let Some(helper) = helper.filter(|h| h.has_layout()) {
			context.form_html = Some(helper.render_layout(form, renderer)?);
		}
		Ok(context)
	}

	/// Context for a single form configured by plain attributes
	pub fn for_form_with_attrs(form: &Form, attrs: HelperAttributes) -> Self {
		let toggle_fields = match &attrs.toggle_fields {
			Some(toggle) if !toggle.is_empty() => form
				.bound_fields()
				.filter(|field| toggle.contains(&field.auto_id()))
				.map(|field| FieldView::from_bound(&field))
				.collect(),
			_ => Vec::new(),
		};
		let mut context = Self::from_attrs(attrs);
		context.form = Some(FormView::from_form(form));
		context.toggle_fields = toggle_fields;
		context
	}

	/// Context for a formset
	///
	/// Each sub-form gets the helper's layout output attached as its
	/// `form_html`; without a layout any earlier output is cleared.
	pub fn for_formset(
		formset: &mut FormSet,
		helper: Option<&FormHelper>,
		renderer: &dyn TemplateRenderer,
	) -> UniFormResult<Self> {
		let attrs = helper.map(FormHelper::get_attr).unwrap_or_default();
		let layout = helper.filter(|h| h.has_layout()).map(|h| (h, renderer));
		Self::formset_context(formset, attrs, layout)
	}

	/// Context for a formset configured by plain attributes
	pub fn for_formset_with_attrs(
		formset: &mut FormSet,
		attrs: HelperAttributes,
	) -> UniFormResult<Self> {
		Self::formset_context(formset, attrs, None)
	}

	fn formset_context(
		formset: &mut FormSet,
		attrs: HelperAttributes,
		layout: Option<(&FormHelper, &dyn TemplateRenderer)>,
	) -> UniFormResult<Self> {
		if attrs.toggle_fields.is_some() {
			return Err(UniFormError::NotImplemented(
				"'toggle_fields' not yet supported for formsets".to_string(),
			));
		}
		for form in formset.forms_mut() {
			match layout {
				Some((helper, renderer)) => {
					let html = helper.render_layout(form, renderer)?;
					form.set_form_html(html);
				}
				None => form.clear_form_html(),
			}
		}
		let mut context = Self::from_attrs(attrs);
		context.formset = Some(FormSetView::from_formset(formset));
		Ok(context)
	}

	pub fn to_value(&self) -> UniFormResult<Value> {
		Ok(serde_json::to_value(self)?)
	}
}
