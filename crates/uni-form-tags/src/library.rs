//! The uni-form tag library
//!
//! [`UniForm`] owns the template renderer and the settings, and exposes every
//! filter and directive as a method. [`UniForm::expand`] runs them over a
//! whole page.

use crate::attrs::parse_attrs;
use crate::context::{ContextValue, TemplateContext};
use crate::directive::{Argument, Directive, Filter};
use crate::error::{UniFormError, UniFormResult};
use crate::helper::{FormHelper, HelperAttributes};
use crate::response::ResponseContext;
use crate::settings::Settings;
use crate::views::{FieldView, FormSetView, FormView};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use uni_form_forms::{BoundField, Form, FormSet};
use uni_form_templates::{TemplateRenderer, TeraRenderer};

pub const WHOLE_FORM_TEMPLATE: &str = "uni_form/whole_uni_form.html";
pub const WHOLE_FORMSET_TEMPLATE: &str = "uni_form/whole_uni_form_set.html";
pub const JQUERY_TEMPLATE: &str = "uni_form/uni_form_jquery.html";
pub const INCLUDES_TEMPLATE: &str = "uni_form/includes.html";

/// Context key the setup directive falls back to settings for
pub const MEDIA_URL_KEY: &str = "MEDIA_URL";

static PAGE_RE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r#"(?x)
		\{%\s*load\s+uni_form_tags\s*%\}
		| \{%\s*(?P<tag>uni_form(?:_set|_jquery|_setup)?(?:\s(?:"[^"]*"|'[^']*'|[^%"'])*?)?)\s*%\}
		| \{\{\s*(?P<var>[A-Za-z_][\w.]*)\s*\|\s*(?P<filter>as_uni_form_set|as_uni_form|as_uni_errors|as_uni_field)\s*\}\}
		"#,
	)
	.expect("Invalid page expansion regex pattern")
});

/// A helper argument after resolution
enum HelperSource {
	Helper(FormHelper),
	Attrs(HelperAttributes),
}

/// Renders forms, formsets and fields as uni-form markup
///
/// # Examples
///
/// ```
/// use uni_form_forms::{BooleanField, Form};
/// use uni_form_tags::{FormHelper, FormMethod, UniForm};
///
/// let uni_form = UniForm::new().unwrap();
/// let form = Form::new().field(BooleanField::new("is_company".to_string()));
/// let helper = FormHelper::new()
///     .with_form_id("this-form-rocks")
///     .with_form_class("forms-that-rock")
///     .with_form_method(FormMethod::Get);
///
/// let html = uni_form.uni_form(&form, Some(&helper)).unwrap();
/// assert!(html.contains(
///     r#"<form action="" class="uniForm forms-that-rock" method="GET" id="this-form-rocks">"#
/// ));
/// assert!(html.contains("id_is_company"));
/// ```
#[derive(Clone)]
pub struct UniForm {
	renderer: Arc<dyn TemplateRenderer>,
	settings: Settings,
}

impl UniForm {
	/// Built-in templates and settings from the environment
	pub fn new() -> UniFormResult<Self> {
		Ok(Self::with_renderer(
			Arc::new(TeraRenderer::new()?),
			Settings::from_env(),
		))
	}
	pub fn with_renderer(renderer: Arc<dyn TemplateRenderer>, settings: Settings) -> Self {
		Self { renderer, settings }
	}
	pub fn renderer(&self) -> &dyn TemplateRenderer {
		self.renderer.as_ref()
	}
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	fn render(&self, template_name: &str, context: &Value) -> UniFormResult<String> {
		tracing::debug!("Rendering uni-form template '{}'", template_name);
		Ok(self.renderer.render(template_name, context)?)
	}

	/// Non-field errors followed by every field of `form`
	pub fn as_uni_form(&self, form: &Form) -> UniFormResult<String> {
		self.render(
			Filter::AsUniForm.template_name(),
			&json!({ "form": FormView::from_form(form) }),
		)
	}
	/// Management form followed by every sub-form of `formset`
	pub fn as_uni_form_set(&self, formset: &FormSet) -> UniFormResult<String> {
		self.render(
			Filter::AsUniFormSet.template_name(),
			&json!({ "formset": FormSetView::from_formset(formset) }),
		)
	}
	/// Error summary of `form`; empty when the form has no errors
	pub fn as_uni_errors(&self, form: &Form) -> UniFormResult<String> {
		self.render(
			Filter::AsUniErrors.template_name(),
			&json!({ "form": FormView::from_form(form), "form_error_title": null }),
		)
	}
	pub fn as_uni_field(&self, field: &BoundField<'_>) -> UniFormResult<String> {
		self.render(
			Filter::AsUniField.template_name(),
			&json!({ "field": FieldView::from_bound(field) }),
		)
	}

	/// The whole `<form>` element: layout output when the helper has a
	/// layout, every field otherwise, then the helper's inputs
	pub fn uni_form(&self, form: &Form, helper: Option<&FormHelper>) -> UniFormResult<String> {
		let context = ResponseContext::for_form(form, helper, self.renderer())?;
		self.render(WHOLE_FORM_TEMPLATE, &context.to_value()?)
	}
	/// [`UniForm::uni_form`] configured by an attribute string
	pub fn uni_form_with_attrs(&self, form: &Form, attrs: &str) -> UniFormResult<String> {
		let context = ResponseContext::for_form_with_attrs(form, parse_attrs(attrs));
		self.render(WHOLE_FORM_TEMPLATE, &context.to_value()?)
	}
	/// The whole `<form>` element for a formset
	///
	/// Layout output is attached to each sub-form of `formset` as a side
	/// effect. Fails with [`UniFormError::NotImplemented`] when the helper has
	/// toggle fields.
	pub fn uni_form_set(
		&self,
		formset: &mut FormSet,
		helper: Option<&FormHelper>,
	) -> UniFormResult<String> {
		let context = ResponseContext::for_formset(formset, helper, self.renderer())?;
		self.render(WHOLE_FORMSET_TEMPLATE, &context.to_value()?)
	}
	/// Toggle script for the fields listed in the attributes' `toggle_fields`
	pub fn uni_form_jquery(
		&self,
		form: &Form,
		attrs: Option<HelperAttributes>,
	) -> UniFormResult<String> {
		let context = ResponseContext::for_form_with_attrs(form, attrs.unwrap_or_default());
		self.render(JQUERY_TEMPLATE, &context.to_value()?)
	}
	/// Stylesheet and script includes
	///
	/// Defines `MEDIA_URL` in `context` from the settings when the page does
	/// not define it. Every text value of the page is visible to the
	/// includes template, so an overridden `uni_form/includes.html` can read
	/// values such as `STATIC_URL`.
	pub fn uni_form_setup(&self, context: &mut TemplateContext) -> UniFormResult<String> {
		if !context.contains(MEDIA_URL_KEY) {
			tracing::debug!(
				"{} missing from context, using '{}' from settings",
				MEDIA_URL_KEY,
				self.settings.media_url
			);
			context.insert(MEDIA_URL_KEY, self.settings.media_url.clone());
		}
		context.text(MEDIA_URL_KEY)?;
		let page: Map<String, Value> = context
			.texts()
			.map(|(name, text)| (name.to_string(), Value::from(text)))
			.collect();
		self.render(INCLUDES_TEMPLATE, &Value::Object(page))
	}

	/// Apply a filter to a context variable
	///
	/// `as_uni_field` takes a `form.field` path.
	pub fn apply_filter(
		&self,
		filter: Filter,
		variable: &str,
		context: &TemplateContext,
	) -> UniFormResult<String> {
		match filter {
			Filter::AsUniForm => self.as_uni_form(context.form(variable)?),
			Filter::AsUniFormSet => self.as_uni_form_set(context.formset(variable)?),
			Filter::AsUniErrors => self.as_uni_errors(context.form(variable)?),
			Filter::AsUniField => self.as_uni_field(&context.bound_field(variable)?),
		}
	}

	/// Render a parsed directive against `context`
	pub fn render_directive(
		&self,
		directive: &Directive,
		context: &mut TemplateContext,
	) -> UniFormResult<String> {
		match directive {
			Directive::UniForm { form, helper } => {
				let source = resolve_helper(context, helper.as_ref())?;
				let form = context.form(form)?;
				match source {
					Some(HelperSource::Helper(helper)) => self.uni_form(form, Some(&helper)),
					Some(HelperSource::Attrs(attrs)) => {
						let response = ResponseContext::for_form_with_attrs(form, attrs);
						self.render(WHOLE_FORM_TEMPLATE, &response.to_value()?)
					}
					None => self.uni_form(form, None),
				}
			}
			Directive::UniFormSet { formset, helper } => {
				let source = resolve_helper(context, helper.as_ref())?;
				let formset = context.formset_mut(formset)?;
				match source {
					Some(HelperSource::Helper(helper)) => self.uni_form_set(formset, Some(&helper)),
					Some(HelperSource::Attrs(attrs)) => {
						let response = ResponseContext::for_formset_with_attrs(formset, attrs)?;
						self.render(WHOLE_FORMSET_TEMPLATE, &response.to_value()?)
					}
					None => self.uni_form_set(formset, None),
				}
			}
			Directive::UniFormJquery { form, attrs } => {
				let attrs = resolve_helper(context, attrs.as_ref())?.map(|source| match source {
					HelperSource::Helper(helper) => helper.get_attr(),
					HelperSource::Attrs(attrs) => attrs,
				});
				self.uni_form_jquery(context.form(form)?, attrs)
			}
			Directive::UniFormSetup => self.uni_form_setup(context),
		}
	}

	/// Expand every uni-form directive and filter in a page
	///
	/// `{% load uni_form_tags %}` is removed; all other text is kept as is.
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_forms::{CharField, Form};
	/// use uni_form_tags::{TemplateContext, UniForm};
	///
	/// let uni_form = UniForm::new().unwrap();
	/// let mut context = TemplateContext::new();
	/// context.insert("form", Form::new().field(CharField::new("email".to_string())));
	///
	/// let page = uni_form
	///     .expand("{% load uni_form_tags %}<div>{{ form|as_uni_form }}</div>", &mut context)
	///     .unwrap();
	/// assert!(page.starts_with("<div>"));
	/// assert!(page.contains(r#"id="div_id_email""#));
	/// ```
	pub fn expand(&self, source: &str, context: &mut TemplateContext) -> UniFormResult<String> {
		let mut output = String::with_capacity(source.len());
		let mut last = 0;

		for captures in PAGE_RE.captures_iter(source) {
			let Some(matched) = captures.get(0) else {
				continue;
			};
			output.push_str(&source[last..matched.start()]);
			output.push_str(&self.expand_match(&captures, context)?);
			last = matched.end();
		}
		output.push_str(&source[last..]);
		Ok(output)
	}

	fn expand_match(&self, captures: &Captures<'_>, context: &mut TemplateContext) -> UniFormResult<String> {
		if let Some(tag) = captures.name("tag") {
			let directive = Directive::parse(tag.as_str())?;
			return self.render_directive(&directive, context);
		}
		match (captures.name("var"), captures.name("filter")) {
			(Some(variable), Some(filter)) => {
				let filter: Filter = filter.as_str().parse()?;
				self.apply_filter(filter, variable.as_str(), context)
			}
			// `{% load uni_form_tags %}`
			_ => Ok(String::new()),
		}
	}
}

impl std::fmt::Debug for UniForm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UniForm")
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}

/// Resolve an optional helper argument: a quoted attribute string, a helper
/// variable or a text variable holding an attribute string
fn resolve_helper(
	context: &TemplateContext,
	argument: Option<&Argument>,
) -> UniFormResult<Option<HelperSource>> {
	let Some(argument) = argument else {
		return Ok(None);
	};
	match argument {
		Argument::Literal(attrs) => Ok(Some(HelperSource::Attrs(parse_attrs(attrs)))),
		Argument::Variable(name) => match context.resolve(name)? {
			ContextValue::Helper(helper) => Ok(Some(HelperSource::Helper(helper.clone()))),
			ContextValue::Text(attrs) => Ok(Some(HelperSource::Attrs(parse_attrs(attrs)))),
			_ => Err(UniFormError::UnexpectedVariableType {
				name: name.clone(),
				expected: "helper",
			}),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::sync::Mutex;
	use uni_form_forms::{CharField, formset_factory};
	use uni_form_templates::TemplateResult;

	/// Records template names and echoes them back
	#[derive(Default)]
	struct RecordingRenderer {
		calls: Mutex<Vec<(String, Value)>>,
	}

	impl TemplateRenderer for RecordingRenderer {
		fn render(&self, template_name: &str, context: &Value) -> TemplateResult<String> {
			self.calls
				.lock()
				.unwrap()
				.push((template_name.to_string(), context.clone()));
			Ok(format!("[{}]", template_name))
		}
	}

	fn email_form() -> Form {
		Form::new().field(CharField::new("email".to_string()))
	}

	#[fixture]
	fn recorder() -> Arc<RecordingRenderer> {
		Arc::new(RecordingRenderer::default())
	}

	fn library(recorder: &Arc<RecordingRenderer>) -> UniForm {
		UniForm::with_renderer(recorder.clone(), Settings::default().with_media_url("/assets/"))
	}

	#[rstest]
	fn test_expand_leaves_other_text_untouched(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());
		let source = "{% load uni_form_tags %}\n<h1>{{ title }}</h1>\n{% uni_form form %}\n{{ form|as_uni_errors }}{% csrf_token %}";

		let page = library(&recorder).expand(source, &mut context).unwrap();

		assert_eq!(
			page,
			"\n<h1>{{ title }}</h1>\n[uni_form/whole_uni_form.html]\n[uni_form/errors.html]{% csrf_token %}"
		);
	}

	#[rstest]
	fn test_setup_uses_settings_when_context_lacks_media_url(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();

		library(&recorder).uni_form_setup(&mut context).unwrap();

		assert_eq!(context.text(MEDIA_URL_KEY).unwrap(), "/assets/");
		let calls = recorder.calls.lock().unwrap();
		assert_eq!(calls[0].0, INCLUDES_TEMPLATE);
		assert_eq!(calls[0].1, json!({ "MEDIA_URL": "/assets/" }));
	}

	#[rstest]
	fn test_setup_keeps_context_media_url(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert(MEDIA_URL_KEY, "/static/");

		library(&recorder).uni_form_setup(&mut context).unwrap();

		assert_eq!(recorder.calls.lock().unwrap()[0].1["MEDIA_URL"], "/static/");
	}

	#[rstest]
	fn test_literal_attrs_configure_whole_form(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());
		let directive = Directive::parse(r#"uni_form form "id=inline;submit=go|Go""#).unwrap();

		library(&recorder)
			.render_directive(&directive, &mut context)
			.unwrap();

		let calls = recorder.calls.lock().unwrap();
		assert_eq!(calls[0].1["form_id"], "inline");
		assert_eq!(calls[0].1["inputs"][0]["id"], "submit-id-go");
	}

	#[rstest]
	fn test_text_variable_is_parsed_as_attrs(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());
		context.insert("jquery_attrs", "toggle_fields=id_email");
		let directive = Directive::parse("uni_form_jquery form jquery_attrs").unwrap();

		library(&recorder)
			.render_directive(&directive, &mut context)
			.unwrap();

		let calls = recorder.calls.lock().unwrap();
		assert_eq!(calls[0].0, JQUERY_TEMPLATE);
		assert_eq!(calls[0].1["toggle_fields"][0]["auto_id"], "id_email");
	}

	#[rstest]
	fn test_helper_argument_of_wrong_kind(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());
		context.insert("other", email_form());
		let directive = Directive::parse("uni_form form other").unwrap();

		let err = library(&recorder)
			.render_directive(&directive, &mut context)
			.unwrap_err();

		assert!(matches!(
			err,
			UniFormError::UnexpectedVariableType { expected: "helper", .. }
		));
	}

	#[rstest]
	fn test_formset_directive_with_context_helper(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("formset", formset_factory(email_form, 2));
		let mut helper = FormHelper::new();
		helper.add_layout(crate::layout::Layout::new().with("email"));
		context.insert("helper", helper);

		let page = library(&recorder)
			.expand("{% uni_form_set formset helper %}", &mut context)
			.unwrap();

		assert_eq!(page, "[uni_form/whole_uni_form_set.html]");
		let formset = context.formset("formset").unwrap();
		assert_eq!(
			formset.forms()[0].form_html(),
			Some("[uni_form/field.html]")
		);
	}

	#[rstest]
	fn test_setup_exposes_page_text_values(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();
		context.insert("STATIC_URL", "/static/");
		context.insert("form", email_form());

		library(&recorder).uni_form_setup(&mut context).unwrap();

		assert_eq!(
			recorder.calls.lock().unwrap()[0].1,
			json!({ "MEDIA_URL": "/assets/", "STATIC_URL": "/static/" })
		);
	}

	#[rstest]
	#[case(r#"{% uni_form form "class=w-50%" %}"#)]
	#[case("{% uni_form form 'class=w-50%' %}")]
	#[case(r#"{%uni_form form "id=a%b;class=w-50%"%}"#)]
	fn test_percent_inside_quoted_attrs(
		recorder: Arc<RecordingRenderer>,
		#[case] source: &str,
	) {
		let mut context = TemplateContext::new();
		context.insert("form", email_form());

		let page = library(&recorder).expand(source, &mut context).unwrap();

		assert_eq!(page, "[uni_form/whole_uni_form.html]");
		assert_eq!(recorder.calls.lock().unwrap()[0].1["form_class"], "w-50%");
	}

	#[rstest]
	fn test_unknown_filter_target(recorder: Arc<RecordingRenderer>) {
		let mut context = TemplateContext::new();

		let err = library(&recorder)
			.expand("{{ missing|as_uni_form }}", &mut context)
			.unwrap_err();

		assert!(matches!(err, UniFormError::VariableDoesNotExist(name) if name == "missing"));
	}
}
