//! Template rendering capability and the Tera-backed implementation
//!
//! Built-in templates are compiled into the binary with `include_str!`.
//! Autoescaping is turned off for every template: widgets and layouts hand the
//! templates ready-made markup, and text values are escaped explicitly with the
//! `escape` filter.

use crate::error::{TemplateError, TemplateResult, describe};
use crate::escaping::escape;
use crate::filters::{namify_filter, slugify_filter};
use serde_json::Value;
use tera::{Context, Tera};

/// Built-in templates, keyed by the names the directives render.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
	(
		"uni_form/macros.html",
		include_str!("../templates/uni_form/macros.html"),
	),
	(
		"uni_form/field.html",
		include_str!("../templates/uni_form/field.html"),
	),
	(
		"uni_form/uni_form.html",
		include_str!("../templates/uni_form/uni_form.html"),
	),
	(
		"uni_form/uni_form_set.html",
		include_str!("../templates/uni_form/uni_form_set.html"),
	),
	(
		"uni_form/errors.html",
		include_str!("../templates/uni_form/errors.html"),
	),
	(
		"uni_form/whole_uni_form.html",
		include_str!("../templates/uni_form/whole_uni_form.html"),
	),
	(
		"uni_form/whole_uni_form_set.html",
		include_str!("../templates/uni_form/whole_uni_form_set.html"),
	),
	(
		"uni_form/uni_form_jquery.html",
		include_str!("../templates/uni_form/uni_form_jquery.html"),
	),
	(
		"uni_form/includes.html",
		include_str!("../templates/uni_form/includes.html"),
	),
];

/// Renders a named template against a JSON object context.
///
/// Anything that maps `(template name, context)` to markup can stand in for
/// the default engine, including plain closures:
///
/// ```
/// use serde_json::{json, Value};
/// use uni_form_templates::{TemplateRenderer, TemplateResult};
///
/// let echo = |name: &str, _ctx: &Value| -> TemplateResult<String> { Ok(name.to_string()) };
/// assert_eq!(echo.render("uni_form/field.html", &json!({})).unwrap(), "uni_form/field.html");
/// ```
pub trait TemplateRenderer: Send + Sync {
	fn render(&self, template_name: &str, context: &Value) -> TemplateResult<String>;
}

impl<F> TemplateRenderer for F
where
	F: Fn(&str, &Value) -> TemplateResult<String> + Send + Sync,
{
	fn render(&self, template_name: &str, context: &Value) -> TemplateResult<String> {
		self(template_name, context)
	}
}

/// Tera-based renderer holding the built-in uni-form templates
pub struct TeraRenderer {
	tera: Tera,
}

impl TeraRenderer {
	/// Creates a renderer with only the built-in templates
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_templates::TeraRenderer;
	///
	/// let renderer = TeraRenderer::new().unwrap();
	/// assert!(renderer.has_template("uni_form/whole_uni_form.html"));
	/// ```
	pub fn new() -> TemplateResult<Self> {
		let mut tera = Tera::default();
		tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
			.map_err(|e| TemplateError::Load(describe(&e)))?;
		Ok(Self::configure(tera))
	}

	/// Creates a renderer whose local templates override the built-in ones.
	///
	/// `glob` is a Tera glob such as `"templates/**/*.html"`. A local template
	/// named `uni_form/includes.html` replaces the built-in one; every other
	/// built-in stays available.
	pub fn with_template_dir(glob: &str) -> TemplateResult<Self> {
		let mut tera = Tera::parse(glob).map_err(|e| TemplateError::Load(describe(&e)))?;
		tracing::debug!(
			"Loaded {} local template(s) from {}",
			tera.get_template_names().count(),
			glob
		);

		let mut builtin = Tera::default();
		builtin
			.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
			.map_err(|e| TemplateError::Load(describe(&e)))?;

		// `extend` keeps templates already present, so local ones win.
		tera.extend(&builtin)
			.map_err(|e| TemplateError::Load(describe(&e)))?;
		Ok(Self::configure(tera))
	}

	fn configure(mut tera: Tera) -> Self {
		tera.autoescape_on(vec![]);
		tera.register_filter("escape", escape);
		tera.register_filter("slugify", slugify_filter);
		tera.register_filter("namify", namify_filter);
		Self { tera }
	}

	/// Adds or replaces a single template from a string
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use uni_form_templates::{TemplateRenderer, TeraRenderer};
	///
	/// let mut renderer = TeraRenderer::new().unwrap();
	/// renderer
	///     .add_raw_template("uni_form/includes.html", "<!-- {{ MEDIA_URL }} -->")
	///     .unwrap();
	///
	/// let html = renderer
	///     .render("uni_form/includes.html", &json!({ "MEDIA_URL": "/m/" }))
	///     .unwrap();
	/// assert_eq!(html, "<!-- /m/ -->");
	/// ```
	pub fn add_raw_template(&mut self, name: &str, content: &str) -> TemplateResult<()> {
		self.tera
			.add_raw_template(name, content)
			.map_err(|e| TemplateError::Load(describe(&e)))
	}

	/// Whether a template with this name is registered
	pub fn has_template(&self, name: &str) -> bool {
		self.tera.get_template_names().any(|n| n == name)
	}
}

impl TemplateRenderer for TeraRenderer {
	fn render(&self, template_name: &str, context: &Value) -> TemplateResult<String> {
		let ctx = Context::from_value(context.clone())
			.map_err(|e| TemplateError::Context(describe(&e)))?;
		tracing::trace!("Rendering template {}", template_name);
		self.tera
			.render(template_name, &ctx)
			.map_err(|e| TemplateError::from_tera(template_name, e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn renderer() -> TeraRenderer {
		TeraRenderer::new().unwrap()
	}

	#[rstest]
	fn test_all_builtin_templates_registered(renderer: TeraRenderer) {
		for (name, _) in BUILTIN_TEMPLATES {
			assert!(renderer.has_template(name), "missing {}", name);
		}
	}

	#[rstest]
	fn test_missing_template(renderer: TeraRenderer) {
		let result = renderer.render("uni_form/nope.html", &json!({}));

		assert!(matches!(result, Err(TemplateError::TemplateNotFound(_))));
	}

	#[rstest]
	fn test_context_must_be_object(renderer: TeraRenderer) {
		let result = renderer.render("uni_form/includes.html", &json!(["not", "an", "object"]));

		assert!(matches!(result, Err(TemplateError::Context(_))));
	}

	#[rstest]
	fn test_autoescape_disabled(mut renderer: TeraRenderer) {
		renderer
			.add_raw_template("raw.html", "{{ markup }}|{{ markup | escape }}")
			.unwrap();

		let html = renderer
			.render("raw.html", &json!({ "markup": "<b>x</b>" }))
			.unwrap();

		assert_eq!(html, "<b>x</b>|&lt;b&gt;x&lt;/b&gt;");
	}

	#[rstest]
	fn test_closure_renderer() {
		let renderer = |name: &str, ctx: &Value| -> TemplateResult<String> {
			Ok(format!("{}:{}", name, ctx["form_id"]))
		};

		let out = renderer
			.render("uni_form/whole_uni_form.html", &json!({ "form_id": "x" }))
			.unwrap();

		assert_eq!(out, "uni_form/whole_uni_form.html:\"x\"");
	}
}
