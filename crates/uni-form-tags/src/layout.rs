//! Declarative layouts
//!
//! A [`Layout`] groups a form's fields into fieldsets and rows and can mix in
//! literal markup. Layouts only reference fields by name, so one layout can be
//! shared by forms that declare different subsets of those fields: names the
//! form does not have are skipped.
//!
//! ```
//! use uni_form_tags::{Fieldset, Html, Layout, Row};
//!
//! let layout = Layout::new()
//!     .with(Fieldset::new("").field("is_company"))
//!     .with(
//!         Fieldset::new("Contact details")
//!             .field("email")
//!             .row(Row::new(["password1", "password2"]))
//!             .field("first_name")
//!             .field("last_name")
//!             .html(Html::new("<p>We never share your email.</p>")),
//!     );
//! assert_eq!(layout.objects().len(), 2);
//! ```

use crate::error::UniFormResult;
use crate::views::FieldView;
use serde_json::json;
use uni_form_forms::Form;
use uni_form_templates::{TemplateRenderer, escape_html};

/// Template used for every field a layout renders
pub const FIELD_TEMPLATE: &str = "uni_form/field.html";

/// Default class of a [`Row`] wrapper
pub const ROW_CSS_CLASS: &str = "formRow";

/// One node of a layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutObject {
	/// Reference to a form field by name
	Field(String),
	Fieldset(Fieldset),
	Row(Row),
	Html(Html),
	Layout(Layout),
}

impl LayoutObject {
	pub fn render(&self, form: &Form, renderer: &dyn TemplateRenderer) -> UniFormResult<String> {
		match self {
			LayoutObject::Field(name) => render_field(name, form, renderer),
			LayoutObject::Fieldset(fieldset) => fieldset.render(form, renderer),
			LayoutObject::Row(row) => row.render(form, renderer),
			LayoutObject::Html(html) => Ok(html.as_str().to_string()),
			LayoutObject::Layout(layout) => layout.render(form, renderer),
		}
	}
}

impl From<&str> for LayoutObject {
	fn from(name: &str) -> Self {
		LayoutObject::Field(name.to_string())
	}
}

impl From<String> for LayoutObject {
	fn from(name: String) -> Self {
		LayoutObject::Field(name)
	}
}

impl From<Fieldset> for LayoutObject {
	fn from(fieldset: Fieldset) -> Self {
		LayoutObject::Fieldset(fieldset)
	}
}

impl From<Row> for LayoutObject {
	fn from(row: Row) -> Self {
		LayoutObject::Row(row)
	}
}

impl From<Html> for LayoutObject {
	fn from(html: Html) -> Self {
		LayoutObject::Html(html)
	}
}

impl From<Layout> for LayoutObject {
	fn from(layout: Layout) -> Self {
		LayoutObject::Layout(layout)
	}
}

/// Render one field through the per-field template.
///
/// Unknown names render nothing.
pub(crate) fn render_field(
	name: &str,
	form: &Form,
	renderer: &dyn TemplateRenderer,
) -> UniFormResult<String> {
	match form.get_bound_field(name) {
		Some(field) => {
			let context = json!({ "field": FieldView::from_bound(&field) });
			Ok(renderer.render(FIELD_TEMPLATE, &context)?)
		}
		None => {
			tracing::debug!(
				"Layout references field '{}' which form '{}' does not declare, skipping",
				name,
				form.prefix()
			);
			Ok(String::new())
		}
	}
}

/// Ordered composition of layout objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
	objects: Vec<LayoutObject>,
}

impl Layout {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with(mut self, object: impl Into<LayoutObject>) -> Self {
		self.objects.push(object.into());
		self
	}
	pub fn push(&mut self, object: impl Into<LayoutObject>) {
		self.objects.push(object.into());
	}
	pub fn objects(&self) -> &[LayoutObject] {
		&self.objects
	}
	/// Concatenated markup of every object, in order
	pub fn render(&self, form: &Form, renderer: &dyn TemplateRenderer) -> UniFormResult<String> {
		let mut html = String::new();
		for object in &self.objects {
			html.push_str(&object.render(form, renderer)?);
		}
		Ok(html)
	}
}

impl<T: Into<LayoutObject>> FromIterator<T> for Layout {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			objects: iter.into_iter().map(Into::into).collect(),
		}
	}
}

/// A `<fieldset>` with an optional legend
#[derive(Debug, Clone, PartialEq)]
pub struct Fieldset {
	legend: String,
	css_class: Option<String>,
	children: Vec<LayoutObject>,
}

impl Fieldset {
	/// An empty legend renders no `<legend>` element
	pub fn new(legend: impl Into<String>) -> Self {
		Self {
			legend: legend.into(),
			css_class: None,
			children: Vec::new(),
		}
	}
	pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
		self.css_class = Some(css_class.into());
		self
	}
	pub fn field(mut self, name: impl Into<String>) -> Self {
		self.children.push(LayoutObject::Field(name.into()));
		self
	}
	pub fn row(mut self, row: Row) -> Self {
		self.children.push(LayoutObject::Row(row));
		self
	}
	pub fn html(mut self, html: Html) -> Self {
		self.children.push(LayoutObject::Html(html));
		self
	}
	pub fn with(mut self, child: impl Into<LayoutObject>) -> Self {
		self.children.push(child.into());
		self
	}
	pub fn legend(&self) -> &str {
		&self.legend
	}
	pub fn css_class(&self) -> Option<&str> {
		self.css_class.as_deref()
	}
	pub fn children(&self) -> &[LayoutObject] {
		&self.children
	}
	pub fn render(&self, form: &Form, renderer: &dyn TemplateRenderer) -> UniFormResult<String> {
		let mut html = match &self.css_class {
			Some(css_class) => format!(r#"<fieldset class="{}">"#, escape_html(css_class)),
			None => "<fieldset>".to_string(),
		};
		if !self.legend.is_empty() {
			html.push_str(&format!("<legend>{}</legend>", escape_html(&self.legend)));
		}
		for child in &self.children {
			html.push_str(&child.render(form, renderer)?);
		}
		html.push_str("</fieldset>");
		Ok(html)
	}
}

/// Fields rendered side by side on one line
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
	fields: Vec<String>,
	css_class: String,
}

impl Row {
	pub fn new<I, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			fields: fields.into_iter().map(Into::into).collect(),
			css_class: ROW_CSS_CLASS.to_string(),
		}
	}
	pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
		self.css_class = css_class.into();
		self
	}
	pub fn fields(&self) -> &[String] {
		&self.fields
	}
	pub fn render(&self, form: &Form, renderer: &dyn TemplateRenderer) -> UniFormResult<String> {
		let mut html = format!(r#"<div class="{}">"#, escape_html(&self.css_class));
		for name in &self.fields {
			html.push_str(&render_field(name, form, renderer)?);
		}
		html.push_str("</div>");
		Ok(html)
	}
}

/// Literal markup, emitted without escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
	pub fn new(html: impl Into<String>) -> Self {
		Html(html.into())
	}
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::Value;
	use uni_form_forms::{BooleanField, CharField};
	use uni_form_templates::TemplateResult;

	/// Renders each field as `[auto_id]` so layout structure is easy to assert
	fn stub_renderer(name: &str, context: &Value) -> TemplateResult<String> {
		assert_eq!(name, FIELD_TEMPLATE);
		Ok(format!("[{}]", context["field"]["auto_id"].as_str().unwrap_or("?")))
	}

	#[fixture]
	fn form() -> Form {
		Form::new()
			.field(BooleanField::new("is_company".to_string()))
			.field(CharField::new("email".to_string()))
			.field(CharField::new("password1".to_string()))
			.field(CharField::new("password2".to_string()))
	}

	#[rstest]
	fn test_empty_legend_is_omitted(form: Form) {
		let html = Fieldset::new("")
			.field("is_company")
			.render(&form, &stub_renderer)
			.unwrap();

		assert_eq!(html, "<fieldset>[id_is_company]</fieldset>");
	}

	#[rstest]
	fn test_legend_is_escaped(form: Form) {
		let html = Fieldset::new("Contact <details>")
			.render(&form, &stub_renderer)
			.unwrap();

		assert_eq!(
			html,
			"<fieldset><legend>Contact &lt;details&gt;</legend></fieldset>"
		);
	}

	#[rstest]
	fn test_fieldset_css_class(form: Form) {
		let html = Fieldset::new("")
			.with_css_class("inlineLabels")
			.render(&form, &stub_renderer)
			.unwrap();

		assert_eq!(html, r#"<fieldset class="inlineLabels"></fieldset>"#);
	}

	#[rstest]
	fn test_children_render_in_order(form: Form) {
		let layout = Layout::new().with(
			Fieldset::new("Contact details")
				.field("email")
				.row(Row::new(["password1", "password2"]))
				.html(Html::new("<hr/>"))
				.field("is_company"),
		);

		let html = layout.render(&form, &stub_renderer).unwrap();

		assert_eq!(
			html,
			concat!(
				"<fieldset><legend>Contact details</legend>",
				"[id_email]",
				r#"<div class="formRow">[id_password1][id_password2]</div>"#,
				"<hr/>",
				"[id_is_company]",
				"</fieldset>"
			)
		);
	}

	#[rstest]
	fn test_unknown_fields_are_skipped(form: Form) {
		let layout = Layout::new()
			.with(Fieldset::new("").field("nickname").field("email"))
			.with(Row::new(["password1", "missing"]).with_css_class("pair"));

		let first = layout.render(&form, &stub_renderer).unwrap();
		let second = layout.render(&form, &stub_renderer).unwrap();

		assert_eq!(
			first,
			r#"<fieldset>[id_email]</fieldset><div class="pair">[id_password1]</div>"#
		);
		assert_eq!(first, second);
	}

	#[rstest]
	fn test_layout_from_iterator() {
		let layout: Layout = ["email", "is_company"].into_iter().collect();

		assert_eq!(
			layout.objects(),
			[
				LayoutObject::Field("email".to_string()),
				LayoutObject::Field("is_company".to_string())
			]
		);
	}

	#[rstest]
	fn test_nested_layout(form: Form) {
		let inner = Layout::new().with("email");
		let layout = Layout::new().with(inner).with(Html::new("<br/>"));

		let html = layout.render(&form, &stub_renderer).unwrap();

		assert_eq!(html, "[id_email]<br/>");
	}
}
