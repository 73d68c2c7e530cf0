//! # uni-form
//!
//! Form rendering helpers that turn forms into uni-form markup.
//!
//! The workspace is split into three crates, re-exported here:
//!
//! - [`forms`] - forms, fields, widgets and formsets
//! - [`templates`] - the template renderer and the built-in `uni_form/*` templates
//! - [`tags`] - filters, directives, form helpers and layouts
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything
//! - `minimal` - forms and templates only
//! - `tags` - helpers, layouts, filters and directives
//!
//! ## Quick Example
//!
//! ```
//! use uni_form::{CharField, Form, FormHelper, Input, TemplateContext, UniForm};
//!
//! let mut helper = FormHelper::new().with_form_class("wide");
//! helper.add_input(Input::submit("save", "Save"));
//!
//! let mut context = TemplateContext::new();
//! context.insert("form", Form::new().field(CharField::new("email".to_string())));
//! context.insert("helper", helper);
//!
//! let html = UniForm::new()
//!     .unwrap()
//!     .expand("{% uni_form_setup %}{% uni_form form helper %}", &mut context)
//!     .unwrap();
//! assert!(html.contains("uni-form.jquery.js"));
//! assert!(html.contains(r#"class="uniForm wide""#));
//! ```

pub use uni_form_forms as forms;
#[cfg(feature = "tags")]
pub use uni_form_tags as tags;
pub use uni_form_templates as templates;

pub use uni_form_forms::{
	BooleanField, BoundField, CharField, ChoiceField, Form, FormField, FormSet, FormSetFactory,
	Widget, formset_factory,
};
#[cfg(feature = "tags")]
pub use uni_form_tags::{
	Fieldset, FormHelper, FormHelpersError, FormMethod, Html, Input, Layout, LayoutObject, Row,
	Settings, TemplateContext, UniForm, UniFormError, UniFormResult, parse_attrs,
};
pub use uni_form_templates::{TemplateError, TemplateRenderer, TemplateResult, TeraRenderer};
