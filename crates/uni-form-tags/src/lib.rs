//! uni-form directives, helpers and layouts
//!
//! This crate turns forms into uni-form markup:
//! - `as_uni_form`, `as_uni_form_set`, `as_uni_errors` and `as_uni_field` filters
//! - `uni_form`, `uni_form_set`, `uni_form_jquery` and `uni_form_setup` directives
//! - form helpers carrying form attributes, buttons and an optional layout
//! - layouts grouping fields into fieldsets and rows
//! - attribute strings (`id=signup;submit=save|Save`) as an inline helper
//! - page expansion replacing directives and filters in a template source
//!
//! ## Example
//!
//! ```
//! use uni_form_forms::{BooleanField, CharField, Form};
//! use uni_form_tags::{Fieldset, FormHelper, Input, Layout, Row, TemplateContext, UniForm};
//!
//! let form = Form::new()
//!     .field(BooleanField::new("is_company".to_string()))
//!     .field(CharField::new("email".to_string()))
//!     .field(CharField::new("password1".to_string()))
//!     .field(CharField::new("password2".to_string()));
//!
//! let mut helper = FormHelper::new().with_form_id("signup");
//! helper.add_input(Input::submit("save", "Sign up"));
//! helper.add_layout(
//!     Layout::new()
//!         .with(Fieldset::new("").field("is_company"))
//!         .with(
//!             Fieldset::new("Contact details")
//!                 .field("email")
//!                 .row(Row::new(["password1", "password2"])),
//!         ),
//! );
//!
//! let mut context = TemplateContext::new();
//! context.insert("form", form);
//! context.insert("helper", helper);
//!
//! let page = UniForm::new()
//!     .unwrap()
//!     .expand("{% load uni_form_tags %}{% uni_form form helper %}", &mut context)
//!     .unwrap();
//! assert!(page.contains("<fieldset><legend>Contact details</legend>"));
//! assert!(page.contains(r#"id="submit-id-save""#));
//! ```

pub mod attrs;
pub mod context;
pub mod directive;
pub mod error;
pub mod helper;
pub mod input;
pub mod layout;
pub mod library;
pub mod response;
pub mod settings;
pub mod views;

pub use attrs::parse_attrs;
pub use context::{ContextValue, TemplateContext};
pub use directive::{Argument, Directive, Filter};
pub use error::{UniFormError, UniFormResult};
pub use helper::{FormHelper, FormHelpersError, FormMethod, HelperAttributes, Toggle};
pub use input::Input;
pub use layout::{Fieldset, Html, Layout, LayoutObject, Row};
pub use library::UniForm;
pub use response::ResponseContext;
pub use settings::Settings;
pub use views::{ErrorEntry, FieldView, FormSetView, FormView};
