//! # uni-form templates
//!
//! Template rendering capability used by the uni-form directives.
//!
//! The directives never talk to a template engine directly. They hand a
//! template name and a JSON context to a [`TemplateRenderer`], which makes the
//! engine swappable. [`TeraRenderer`] is the default implementation and ships
//! the built-in `uni_form/*` templates.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use uni_form_templates::{TemplateRenderer, TeraRenderer};
//!
//! let renderer = TeraRenderer::new().unwrap();
//! let html = renderer
//!     .render("uni_form/includes.html", &json!({ "MEDIA_URL": "/media/" }))
//!     .unwrap();
//! assert!(html.contains("/media/uni_form/uni-form.css"));
//! ```

pub mod error;
pub mod escaping;
pub mod filters;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use escaping::{escape, escape_html};
pub use filters::{namify, namify_filter, slugify, slugify_filter};
pub use renderer::{BUILTIN_TEMPLATES, TemplateRenderer, TeraRenderer};
