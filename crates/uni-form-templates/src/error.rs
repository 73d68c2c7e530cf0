//! Template error types

use thiserror::Error;

/// Errors raised while loading or rendering templates
#[derive(Debug, Error)]
pub enum TemplateError {
	#[error("Template not found: {0}")]
	TemplateNotFound(String),
	#[error("Failed to render template '{template}': {message}")]
	Render { template: String, message: String },
	#[error("Invalid template context: {0}")]
	Context(String),
	#[error("Failed to load templates: {0}")]
	Load(String),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Flatten a Tera error and its sources into one message.
///
/// Tera nests the interesting part (missing variable, bad filter argument)
/// a few levels down the source chain.
pub(crate) fn describe(error: &tera::Error) -> String {
	let mut message = error.to_string();
	let mut source = std::error::Error::source(error);
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

impl TemplateError {
	pub(crate) fn from_tera(template: &str, error: tera::Error) -> Self {
		match &error.kind {
			tera::ErrorKind::TemplateNotFound(name) => Self::TemplateNotFound(name.clone()),
			_ => Self::Render {
				template: template.to_string(),
				message: describe(&error),
			},
		}
	}
}
