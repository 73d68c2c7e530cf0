use crate::helper::FormHelpersError;
use thiserror::Error;
use uni_form_templates::TemplateError;

#[derive(Debug, Error)]
pub enum UniFormError {
	/// A directive argument names a variable the context does not hold
	#[error("Failed lookup for key [{0}] in template context")]
	VariableDoesNotExist(String),
	#[error("Template variable '{name}' is not a {expected}")]
	UnexpectedVariableType { name: String, expected: &'static str },
	/// A directive was asked for a combination it does not support
	#[error("Not implemented: {0}")]
	NotImplemented(String),
	#[error("Template syntax error: {0}")]
	TemplateSyntax(String),
	#[error(transparent)]
	Template(#[from] TemplateError),
	#[error(transparent)]
	Helper(#[from] FormHelpersError),
	#[error("Failed to build template context: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type UniFormResult<T> = Result<T, UniFormError>;
