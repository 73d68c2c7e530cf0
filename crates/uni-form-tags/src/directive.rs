//! Directive and filter syntax
//!
//! A directive is written `{% name arg1 arg2 %}` in a page. [`Directive::parse`]
//! takes the text between the delimiters. Arguments are context variable
//! names or quoted attribute strings.

use crate::error::{UniFormError, UniFormResult};
use std::fmt;
use std::str::FromStr;

/// A directive argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
	/// Name of a context variable
	Variable(String),
	/// Quoted string, stored without its quotes
	Literal(String),
}

impl Argument {
	fn from_token(token: &str) -> Self {
		let quoted = token.len() >= 2
			&& ((token.starts_with('"') && token.ends_with('"'))
				|| (token.starts_with('\'') && token.ends_with('\'')));
		if quoted {
			Argument::Literal(token[1..token.len() - 1].to_string())
		} else {
			Argument::Variable(token.to_string())
		}
	}
	fn into_variable(self, directive: &str) -> UniFormResult<String> {
		match self {
			Argument::Variable(name) => Ok(name),
			Argument::Literal(text) => Err(UniFormError::TemplateSyntax(format!(
				"'{}' expects a variable name as its first argument, got \"{}\"",
				directive, text
			))),
		}
	}
}

impl fmt::Display for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Argument::Variable(name) => f.write_str(name),
			Argument::Literal(text) => write!(f, "\"{}\"", text),
		}
	}
}

/// One of the four uni-form directives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
	/// `uni_form <form> [<helper>]`
	UniForm {
		form: String,
		helper: Option<Argument>,
	},
	/// `uni_form_set <formset> [<helper>]`
	UniFormSet {
		formset: String,
		helper: Option<Argument>,
	},
	/// `uni_form_jquery <form> [<attrs>]`
	UniFormJquery {
		form: String,
		attrs: Option<Argument>,
	},
	/// `uni_form_setup`
	UniFormSetup,
}

impl Directive {
	pub const NAMES: [&'static str; 4] = ["uni_form", "uni_form_set", "uni_form_jquery", "uni_form_setup"];

	/// Parse the contents of a directive tag
	///
	/// Arguments past the ones a directive takes are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use uni_form_tags::{Argument, Directive};
	///
	/// assert_eq!(
	///     Directive::parse("uni_form form helper").unwrap(),
	///     Directive::UniForm {
	///         form: "form".to_string(),
	///         helper: Some(Argument::Variable("helper".to_string())),
	///     }
	/// );
	/// assert_eq!(
	///     Directive::parse(r#"uni_form_jquery form "toggle_fields=id_email""#).unwrap(),
	///     Directive::UniFormJquery {
	///         form: "form".to_string(),
	///         attrs: Some(Argument::Literal("toggle_fields=id_email".to_string())),
	///     }
	/// );
	/// assert!(Directive::parse("uni_form").is_err());
	/// ```
	pub fn parse(contents: &str) -> UniFormResult<Self> {
		let mut tokens = split_contents(contents).into_iter();
		let name = tokens
			.next()
			.ok_or_else(|| UniFormError::TemplateSyntax("empty directive".to_string()))?;

		if name == "uni_form_setup" {
			return Ok(Directive::UniFormSetup);
		}
		if !Self::NAMES.contains(&name.as_str()) {
			return Err(UniFormError::TemplateSyntax(format!(
				"unknown directive '{}'",
				name
			)));
		}

		let target = tokens
			.next()
			.map(|token| Argument::from_token(&token))
			.ok_or_else(|| {
				UniFormError::TemplateSyntax(format!("'{}' requires at least one argument", name))
			})?
			.into_variable(&name)?;
		let second = tokens.next().map(|token| Argument::from_token(&token));

		Ok(match name.as_str() {
			"uni_form" => Directive::UniForm {
				form: target,
				helper: second,
			},
			"uni_form_set" => Directive::UniFormSet {
				formset: target,
				helper: second,
			},
			_ => Directive::UniFormJquery {
				form: target,
				attrs: second,
			},
		})
	}

	pub fn name(&self) -> &'static str {
		match self {
			Directive::UniForm { .. } => "uni_form",
			Directive::UniFormSet { .. } => "uni_form_set",
			Directive::UniFormJquery { .. } => "uni_form_jquery",
			Directive::UniFormSetup => "uni_form_setup",
		}
	}
}

impl FromStr for Directive {
	type Err = UniFormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// One of the four `as_uni_*` filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
	AsUniForm,
	AsUniFormSet,
	AsUniErrors,
	AsUniField,
}

impl Filter {
	pub fn name(&self) -> &'static str {
		match self {
			Filter::AsUniForm => "as_uni_form",
			Filter::AsUniFormSet => "as_uni_form_set",
			Filter::AsUniErrors => "as_uni_errors",
			Filter::AsUniField => "as_uni_field",
		}
	}
	pub fn template_name(&self) -> &'static str {
		match self {
			Filter::AsUniForm => "uni_form/uni_form.html",
			Filter::AsUniFormSet => "uni_form/uni_form_set.html",
			Filter::AsUniErrors => "uni_form/errors.html",
			Filter::AsUniField => "uni_form/field.html",
		}
	}
}

impl FromStr for Filter {
	type Err = UniFormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"as_uni_form" => Ok(Filter::AsUniForm),
			"as_uni_form_set" => Ok(Filter::AsUniFormSet),
			"as_uni_errors" => Ok(Filter::AsUniErrors),
			"as_uni_field" => Ok(Filter::AsUniField),
			other => Err(UniFormError::TemplateSyntax(format!(
				"unknown filter '{}'",
				other
			))),
		}
	}
}

/// Split tag contents on whitespace, keeping quoted strings (with their
/// quotes) as single tokens
///
/// # Examples
///
/// ```
/// use uni_form_tags::directive::split_contents;
///
/// assert_eq!(
///     split_contents(r#"uni_form form "class=a b;id=x""#),
///     vec!["uni_form", "form", r#""class=a b;id=x""#]
/// );
/// ```
pub fn split_contents(contents: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut quote: Option<char> = None;

	for c in contents.chars() {
		match quote {
			Some(q) => {
				current.push(c);
				if c == q {
					quote = None;
				}
			}
			None if c.is_whitespace() => {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
			}
			None => {
				if c == '"' || c == '\'' {
					quote = Some(c);
				}
				current.push(c);
			}
		}
	}
	if !current.is_empty() {
		tokens.push(current);
	}
	tokens
}
