//! Slug filters shared by the helper objects and the templates

use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Turn text into a slug usable in element ids and input names.
///
/// Lowercases, collapses every run of characters that are neither
/// alphanumeric nor `_` into a single `-` and trims `-` from both ends.
///
/// # Examples
///
/// ```
/// use uni_form_templates::slugify;
///
/// assert_eq!(slugify("my-submit"), "my-submit");
/// assert_eq!(slugify("Save & Continue!"), "save-continue");
/// assert_eq!(slugify("  first_name "), "first_name");
/// ```
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	let mut pending_separator = false;
	for c in text.chars() {
		if c.is_alphanumeric() || c == '_' {
			if pending_separator && !slug.is_empty() {
				slug.push('-');
			}
			pending_separator = false;
			slug.extend(c.to_lowercase());
		} else {
			pending_separator = true;
		}
	}
	slug
}

/// Slugify and replace hyphens with underscores, giving a value that is safe
/// as a script identifier.
///
/// ```
/// use uni_form_templates::namify;
///
/// assert_eq!(namify("id_form-0-email"), "id_form_0_email");
/// ```
pub fn namify(text: &str) -> String {
	slugify(text).replace('-', "_")
}

/// Tera filter wrapping [`slugify`]
///
/// ```tera
/// {{ input.name | slugify }}
/// ```
pub fn slugify_filter(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	let s = value
		.as_str()
		.ok_or_else(|| tera::Error::msg("slugify filter requires a string"))?;
	Ok(Value::String(slugify(s)))
}

/// Tera filter wrapping [`namify`]
pub fn namify_filter(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	let s = value
		.as_str()
		.ok_or_else(|| tera::Error::msg("namify filter requires a string"))?;
	Ok(Value::String(namify(s)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("my-submit", "my-submit")]
	#[case("My Submit", "my-submit")]
	#[case("--odd--name--", "odd-name")]
	#[case("a!!!b???c", "a-b-c")]
	#[case("keep_underscores", "keep_underscores")]
	#[case("!!!", "")]
	fn test_slugify(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(slugify(input), expected);
	}

	#[rstest]
	fn test_namify_replaces_hyphens() {
		assert_eq!(namify("Toggle Me-now"), "toggle_me_now");
	}

	#[rstest]
	fn test_slugify_filter_requires_string() {
		let args = HashMap::new();

		assert_eq!(
			slugify_filter(&json!("Hello World"), &args).unwrap(),
			json!("hello-world")
		);
		assert!(slugify_filter(&json!(1), &args).is_err());
	}
}
