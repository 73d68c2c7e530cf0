//! HTML escaping for rendered markup
//!
//! The built-in templates run with autoescaping disabled because most of what
//! they interpolate is markup produced by widgets and layouts. User-provided
//! text (labels, legends, error messages, attribute values) goes through
//! [`escape_html`] or the `escape` filter explicitly.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use uni_form_templates::escape_html;
///
/// assert_eq!(escape_html("<b>Contact & details</b>"),
///            "&lt;b&gt;Contact &amp; details&lt;/b&gt;");
/// assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Tera filter for HTML escaping
///
/// Non-string scalars are stringified first so numeric values can be escaped
/// in attribute position without a type error. `null` becomes an empty string.
///
/// ```tera
/// {{ field.label | escape }}
/// ```
pub fn escape(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	let s = match value {
		Value::String(s) => escape_html(s),
		Value::Null => String::new(),
		Value::Bool(_) | Value::Number(_) => value.to_string(),
		_ => return Err(tera::Error::msg("escape filter requires a scalar value")),
	};
	Ok(Value::String(s))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("plain text", "plain text")]
	#[case("<script>alert('x')</script>", "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;")]
	#[case("a & b", "a &amp; b")]
	#[case("", "")]
	fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_escape_filter_stringifies_scalars() {
		let args = HashMap::new();

		assert_eq!(escape(&json!(30), &args).unwrap(), json!("30"));
		assert_eq!(escape(&json!(null), &args).unwrap(), json!(""));
		assert_eq!(escape(&json!("<em>"), &args).unwrap(), json!("&lt;em&gt;"));
	}

	#[rstest]
	fn test_escape_filter_rejects_arrays() {
		let args = HashMap::new();

		assert!(escape(&json!(["a"]), &args).is_err());
	}
}
