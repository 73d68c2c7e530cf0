//! Attribute strings
//!
//! Directives accept helper settings inline as `key=value` pairs separated by
//! semicolons, for example
//! `id=signup;class=wide blue;submit=save|Save changes;toggle_fields=id_email`.

use crate::helper::{FormMethod, HelperAttributes};
use crate::input::Input;
use std::collections::BTreeSet;

/// Parse an attribute string into [`HelperAttributes`]
///
/// Malformed entries (no `=`, empty key, unknown form method) are skipped.
///
/// # Examples
///
/// ```
/// use uni_form_tags::{FormMethod, Input, parse_attrs};
///
/// let attrs = parse_attrs("id=signup; class=wide   blue ;form_method=get;submit=save|Save changes;reset=clear");
///
/// assert_eq!(attrs.id.as_deref(), Some("signup"));
/// assert_eq!(attrs.class.as_deref(), Some("wide blue"));
/// assert_eq!(attrs.form_method, Some(FormMethod::Get));
/// assert_eq!(
///     attrs.inputs,
///     vec![Input::submit("save", "Save changes"), Input::reset("clear", "clear")]
/// );
/// ```
pub fn parse_attrs(source: &str) -> HelperAttributes {
	let mut attrs = HelperAttributes::default();

	for entry in source.split(';') {
		let entry = entry.trim();
		if entry.is_empty() {
			continue;
		}
		let Some((key, value)) = entry.split_once('=') else {
			tracing::debug!("Skipping attribute entry without '=': '{}'", entry);
			continue;
		};
		let key = key.trim();
		let value = value.trim();
		if key.is_empty() {
			tracing::debug!("Skipping attribute entry with an empty key: '{}'", entry);
			continue;
		}

		match key {
			"class" => {
				attrs.class = Some(value.split_whitespace().collect::<Vec<_>>().join(" "));
			}
			"id" => attrs.id = Some(value.to_string()),
			"form_action" => attrs.form_action = Some(value.to_string()),
			"form_method" => match value.parse::<FormMethod>() {
				Ok(method) => attrs.form_method = Some(method),
				Err(err) => tracing::debug!("Skipping form_method attribute: {}", err),
			},
			"toggle_fields" => {
				attrs
					.toggle_fields
					.get_or_insert_with(BTreeSet::new)
					.extend(split_field_list(value));
			}
			_ => {
				let (name, label) = match value.split_once('|') {
					Some((name, label)) => (name.trim(), label.trim()),
					None => (value, value),
				};
				match Input::from_key(key, name, label) {
					Some(input) => attrs.inputs.push(input),
					None => {
						attrs.extra.insert(key.to_string(), value.to_string());
					}
				}
			}
		}
	}

	attrs
}

fn split_field_list(value: &str) -> impl Iterator<Item = String> + '_ {
	value
		.split(|c: char| c == ',' || c.is_whitespace())
		.filter(|name| !name.is_empty())
		.map(str::to_string)
}
