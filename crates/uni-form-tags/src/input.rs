//! Button-like inputs rendered in a form's button holder

use serde::ser::{Serialize, SerializeStruct, Serializer};
use uni_form_templates::slugify;

/// A submit, reset, hidden or generic button input
///
/// Display attributes are derived from the kind and the slugified name:
///
/// ```
/// use uni_form_tags::Input;
///
/// let submit = Input::submit("my-submit", "Submit");
/// assert_eq!(submit.input_type(), "submit");
/// assert_eq!(submit.field_classes(), "submit submitButton");
/// assert_eq!(submit.element_id(), "submit-id-my-submit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	Submit { name: String, value: String },
	Reset { name: String, value: String },
	Hidden { name: String, value: String },
	Button { name: String, value: String },
}

impl Input {
	pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Submit {
			name: name.into(),
			value: value.into(),
		}
	}
	pub fn reset(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Reset {
			name: name.into(),
			value: value.into(),
		}
	}
	pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Hidden {
			name: name.into(),
			value: value.into(),
		}
	}
	pub fn button(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Button {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Build an input from an attribute-string key (`submit`, `reset`,
	/// `hidden`, `button`); other keys yield `None`
	pub fn from_key(key: &str, name: impl Into<String>, value: impl Into<String>) -> Option<Self> {
		match key {
			"submit" => Some(Self::submit(name, value)),
			"reset" => Some(Self::reset(name, value)),
			"hidden" => Some(Self::hidden(name, value)),
			"button" => Some(Self::button(name, value)),
			_ => None,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Submit { name, .. }
			| Self::Reset { name, .. }
			| Self::Hidden { name, .. }
			| Self::Button { name, .. } => name,
		}
	}

	pub fn value(&self) -> &str {
		match self {
			Self::Submit { value, .. }
			| Self::Reset { value, .. }
			| Self::Hidden { value, .. }
			| Self::Button { value, .. } => value,
		}
	}

	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Submit { .. } => "submit",
			Self::Reset { .. } => "reset",
			Self::Hidden { .. } => "hidden",
			Self::Button { .. } => "button",
		}
	}

	pub fn field_classes(&self) -> &'static str {
		match self {
			Self::Submit { .. } => "submit submitButton",
			Self::Reset { .. } => "reset resetButton",
			Self::Hidden { .. } => "hidden",
			Self::Button { .. } => "button",
		}
	}

	pub fn slug(&self) -> String {
		slugify(self.name())
	}

	pub fn element_id(&self) -> String {
		format!("{}-id-{}", self.input_type(), self.slug())
	}
}

impl Serialize for Input {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("Input", 6)?;
		state.serialize_field("input_type", self.input_type())?;
		state.serialize_field("name", self.name())?;
		state.serialize_field("value", self.value())?;
		state.serialize_field("field_classes", self.field_classes())?;
		state.serialize_field("slug", &self.slug())?;
		state.serialize_field("id", &self.element_id())?;
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Input::submit("my-submit", "Submit"), "submit", "submit submitButton", "submit-id-my-submit")]
	#[case(Input::reset("my-reset", "Reset"), "reset", "reset resetButton", "reset-id-my-reset")]
	#[case(Input::hidden("my-hidden", "Hidden"), "hidden", "hidden", "hidden-id-my-hidden")]
	#[case(Input::button("my-button", "Button"), "button", "button", "button-id-my-button")]
	fn test_derived_attributes(
		#[case] input: Input,
		#[case] input_type: &str,
		#[case] classes: &str,
		#[case] id: &str,
	) {
		assert_eq!(input.input_type(), input_type);
		assert_eq!(input.field_classes(), classes);
		assert_eq!(input.element_id(), id);
	}

	#[rstest]
	fn test_id_uses_slugified_name() {
		let input = Input::submit("Save & Continue", "Save");

		assert_eq!(input.slug(), "save-continue");
		assert_eq!(input.element_id(), "submit-id-save-continue");
	}

	#[rstest]
	fn test_from_key() {
		assert_eq!(
			Input::from_key("reset", "clear", "Clear"),
			Some(Input::reset("clear", "Clear"))
		);
		assert_eq!(Input::from_key("class", "a", "b"), None);
	}

	#[rstest]
	fn test_serializes_display_attributes() {
		let value = serde_json::to_value(Input::button("My Button", "Go")).unwrap();

		assert_eq!(
			value,
			json!({
				"input_type": "button",
				"name": "My Button",
				"value": "Go",
				"field_classes": "button",
				"slug": "my-button",
				"id": "button-id-my-button",
			})
		);
	}
}
