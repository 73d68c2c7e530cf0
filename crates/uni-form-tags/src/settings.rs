//! Rendering settings
//!
//! Only the media URL is configurable. It prefixes the stylesheet and script
//! paths emitted by the setup directive when the page context does not define
//! `MEDIA_URL` itself.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the media URL
pub const MEDIA_URL_ENV: &str = "MEDIA_URL";

pub const DEFAULT_MEDIA_URL: &str = "/media/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Base URL of static media, normally ending with `/`
	pub media_url: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			media_url: DEFAULT_MEDIA_URL.to_string(),
		}
	}
}

impl Settings {
	/// Settings with `media_url` taken from `MEDIA_URL`, when set and non-empty
	pub fn from_env() -> Self {
		match env::var(MEDIA_URL_ENV) {
			Ok(media_url) if !media_url.trim().is_empty() => Self {
				media_url: media_url.trim().to_string(),
			},
			_ => {
				tracing::debug!(
					"{} is not set, using default media URL '{}'",
					MEDIA_URL_ENV,
					DEFAULT_MEDIA_URL
				);
				Self::default()
			}
		}
	}
	pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
		self.media_url = media_url.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial]
	fn test_from_env_reads_media_url() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var(MEDIA_URL_ENV, "https://cdn.example.com/");
		}

		let settings = Settings::from_env();

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var(MEDIA_URL_ENV);
		}
		assert_eq!(settings.media_url, "https://cdn.example.com/");
	}

	#[rstest]
	#[serial]
	fn test_from_env_falls_back_to_default() {
		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var(MEDIA_URL_ENV);
		}

		assert_eq!(Settings::from_env(), Settings::default());
	}

	#[rstest]
	fn test_deserialize_with_defaults() {
		let empty: Settings = serde_json::from_str("{}").unwrap();
		let custom: Settings = serde_json::from_str(r#"{"media_url": "/static/"}"#).unwrap();

		assert_eq!(empty.media_url, DEFAULT_MEDIA_URL);
		assert_eq!(custom, Settings::default().with_media_url("/static/"));
	}
}
