//! TOML configuration for renderers and forms
//!
//! ```toml
//! [html]
//! encoding = "UTF-8"
//!
//! [forms]
//! checked = "loose"
//! selected = "strict"
//! ```
//!
//! Every key is optional; missing keys keep the defaults shown above.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vellum_forms::{FormBuilder, MatchPolicy};
use vellum_html::{Encoding, Html};

/// Error type for loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// `[html]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlSettings {
	pub encoding: Encoding,
}

/// Renderer and form settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	pub html: HtmlSettings,
	pub forms: MatchPolicy,
}

impl Settings {
	/// Parse settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use vellum::settings::Settings;
	/// use vellum::html::Encoding;
	///
	/// let settings = Settings::from_toml_str("[html]\nencoding = \"latin1\"").unwrap();
	/// assert_eq!(settings.html.encoding, Encoding::Iso8859_1);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Settings = toml::from_str(source)?;
		tracing::debug!(
			encoding = %settings.html.encoding,
			checked = ?settings.forms.checked,
			selected = ?settings.forms.selected,
			"loaded view settings"
		);
		Ok(settings)
	}

	/// Read and parse a TOML settings file
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Tag renderer using the configured encoding
	pub fn html(&self) -> Html {
		Html::from_encoding(self.html.encoding)
	}

	/// Form builder using the configured match policy
	pub fn form_builder(&self) -> FormBuilder {
		FormBuilder::new().match_policy(self.forms)
	}
}
