//! Design system settings loaded from TOML.
//!
//! ```toml
//! name = "docs"
//! unknown_slots = "ignore"
//! wrapper = "annotate"
//! title = "Documentation"
//!
//! [[ua_dependencies]]
//! mount_point = "/static/app.css"
//! canonical_source = "assets/app.css"
//! mime_type = "text/css"
//!
//! [ua_dependencies.cache]
//! max_age_seconds = 3600
//! immutable = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::asset::UaDependency;
use crate::policy::{Policies, UnknownSlotPolicy, WrapperPolicy};

/// Errors raised while loading settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The file could not be read.
	#[error("failed to read settings from {path}: {source}")]
	Io {
		/// File path.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: std::io::Error,
	},

	/// The file is not valid settings TOML.
	#[error("invalid settings: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Deployment-level overrides for a design system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSystemSettings {
	/// Replaces the design system name.
	pub name: Option<String>,
	/// Unknown slot handling. Left as configured in code when absent.
	pub unknown_slots: Option<UnknownSlotPolicy>,
	/// Region wrapper behavior. Left as configured in code when absent.
	pub wrapper: Option<WrapperPolicy>,
	/// Default document title.
	pub title: Option<String>,
	/// Extra user-agent dependencies.
	pub ua_dependencies: Vec<UaDependency>,
}

impl DesignSystemSettings {
	/// Parses settings from a TOML string.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded design system settings");
		Ok(settings)
	}

	/// Layers the policies set in these settings over `base`.
	pub fn apply_policies(&self, base: Policies) -> Policies {
		Policies {
			unknown_slots: self.unknown_slots.unwrap_or(base.unknown_slots),
			wrapper: self.wrapper.unwrap_or(base.wrapper),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::asset::CacheDirectives;
	use rstest::rstest;
	use std::io::Write;

	const SAMPLE: &str = r#"
name = "docs"
unknown_slots = "ignore"
wrapper = "annotate"
title = "Documentation"

[[ua_dependencies]]
mount_point = "/static/app.css"
canonical_source = "assets/app.css"
mime_type = "text/css"

[ua_dependencies.cache]
max_age_seconds = 3600
immutable = true

[[ua_dependencies]]
mount_point = "/static/app.js"
canonical_source = "assets/app.ts"
mime_type = "text/javascript"
as_module = true
"#;

	#[rstest]
	fn test_parse_full_settings() {
		let settings = DesignSystemSettings::from_toml_str(SAMPLE).unwrap();
		assert_eq!(settings.name.as_deref(), Some("docs"));
		assert_eq!(settings.unknown_slots, Some(UnknownSlotPolicy::Ignore));
		assert_eq!(settings.wrapper, Some(WrapperPolicy::Annotate));
		assert_eq!(settings.title.as_deref(), Some("Documentation"));
		assert_eq!(settings.ua_dependencies.len(), 2);
		assert_eq!(
			settings.ua_dependencies[0].cache,
			Some(CacheDirectives::max_age(3600).immutable())
		);
		assert!(settings.ua_dependencies[1].as_module);
	}

	#[rstest]
	fn test_empty_settings_use_defaults() {
		let settings = DesignSystemSettings::from_toml_str("").unwrap();
		assert_eq!(settings, DesignSystemSettings::default());
		let base = Policies::default().with_wrapper(WrapperPolicy::Annotate);
		assert_eq!(settings.apply_policies(base), base);
	}

	#[rstest]
	fn test_partial_settings_keep_unset_policies() {
		let settings = DesignSystemSettings::from_toml_str("wrapper = \"bare\"").unwrap();
		let base = Policies::default()
			.with_unknown_slots(UnknownSlotPolicy::Ignore)
			.with_wrapper(WrapperPolicy::Annotate);
		assert_eq!(
			settings.apply_policies(base),
			Policies::default().with_unknown_slots(UnknownSlotPolicy::Ignore)
		);
	}

	#[rstest]
	fn test_unknown_field_rejected() {
		let err = DesignSystemSettings::from_toml_str("colour = \"blue\"").unwrap_err();
		assert!(matches!(err, SettingsError::Toml(_)));
	}

	#[rstest]
	fn test_from_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(SAMPLE.as_bytes()).unwrap();
		let settings = DesignSystemSettings::from_path(file.path()).unwrap();
		assert_eq!(settings.name.as_deref(), Some("docs"));
	}

	#[rstest]
	fn test_missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let err = DesignSystemSettings::from_path(&path).unwrap_err();
		assert!(matches!(err, SettingsError::Io { path: ref p, .. } if p == &path));
	}
}
