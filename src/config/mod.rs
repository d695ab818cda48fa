//! Hover cross-reference configuration.
//!
//! All keys live flat in the host build configuration, so any TOML document
//! carrying them can be handed to [`HoverxrefConfig::from_str`]. Unrelated
//! keys and tables are ignored.
//!
//! # Keys
//!
//! | Key                     | Default | Purpose                                           |
//! |-------------------------|---------|---------------------------------------------------|
//! | `hoverxref_project`     | `""`    | Project slug sent to the preview endpoint         |
//! | `hoverxref_version`     | `""`    | Version slug sent to the preview endpoint         |
//! | `hoverxref_auto_ref`    | `false` | Annotate every named reference, not just the role |
//! | `hoverxref_roles`       | `[]`    | Object-type roles to annotate                     |
//! | `hoverxref_domains`     | `[]`    | Code API domains to annotate (e.g. `["py"]`)      |
//! | `hoverxref_ignore_refs` | `[]`    | Targets that never receive annotation             |
//!
//! # Example
//!
//! ```toml
//! hoverxref_project = "myproject"
//! hoverxref_version = "myversion"
//! hoverxref_auto_ref = true
//! hoverxref_domains = ["py"]
//! hoverxref_ignore_refs = ["genindex", "search"]
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs, path::Path};

/// Annotation settings, read-only for the duration of a build.
///
/// Annotation is enabled only while both `hoverxref_project` and
/// `hoverxref_version` are non-empty; see [`HoverxrefConfig::is_configured`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverxrefConfig {
    /// Project slug the client script passes to the preview endpoint.
    pub hoverxref_project: String,

    /// Version slug the client script passes to the preview endpoint.
    pub hoverxref_version: String,

    /// Annotate every named reference instead of only the `hoverxref` role.
    pub hoverxref_auto_ref: bool,

    /// Object-type roles (e.g. `confval`) whose references get annotated.
    pub hoverxref_roles: HashSet<String>,

    /// Code API domains whose references get annotated (e.g. `py`).
    pub hoverxref_domains: HashSet<String>,

    /// Reference targets that are never annotated.
    pub hoverxref_ignore_refs: HashSet<String>,
}

impl HoverxrefConfig {
    /// Parse configuration from a TOML string.
    ///
    /// Unknown keys are tolerated: the hoverxref keys usually sit inside a
    /// larger host configuration.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Whether annotation is enabled at all.
    ///
    /// Both project and version are required; with either missing every
    /// reference passes through unannotated.
    pub fn is_configured(&self) -> bool {
        !self.hoverxref_project.is_empty() && !self.hoverxref_version.is_empty()
    }

    /// Whether a target is excluded through `hoverxref_ignore_refs`.
    pub fn is_ignored(&self, target: &str) -> bool {
        self.hoverxref_ignore_refs.contains(target)
    }

    /// Fill an empty project/version from the `READTHEDOCS_PROJECT` and
    /// `READTHEDOCS_VERSION` environment variables.
    ///
    /// Hosted builds export both, so a project built there usually needs no
    /// explicit `hoverxref_project`/`hoverxref_version` keys. Explicit
    /// values always win over the environment.
    pub fn update_with_env(&mut self) {
        Self::update_empty(
            &mut self.hoverxref_project,
            env::var("READTHEDOCS_PROJECT").ok(),
        );
        Self::update_empty(
            &mut self.hoverxref_version,
            env::var("READTHEDOCS_VERSION").ok(),
        );
    }

    /// Set a field from a fallback value, keeping any explicit value.
    fn update_empty(field: &mut String, value: Option<String>) {
        if field.is_empty()
            && let Some(value) = value
        {
            *field = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = HoverxrefConfig::from_str(
            r#"
            hoverxref_project = "myproject"
            hoverxref_version = "myversion"
            hoverxref_auto_ref = true
            hoverxref_roles = ["confval", "setting"]
            hoverxref_domains = ["py"]
            hoverxref_ignore_refs = ["genindex", "search"]
            "#,
        )
        .unwrap();

        assert_eq!(config.hoverxref_project, "myproject");
        assert_eq!(config.hoverxref_version, "myversion");
        assert!(config.hoverxref_auto_ref);
        assert!(config.hoverxref_roles.contains("confval"));
        assert!(config.hoverxref_roles.contains("setting"));
        assert!(config.hoverxref_domains.contains("py"));
        assert!(config.hoverxref_ignore_refs.contains("genindex"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_defaults() {
        let config = HoverxrefConfig::from_str("").unwrap();

        assert_eq!(config.hoverxref_project, "");
        assert_eq!(config.hoverxref_version, "");
        assert!(!config.hoverxref_auto_ref);
        assert!(config.hoverxref_roles.is_empty());
        assert!(config.hoverxref_domains.is_empty());
        assert!(config.hoverxref_ignore_refs.is_empty());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_unknown_keys_tolerated() {
        // The keys normally sit inside a larger host configuration.
        let config = HoverxrefConfig::from_str(
            r#"
            title = "My Docs"
            hoverxref_project = "myproject"
            hoverxref_version = "myversion"

            [build]
            output = "public"
            "#,
        )
        .unwrap();

        assert_eq!(config.hoverxref_project, "myproject");
        assert!(config.is_configured());
    }

    #[test]
    fn test_invalid_toml() {
        let result = HoverxrefConfig::from_str("hoverxref_project = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_value_type_rejected() {
        let result = HoverxrefConfig::from_str(r#"hoverxref_auto_ref = "yes""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_is_configured_requires_both_slugs() {
        let project_only =
            HoverxrefConfig::from_str(r#"hoverxref_project = "myproject""#).unwrap();
        assert!(!project_only.is_configured());

        let version_only =
            HoverxrefConfig::from_str(r#"hoverxref_version = "myversion""#).unwrap();
        assert!(!version_only.is_configured());

        let both = HoverxrefConfig::from_str(
            r#"
            hoverxref_project = "myproject"
            hoverxref_version = "myversion"
            "#,
        )
        .unwrap();
        assert!(both.is_configured());
    }

    #[test]
    fn test_is_ignored() {
        let config =
            HoverxrefConfig::from_str(r#"hoverxref_ignore_refs = ["section-i"]"#).unwrap();

        assert!(config.is_ignored("section-i"));
        assert!(!config.is_ignored("section-ii"));
    }

    #[test]
    fn test_update_empty_fills_only_empty_fields() {
        let mut field = String::new();
        HoverxrefConfig::update_empty(&mut field, Some("fromenv".to_string()));
        assert_eq!(field, "fromenv");

        let mut field = "explicit".to_string();
        HoverxrefConfig::update_empty(&mut field, Some("fromenv".to_string()));
        assert_eq!(field, "explicit");

        let mut field = String::new();
        HoverxrefConfig::update_empty(&mut field, None);
        assert_eq!(field, "");
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.toml");
        fs::write(
            &path,
            "hoverxref_project = \"myproject\"\nhoverxref_version = \"myversion\"\n",
        )
        .unwrap();

        let config = HoverxrefConfig::from_path(&path).unwrap();
        assert_eq!(config.hoverxref_project, "myproject");
        assert_eq!(config.hoverxref_version, "myversion");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HoverxrefConfig::from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }
}
