//! Configuration for resume generation.
//!
//! Every knob lives in [`GenerationConfig`], built via its
//! [`GenerationConfigBuilder`]. One struct makes it trivial to share a
//! config between the CLI and library callers and to diff two runs when
//! their outputs differ.

use crate::error::ResumeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The contact sub-field holding named external profile links when no
/// override is configured. The field is rendered as a block of anchors
/// rather than as a regular contact row.
pub const DEFAULT_LINK_PROFILES_KEY: &str = "github";

/// Configuration for one HTML generation run.
///
/// Built via [`GenerationConfig::builder()`] or
/// [`GenerationConfig::default()`].
///
/// # Example
/// ```rust
/// use resume2html::GenerationConfig;
///
/// let config = GenerationConfig::builder()
///     .theme("compact")
///     .themes_dir("my-themes")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Theme name. Must match a sub-directory of `themes_dir`. Default: "default".
    pub theme: String,

    /// Root directory containing theme sub-directories. Default: "themes".
    ///
    /// Each theme is a directory holding `template.html` and `style.css`;
    /// nothing else about a theme is special-cased, so adding a theme is
    /// dropping a directory in place.
    pub themes_dir: PathBuf,

    /// Name of the reserved contact sub-field holding profile links.
    /// Default: [`DEFAULT_LINK_PROFILES_KEY`].
    ///
    /// This field is excluded from the contact columns and rendered as its
    /// own anchor block instead.
    pub link_profiles_key: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            themes_dir: PathBuf::from("themes"),
            link_profiles_key: DEFAULT_LINK_PROFILES_KEY.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Create a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Debug)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.theme = theme.into();
        self
    }

    pub fn themes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.themes_dir = dir.into();
        self
    }

    pub fn link_profiles_key(mut self, key: impl Into<String>) -> Self {
        self.config.link_profiles_key = key.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GenerationConfig, ResumeError> {
        let c = &self.config;
        if c.theme.is_empty() {
            return Err(ResumeError::InvalidConfig(
                "Theme name must not be empty".into(),
            ));
        }
        // A theme name with a path separator would escape the themes root.
        if c.theme.contains('/') || c.theme.contains('\\') {
            return Err(ResumeError::InvalidConfig(format!(
                "Theme name must not contain path separators, got '{}'",
                c.theme
            )));
        }
        if c.link_profiles_key.is_empty() {
            return Err(ResumeError::InvalidConfig(
                "Link-profiles key must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GenerationConfig::default();
        assert_eq!(c.theme, "default");
        assert_eq!(c.themes_dir, PathBuf::from("themes"));
        assert_eq!(c.link_profiles_key, "github");
    }

    #[test]
    fn builder_sets_fields() {
        let c = GenerationConfig::builder()
            .theme("compact")
            .themes_dir("/opt/themes")
            .link_profiles_key("profiles")
            .build()
            .unwrap();
        assert_eq!(c.theme, "compact");
        assert_eq!(c.themes_dir, PathBuf::from("/opt/themes"));
        assert_eq!(c.link_profiles_key, "profiles");
    }

    #[test]
    fn empty_theme_rejected() {
        let err = GenerationConfig::builder().theme("").build().unwrap_err();
        assert!(matches!(err, ResumeError::InvalidConfig(_)));
    }

    #[test]
    fn theme_with_separator_rejected() {
        let err = GenerationConfig::builder()
            .theme("../escape")
            .build()
            .unwrap_err();
        assert!(matches!(err, ResumeError::InvalidConfig(_)));
    }
}
