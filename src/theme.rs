//! Theme resolution: locate a theme directory and load its parts.
//!
//! A theme is nothing more than a directory under the themes root holding a
//! `template.html` (tera template) and a `style.css` (raw text, injected
//! into the rendered page verbatim). Resolution is the only validation the
//! pipeline performs up front — a missing theme fails here, before any
//! rendering is attempted and before any output file is touched.

use crate::config::GenerationConfig;
use crate::error::ResumeError;
use std::path::PathBuf;
use tracing::debug;

/// File name of the tera template inside a theme directory.
pub const TEMPLATE_FILE: &str = "template.html";
/// File name of the stylesheet inside a theme directory.
pub const STYLE_FILE: &str = "style.css";

/// A resolved theme: template source and stylesheet text, loaded once.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name, as configured.
    pub name: String,
    /// Directory the theme was loaded from.
    pub dir: PathBuf,
    /// Raw tera template source.
    pub template: String,
    /// Raw stylesheet text. Injected into the page unprocessed.
    pub style: String,
}

impl Theme {
    /// Resolve and load the theme named in `config`.
    ///
    /// # Errors
    /// - [`ResumeError::ThemeNotFound`] when the theme directory does not exist.
    /// - [`ResumeError::ThemeIncomplete`] when the directory exists but the
    ///   template or stylesheet is missing or unreadable.
    pub fn resolve(config: &GenerationConfig) -> Result<Self, ResumeError> {
        let dir = config.themes_dir.join(&config.theme);
        if !dir.is_dir() {
            return Err(ResumeError::ThemeNotFound {
                theme: config.theme.clone(),
                themes_dir: config.themes_dir.clone(),
            });
        }

        let template = read_part(&dir, TEMPLATE_FILE, &config.theme)?;
        let style = read_part(&dir, STYLE_FILE, &config.theme)?;

        debug!(
            "Resolved theme '{}' from {} ({} template bytes, {} style bytes)",
            config.theme,
            dir.display(),
            template.len(),
            style.len()
        );

        Ok(Self {
            name: config.theme.clone(),
            dir,
            template,
            style,
        })
    }
}

fn read_part(dir: &std::path::Path, file: &str, theme: &str) -> Result<String, ResumeError> {
    std::fs::read_to_string(dir.join(file)).map_err(|_| ResumeError::ThemeIncomplete {
        theme: theme.to_string(),
        missing: file.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    fn theme_config(root: &std::path::Path, theme: &str) -> GenerationConfig {
        GenerationConfig::builder()
            .theme(theme)
            .themes_dir(root)
            .build()
            .unwrap()
    }

    #[test]
    fn missing_theme_dir_is_theme_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = Theme::resolve(&theme_config(root.path(), "nope")).unwrap_err();
        assert!(matches!(err, ResumeError::ThemeNotFound { .. }), "got: {err}");
    }

    #[test]
    fn theme_dir_without_template_is_incomplete() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("bare");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join(STYLE_FILE), "body {}").unwrap();

        let err = Theme::resolve(&theme_config(root.path(), "bare")).unwrap_err();
        match err {
            ResumeError::ThemeIncomplete { missing, .. } => {
                assert_eq!(missing, TEMPLATE_FILE);
            }
            other => panic!("expected ThemeIncomplete, got: {other}"),
        }
    }

    #[test]
    fn complete_theme_loads_both_parts() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("mini");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join(TEMPLATE_FILE), "<html>{{ resume.name }}</html>").unwrap();
        std::fs::write(dir.join(STYLE_FILE), "body { margin: 0; }").unwrap();

        let theme = Theme::resolve(&theme_config(root.path(), "mini")).unwrap();
        assert_eq!(theme.name, "mini");
        assert!(theme.template.contains("resume.name"));
        assert!(theme.style.contains("margin"));
    }
}
