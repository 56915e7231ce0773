//! Error types for the resume2html library.
//!
//! One enum, one variant per failure class. The classes are ordered the way
//! a generation run encounters them: load the document, resolve the theme,
//! render, write. Everything propagates to the caller — there are no
//! fallback themes and no silently skipped fields, so a failure always
//! surfaces with its originating cause.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the resume2html library.
#[derive(Debug, Error)]
pub enum ResumeError {
    // ── Load errors ───────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file was read but is not valid YAML.
    #[error("Resume file '{path}' is not valid YAML: {detail}")]
    InvalidYaml { path: PathBuf, detail: String },

    /// The YAML parsed but its top level is not a mapping.
    #[error("Resume file '{path}' must contain a top-level mapping, got {kind}")]
    NotAMapping { path: PathBuf, kind: &'static str },

    // ── Theme errors ──────────────────────────────────────────────────────
    /// The named theme directory does not exist under the themes root.
    #[error("Theme '{theme}' not found under '{themes_dir}'\nAvailable themes are the sub-directories of the themes root; pass --themes-dir to point elsewhere.")]
    ThemeNotFound { theme: String, themes_dir: PathBuf },

    /// The theme directory exists but lacks a template or stylesheet.
    #[error("Theme '{theme}' is incomplete: missing '{missing}'\nA theme directory must contain both template.html and style.css.")]
    ThemeIncomplete { theme: String, missing: String },

    // ── Render errors ─────────────────────────────────────────────────────
    /// Template rendering failed. A document field the template references
    /// being absent surfaces here — fields are not pre-validated, so the
    /// tera message names the missing variable.
    #[error("Rendering with theme '{theme}' failed: {detail}")]
    RenderFailed { theme: String, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_not_found_display() {
        let e = ResumeError::ThemeNotFound {
            theme: "default".into(),
            themes_dir: PathBuf::from("themes"),
        };
        let msg = e.to_string();
        assert!(msg.contains("'default'"), "got: {msg}");
        assert!(msg.contains("themes"), "got: {msg}");
    }

    #[test]
    fn render_failed_display_names_theme() {
        let e = ResumeError::RenderFailed {
            theme: "compact".into(),
            detail: "Variable `resume.name` not found".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("compact"));
        assert!(msg.contains("resume.name"));
    }

    #[test]
    fn invalid_yaml_display() {
        let e = ResumeError::InvalidYaml {
            path: PathBuf::from("cv.yaml"),
            detail: "mapping values are not allowed".into(),
        };
        assert!(e.to_string().contains("cv.yaml"));
    }
}
