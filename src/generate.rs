//! Top-level generation entry points.
//!
//! A generation run is a straight line through the pipeline stages; there
//! is no concurrency and no shared state between runs, so the same document
//! and theme always produce byte-identical output.

use crate::config::GenerationConfig;
use crate::error::ResumeError;
use crate::output::{DocumentSummary, GenerationOutput, GenerationStats};
use crate::pipeline::{context, load, postprocess, render};
use crate::theme::Theme;
use serde_yaml::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Generate styled HTML from a resume YAML file.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// - Load errors when the file is missing, unreadable, or not valid YAML
/// - [`ResumeError::ThemeNotFound`] / [`ResumeError::ThemeIncomplete`]
///   before any rendering is attempted
/// - [`ResumeError::RenderFailed`] when the theme references a document
///   field that is absent (fields are not pre-validated)
pub fn generate(
    input: impl AsRef<Path>,
    config: &GenerationConfig,
) -> Result<GenerationOutput, ResumeError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    info!(
        "Starting generation: {} (theme '{}')",
        input.display(),
        config.theme
    );

    // ── Step 1: Load document ────────────────────────────────────────────
    let document = load::load_document(input)?;

    // ── Step 2: Resolve theme ────────────────────────────────────────────
    let theme = Theme::resolve(config)?;

    // ── Step 3: Build view context ───────────────────────────────────────
    let (view, counts) = context::build_context(&document, &theme, config)?;

    // ── Step 4: Render ───────────────────────────────────────────────────
    let render_start = Instant::now();
    let renderer = render::Renderer::new(&theme)?;
    let html = renderer.render(&view)?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    debug!("Rendered {} bytes in {}ms", html.len(), render_duration_ms);

    // ── Step 5: Tidy ─────────────────────────────────────────────────────
    let html = postprocess::tidy_html(&html);

    let stats = GenerationStats {
        contact_items: counts.contact_items,
        link_profiles: counts.link_profiles,
        html_bytes: html.len(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        render_duration_ms,
    };

    info!(
        "Generation complete: {} bytes, {}ms total",
        stats.html_bytes, stats.total_duration_ms
    );

    Ok(GenerationOutput {
        html,
        theme: theme.name,
        stats,
    })
}

/// Generate HTML and write it to a file.
///
/// Uses atomic write (temp file + rename), so a render failure — including
/// a missing document field discovered mid-template — can never leave a
/// truncated file at the destination path.
pub fn generate_to_file(
    input: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &GenerationConfig,
) -> Result<GenerationStats, ResumeError> {
    let output = generate(input, config)?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ResumeError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let tmp_path = path.with_extension("html.tmp");
    std::fs::write(&tmp_path, &output.html).map_err(|e| ResumeError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| ResumeError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Wrote {} to {}", output.stats.html_bytes, path.display());
    Ok(output.stats)
}

/// Summarise a resume document without rendering.
///
/// Requires no theme; only the loader runs. Useful for checking what a
/// document contains before picking a theme.
pub fn inspect(input: impl AsRef<Path>) -> Result<DocumentSummary, ResumeError> {
    let document = load::load_document(input.as_ref())?;
    Ok(summarise(&document))
}

fn summarise(document: &Value) -> DocumentSummary {
    let mapping = document.as_mapping();

    let field_str = |key: &str| {
        document
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let contact_fields = document
        .get("contact")
        .and_then(Value::as_mapping)
        .map(|m| {
            m.keys()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let sections: Vec<String> = mapping
        .map(|m| {
            m.keys()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let section_counts = mapping
        .map(|m| {
            m.iter()
                .filter_map(|(k, v)| {
                    let name = k.as_str()?;
                    let len = v.as_sequence().map(|s| s.len())?;
                    Some((name.to_string(), len))
                })
                .collect()
        })
        .unwrap_or_default();

    DocumentSummary {
        name: field_str("name"),
        tagline: field_str("tagline"),
        contact_fields,
        sections,
        section_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_fields_and_counts() {
        let document: Value = serde_yaml::from_str(
            "name: Ada\ntagline: Engineer\ncontact:\n  email: a@x.com\n  phone: '555'\nexperience:\n  - role: Dev\n  - role: Lead\nachievements:\n  - one\n",
        )
        .unwrap();
        let summary = summarise(&document);
        assert_eq!(summary.name.as_deref(), Some("Ada"));
        assert_eq!(summary.tagline.as_deref(), Some("Engineer"));
        assert_eq!(summary.contact_fields, vec!["email", "phone"]);
        assert_eq!(
            summary.sections,
            vec!["name", "tagline", "contact", "experience", "achievements"]
        );
        assert_eq!(
            summary.section_counts,
            vec![("experience".to_string(), 2), ("achievements".to_string(), 1)]
        );
    }

    #[test]
    fn summary_of_sparse_document() {
        let document: Value = serde_yaml::from_str("name: Ada\n").unwrap();
        let summary = summarise(&document);
        assert_eq!(summary.name.as_deref(), Some("Ada"));
        assert!(summary.tagline.is_none());
        assert!(summary.contact_fields.is_empty());
        assert!(summary.section_counts.is_empty());
    }
}
