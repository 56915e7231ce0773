//! Template rendering: a tera engine scoped to one theme.
//!
//! ## Why a renderer instance instead of a shared engine?
//!
//! Each [`Renderer`] owns its own `Tera` with exactly one template (the
//! theme's) and the markdown filters registered at construction. Nothing is
//! process-global, so two renderers with different themes never interact
//! and tests can construct throwaway engines freely.
//!
//! The theme template is registered under the name `"theme"` rather than a
//! `.html` name on purpose: tera autoescapes templates with HTML-like
//! names, which would mangle the injected stylesheet, the pre-rendered
//! link fragment, and the markdown filters' output.

use crate::error::ResumeError;
use crate::theme::Theme;
use pulldown_cmark::{html, Options, Parser};
use std::collections::HashMap;
use tera::{Context, Tera};
use tracing::debug;

/// Internal tera template name for the active theme.
const TEMPLATE_NAME: &str = "theme";

/// A template renderer bound to one theme.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    theme_name: String,
}

impl Renderer {
    /// Build a renderer for `theme`, registering its template and the
    /// rich-text filters.
    ///
    /// # Filters available to themes
    /// - `markdown` — block markdown → HTML (`{{ resume.summary | markdown }}`)
    /// - `markdown_inline` — inline markdown → HTML without the wrapping
    ///   paragraph, for bullets and other single-line fields
    pub fn new(theme: &Theme) -> Result<Self, ResumeError> {
        let mut tera = Tera::default();
        tera.register_filter("markdown", markdown_filter);
        tera.register_filter("markdown_inline", markdown_inline_filter);
        tera.add_raw_template(TEMPLATE_NAME, &theme.template)
            .map_err(|e| ResumeError::RenderFailed {
                theme: theme.name.clone(),
                detail: error_chain(&e),
            })?;

        Ok(Self {
            tera,
            theme_name: theme.name.clone(),
        })
    }

    /// Render the view context to HTML.
    ///
    /// A document field the template references but the context lacks fails
    /// here; the error detail carries tera's message naming the variable.
    pub fn render(&self, context: &Context) -> Result<String, ResumeError> {
        debug!("Rendering theme '{}'", self.theme_name);
        self.tera
            .render(TEMPLATE_NAME, context)
            .map_err(|e| ResumeError::RenderFailed {
                theme: self.theme_name.clone(),
                detail: error_chain(&e),
            })
    }
}

/// Flatten a tera error and its source chain into one readable line.
///
/// Tera's top-level Display is generic ("Failed to render 'theme'"); the
/// part that names the missing variable or the syntax problem lives in the
/// source chain.
fn error_chain(err: &tera::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(e) = source {
        parts.push(e.to_string());
        source = e.source();
    }
    parts
        .join(": ")
        .replace(&format!("'{TEMPLATE_NAME}'"), "theme template")
}

// ── Rich-text filters ────────────────────────────────────────────────────

fn render_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, Options::empty());
    let mut out = String::with_capacity(input.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// `markdown` filter: block-level markdown to HTML.
fn markdown_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let input = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("markdown filter expects a string"))?;
    Ok(tera::Value::String(render_markdown(input)))
}

/// `markdown_inline` filter: like `markdown` but unwraps a single enclosing
/// paragraph, so short fields slot into `<li>` or `<p>` without nesting.
fn markdown_inline_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let input = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("markdown_inline filter expects a string"))?;
    let rendered = render_markdown(input);
    let trimmed = rendered.trim_end();
    let unwrapped = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        // Multiple paragraphs cannot be inlined; keep the block form.
        .filter(|s| !s.contains("<p>"))
        .unwrap_or(trimmed);
    Ok(tera::Value::String(unwrapped.to_string()))
}
