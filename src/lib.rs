//! # resume2html
//!
//! Generate a styled, printable HTML page from a resume authored in YAML.
//!
//! ## Why this crate?
//!
//! Keeping a resume as structured data makes it diffable, scriptable, and
//! reusable; the presentation lives in swappable *themes* (a tera template
//! plus a stylesheet in a directory). This crate is the projection between
//! the two: it loads the document, derives the display structure the
//! templates need — balanced contact columns, link-type inference, the
//! profile-links fragment — and renders a single self-contained HTML file.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume.yaml
//!  │
//!  ├─ 1. Load     parse YAML, insertion order preserved
//!  ├─ 2. Project  contact columns + link classification + profile anchors
//!  ├─ 3. Context  document + projections + raw stylesheet
//!  ├─ 4. Render   tera template with markdown filters
//!  ├─ 5. Tidy     deterministic whitespace/encoding cleanup
//!  └─ 6. Output   atomic write (temp file + rename)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume2html::{generate_to_file, GenerationConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GenerationConfig::default(); // theme "default" in ./themes
//!     let stats = generate_to_file("resume.yaml", "resume.html", &config)?;
//!     eprintln!("{} bytes in {}ms", stats.html_bytes, stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Theme contract
//!
//! A theme is a directory under the themes root containing `template.html`
//! (the tera template) and `style.css` (raw text, injected verbatim as
//! `{{ style }}`). Templates receive the whole document as `resume`, the
//! projected contact columns as `contact_left` / `contact_right`, and the
//! pre-rendered profile-links fragment as `link_profiles_html`. Rich-text
//! fields go through the `markdown` / `markdown_inline` filters.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume2html = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod theme;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GenerationConfig, GenerationConfigBuilder, DEFAULT_LINK_PROFILES_KEY};
pub use error::ResumeError;
pub use generate::{generate, generate_to_file, inspect};
pub use output::{DocumentSummary, GenerationOutput, GenerationStats};
pub use theme::Theme;
