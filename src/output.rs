//! Output types returned by the top-level generation entry points.

use serde::{Deserialize, Serialize};

/// The result of a successful generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    /// The fully rendered, tidied HTML document.
    pub html: String,
    /// The theme that produced it.
    pub theme: String,
    /// Run statistics.
    pub stats: GenerationStats,
}

/// Statistics for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Number of contact items projected (link-profiles field excluded).
    pub contact_items: usize,
    /// Number of named profile links rendered into the link fragment.
    pub link_profiles: usize,
    /// Bytes of HTML produced.
    pub html_bytes: usize,
    /// Total wall-clock duration in milliseconds.
    pub total_duration_ms: u64,
    /// Time spent in template rendering in milliseconds.
    pub render_duration_ms: u64,
}

/// Summary of a resume document, produced by [`crate::inspect`] without
/// rendering anything. No theme, no API to the template engine — just what
/// the loader sees.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// The `name` field, when present.
    pub name: Option<String>,
    /// The `tagline` field, when present.
    pub tagline: Option<String>,
    /// Contact field names in document order (including the link-profiles field).
    pub contact_fields: Vec<String>,
    /// Top-level section names in document order.
    pub sections: Vec<String>,
    /// Entry count per list-valued section (experience, education, projects, …).
    pub section_counts: Vec<(String, usize)>,
}
