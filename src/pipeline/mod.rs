//! Pipeline stages for YAML-to-HTML resume generation.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets a stage be
//! swapped (e.g. a different template engine behind [`render`]) without
//! touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! load ──▶ contact ──▶ context ──▶ render ──▶ postprocess
//! (yaml)   (project)   (assemble)  (tera)     (tidy)
//! ```
//!
//! 1. [`load`]        — read and parse the YAML document, order-preserving
//! 2. [`contact`]     — project the contact record into display items and
//!    columns; format the link-profiles fragment
//! 3. [`context`]     — assemble the view context handed to the engine
//! 4. [`render`]      — render the theme template; rich-text fields pass
//!    through the markdown filters here
//! 5. [`postprocess`] — deterministic tidy rules on the rendered HTML

pub mod contact;
pub mod context;
pub mod load;
pub mod postprocess;
pub mod render;
