//! CLI binary for resume2html.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `GenerationConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use resume2html::{generate, generate_to_file, inspect, GenerationConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic generation (resume.yaml → resume.html, theme "default")
  resume2html

  # Explicit input and output
  resume2html cv.yaml -o cv.html

  # Pick a theme from a custom themes directory
  resume2html cv.yaml --theme compact --themes-dir ~/my-themes

  # Print the HTML to stdout instead of a file
  resume2html cv.yaml --stdout

  # Check what a document contains, no rendering
  resume2html cv.yaml --inspect-only
  resume2html cv.yaml --inspect-only --json

THEME CONTRACT:
  A theme is a sub-directory of the themes root containing:
    template.html   tera template; receives `resume`, `style`,
                    `contact_left`, `contact_right`, `link_profiles_html`
    style.css       raw stylesheet, injected verbatim as {{ style }}

  Rich-text fields (summary, bullets, descriptions) can be piped through
  the `markdown` and `markdown_inline` filters inside templates.

ENVIRONMENT VARIABLES:
  RESUME2HTML_THEME       Override the theme name
  RESUME2HTML_THEMES_DIR  Override the themes root directory
  RESUME2HTML_OUTPUT      Override the output path
"#;

/// Generate a styled, printable HTML resume from a YAML document.
#[derive(Parser, Debug)]
#[command(
    name = "resume2html",
    version,
    about = "Generate a styled, printable HTML resume from a YAML document",
    long_about = "Generate a self-contained HTML page from a resume authored in YAML. \
Presentation comes from a theme (a tera template plus a stylesheet); the document is \
never validated against a schema, so themes decide which fields matter.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the resume YAML file.
    #[arg(default_value = "resume.yaml")]
    input: PathBuf,

    /// Write HTML to this file.
    #[arg(short, long, env = "RESUME2HTML_OUTPUT", default_value = "resume.html")]
    output: PathBuf,

    /// Theme name (a sub-directory of the themes root).
    #[arg(short, long, env = "RESUME2HTML_THEME", default_value = "default")]
    theme: String,

    /// Root directory containing theme sub-directories.
    #[arg(long, env = "RESUME2HTML_THEMES_DIR", default_value = "themes")]
    themes_dir: PathBuf,

    /// Contact sub-field holding named profile links.
    #[arg(long, default_value = resume2html::DEFAULT_LINK_PROFILES_KEY)]
    link_profiles_key: String,

    /// Print the HTML to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Print a document summary only, no rendering.
    #[arg(long)]
    inspect_only: bool,

    /// Emit the inspection summary as JSON (with --inspect-only).
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let summary = inspect(&cli.input).context("Failed to inspect resume")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
            );
        } else {
            println!("File:      {}", cli.input.display());
            if let Some(ref n) = summary.name {
                println!("Name:      {}", n);
            }
            if let Some(ref t) = summary.tagline {
                println!("Tagline:   {}", t);
            }
            println!("Contact:   {}", summary.contact_fields.join(", "));
            println!("Sections:  {}", summary.sections.join(", "));
            for (section, count) in &summary.section_counts {
                println!("  {:<14} {} entries", section, count);
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = GenerationConfig::builder()
        .theme(&cli.theme)
        .themes_dir(&cli.themes_dir)
        .link_profiles_key(&cli.link_profiles_key)
        .build()
        .context("Invalid configuration")?;

    // ── Run generation ───────────────────────────────────────────────────
    if cli.stdout {
        let output = generate(&cli.input, &config).context("Generation failed")?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.html.as_bytes())
            .context("Failed to write to stdout")?;

        if !cli.quiet {
            eprintln!(
                "{} theme '{}'  {}  {}ms",
                green("✔"),
                output.theme,
                dim(&format!("{} bytes", output.stats.html_bytes)),
                output.stats.total_duration_ms,
            );
        }
    } else {
        let stats = generate_to_file(&cli.input, &cli.output, &config)
            .context("Generation failed")?;

        if !cli.quiet {
            eprintln!(
                "{} Resume generated with theme '{}'  →  {}",
                green("✔"),
                cli.theme,
                bold(&cli.output.display().to_string()),
            );
            eprintln!(
                "   {}  {} contact items  {}ms",
                dim(&format!("{} bytes", stats.html_bytes)),
                stats.contact_items,
                stats.total_duration_ms,
            );
        }
    }

    Ok(())
}
