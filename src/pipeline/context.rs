//! View-context assembly: document + derived projections → `tera::Context`.
//!
//! This is the seam between the loosely-typed document and the template
//! engine. Everything a theme can reference is inserted here, once, and the
//! context is handed to the renderer and discarded. Keys exposed to themes:
//!
//! | Key                  | Content                                         |
//! |----------------------|-------------------------------------------------|
//! | `resume`             | the whole document, untouched                   |
//! | `style`              | raw stylesheet text of the theme                |
//! | `link_profiles_html` | pre-rendered anchor fragment (may be empty)     |
//! | `contact_left`       | first contact column (ceiling half)             |
//! | `contact_right`      | second contact column                           |

use crate::config::GenerationConfig;
use crate::error::ResumeError;
use crate::pipeline::contact::{format_link_profiles, project_contact};
use crate::theme::Theme;
use serde_yaml::Value;
use tera::Context;
use tracing::debug;

/// Counts carried out of context assembly for the run statistics.
#[derive(Debug, Clone, Copy)]
pub struct ContextCounts {
    pub contact_items: usize,
    pub link_profiles: usize,
}

/// Assemble the rendering context for `document` under `theme`.
///
/// The document itself is inserted whole; fields a theme references but the
/// document lacks are deliberately not checked here — they fail at render
/// time with the engine's missing-variable message.
pub fn build_context(
    document: &Value,
    theme: &Theme,
    config: &GenerationConfig,
) -> Result<(Context, ContextCounts), ResumeError> {
    let contact = document.get("contact");
    let profiles = contact.and_then(|c| c.get(config.link_profiles_key.as_str()));

    let (left, right) = project_contact(contact, &config.link_profiles_key);
    let link_profiles_html = format_link_profiles(profiles);

    let counts = ContextCounts {
        contact_items: left.len() + right.len(),
        link_profiles: profiles
            .and_then(Value::as_mapping)
            .map(|m| m.len())
            .unwrap_or(0),
    };

    let mut context = Context::new();
    context.insert("resume", document);
    context.insert("style", &theme.style);
    context.insert("link_profiles_html", &link_profiles_html);
    context.insert("contact_left", &left);
    context.insert("contact_right", &right);

    debug!(
        "Built view context: {} contact items, {} profile links",
        counts.contact_items, counts.link_profiles
    );

    Ok((context, counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_theme() -> Theme {
        Theme {
            name: "test".into(),
            dir: PathBuf::from("themes/test"),
            template: "<html></html>".into(),
            style: "body { margin: 0; }".into(),
        }
    }

    fn doc(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn context_contains_all_keys() {
        let document = doc("name: Ada\ncontact:\n  email: a@x.com\n  phone: '555'\n");
        let config = GenerationConfig::default();
        let (ctx, counts) = build_context(&document, &test_theme(), &config).unwrap();

        let json = ctx.into_json();
        assert_eq!(json["resume"]["name"], "Ada");
        assert_eq!(json["style"], "body { margin: 0; }");
        assert_eq!(json["link_profiles_html"], "");
        assert_eq!(json["contact_left"].as_array().unwrap().len(), 1);
        assert_eq!(json["contact_right"].as_array().unwrap().len(), 1);
        assert_eq!(counts.contact_items, 2);
        assert_eq!(counts.link_profiles, 0);
    }

    #[test]
    fn link_profiles_excluded_from_columns_but_counted() {
        let document = doc(
            "contact:\n  email: a@x.com\n  github:\n    gh: https://github.com/x\n    work: https://github.com/y\n",
        );
        let config = GenerationConfig::default();
        let (ctx, counts) = build_context(&document, &test_theme(), &config).unwrap();

        assert_eq!(counts.contact_items, 1);
        assert_eq!(counts.link_profiles, 2);
        let json = ctx.into_json();
        assert!(json["link_profiles_html"]
            .as_str()
            .unwrap()
            .contains("target='_blank'"));
    }

    #[test]
    fn document_without_contact_is_fine() {
        let document = doc("name: Ada\n");
        let config = GenerationConfig::default();
        let (ctx, counts) = build_context(&document, &test_theme(), &config).unwrap();
        assert_eq!(counts.contact_items, 0);
        let json = ctx.into_json();
        assert!(json["contact_left"].as_array().unwrap().is_empty());
    }
}
