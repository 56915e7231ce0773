//! Contact projection: turn the raw contact record into display-ready rows.
//!
//! The contact block is the one part of the document that is not rendered
//! field-for-field: fields become normalised [`ContactItem`]s with a derived
//! label and link classification, split across two balanced columns, while
//! the reserved link-profiles field becomes its own anchor fragment.
//!
//! Link classification is purely name-pattern-based. The priority order
//! below is behaviour-defining for ambiguous field names and must not be
//! reordered:
//!
//! 1. field named exactly `email`          → `mailto:` link
//! 2. name contains `linkedin`             → value used as URL verbatim
//! 3. name contains `telegram`             → `https://t.me/` handle (leading `@` stripped)
//! 4. name contains `website`              → `https://` prefixed
//! 5. anything else                        → plain text

use serde::Serialize;
use serde_yaml::Value;

/// One display-ready contact row.
///
/// Created per contact field by [`project_contact`]; never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactItem {
    /// Field name with underscores replaced by spaces, each word capitalised.
    pub label: String,
    /// Raw field value, stringified.
    pub value: String,
    /// Whether the row renders as an anchor.
    pub is_link: bool,
    /// Target URL when `is_link` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Project the contact sub-record into an ordered item sequence, split into
/// two contiguous columns. The left column gets the ceiling half, so the
/// two columns always re-concatenate to the original sequence.
///
/// `link_profiles_key` names the reserved field to skip; it is rendered
/// separately by [`format_link_profiles`]. An absent or non-mapping contact
/// value yields two empty columns — never an error.
pub fn project_contact(
    contact: Option<&Value>,
    link_profiles_key: &str,
) -> (Vec<ContactItem>, Vec<ContactItem>) {
    let items = contact_items(contact, link_profiles_key);
    split_columns(items)
}

/// Build the ordered contact-item sequence without splitting.
fn contact_items(contact: Option<&Value>, link_profiles_key: &str) -> Vec<ContactItem> {
    let Some(mapping) = contact.and_then(Value::as_mapping) else {
        return Vec::new();
    };

    mapping
        .iter()
        .filter_map(|(key, value)| {
            let name = key.as_str()?;
            if name == link_profiles_key {
                return None;
            }
            Some(make_item(name, value))
        })
        .collect()
}

fn make_item(name: &str, value: &Value) -> ContactItem {
    let value = stringify(value);
    let (is_link, url) = classify(name, &value);
    ContactItem {
        label: title_case(name),
        value,
        is_link,
        url,
    }
}

/// Apply the name-pattern classification rules, first match wins.
fn classify(name: &str, value: &str) -> (bool, Option<String>) {
    if name == "email" {
        (true, Some(format!("mailto:{value}")))
    } else if name.contains("linkedin") {
        (true, Some(value.to_string()))
    } else if name.contains("telegram") {
        let handle = value.strip_prefix('@').unwrap_or(value);
        (true, Some(format!("https://t.me/{handle}")))
    } else if name.contains("website") {
        (true, Some(format!("https://{value}")))
    } else {
        (false, None)
    }
}

/// Partition items into two contiguous columns; the left column receives
/// the ceiling half. Zero items yields two empty columns.
fn split_columns(mut items: Vec<ContactItem>) -> (Vec<ContactItem>, Vec<ContactItem>) {
    let left_len = items.len().div_ceil(2);
    let right = items.split_off(left_len);
    (items, right)
}

/// `field_name` → `Field Name`.
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render scalar YAML values the way they read in the source document.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Nested structures in a contact field have no display form; fall
        // back to their YAML rendering rather than erroring.
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Render the link-profiles mapping into a single HTML fragment: one
/// `target='_blank'` anchor per entry, the URL as both href and text,
/// entries joined by `<br>` in insertion order.
///
/// Absent, null, empty, or non-mapping input returns an empty string.
pub fn format_link_profiles(profiles: Option<&Value>) -> String {
    let Some(mapping) = profiles.and_then(Value::as_mapping) else {
        return String::new();
    };

    mapping
        .values()
        .map(|v| {
            let url = stringify(v);
            format!("<a href='{url}' target='_blank'>{url}</a>")
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
