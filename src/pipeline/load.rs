//! Document loading: read a YAML resume into a loosely-typed value.
//!
//! ## Why `serde_yaml::Value` and not typed structs?
//!
//! The pipeline performs no schema validation: a field a theme never
//! references may be absent, misspelled, or extra without consequence, and
//! a field the theme *does* reference fails at render time with a message
//! naming the variable. Deserialising into rigid structs would move those
//! failures to load time and reject documents that older or custom themes
//! render fine. `serde_yaml::Mapping` also preserves insertion order, which
//! is what makes repeated runs byte-identical.

use crate::error::ResumeError;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Load and parse a resume document from a YAML file.
///
/// Returns the document as a top-level mapping. The only structural
/// requirement enforced here is that the top level *is* a mapping; field
/// presence is left to the renderer.
pub fn load_document(path: &Path) -> Result<Value, ResumeError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResumeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ResumeError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(ResumeError::Internal(format!(
                "Failed to read '{}': {e}",
                path.display()
            )));
        }
    };

    let doc: Value = serde_yaml::from_str(&text).map_err(|e| ResumeError::InvalidYaml {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    if !doc.is_mapping() {
        return Err(ResumeError::NotAMapping {
            path: path.to_path_buf(),
            kind: value_kind(&doc),
        });
    }

    debug!(
        "Loaded resume document from {} ({} top-level fields)",
        path.display(),
        doc.as_mapping().map(|m| m.len()).unwrap_or(0)
    );

    Ok(doc)
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_mapping_document() {
        let f = write_yaml("name: Ada\ncontact:\n  email: a@x.com\n");
        let doc = load_document(f.path()).unwrap();
        assert_eq!(doc["name"].as_str(), Some("Ada"));
        assert_eq!(doc["contact"]["email"].as_str(), Some("a@x.com"));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_document(Path::new("/no/such/resume.yaml")).unwrap_err();
        assert!(matches!(err, ResumeError::FileNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let f = write_yaml("name: [unclosed\n");
        let err = load_document(f.path()).unwrap_err();
        assert!(matches!(err, ResumeError::InvalidYaml { .. }), "got: {err}");
    }

    #[test]
    fn non_mapping_top_level_rejected() {
        let f = write_yaml("- just\n- a\n- list\n");
        let err = load_document(f.path()).unwrap_err();
        match err {
            ResumeError::NotAMapping { kind, .. } => assert_eq!(kind, "a sequence"),
            other => panic!("expected NotAMapping, got: {other}"),
        }
    }

    #[test]
    fn mapping_order_is_preserved() {
        let f = write_yaml("contact:\n  email: a@x.com\n  phone: '555'\n  website: ada.dev\n");
        let doc = load_document(f.path()).unwrap();
        let keys: Vec<&str> = doc["contact"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["email", "phone", "website"]);
    }
}
