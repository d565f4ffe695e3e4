//! Case file loading.
//!
//! Case files are JSON or YAML. Syntax errors are reported; shape problems are not. A file that
//! parses to `null`, `false`, `0` or an empty string holds no record, and any other non-mapping
//! root is read as an empty record. YAML tags and non-scalar mapping keys count as shape
//! problems: tags are dropped and such entries are skipped.

use crate::record::CaseRecord;
use crate::{CaseError, CaseResult};
use serde_json::Value;
use serde_yaml::Value as Yaml;
use std::path::Path;

/// Supported case file syntaxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseFormat {
    Json,
    Yaml,
}

impl CaseFormat {
    /// Detects the format from a file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// Returns `CaseError::UnsupportedFormat` for any other or missing extension.
    pub fn from_path(path: &Path) -> CaseResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(CaseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Returns false for roots that mean "no record".
fn is_present_root(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Builds an optional record from an already-parsed JSON value.
pub fn record_from_value(value: Value) -> Option<CaseRecord> {
    if !is_present_root(&value) {
        return None;
    }
    match value {
        Value::Object(_) => Some(serde_json::from_value(value).unwrap_or_default()),
        _ => Some(CaseRecord::default()),
    }
}

/// Converts a YAML document to JSON. Tags are dropped in favour of the tagged value, and mapping
/// entries whose key is not a scalar are skipped.
fn yaml_to_json(value: Yaml) -> Value {
    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .filter_map(|(key, value)| Some((yaml_key(key)?, yaml_to_json(value))))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        // .nan and .inf have no JSON form
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn yaml_key(key: Yaml) -> Option<String> {
    match key {
        Yaml::Null => Some("null".to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::String(s) => Some(s),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => None,
    }
}

/// Parses case file text.
///
/// # Errors
///
/// Returns `CaseError::InvalidJson` or `CaseError::InvalidYaml` when the text is not valid in the
/// given syntax. An empty YAML document is not an error; it holds no record.
pub fn parse_case(text: &str, format: CaseFormat) -> CaseResult<Option<CaseRecord>> {
    let value: Value = match format {
        CaseFormat::Json => serde_json::from_str(text).map_err(CaseError::InvalidJson)?,
        CaseFormat::Yaml => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(text).map_err(CaseError::InvalidYaml)?;
                yaml_to_json(yaml)
            }
        }
    };

    Ok(record_from_value(value))
}

/// Reads and parses a case file, detecting the format from its extension.
///
/// # Errors
///
/// Returns `CaseError::UnsupportedFormat` for unknown extensions, `CaseError::FileRead` when the
/// file cannot be read, and a syntax error variant when it cannot be parsed.
pub fn load_case_file(path: impl AsRef<Path>) -> CaseResult<Option<CaseRecord>> {
    let path = path.as_ref();
    let format = CaseFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(CaseError::FileRead)?;

    let record = parse_case(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        has_record = record.is_some(),
        "loaded case file"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_types::FieldValue;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            CaseFormat::from_path(Path::new("case.json")).unwrap(),
            CaseFormat::Json
        );
        assert_eq!(
            CaseFormat::from_path(Path::new("case.YML")).unwrap(),
            CaseFormat::Yaml
        );
        assert!(matches!(
            CaseFormat::from_path(Path::new("case.txt")),
            Err(CaseError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            CaseFormat::from_path(Path::new("case")),
            Err(CaseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_falsy_roots_hold_no_record() {
        for text in ["null", "false", "0", "\"\""] {
            assert_eq!(parse_case(text, CaseFormat::Json).unwrap(), None, "{text}");
        }
        assert_eq!(parse_case("", CaseFormat::Yaml).unwrap(), None);
        assert_eq!(parse_case("~", CaseFormat::Yaml).unwrap(), None);
    }

    #[test]
    fn test_truthy_non_mapping_root_is_empty_record() {
        for text in ["5", "true", "\"case\"", "[1, 2]"] {
            assert_eq!(
                parse_case(text, CaseFormat::Json).unwrap(),
                Some(CaseRecord::default()),
                "{text}"
            );
        }
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        assert!(matches!(
            parse_case("{", CaseFormat::Json),
            Err(CaseError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_case("animal: [unclosed", CaseFormat::Yaml),
            Err(CaseError::InvalidYaml(_))
        ));
    }

    #[test]
    fn test_parse_yaml_record() {
        let yaml = r#"animal:
  name: Mirri
  species: cat
symptoms:
  - name: Sneezing
    certainty_level: 0.7
"#;
        let record = parse_case(yaml, CaseFormat::Yaml).unwrap().expect("record");
        assert_eq!(
            record.animal.and_then(|a| a.name),
            Some(FieldValue::from("Mirri"))
        );
        assert_eq!(record.symptoms.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_yaml_tags_are_dropped() {
        let yaml = r#"animal: !pet
  name: Mirri
  age_years: !years 3
"#;
        let record = parse_case(yaml, CaseFormat::Yaml).unwrap().expect("record");
        let animal = record.animal.expect("animal");
        assert_eq!(animal.name, Some(FieldValue::from("Mirri")));
        assert_eq!(animal.age_years, Some(FieldValue::from(3_i64)));
    }

    #[test]
    fn test_yaml_complex_keys_are_skipped() {
        let yaml = r#"? [a, b]
: ignored
animal:
  name: Rex
  1: numeric key
"#;
        let record = parse_case(yaml, CaseFormat::Yaml).unwrap().expect("record");
        assert_eq!(
            record.animal.and_then(|a| a.name),
            Some(FieldValue::from("Rex"))
        );
    }

    #[test]
    fn test_yaml_non_finite_numbers_are_absent() {
        let record = parse_case("animal:\n  age_years: .nan\n", CaseFormat::Yaml)
            .unwrap()
            .expect("record");
        assert_eq!(record.animal.expect("animal").age_years, None);
    }

    #[test]
    fn test_load_case_file_reads_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("patient.json");
        fs::write(&path, r#"{"animal": {"name": "Rex"}, "diagnoses": "none"}"#).unwrap();

        let record = load_case_file(&path).unwrap().expect("record");
        assert_eq!(
            record.animal.and_then(|a| a.name),
            Some(FieldValue::from("Rex"))
        );
        assert!(record.diagnoses.is_none());
    }

    #[test]
    fn test_load_case_file_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_case_file(dir.path().join("absent.yaml")).expect_err("missing");
        assert!(matches!(err, CaseError::FileRead(_)));
    }
}
