//! Schema-compliance checking for card records
//!
//! Validation runs over raw JSON values rather than the typed model, so
//! missing keys and drifted values are visible instead of papered over by
//! serde defaults. Findings are reported and counted, never fatal: a
//! drifted record still flows through the pipeline best-effort.

use serde_json::Value;
use std::collections::BTreeMap;

/// The closed set of valid `primaryType` values.
pub const VALID_PRIMARY_TYPES: &[&str] = &[
    "disease",
    "drug",
    "anatomy",
    "microbe",
    "molecule",
    "physiology",
    "finding",
    "concept",
];

/// Required top-level keys on every card.
const REQUIRED_KEYS: &[&str] = &[
    "title",
    "primaryType",
    "tags",
    "classificationPath",
    "content",
    "connections",
];

/// Required keys inside the content block.
const REQUIRED_CONTENT_KEYS: &[&str] = &["definition", "atAGlance", "takeAway", "mermaid"];

/// A single compliance finding on one card.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub message: String,
}

impl ValidationIssue {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Compliance report over a whole snapshot.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Issues for the first few non-compliant cards, keyed by id
    pub sample_issues: BTreeMap<String, Vec<ValidationIssue>>,
}

const SAMPLE_LIMIT: usize = 10;

/// Check one card value against the fixed record schema.
pub fn validate_card(value: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(obj) = value.as_object() else {
        issues.push(ValidationIssue::new("card is not an object"));
        return issues;
    };

    for key in REQUIRED_KEYS {
        if !obj.contains_key(*key) {
            issues.push(ValidationIssue::new(format!(
                "missing top-level key: '{}'",
                key
            )));
        }
    }

    match obj.get("primaryType") {
        Some(Value::String(p_type)) => {
            if !VALID_PRIMARY_TYPES.contains(&p_type.as_str()) {
                issues.push(ValidationIssue::new(format!(
                    "invalid primaryType: '{}'",
                    p_type
                )));
            }
        }
        Some(_) => issues.push(ValidationIssue::new("'primaryType' is not a string")),
        None => {} // already reported as a missing top-level key
    }

    match obj.get("content") {
        Some(Value::Object(content)) => {
            for key in REQUIRED_CONTENT_KEYS {
                if !content.contains_key(*key) {
                    issues.push(ValidationIssue::new(format!(
                        "missing content key: '{}'",
                        key
                    )));
                }
            }
        }
        Some(_) => issues.push(ValidationIssue::new("'content' is not an object")),
        None => {} // already reported as a missing top-level key
    }

    match obj.get("connections") {
        Some(Value::Array(conns)) => {
            for (i, conn) in conns.iter().enumerate() {
                match conn.as_object() {
                    Some(c) => {
                        if !c.contains_key("type") || !c.contains_key("to") {
                            issues.push(ValidationIssue::new(format!(
                                "connection {} missing 'type' or 'to'",
                                i
                            )));
                        }
                    }
                    None => issues.push(ValidationIssue::new(format!(
                        "connection {} is not an object",
                        i
                    ))),
                }
            }
        }
        Some(_) => issues.push(ValidationIssue::new("'connections' is not an array")),
        None => {}
    }

    issues
}

/// Validate every card in a raw snapshot.
pub fn validate_snapshot(data: &BTreeMap<String, Value>) -> ValidationReport {
    let mut report = ValidationReport {
        total: data.len(),
        ..Default::default()
    };

    for (id, value) in data {
        let issues = validate_card(value);
        if issues.is_empty() {
            report.valid += 1;
        } else {
            report.invalid += 1;
            if report.sample_issues.len() < SAMPLE_LIMIT {
                report.sample_issues.insert(id.clone(), issues);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compliant_card() -> Value {
        json!({
            "title": "Valproate",
            "primaryType": "drug",
            "tags": ["epilepsy"],
            "classificationPath": ["Pharmacology"],
            "content": {
                "definition": "<p>d</p>",
                "atAGlance": "<p>a</p>",
                "takeAway": "<p>t</p>",
                "mermaid": "graph TD;"
            },
            "connections": [{"type": "treats", "to": "11112222"}]
        })
    }

    #[test]
    fn test_compliant_card_passes() {
        assert!(validate_card(&compliant_card()).is_empty());
    }

    #[test]
    fn test_missing_keys_reported() {
        let card = json!({"title": "X"});
        let issues = validate_card(&card);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert!(messages.contains(&"missing top-level key: 'connections'"));
        assert!(messages.contains(&"missing top-level key: 'content'"));
        assert!(!messages.contains(&"missing top-level key: 'title'"));
    }

    #[test]
    fn test_invalid_primary_type_reported() {
        let mut card = compliant_card();
        card["primaryType"] = json!("structure");
        let issues = validate_card(&card);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "invalid primaryType: 'structure'");
    }

    #[test]
    fn test_non_string_primary_type_reported() {
        let mut card = compliant_card();
        card["primaryType"] = json!(7);
        let issues = validate_card(&card);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "'primaryType' is not a string");
    }

    #[test]
    fn test_content_shape_checked() {
        let mut card = compliant_card();
        card["content"] = json!("not an object");
        let issues = validate_card(&card);
        assert!(issues.iter().any(|i| i.message == "'content' is not an object"));

        let mut card = compliant_card();
        card["content"] = json!({"definition": "<p>d</p>"});
        let issues = validate_card(&card);
        assert_eq!(issues.len(), 3); // atAGlance, takeAway, mermaid
    }

    #[test]
    fn test_connection_shape_checked() {
        let mut card = compliant_card();
        card["connections"] = json!([{"type": "treats"}, "bare string"]);
        let issues = validate_card(&card);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert!(messages.contains(&"connection 0 missing 'type' or 'to'"));
        assert!(messages.contains(&"connection 1 is not an object"));
    }

    #[test]
    fn test_snapshot_report_counts() {
        let mut data = BTreeMap::new();
        data.insert("a1b2c3d4".to_string(), compliant_card());
        data.insert("eeee0000".to_string(), json!({"title": "broken"}));

        let report = validate_snapshot(&data);
        assert_eq!(report.total, 2);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid, 1);
        assert!(report.sample_issues.contains_key("eeee0000"));
    }
}
