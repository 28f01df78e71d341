//! Structured assessment state and per-category records.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Truthiness the way the agent's JSON uses it: empty strings, zero, false,
/// and null all mean "unset".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The tracked fields for one assessment topic area.
///
/// A JSON object mapping field keys to `{value, label}` entries, plus an
/// optional `category_label` entry that never participates in status
/// computation. Kept as raw JSON because the agent's schema varies per
/// category; typed accessors pick out what the client needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CategoryRecord(pub Value);

/// One field's name and marker for sidebar detail rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Display name: the field's `label`, falling back to its key.
    pub name: String,
    /// `COMPLETE`, `INCOMPLETE`, or whatever marker the agent sent;
    /// defaults to `INCOMPLETE` when the entry has no marker text.
    pub marker: String,
}

/// Completed/total counts plus per-field detail for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSummary {
    pub total: usize,
    pub completed: usize,
    pub fields: Vec<FieldEntry>,
}

impl CategoryRecord {
    /// Fields that participate in status computation: every entry except
    /// `category_label` whose value is an object carrying a set `value`.
    pub fn qualifying_fields(&self) -> Vec<(&str, &serde_json::Map<String, Value>)> {
        let Some(map) = self.0.as_object() else {
            return Vec::new();
        };
        map.iter()
            .filter(|(key, _)| key.as_str() != "category_label")
            .filter_map(|(key, entry)| entry.as_object().map(|obj| (key.as_str(), obj)))
            .filter(|(_, obj)| obj.get("value").is_some_and(is_truthy))
            .collect()
    }

    /// Marker string of one field (`record[key].value`), when set.
    pub fn field_marker(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)?
            .as_object()?
            .get("value")
            .filter(|v| is_truthy(v))?
            .as_str()
    }

    /// True when a top-level entry is present and truthy. Used for markers
    /// like `software_details_complete` that sit beside the field entries.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }

    /// Field-level summary for the sidebar.
    pub fn summary(&self) -> FieldSummary {
        let fields = self.qualifying_fields();
        let entries: Vec<FieldEntry> = fields
            .iter()
            .map(|(key, obj)| FieldEntry {
                name: obj
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or(key)
                    .to_string(),
                marker: obj
                    .get("value")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("INCOMPLETE")
                    .to_string(),
            })
            .collect();
        let completed = entries.iter().filter(|f| f.marker == "COMPLETE").count();
        FieldSummary {
            total: entries.len(),
            completed,
            fields: entries,
        }
    }
}

/// Structured progress extracted from an agent response.
///
/// Exactly the five projected fields of the agent's `category_results`
/// payload. Replaced wholesale on each successful extraction - never merged
/// field by field with the previous value - and discarded when a new
/// session starts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssessmentState {
    #[serde(default)]
    pub information_status: HashMap<String, CategoryRecord>,
    #[serde(default)]
    pub current_category: Option<String>,
    #[serde(default)]
    pub assessment_complete: Option<bool>,
    /// Opaque per-software drill-down payload; rendered elsewhere, never
    /// interpreted here.
    #[serde(default)]
    pub software_deep_dive: Option<Value>,
    #[serde(default)]
    pub agent_message: Option<String>,
}
