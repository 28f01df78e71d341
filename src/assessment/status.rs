//! Category status derivation.

use super::state::CategoryRecord;

/// Derived completion status for one assessment category.
///
/// Always recomputed from the latest [`CategoryRecord`], never cached, so a
/// fresh extraction can move a category in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryStatus {
    Pending,
    InProgress,
    Completed,
}

impl CategoryStatus {
    /// The kebab-case identifier used in the agent protocol and tests.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Pending => "pending",
            CategoryStatus::InProgress => "in-progress",
            CategoryStatus::Completed => "completed",
        }
    }

    /// Human label for the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Pending => "Pending",
            CategoryStatus::InProgress => "In Progress",
            CategoryStatus::Completed => "Completed",
        }
    }
}

/// Derive a category's status from its field markers.
///
/// Completion requires unanimity: every qualifying field must be marked
/// `COMPLETE`. A single `COMPLETE` or `INCOMPLETE` among otherwise-unset
/// fields means the category is in progress, not completed.
pub fn category_status(record: Option<&CategoryRecord>) -> CategoryStatus {
    let Some(record) = record else {
        return CategoryStatus::Pending;
    };

    let fields = record.qualifying_fields();
    if fields.is_empty() {
        return CategoryStatus::Pending;
    }

    let markers: Vec<Option<&str>> = fields
        .iter()
        .map(|(_, obj)| obj.get("value").and_then(serde_json::Value::as_str))
        .collect();
    let complete = markers.iter().filter(|m| **m == Some("COMPLETE")).count();
    let incomplete = markers.iter().filter(|m| **m == Some("INCOMPLETE")).count();

    if complete == fields.len() {
        CategoryStatus::Completed
    } else if complete > 0 || incomplete > 0 {
        CategoryStatus::InProgress
    } else {
        CategoryStatus::Pending
    }
}

/// Status of a single child field within a category.
///
/// `COMPLETE` renders as completed and `INCOMPLETE` as in-progress; an unset
/// or unrecognized marker is pending.
pub fn field_status(record: Option<&CategoryRecord>, key: &str) -> CategoryStatus {
    match record.and_then(|r| r.field_marker(key)) {
        Some("COMPLETE") => CategoryStatus::Completed,
        Some("INCOMPLETE") => CategoryStatus::InProgress,
        _ => CategoryStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> CategoryRecord {
        CategoryRecord(v)
    }

    #[test]
    fn test_missing_record_is_pending() {
        assert_eq!(category_status(None), CategoryStatus::Pending);
    }

    #[test]
    fn test_empty_record_is_pending() {
        assert_eq!(
            category_status(Some(&record(json!({})))),
            CategoryStatus::Pending
        );
    }

    #[test]
    fn test_label_only_record_is_pending() {
        let rec = record(json!({"category_label": "Closing Questions"}));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::Pending);
    }

    #[test]
    fn test_all_complete_is_completed() {
        let rec = record(json!({
            "a": {"value": "COMPLETE"},
            "b": {"value": "COMPLETE"},
        }));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::Completed);
    }

    #[test]
    fn test_mixed_is_in_progress() {
        let rec = record(json!({
            "a": {"value": "COMPLETE"},
            "b": {"value": "INCOMPLETE"},
        }));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::InProgress);
    }

    #[test]
    fn test_all_incomplete_is_in_progress() {
        let rec = record(json!({
            "a": {"value": "INCOMPLETE"},
            "b": {"value": "INCOMPLETE"},
        }));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::InProgress);
    }

    #[test]
    fn test_unset_fields_do_not_qualify() {
        // "b" carries no marker at all, so the qualifying set is just {a}
        // and unanimity holds over it.
        let rec = record(json!({
            "a": {"value": "COMPLETE"},
            "b": {"label": "untouched"},
        }));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::Completed);
    }

    #[test]
    fn test_unrecognized_marker_is_in_progress_when_mixed() {
        let rec = record(json!({
            "a": {"value": "COMPLETE"},
            "b": {"value": "PARTIAL"},
        }));
        // "PARTIAL" is neither COMPLETE nor INCOMPLETE; one COMPLETE field
        // still moves the category off pending.
        assert_eq!(category_status(Some(&rec)), CategoryStatus::InProgress);
    }

    #[test]
    fn test_only_unrecognized_markers_is_pending() {
        let rec = record(json!({
            "a": {"value": "PARTIAL"},
            "b": {"value": "UNKNOWN"},
        }));
        assert_eq!(category_status(Some(&rec)), CategoryStatus::Pending);
    }

    #[test]
    fn test_status_is_idempotent() {
        let rec = record(json!({
            "a": {"value": "COMPLETE"},
            "b": {"value": "INCOMPLETE"},
        }));
        let first = category_status(Some(&rec));
        let second = category_status(Some(&rec));
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_status() {
        let rec = record(json!({
            "done": {"value": "COMPLETE"},
            "open": {"value": "INCOMPLETE"},
            "odd": {"value": "OTHER"},
        }));
        assert_eq!(field_status(Some(&rec), "done"), CategoryStatus::Completed);
        assert_eq!(field_status(Some(&rec), "open"), CategoryStatus::InProgress);
        assert_eq!(field_status(Some(&rec), "odd"), CategoryStatus::Pending);
        assert_eq!(field_status(Some(&rec), "missing"), CategoryStatus::Pending);
        assert_eq!(field_status(None, "done"), CategoryStatus::Pending);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(CategoryStatus::Pending.as_str(), "pending");
        assert_eq!(CategoryStatus::InProgress.as_str(), "in-progress");
        assert_eq!(CategoryStatus::Completed.as_str(), "completed");
        assert_eq!(CategoryStatus::InProgress.label(), "In Progress");
    }
}
