//! Assessment progress model derived from agent responses.
//!
//! The agent embeds a `category_results` JSON payload in its responses.
//! This module extracts that payload into [`AssessmentState`], derives
//! per-category completion status from field-level markers, and resolves
//! the agent's free-text current-category label onto the fixed category set.

mod category;
mod extract;
mod progress;
mod state;
mod status;

pub use category::{resolve_current_category, CategoryId};
pub use extract::extract_assessment_data;
pub use progress::{overall_progress, OverallProgress};
pub use state::{AssessmentState, CategoryRecord, FieldEntry, FieldSummary};
pub use status::{category_status, field_status, CategoryStatus};
