//! Overall progress across the six categories.

use super::category::CategoryId;
use super::state::AssessmentState;
use super::status::{category_status, CategoryStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Count completed categories out of the fixed six.
///
/// Software details is special-cased: it completes when the agent sets
/// `software_details_complete` on its record, since its fields are
/// per-software and open-ended rather than a fixed checklist.
pub fn overall_progress(state: &AssessmentState) -> OverallProgress {
    let total = CategoryId::ALL.len();
    let mut completed = 0;

    for id in CategoryId::ALL {
        let record = state.information_status.get(id.as_str());
        let done = match id {
            CategoryId::SoftwareDetails => record
                .map(|r| r.flag("software_details_complete"))
                .unwrap_or(false),
            _ => category_status(record) == CategoryStatus::Completed,
        };
        if done {
            completed += 1;
        }
    }

    let percentage = ((completed as f64 / total as f64) * 100.0).round() as u8;
    OverallProgress {
        completed,
        total,
        percentage,
    }
}
