use chrono::NaiveDate;

use crate::domain::Project;

/// Shown wherever a date is missing
pub const PLACEHOLDER: &str = "—";

/// Formats an ISO `YYYY-MM-DD` date as "29 November 2025".
///
/// Missing or empty input yields the placeholder dash; anything that does not
/// parse as a calendar date is returned unchanged.
pub fn format_date(iso_date: Option<&str>) -> String {
    let Some(iso_date) = iso_date.filter(|value| !value.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    NaiveDate::parse_from_str(iso_date, "%Y-%m-%d").map_or_else(
        |_| iso_date.to_string(),
        |date| date.format("%-d %B %Y").to_string(),
    )
}

/// Task completion summary for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(project: &Project) -> Self {
        Self {
            completed: project.completed_tasks(),
            total: project.tasks.len(),
        }
    }

    /// Every task is done. A project without tasks is never complete.
    pub const fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn summary(self) -> String {
        if self.is_complete() {
            "🎉 Project Complete! 🎉".to_string()
        } else {
            format!("{} of {} tasks complete", self.completed, self.total)
        }
    }
}
