//! Aggregate progress statistics

use serde::{Deserialize, Serialize};

use super::{LearningItem, LearningStatus};

/// Item counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl LearningStats {
    /// Count items by status
    pub fn from_items(items: &[LearningItem]) -> Self {
        items.iter().fold(Self::default(), |mut stats, item| {
            stats.total += 1;
            match item.status {
                LearningStatus::NotStarted => stats.not_started += 1,
                LearningStatus::InProgress => stats.in_progress += 1,
                LearningStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }

    /// Share of items completed, as a percentage
    pub fn completion_percent(&self) -> f64 {
        if self.total > 0 {
            self.completed as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}
