//! Learning items tracked by a learner
//!
//! Items carry a topic, a difficulty and a progress status. This module owns
//! the item types, the validation applied to create and update payloads, and
//! the aggregate statistics shown on the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::{Error, Result};

mod stats;
mod store;

pub use stats::LearningStats;
pub use store::ItemStore;

/// How hard an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BEGINNER" => Ok(Difficulty::Beginner),
            "INTERMEDIATE" => Ok(Difficulty::Intermediate),
            "ADVANCED" => Ok(Difficulty::Advanced),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// Progress on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl LearningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStatus::NotStarted => "NOT_STARTED",
            LearningStatus::InProgress => "IN_PROGRESS",
            LearningStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for LearningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LearningStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "NOT_STARTED" => Ok(LearningStatus::NotStarted),
            "IN_PROGRESS" => Ok(LearningStatus::InProgress),
            "COMPLETED" => Ok(LearningStatus::Completed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A tracked learning item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: LearningStatus,
    pub created_at: DateTime<Utc>,
}

impl LearningItem {
    /// Check a stored item against the same rules as a create payload
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(url) = &self.resource_url {
            validate_url(url)?;
        }
        Ok(())
    }
}

/// Payload for creating an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLearningItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: Option<LearningStatus>,
}

impl NewLearningItem {
    /// Create a payload with the required fields
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            description: None,
            resource_url: None,
            difficulty,
            status: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the resource URL
    pub fn with_resource_url(mut self, url: impl Into<String>) -> Self {
        self.resource_url = Some(url.into());
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: LearningStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check the payload; title must be non-blank and the URL absolute
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(url) = &self.resource_url {
            validate_url(url)?;
        }
        Ok(())
    }

    /// Validate and turn the payload into a stored item
    pub fn into_item(self, id: impl Into<String>, created_at: DateTime<Utc>) -> Result<LearningItem> {
        self.validate()?;
        Ok(LearningItem {
            id: id.into(),
            title: self.title,
            description: self.description,
            resource_url: self.resource_url,
            difficulty: self.difficulty,
            status: self.status.unwrap_or_default(),
            created_at,
        })
    }
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub resource_url: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<LearningStatus>,
}

impl LearningItemUpdate {
    /// Check the fields that are present
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(url) = &self.resource_url {
            validate_url(url)?;
        }
        Ok(())
    }

    /// Validate and apply to `item`
    pub fn apply_to(self, item: &mut LearningItem) -> Result<()> {
        self.validate()?;

        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(url) = self.resource_url {
            item.resource_url = Some(url);
        }
        if let Some(difficulty) = self.difficulty {
            item.difficulty = difficulty;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        Ok(())
    }
}

/// Order items the way the dashboard lists them: newest first
pub fn sort_newest_first(items: &mut [LearningItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<()> {
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| Error::Validation(format!("Invalid resource URL '{}': {}", url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    fn item(id: &str, day: u32) -> LearningItem {
        NewLearningItem::new(format!("Topic {}", id), Difficulty::Beginner)
            .into_item(id, at(day))
            .unwrap()
    }

    #[test]
    fn test_new_item_defaults_to_not_started() {
        let item = NewLearningItem::new("Ownership", Difficulty::Intermediate)
            .into_item("a1", at(1))
            .unwrap();
        assert_eq!(item.status, LearningStatus::NotStarted);
        assert_eq!(item.difficulty, Difficulty::Intermediate);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = NewLearningItem::new("  ", Difficulty::Beginner)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref m) if m == "Title is required"));
    }

    #[test]
    fn test_resource_url_validated() {
        let ok = NewLearningItem::new("Book", Difficulty::Advanced)
            .with_resource_url("https://doc.rust-lang.org/book/");
        assert!(ok.validate().is_ok());

        let bad = NewLearningItem::new("Book", Difficulty::Advanced).with_resource_url("not a url");
        assert!(matches!(bad.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_update_applies_present_fields() {
        let mut item = NewLearningItem::new("Traits", Difficulty::Beginner)
            .with_description("generic bounds")
            .into_item("a1", at(1))
            .unwrap();

        LearningItemUpdate {
            status: Some(LearningStatus::InProgress),
            difficulty: Some(Difficulty::Advanced),
            ..Default::default()
        }
        .apply_to(&mut item)
        .unwrap();

        assert_eq!(item.title, "Traits");
        assert_eq!(item.description.as_deref(), Some("generic bounds"));
        assert_eq!(item.status, LearningStatus::InProgress);
        assert_eq!(item.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_invalid_update_leaves_item_unchanged() {
        let mut item = item("a1", 1);
        let before = item.clone();

        let result = LearningItemUpdate {
            title: Some("New".to_string()),
            resource_url: Some("::".to_string()),
            ..Default::default()
        }
        .apply_to(&mut item);

        assert!(result.is_err());
        assert_eq!(item, before);
    }

    #[test]
    fn test_stored_item_validate() {
        let mut item = item("a1", 1);
        assert!(item.validate().is_ok());

        item.resource_url = Some("nope".to_string());
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut items = vec![item("a", 1), item("c", 3), item("b", 2)];
        sort_newest_first(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_item_json_shape() {
        let json = r#"{
            "id": "ck1",
            "title": "Async Rust",
            "resourceUrl": "https://tokio.rs",
            "difficulty": "ADVANCED",
            "status": "IN_PROGRESS",
            "createdAt": "2026-03-01T12:00:00Z"
        }"#;
        let item: LearningItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.resource_url.as_deref(), Some("https://tokio.rs"));
        assert_eq!(item.difficulty, Difficulty::Advanced);
        assert_eq!(item.status, LearningStatus::InProgress);
        assert_eq!(item.created_at, at(1));
    }

    #[test]
    fn test_update_json_is_partial() {
        let update: LearningItemUpdate = serde_json::from_str(r#"{"status":"COMPLETED"}"#).unwrap();
        assert_eq!(update.status, Some(LearningStatus::Completed));
        assert!(update.title.is_none());
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!(
            "in-progress".parse::<LearningStatus>().unwrap(),
            LearningStatus::InProgress
        );
        assert!("done".parse::<LearningStatus>().is_err());
    }
}
