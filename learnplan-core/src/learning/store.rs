//! JSON file holding a learner's items

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::{Error, Result};

use super::{LearningItem, LearningItemUpdate, NewLearningItem};

/// Learning items loaded from, and saved back to, a JSON array file
#[derive(Debug)]
pub struct ItemStore {
    path: PathBuf,
    items: Vec<LearningItem>,
}

impl ItemStore {
    /// Load the items at `path`
    ///
    /// A missing file is an empty store; it is created on the first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let items = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = items.len(), "Opened item store");
        Ok(Self { path, items })
    }

    /// Get the file backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the items, in file order
    pub fn items(&self) -> &[LearningItem] {
        &self.items
    }

    /// Validate `new` and append it with a fresh id
    pub fn add(&mut self, new: NewLearningItem) -> Result<&LearningItem> {
        let item = new.into_item(Uuid::new_v4().to_string(), Utc::now())?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Apply `update` to the item with `id`
    pub fn update(&mut self, id: &str, update: LearningItemUpdate) -> Result<&LearningItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        update.apply_to(item)?;
        Ok(item)
    }

    /// Remove and return the item with `id`
    pub fn delete(&mut self, id: &str) -> Result<LearningItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Write the items back to the file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), count = self.items.len(), "Saved item store");
        Ok(())
    }
}
