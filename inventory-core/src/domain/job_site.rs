use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{fold_case, CategoryTag, Item, JobSiteId, JobSiteStatus};
use crate::error::ValidationError;

/// A job site and its per-category inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSite {
    pub id: JobSiteId,
    pub name: String,
    pub categories: Vec<CategoryTag>,
    pub status: JobSiteStatus,
    /// Only categories that have been saved at least once have an entry.
    #[serde(default)]
    pub categories_data: BTreeMap<CategoryTag, Vec<Item>>,
}

/// Whether a category's inventory has ever been persisted for a job site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState<'a> {
    NeverViewed,
    Stored(&'a [Item]),
}

impl JobSite {
    pub fn category_state(&self, category: CategoryTag) -> CategoryState<'_> {
        match self.categories_data.get(&category) {
            Some(items) => CategoryState::Stored(items),
            None => CategoryState::NeverViewed,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        fold_case(&self.name) == fold_case(name)
    }
}

/// Draft of the job site creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewJobSite {
    pub name: String,
    categories: Vec<CategoryTag>,
    pub status: Option<JobSiteStatus>,
}

impl NewJobSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_category(mut self, category: CategoryTag) -> Self {
        self.add_category(category);
        self
    }

    pub fn with_status(mut self, status: JobSiteStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn categories(&self) -> &[CategoryTag] {
        &self.categories
    }

    /// Adds a category; selecting one twice keeps the first position.
    pub fn add_category(&mut self, category: CategoryTag) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    pub fn remove_category(&mut self, category: CategoryTag) {
        self.categories.retain(|c| *c != category);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.categories.is_empty() {
            return Err(ValidationError::MissingCategories);
        }
        if self.status.is_none() {
            return Err(ValidationError::MissingStatus);
        }
        Ok(())
    }

    /// Validates the draft and splits it into `create` arguments.
    pub fn into_parts(self) -> Result<(String, Vec<CategoryTag>, JobSiteStatus), ValidationError> {
        self.validate()?;
        let status = self.status.ok_or(ValidationError::MissingStatus)?;
        Ok((self.name, self.categories, status))
    }
}
