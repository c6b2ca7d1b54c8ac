//! Cached view of the persisted job-site collection.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;

use crate::domain::{fold_case, CategoryState, CategoryTag, Item, JobSite, JobSiteId, JobSiteStatus, NewJobSite};
use crate::error::{InventoryError, Result, ValidationError};
use crate::generator::CategoryDataGenerator;
use crate::storage::StorageAdapter;

/// Result of [`JobSiteRepository::update_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUpdate {
    Applied,
    ItemNotFound,
    JobSiteNotFound,
}

/// Job sites in insertion order, backed by a [`StorageAdapter`].
///
/// Storage is the source of truth: every mutation re-reads the whole
/// collection, changes it and writes the whole collection back before the
/// cache is replaced.
pub struct JobSiteRepository<S, R = StdRng> {
    storage: S,
    generator: CategoryDataGenerator<R>,
    sites: Vec<JobSite>,
    /// Latest generated rows per category that have not been saved yet.
    unsaved_seeds: HashMap<(JobSiteId, CategoryTag), Vec<Item>>,
}

impl<S: StorageAdapter> JobSiteRepository<S, StdRng> {
    pub fn open(storage: S) -> Self {
        Self::with_generator(storage, CategoryDataGenerator::from_entropy())
    }
}

impl<S: StorageAdapter, R: Rng> JobSiteRepository<S, R> {
    pub fn with_generator(storage: S, generator: CategoryDataGenerator<R>) -> Self {
        let sites = storage.load();
        Self {
            storage,
            generator,
            sites,
            unsaved_seeds: HashMap::new(),
        }
    }

    /// Replaces the cache with what storage currently holds.
    pub fn reload(&mut self) {
        self.sites = self.storage.load();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn list(&self) -> &[JobSite] {
        &self.sites
    }

    pub fn find_by_id(&self, id: JobSiteId) -> Option<&JobSite> {
        self.sites.iter().find(|site| site.id == id)
    }

    /// Job sites whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&JobSite> {
        let query = fold_case(query);
        self.sites
            .iter()
            .filter(|site| fold_case(&site.name).contains(&query))
            .collect()
    }

    pub fn create_from(&mut self, form: NewJobSite) -> Result<JobSite> {
        let (name, categories, status) = form.into_parts()?;
        self.create(name, categories, status)
    }

    #[tracing::instrument(skip_all, fields(name = %name.as_ref(), status = %status))]
    pub fn create(
        &mut self,
        name: impl AsRef<str>,
        categories: impl IntoIterator<Item = CategoryTag>,
        status: JobSiteStatus,
    ) -> Result<JobSite> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        let mut unique: Vec<CategoryTag> = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        if unique.is_empty() {
            return Err(ValidationError::MissingCategories.into());
        }

        let created = self.mutate(|sites| {
            if sites.iter().any(|site| site.has_name(name)) {
                return Err(InventoryError::DuplicateName(name.to_string()));
            }
            let site = JobSite {
                id: JobSiteId::next_for_count(sites.len()),
                name: name.to_string(),
                categories: unique,
                status,
                categories_data: Default::default(),
            };
            sites.push(site.clone());
            Ok(site)
        })?;

        tracing::info!(id = %created.id, "created job site");
        Ok(created)
    }

    /// Items of one category. Unsaved categories get freshly generated rows
    /// on every call; those rows are kept only until the next edit saves them.
    pub fn get_category_items(&mut self, id: JobSiteId, category: CategoryTag) -> Vec<Item> {
        let stored = match self.find_by_id(id) {
            Some(site) => match site.category_state(category) {
                CategoryState::Stored(items) => Some(items.to_vec()),
                CategoryState::NeverViewed => None,
            },
            None => {
                tracing::warn!(%id, %category, "job site not found, no items to show");
                return Vec::new();
            }
        };
        if let Some(items) = stored {
            return items;
        }

        let seeded = self.generator.generate(category);
        tracing::debug!(%id, %category, "generated placeholder items");
        self.unsaved_seeds.insert((id, category), seeded.clone());
        seeded
    }

    /// Replaces the item with the same id in that category and persists the
    /// collection. Unknown job sites and item ids leave storage untouched.
    #[tracing::instrument(skip(self, item), fields(item_id = item.id))]
    pub fn update_item(
        &mut self,
        id: JobSiteId,
        category: CategoryTag,
        item: Item,
    ) -> Result<ItemUpdate> {
        let pending = self.unsaved_seeds.get(&(id, category)).cloned();

        let mut sites = self.storage.load();
        let Some(site) = sites.iter_mut().find(|site| site.id == id) else {
            tracing::warn!("job site not found, edit dropped");
            return Ok(ItemUpdate::JobSiteNotFound);
        };

        let mut items = match site.categories_data.get(&category) {
            Some(items) => items.clone(),
            None => pending.unwrap_or_default(),
        };
        let Some(slot) = items.iter_mut().find(|existing| existing.id == item.id) else {
            tracing::warn!("item not found, edit dropped");
            return Ok(ItemUpdate::ItemNotFound);
        };
        *slot = item;
        site.categories_data.insert(category, items);

        self.storage.save(&sites)?;
        self.sites = sites;
        self.unsaved_seeds.remove(&(id, category));

        tracing::info!("item updated");
        Ok(ItemUpdate::Applied)
    }

    fn mutate<T>(&mut self, change: impl FnOnce(&mut Vec<JobSite>) -> Result<T>) -> Result<T> {
        let mut sites = self.storage.load();
        let out = change(&mut sites)?;
        self.storage.save(&sites)?;
        self.sites = sites;
        Ok(out)
    }
}
