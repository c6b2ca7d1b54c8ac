//! Per-job-site inventory screen: category selection, search and the edit
//! sub-flow.

use rand::Rng;

use crate::domain::{CategoryTag, Item, ItemDraft, JobSiteId};
use crate::error::Result;
use crate::repository::{ItemUpdate, JobSiteRepository};
use crate::storage::StorageAdapter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPanel {
    NoCategorySelected,
    CategorySelected {
        category: CategoryTag,
        items: Vec<Item>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing(ItemDraft),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    job_site_id: JobSiteId,
    job_site_name: String,
    categories: Vec<CategoryTag>,
    panel: CategoryPanel,
    search: String,
    edit: EditState,
}

impl Dashboard {
    /// Opens the dashboard for a job site, or `None` if it does not exist.
    pub fn open<S: StorageAdapter, R: Rng>(
        repo: &JobSiteRepository<S, R>,
        id: JobSiteId,
    ) -> Option<Self> {
        let Some(site) = repo.find_by_id(id) else {
            tracing::warn!(%id, "job site not found");
            return None;
        };
        Some(Self {
            job_site_id: site.id,
            job_site_name: site.name.clone(),
            categories: site.categories.clone(),
            panel: CategoryPanel::NoCategorySelected,
            search: String::new(),
            edit: EditState::Viewing,
        })
    }

    pub fn job_site_id(&self) -> JobSiteId {
        self.job_site_id
    }

    pub fn job_site_name(&self) -> &str {
        &self.job_site_name
    }

    /// Categories shown in the sidebar.
    pub fn categories(&self) -> &[CategoryTag] {
        &self.categories
    }

    pub fn panel(&self) -> &CategoryPanel {
        &self.panel
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn selected_category(&self) -> Option<CategoryTag> {
        match &self.panel {
            CategoryPanel::CategorySelected { category, .. } => Some(*category),
            CategoryPanel::NoCategorySelected => None,
        }
    }

    /// Every item of the selected category, ignoring the search term.
    pub fn items(&self) -> &[Item] {
        match &self.panel {
            CategoryPanel::CategorySelected { items, .. } => items,
            CategoryPanel::NoCategorySelected => &[],
        }
    }

    pub fn select_category<S: StorageAdapter, R: Rng>(
        &mut self,
        repo: &mut JobSiteRepository<S, R>,
        category: CategoryTag,
    ) {
        let items = repo.get_category_items(self.job_site_id, category);
        self.panel = CategoryPanel::CategorySelected { category, items };
        self.search.clear();
        self.edit = EditState::Viewing;
    }

    pub fn clear_category(&mut self) {
        self.panel = CategoryPanel::NoCategorySelected;
        self.search.clear();
        self.edit = EditState::Viewing;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Items of the selected category matching the current search term.
    /// Always evaluated against the full list.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items()
            .iter()
            .filter(|item| item.matches(&self.search))
            .collect()
    }

    /// Starts editing the row with `item_id`. Returns false when no category
    /// is selected or the id is not in the list.
    pub fn begin_edit(&mut self, item_id: u32) -> bool {
        let Some(item) = self.items().iter().find(|item| item.id == item_id) else {
            return false;
        };
        self.edit = EditState::Editing(ItemDraft::from_item(item));
        true
    }

    pub fn draft_mut(&mut self) -> Option<&mut ItemDraft> {
        match &mut self.edit {
            EditState::Editing(draft) => Some(draft),
            EditState::Viewing => None,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Saves the draft through the repository and replaces the row in place.
    ///
    /// An invalid draft is returned as an error and editing continues.
    pub fn save_edit<S: StorageAdapter, R: Rng>(
        &mut self,
        repo: &mut JobSiteRepository<S, R>,
    ) -> Result<ItemUpdate> {
        let EditState::Editing(draft) = &self.edit else {
            return Ok(ItemUpdate::ItemNotFound);
        };
        let Some(category) = self.selected_category() else {
            return Ok(ItemUpdate::ItemNotFound);
        };
        let item = draft.clone().into_item()?;

        let outcome = repo.update_item(self.job_site_id, category, item.clone())?;
        if outcome == ItemUpdate::Applied {
            if let CategoryPanel::CategorySelected { items, .. } = &mut self.panel {
                if let Some(row) = items.iter_mut().find(|row| row.id == item.id) {
                    *row = item;
                }
            }
        }
        self.edit = EditState::Viewing;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobSiteStatus;
    use crate::error::{InventoryError, ValidationError};
    use crate::generator::CategoryDataGenerator;
    use crate::storage::MemoryStorage;

    fn setup() -> (JobSiteRepository<MemoryStorage>, Dashboard) {
        let mut repo =
            JobSiteRepository::with_generator(MemoryStorage::new(), CategoryDataGenerator::seeded(11));
        let site = repo
            .create(
                "Site A",
                [CategoryTag::Scaffold, CategoryTag::Shoring],
                JobSiteStatus::InProgress,
            )
            .unwrap();
        let dashboard = Dashboard::open(&repo, site.id).unwrap();
        (repo, dashboard)
    }

    #[test]
    fn open_unknown_site_returns_none() {
        let repo = JobSiteRepository::open(MemoryStorage::new());
        assert!(Dashboard::open(&repo, JobSiteId::new(1)).is_none());
    }

    #[test]
    fn category_selection_state_machine() {
        let (mut repo, mut dashboard) = setup();
        assert_eq!(dashboard.panel(), &CategoryPanel::NoCategorySelected);
        assert!(dashboard.visible_items().is_empty());

        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        assert_eq!(dashboard.selected_category(), Some(CategoryTag::Scaffold));
        assert_eq!(dashboard.items().len(), 5);

        dashboard.clear_category();
        assert_eq!(dashboard.panel(), &CategoryPanel::NoCategorySelected);
        assert!(dashboard.items().is_empty());
    }

    #[test]
    fn search_is_recomputed_from_full_list() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Scaffold);

        dashboard.set_search("item 3");
        let ids: Vec<_> = dashboard.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);

        dashboard.set_search("item 39");
        assert!(dashboard.visible_items().iter().all(|i| i.id == 3));

        dashboard.set_search("ITEM");
        assert_eq!(dashboard.visible_items().len(), 5);
    }

    #[test]
    fn narrowing_search_never_grows_results() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Shoring);

        let terms = ["", "n", "no", "not", "notes", "notes for shoring item 2"];
        let mut previous: Vec<u32> = dashboard.items().iter().map(|i| i.id).collect();
        for term in terms {
            dashboard.set_search(term);
            let current: Vec<u32> = dashboard.visible_items().iter().map(|i| i.id).collect();
            assert!(current.iter().all(|id| previous.contains(id)), "{term}");
            previous = current;
        }
        assert_eq!(previous, vec![2]);
    }

    #[test]
    fn selecting_a_category_resets_search() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        dashboard.set_search("nothing matches this");
        assert!(dashboard.visible_items().is_empty());

        dashboard.select_category(&mut repo, CategoryTag::Shoring);
        assert_eq!(dashboard.search(), "");
        assert_eq!(dashboard.visible_items().len(), 5);
    }

    #[test]
    fn save_edit_replaces_row_in_place() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        let before = dashboard.items().to_vec();

        assert!(dashboard.begin_edit(3));
        dashboard.draft_mut().unwrap().quantity = "42".to_string();
        let outcome = dashboard.save_edit(&mut repo).unwrap();

        assert_eq!(outcome, ItemUpdate::Applied);
        assert_eq!(dashboard.edit_state(), &EditState::Viewing);
        assert_eq!(dashboard.items()[2].quantity, 42);
        assert_eq!(&dashboard.items()[..2], &before[..2]);
        assert_eq!(&dashboard.items()[3..], &before[3..]);
        assert_eq!(
            repo.get_category_items(dashboard.job_site_id(), CategoryTag::Scaffold),
            dashboard.items()
        );
    }

    #[test]
    fn cancel_edit_leaves_items_unchanged() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        let before = dashboard.items().to_vec();
        let saved = repo.storage().raw();

        assert!(dashboard.begin_edit(1));
        dashboard.draft_mut().unwrap().notes = "changed".to_string();
        dashboard.cancel_edit();

        assert_eq!(dashboard.edit_state(), &EditState::Viewing);
        assert_eq!(dashboard.items(), before.as_slice());
        assert_eq!(repo.storage().raw(), saved);
    }

    #[test]
    fn invalid_draft_stays_in_editing() {
        let (mut repo, mut dashboard) = setup();
        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        assert!(dashboard.begin_edit(2));
        dashboard.draft_mut().unwrap().quantity = "many".to_string();

        let err = dashboard.save_edit(&mut repo).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Validation(ValidationError::InvalidQuantity(_))
        ));
        assert!(matches!(dashboard.edit_state(), EditState::Editing(_)));
    }

    #[test]
    fn begin_edit_requires_selected_row() {
        let (mut repo, mut dashboard) = setup();
        assert!(!dashboard.begin_edit(1));

        dashboard.select_category(&mut repo, CategoryTag::Scaffold);
        assert!(!dashboard.begin_edit(6));
        assert!(dashboard.draft_mut().is_none());
    }
}
