//! Job-site inventory tracking: persisted job sites, per-category item lists
//! and the view-models the front end drives.

pub mod dashboard;
pub mod domain;
pub mod error;
pub mod generator;
pub mod repository;
pub mod site_list;
pub mod storage;

pub use dashboard::{CategoryPanel, Dashboard, EditState};
pub use domain::{
    CategoryState, CategoryTag, Item, ItemDraft, JobSite, JobSiteId, JobSiteStatus, NewJobSite,
};
pub use error::{InventoryError, Result, StorageError, ValidationError};
pub use generator::CategoryDataGenerator;
pub use repository::{ItemUpdate, JobSiteRepository};
pub use site_list::JobSiteRow;
pub use storage::{JsonFileStorage, MemoryStorage, StorageAdapter, JOB_SITES_SLOT};
