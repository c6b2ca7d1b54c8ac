use rand::Rng;

use crate::domain::{JobSite, JobSiteId, JobSiteStatus};
use crate::repository::JobSiteRepository;
use crate::storage::StorageAdapter;

/// One line of the job site overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSiteRow {
    pub id: JobSiteId,
    pub name: String,
    pub status: JobSiteStatus,
    pub status_color: &'static str,
    pub category_labels: Vec<&'static str>,
}

impl From<&JobSite> for JobSiteRow {
    fn from(site: &JobSite) -> Self {
        Self {
            id: site.id,
            name: site.name.clone(),
            status: site.status,
            status_color: site.status.color(),
            category_labels: site.categories.iter().map(|c| c.label()).collect(),
        }
    }
}

/// Rows for every job site whose name contains `search`, in creation order.
pub fn rows<S: StorageAdapter, R: Rng>(
    repo: &JobSiteRepository<S, R>,
    search: &str,
) -> Vec<JobSiteRow> {
    repo.search(search).into_iter().map(JobSiteRow::from).collect()
}
