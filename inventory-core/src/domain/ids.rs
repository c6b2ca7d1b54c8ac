use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a job site.
///
/// Assigned as `count + 1` at creation, so it is only unique while job sites
/// are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobSiteId(u32);

impl JobSiteId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id the next job site gets in a collection of `count` entries.
    pub(crate) fn next_for_count(count: usize) -> Self {
        Self(count as u32 + 1)
    }
}

impl fmt::Display for JobSiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for JobSiteId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
