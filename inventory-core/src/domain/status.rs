use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Progress state of a job site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum JobSiteStatus {
    #[strum(to_string = "Completed")]
    Completed,
    #[serde(rename = "In Progress", alias = "InProgress")]
    #[strum(to_string = "In Progress", serialize = "InProgress", serialize = "in-progress")]
    InProgress,
    #[serde(rename = "On Hold", alias = "OnHold")]
    #[strum(to_string = "On Hold", serialize = "OnHold", serialize = "on-hold")]
    OnHold,
}

impl JobSiteStatus {
    pub fn all() -> Vec<JobSiteStatus> {
        Self::iter().collect()
    }

    pub fn color(&self) -> &'static str {
        match self {
            JobSiteStatus::Completed => "#4CAF50",
            JobSiteStatus::InProgress => "#A5D6A7",
            JobSiteStatus::OnHold => "#FFEE58",
        }
    }
}
