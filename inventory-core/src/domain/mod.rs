mod category;
mod ids;
mod item;
mod job_site;
mod status;

pub use category::CategoryTag;
pub use ids::JobSiteId;
pub use item::{Item, ItemDraft};
pub use job_site::{CategoryState, JobSite, NewJobSite};
pub use status::JobSiteStatus;

/// Lowercases one character at a time, so a prefix of the input always folds
/// to a prefix of the output.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
