use serde::{Deserialize, Serialize};

/// A single job posting in the catalog.
/// Constructed once at startup; never created, updated, or deleted at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered as listed in the posting; duplicates are preserved.
    pub skills_required: Vec<String>,
    pub location: String,
    pub salary: u64,
}
