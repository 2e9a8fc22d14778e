use serde::Serialize;

use crate::models::job::JobPosting;
use crate::recommend::scorer::SimilarityScorer;

/// Maximum number of recommendations returned to the caller.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One scored posting, as returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecommendation {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub location: String,
    pub salary: u64,
    /// Percentage in [0, 100], rounded to 2 decimal places.
    pub similarity_score: f64,
}

/// Scores every posting against the user's skills, sorts descending by score,
/// and truncates to the top `MAX_RECOMMENDATIONS`. Returns the truncated list
/// together with the full catalog size.
pub fn rank_jobs(
    scorer: &dyn SimilarityScorer,
    user_skills: &[String],
    jobs: &[JobPosting],
) -> (Vec<JobRecommendation>, usize) {
    let total_jobs = jobs.len();

    let mut ranked: Vec<JobRecommendation> = jobs
        .iter()
        .map(|job| {
            let score = scorer.score(user_skills, &job.skills_required);
            JobRecommendation {
                job_id: job.id.clone(),
                title: job.title.clone(),
                description: job.description.clone(),
                skills_required: job.skills_required.clone(),
                location: job.location.clone(),
                salary: job.salary,
                similarity_score: to_percentage(score),
            }
        })
        .collect();

    // Stable sort: postings with equal scores keep catalog order.
    ranked.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    ranked.truncate(MAX_RECOMMENDATIONS);

    (ranked, total_jobs)
}

/// Converts a [0, 1] score to a percentage rounded to 2 decimal places.
fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}
