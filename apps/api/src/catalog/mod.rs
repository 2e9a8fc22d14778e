//! Job catalog access: the read-only posting source behind a provider trait.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`, so a persistence-backed source
//! can replace `StaticJobCatalog` without touching the pipeline or scorer.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Read-only source of job postings.
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Returns a snapshot of every posting in the catalog.
    async fn all_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}

/// In-memory catalog seeded once at startup.
pub struct StaticJobCatalog {
    jobs: Vec<JobPosting>,
}

impl StaticJobCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// Catalog seeded with the fixed sample posting set.
    pub fn with_sample_jobs() -> Self {
        Self::new(sample_jobs())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobCatalog for StaticJobCatalog {
    async fn all_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.clone())
    }
}

fn posting(
    id: &str,
    title: &str,
    description: &str,
    skills: &[&str],
    location: &str,
    salary: u64,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        skills_required: skills.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        salary,
    }
}

/// The fixed sample data set. In production this would come from a database
/// behind another `JobCatalog` impl.
fn sample_jobs() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "Software Engineer",
            "Develop web applications using React, Node.js, and MongoDB",
            &["JavaScript", "React", "Node.js", "MongoDB", "Express"],
            "Remote",
            80_000,
        ),
        posting(
            "2",
            "Data Scientist",
            "Analyze data using Python, machine learning algorithms",
            &["Python", "Machine Learning", "Pandas", "Scikit-learn", "SQL"],
            "New York",
            95_000,
        ),
        posting(
            "3",
            "Frontend Developer",
            "Create responsive user interfaces with modern frameworks",
            &["JavaScript", "React", "CSS", "HTML", "TypeScript"],
            "San Francisco",
            85_000,
        ),
        posting(
            "4",
            "Backend Developer",
            "Build scalable APIs and microservices",
            &["Python", "Django", "PostgreSQL", "REST API", "Docker"],
            "Remote",
            90_000,
        ),
        posting(
            "5",
            "Full Stack Developer",
            "End-to-end development of web applications",
            &["JavaScript", "React", "Node.js", "Python", "AWS"],
            "Austin",
            95_000,
        ),
        posting(
            "6",
            "AI/ML Engineer",
            "Build and deploy machine learning models",
            &["Python", "TensorFlow", "PyTorch", "Machine Learning", "Deep Learning"],
            "Seattle",
            120_000,
        ),
        posting(
            "7",
            "DevOps Engineer",
            "Manage cloud infrastructure and CI/CD pipelines",
            &["AWS", "Docker", "Kubernetes", "Jenkins", "Terraform"],
            "Remote",
            110_000,
        ),
        posting(
            "8",
            "Mobile App Developer",
            "Develop cross-platform mobile applications",
            &["React Native", "JavaScript", "iOS", "Android", "Firebase"],
            "Los Angeles",
            95_000,
        ),
    ]
}
