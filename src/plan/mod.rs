//! Year-by-year retrieval jobs.
//!
//! A [`Plan`] lists one job per year with its target file. Jobs whose file
//! already exists are skipped, so an interrupted run can simply be
//! restarted. Actual transfers are delegated to a [`Retriever`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::models::{Area, CountrySpec, Source, YearRange};
use crate::request::RetrieveRequest;
use crate::storage;

/// Errors while preparing or running jobs.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("retrieval of {target} failed")]
    Retrieve {
        target: PathBuf,
        source: RetrieveError,
    },
}

/// Failures reported by a [`Retriever`].
#[derive(Error, Debug)]
pub enum RetrieveError {
    #[error("CDS API rejected the request: {0}")]
    Rejected(String),

    #[error("transfer failed")]
    Transfer(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Whether a job still has to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Skipped,
}

/// One year of data for one variable and area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub year: i32,
    pub target: PathBuf,
    pub status: JobStatus,
    pub request: RetrieveRequest,
}

/// Everything needed to build a plan.
#[derive(Debug, Clone)]
pub struct PlanSpec {
    pub source: Source,
    pub variable: String,
    pub country: CountrySpec,
    pub area: Area,
    pub years: YearRange,
}

/// Ordered list of jobs sharing one output directory.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub directory: PathBuf,
    pub jobs: Vec<Job>,
}

/// Counts after running a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub retrieved: usize,
    pub skipped: usize,
}

/// Downstream client that performs the actual transfer.
///
/// Implementations are constructed with [`crate::credentials::Credentials`]
/// (usually from [`crate::credentials::resolve`]); the planner only tells
/// them what to fetch and where to put it. The dataset name travels in
/// [`RetrieveRequest::dataset`].
pub trait Retriever {
    fn retrieve(&mut self, request: &RetrieveRequest, target: &Path) -> Result<(), RetrieveError>;
}

impl Plan {
    /// Lay out the jobs under `root` without touching the filesystem
    /// beyond existence checks.
    pub fn build(root: &Path, spec: &PlanSpec) -> Self {
        let directory = storage::job_dir(root, &spec.country, &spec.variable, &spec.source);

        let jobs = spec
            .years
            .years()
            .map(|year| {
                let target = directory.join(storage::file_name(
                    &spec.variable,
                    &spec.source,
                    &spec.country,
                    year,
                ));
                let status = if target.is_file() {
                    JobStatus::Skipped
                } else {
                    JobStatus::Pending
                };
                Job {
                    year,
                    status,
                    request: RetrieveRequest::for_source(&spec.source, &spec.variable, year, spec.area),
                    target,
                }
            })
            .collect();

        Self { directory, jobs }
    }

    pub fn pending(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|j| j.status == JobStatus::Pending)
    }

    pub fn skipped(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.status == JobStatus::Skipped)
            .count()
    }

    /// Create the output directory and hand each pending job to `retriever`.
    ///
    /// Stops at the first failure; files written before it stay in place
    /// and are skipped on the next run.
    pub fn run(&self, retriever: &mut dyn Retriever) -> Result<Summary, PlanError> {
        std::fs::create_dir_all(&self.directory).map_err(|e| PlanError::CreateDir {
            path: self.directory.clone(),
            source: e,
        })?;

        let mut summary = Summary {
            retrieved: 0,
            skipped: self.skipped(),
        };

        for job in &self.jobs {
            match job.status {
                JobStatus::Skipped => {
                    tracing::info!(target_file = %job.target.display(), "already downloaded");
                }
                JobStatus::Pending => {
                    tracing::info!(year = job.year, dataset = %job.request.dataset, "retrieving");
                    retriever
                        .retrieve(&job.request, &job.target)
                        .map_err(|e| PlanError::Retrieve {
                            target: job.target.clone(),
                            source: e,
                        })?;
                    summary.retrieved += 1;
                }
            }
        }

        Ok(summary)
    }
}
