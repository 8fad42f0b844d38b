// crates/api/src/contract.rs
//! The consumed REST contract, as traits.
//!
//! `HttpPlannerClient` is the production implementation; tests substitute
//! scripted in-memory fakes. The server is the sole source of truth for job
//! status; nothing here validates transition legality.

use async_trait::async_trait;
use migration_view_types::{Assessment, Job, Source};
use uuid::Uuid;

use crate::error::ApiError;

/// Upload-job lifecycle: create from a file, read status, best-effort cancel.
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Submit a file for server-side parse/validate. Returns the created job
    /// (normally `Pending`).
    async fn create_job(&self, name: &str, file: Vec<u8>) -> Result<Job, ApiError>;

    /// Re-read a job's current state.
    async fn get_job(&self, id: &str) -> Result<Job, ApiError>;

    /// Ask the server to cancel a job.
    async fn cancel_job(&self, id: &str) -> Result<(), ApiError>;
}

/// Assessment CRUD, consumed as opaque endpoints.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    async fn list_assessments(&self) -> Result<Vec<Assessment>, ApiError>;

    async fn delete_assessment(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Discovery source listing.
#[async_trait]
pub trait SourceApi: Send + Sync {
    async fn list_sources(&self) -> Result<Vec<Source>, ApiError>;
}
