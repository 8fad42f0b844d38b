// crates/api/src/lib.rs
//! Client side of the migration planner REST API.
//!
//! The API itself is an external collaborator; this crate pins down the
//! consumed contract as traits (`JobApi`, `AssessmentApi`, `SourceApi`),
//! provides the production `HttpPlannerClient`, and owns the process-wide
//! service info state.

pub mod contract;
pub mod error;
pub mod http;
pub mod info;

pub use contract::{AssessmentApi, JobApi, SourceApi};
pub use error::ApiError;
pub use http::{HttpPlannerClient, PlannerClientConfig, DEFAULT_API_URL};
pub use info::{init_service_info, service_info, ServiceInfo};
