// crates/types/src/job.rs
//! Types for server-side upload jobs (RVTools parse/validate).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Opaque job identifier assigned by the server on creation.
pub type JobId = String;

/// Status of an upload job as reported by the server.
///
/// The server is the sole source of truth: clients never validate transition
/// legality, they just display whatever comes back. Values outside the known
/// set deserialize to `Unknown` instead of failing the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Parsing,
    Validating,
    Completed,
    Failed,
    Cancelled,
    /// Any status value this client build does not recognize.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether this status is terminal: no further transitions occur.
    ///
    /// `Unknown` is non-terminal: a newer server may report intermediate
    /// states this build has never heard of, and stopping the poll there
    /// would strand the job.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Parsing => "parsing",
            Self::Validating => "validating",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// One server-side unit of asynchronous work created from an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    /// Server-provided detail line (e.g. the validation error for `Failed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,
    /// Name of the uploaded file, echoed back by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Job {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
