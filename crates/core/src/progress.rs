// crates/core/src/progress.rs
//! Display projection from job status to a progress indicator.
//!
//! Presentation only; the poller's state machine never consults this. The
//! percentages are monotonically non-decreasing across the normal
//! pending → parsing → validating → completed path; terminal failures and
//! unrecognized statuses get a label and no number.

use migration_view_types::JobStatus;

/// What a progress bar / badge should show for a job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: Option<u8>,
    pub label: &'static str,
}

impl ProgressView {
    pub fn from_status(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Self {
                percent: Some(20),
                label: "Waiting in queue",
            },
            JobStatus::Parsing => Self {
                percent: Some(50),
                label: "Parsing inventory",
            },
            JobStatus::Validating => Self {
                percent: Some(80),
                label: "Validating",
            },
            JobStatus::Completed => Self {
                percent: Some(100),
                label: "Complete",
            },
            JobStatus::Failed => Self {
                percent: None,
                label: "Failed",
            },
            JobStatus::Cancelled => Self {
                percent: None,
                label: "Cancelled",
            },
            JobStatus::Unknown => Self {
                percent: None,
                label: "Unknown status",
            },
        }
    }
}
