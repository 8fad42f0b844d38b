// crates/core/src/lib.rs
//! Client-side logic for the migration planner: the upload-job poller, the
//! progress projection, list queries, the source selection holder, and the
//! inventory summary transforms.

pub mod poller;
pub mod progress;
pub mod query;
pub mod selection;
pub mod summary;

pub use poller::{JobPoller, POLL_INTERVAL};
pub use progress::ProgressView;
pub use query::{
    filter_assessments, filter_sources, AssessmentQuery, AssessmentSort, SortOrder, SourceQuery,
    SourceSort,
};
pub use selection::SourceSelection;
pub use summary::{
    format_capacity_gb, migratable_split, os_distribution, warnings_table, MigratableSplit,
    OsSlice,
};
