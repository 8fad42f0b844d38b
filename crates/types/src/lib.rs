// crates/types/src/lib.rs
//! Wire types shared between the planner REST API, the core poller/query
//! logic, and the browser frontend (exported to TypeScript via ts-rs).

pub mod assessment;
pub mod inventory;
pub mod job;
pub mod source;

pub use assessment::*;
pub use inventory::*;
pub use job::*;
pub use source::*;
