// crates/api/src/info.rs
//! Process-wide planner service info.
//!
//! The value is populated by an explicit [`init_service_info`] call, never
//! implicitly on first use, and [`service_info`] returns `None` until that
//! init has succeeded. `None` is the documented "unknown" fallback: callers
//! must render it as such, and a failed init may simply be retried later.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpPlannerClient;

/// Version metadata reported by the planner service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub version: String,
    /// Schema generation of the inventory payloads this service emits.
    #[serde(default)]
    pub inventory_schema_version: u32,
}

static SERVICE_INFO: OnceLock<ServiceInfo> = OnceLock::new();

/// Fetch and store the service info. Idempotent: once a fetch has succeeded
/// the stored value wins and later calls return it without a network round
/// trip. A failed fetch leaves the state unset.
pub async fn init_service_info(
    client: &HttpPlannerClient,
) -> Result<&'static ServiceInfo, ApiError> {
    if let Some(info) = SERVICE_INFO.get() {
        return Ok(info);
    }
    let fetched = client.fetch_service_info().await?;
    // Two concurrent inits can race; the loser's value is dropped.
    Ok(SERVICE_INFO.get_or_init(|| fetched))
}

/// The cached service info, or `None` when unknown (init not yet run, or it
/// failed every time so far).
pub fn service_info() -> Option<&'static ServiceInfo> {
    SERVICE_INFO.get()
}
