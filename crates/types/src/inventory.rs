// crates/types/src/inventory.rs
//! Inventory snapshot types: what discovery found in a vCenter environment.
//!
//! These are display inputs, not a systems contract; the summary transforms
//! in `migration-view-core` turn them into chart/table data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate view of the virtual machines in one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct VmSummary {
    pub total: u64,
    /// VMs with no blocking migration issues.
    pub total_migratable: u64,
    pub cpu_cores: u64,
    pub ram_gb: u64,
    pub disk_gb: u64,
    /// Guest OS name -> VM count. BTreeMap keeps serialization order stable.
    #[serde(default)]
    pub os: BTreeMap<String, u64>,
    /// Issues that would block or complicate migration, with affected counts.
    #[serde(default)]
    pub migration_warnings: Vec<MigrationIssue>,
}

/// One class of migration warning and how many VMs it affects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct MigrationIssue {
    pub label: String,
    pub count: u64,
    /// Longer explanation shown in the detail table, when the server has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
}

/// Aggregate view of the infrastructure under the VMs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct InfraSummary {
    pub total_hosts: u64,
    pub total_clusters: u64,
    pub total_datastores: u64,
    pub total_networks: u64,
}

/// One environment's full inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub vms: VmSummary,
    pub infra: InfraSummary,
}
