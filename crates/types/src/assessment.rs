// crates/types/src/assessment.rs
//! Assessment types: a named migration plan built from an inventory snapshot.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::inventory::Inventory;

/// How the assessment's inventory was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Rvtools,
    Agent,
    Inventory,
}

impl SourceType {
    /// Human label shown in listings and the creation wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rvtools => "RVTools file",
            Self::Agent => "Discovery agent",
            Self::Inventory => "Raw inventory",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rvtools => "rvtools",
            Self::Agent => "agent",
            Self::Inventory => "inventory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized source type: {0} (expected rvtools, agent or inventory)")]
pub struct ParseSourceTypeError(String);

impl FromStr for SourceType {
    type Err = ParseSourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rvtools" => Ok(Self::Rvtools),
            "agent" => Ok(Self::Agent),
            "inventory" => Ok(Self::Inventory),
            other => Err(ParseSourceTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time copy of a source's inventory, attached to an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub created_at: DateTime<Utc>,
    pub inventory: Inventory,
}

/// A migration assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    pub name: String,
    pub source_type: SourceType,
    pub created_at: DateTime<Utc>,
    /// The discovery source this assessment was built from, when it still
    /// exists (absent for one-shot file uploads).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<Uuid>,
    /// Snapshots, newest last (server append order).
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

impl Assessment {
    /// The most recent inventory snapshot, if any exists yet.
    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_labels() {
        assert_eq!(SourceType::Rvtools.label(), "RVTools file");
        assert_eq!("agent".parse::<SourceType>().unwrap(), SourceType::Agent);
        assert!("ova".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_assessment_deserialize_without_snapshots() {
        let json = r#"{
            "id": "1e0e37a3-7c10-4a50-a8cb-9f2f1f2dcf3a",
            "name": "prod-cluster",
            "sourceType": "rvtools",
            "createdAt": "2026-05-01T10:00:00Z"
        }"#;
        let a: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(a.name, "prod-cluster");
        assert!(a.snapshots.is_empty());
        assert!(a.latest_snapshot().is_none());
    }
}
