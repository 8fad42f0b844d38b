// crates/types/src/source.rs
//! Discovery source types: one vCenter environment being inventoried,
//! either by an OVA discovery agent or by an uploaded file.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::inventory::Inventory;

/// Connection/inventory status of a discovery source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "kebab-case")]
pub enum SourceStatus {
    NotConnected,
    WaitingForCredentials,
    GatheringInventory,
    UpToDate,
    Error,
    #[serde(other)]
    Unknown,
}

impl SourceStatus {
    /// Badge text shown next to the source in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotConnected => "Not connected",
            Self::WaitingForCredentials => "Waiting for credentials",
            Self::GatheringInventory => "Gathering inventory",
            Self::UpToDate => "Up to date",
            Self::Error => "Error",
            Self::Unknown => "Unknown",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConnected => "not-connected",
            Self::WaitingForCredentials => "waiting-for-credentials",
            Self::GatheringInventory => "gathering-inventory",
            Self::UpToDate => "up-to-date",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized source status: {0}")]
pub struct ParseSourceStatusError(String);

impl FromStr for SourceStatus {
    type Err = ParseSourceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-connected" => Ok(Self::NotConnected),
            "waiting-for-credentials" => Ok(Self::WaitingForCredentials),
            "gathering-inventory" => Ok(Self::GatheringInventory),
            "up-to-date" => Ok(Self::UpToDate),
            "error" => Ok(Self::Error),
            other => Err(ParseSourceStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovery source: one environment whose inventory feeds assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../../ui/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: Uuid,
    pub name: String,
    pub status: SourceStatus,
    pub created_at: DateTime<Utc>,
    /// True when the source was created by an on-premises discovery agent
    /// rather than an uploaded file.
    #[serde(default)]
    pub on_premises: bool,
    /// Agent version, present only for agent-backed sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    /// Latest inventory snapshot, absent until discovery first completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}
