// crates/core/src/query.rs
//! Sort/filter for the assessment and discovery-source listings.
//!
//! Pure functions over borrowed slices; the listings stay server-ordered and
//! the view applies these on every render.

use std::str::FromStr;

use migration_view_types::{Assessment, Source, SourceStatus, SourceType};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sort order: {0} (expected asc or desc)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Sort key for the assessment listing. Default is creation time, which
/// combined with the descending default shows newest assessments first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssessmentSort {
    Name,
    #[default]
    CreatedAt,
    SourceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sort key: {0} (expected name, created or source)")]
pub struct ParseSortKeyError(String);

impl FromStr for AssessmentSort {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "created" | "created-at" => Ok(Self::CreatedAt),
            "source" | "source-type" => Ok(Self::SourceType),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssessmentQuery {
    /// Case-insensitive substring match on the assessment name.
    pub search: Option<String>,
    pub source: Option<SourceType>,
    pub sort: AssessmentSort,
    pub order: SortOrder,
}

/// Apply search, filter and sort. The sort is stable, so rows that compare
/// equal keep their server order.
pub fn filter_assessments<'a>(
    items: &'a [Assessment],
    query: &AssessmentQuery,
) -> Vec<&'a Assessment> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let mut rows: Vec<&Assessment> = items
        .iter()
        .filter(|a| {
            needle
                .as_deref()
                .is_none_or(|n| a.name.to_lowercase().contains(n))
        })
        .filter(|a| query.source.is_none_or(|s| a.source_type == s))
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort {
            AssessmentSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            AssessmentSort::CreatedAt => a.created_at.cmp(&b.created_at),
            AssessmentSort::SourceType => a.source_type.as_str().cmp(b.source_type.as_str()),
        };
        match query.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSort {
    Name,
    #[default]
    CreatedAt,
}

impl FromStr for SourceSort {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "created" | "created-at" => Ok(Self::CreatedAt),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceQuery {
    pub search: Option<String>,
    pub status: Option<SourceStatus>,
    pub sort: SourceSort,
    pub order: SortOrder,
}

pub fn filter_sources<'a>(items: &'a [Source], query: &SourceQuery) -> Vec<&'a Source> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let mut rows: Vec<&Source> = items
        .iter()
        .filter(|s| {
            needle
                .as_deref()
                .is_none_or(|n| s.name.to_lowercase().contains(n))
        })
        .filter(|s| query.status.is_none_or(|wanted| s.status == wanted))
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort {
            SourceSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SourceSort::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match query.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows
}
