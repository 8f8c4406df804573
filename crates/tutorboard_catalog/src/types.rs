use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Publication state of a course as stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Published,
    Draft,
}

/// One course as supplied by a catalog source.
///
/// The dashboard lists records in the order the source returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: u64,
    pub title: String,
    pub status: CourseStatus,
    #[serde(default)]
    pub learners: u32,
    /// Average review rating in tenths of a star, absent until the course
    /// has reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_tenths: Option<u16>,
    /// RFC3339 timestamp of the last content update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate course id {0} in catalog")]
    DuplicateId(u64),
}
