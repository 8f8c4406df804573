use std::collections::HashSet;

use crate::{CatalogError, CourseRecord};

/// A provider of the full course snapshot for one instructor.
///
/// Sources return records in catalog order. Callers treat the result as a
/// wholesale replacement, never as a patch.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<CourseRecord>, CatalogError>;
}

/// Course ids must be unique within a snapshot.
pub(crate) fn ensure_unique_ids(records: &[CourseRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
    }
    Ok(())
}
