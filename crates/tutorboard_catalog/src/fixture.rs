use board_logging::board_debug;

use crate::{CatalogError, CatalogSource, CourseRecord, CourseStatus};

/// Deterministic stand-in catalog for demos and tests.
///
/// Every third course (starting with the first) is a draft and the rest are
/// published; titles, learner counts, and ratings are derived from the
/// index, so a given `count` always produces the same snapshot.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    count: u64,
}

impl FixtureCatalog {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl CatalogSource for FixtureCatalog {
    fn load(&self) -> Result<Vec<CourseRecord>, CatalogError> {
        let records = (0..self.count)
            .map(|index| {
                let draft = index % 3 == 0;
                CourseRecord {
                    id: index + 1,
                    title: format!("Course {}", index + 1),
                    status: if draft {
                        CourseStatus::Draft
                    } else {
                        CourseStatus::Published
                    },
                    learners: ((index * 17 + 3) % 250) as u32,
                    rating_tenths: if draft {
                        None
                    } else {
                        Some(30 + (index % 21) as u16)
                    },
                    updated_at: None,
                }
            })
            .collect();
        board_debug!("generated fixture catalog with {} courses", self.count);
        Ok(records)
    }
}
