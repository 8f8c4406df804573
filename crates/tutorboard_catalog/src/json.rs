use std::fs;
use std::path::PathBuf;

use board_logging::board_info;

use crate::source::ensure_unique_ids;
use crate::{CatalogError, CatalogSource, CourseRecord};

/// Catalog backed by a JSON array on disk.
///
/// The file holds the complete snapshot for one instructor; record order in
/// the file is the order the dashboard lists them in.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<CourseRecord>, CatalogError> {
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<CourseRecord> = serde_json::from_str(&content)?;
        ensure_unique_ids(&records)?;
        board_info!("loaded {} courses from {:?}", records.len(), self.path);
        Ok(records)
    }
}
