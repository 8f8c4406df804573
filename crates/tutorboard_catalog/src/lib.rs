//! Tutorboard catalog: course records and the data sources that supply them.
mod fixture;
mod json;
mod source;
mod types;

pub use fixture::FixtureCatalog;
pub use json::JsonFileCatalog;
pub use source::CatalogSource;
pub use types::{CatalogError, CourseRecord, CourseStatus};
