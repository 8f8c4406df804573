use crate::{CourseFilter, CourseSummary};

/// Derived snapshot consumed by the presentation layer.
///
/// `courses` holds only the rows of the current page; counts and page
/// numbers describe the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub courses: Vec<CourseSummary>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: usize,
    pub total_pages: u32,
    pub filter: CourseFilter,
    pub last_error: Option<String>,
    pub dirty: bool,
}
