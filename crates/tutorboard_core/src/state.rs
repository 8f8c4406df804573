use thiserror::Error;

use crate::view_model::DashboardViewModel;

pub type CourseId = u64;

/// Pagination window used by the shell when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Publication state of a course, the only payload field the listing
/// inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Published,
    Draft,
}

/// The active inclusion predicate over course statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Published,
    Drafts,
}

impl CourseFilter {
    fn matches(self, status: CourseStatus) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Published => status == CourseStatus::Published,
            CourseFilter::Drafts => status == CourseStatus::Draft,
        }
    }
}

/// One listable course as handed over by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub status: CourseStatus,
    pub learners: u32,
}

/// User-adjustable view state, exported so the shell can persist it
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPrefs {
    pub filter: CourseFilter,
    pub page: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page size must be at least 1, got {0}")]
    PageSize(u32),
}

/// Owned state of the course listing.
///
/// Courses are kept in catalog order; the filter and the page are the only
/// user-adjustable fields, and the page size is fixed at construction.
/// `set_page` stores whatever the pager requested; every derivation clamps
/// the stored value to `1..=total_pages` before use, so a shrinking result
/// set can never publish an out-of-range page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    courses: Vec<CourseSummary>,
    filter: CourseFilter,
    page: u32,
    page_size: u32,
    last_error: Option<String>,
    dirty: bool,
}

impl DashboardState {
    pub fn new(page_size: u32) -> Result<Self, ConfigError> {
        if page_size < 1 {
            return Err(ConfigError::PageSize(page_size));
        }
        Ok(Self {
            courses: Vec::new(),
            filter: CourseFilter::All,
            page: 1,
            page_size,
            last_error: None,
            dirty: false,
        })
    }

    pub fn view(&self) -> DashboardViewModel {
        DashboardViewModel {
            courses: self.page_slice(),
            page: self.current_page(),
            page_size: self.page_size,
            total_count: self.total_count(),
            total_pages: self.total_pages(),
            filter: self.filter,
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Switch the status filter.
    ///
    /// A new filter changes the result-set cardinality, so the listing
    /// always restarts from the first page, even when the mode is
    /// unchanged.
    pub fn set_filter(&mut self, filter: CourseFilter) {
        self.filter = filter;
        self.page = 1;
        self.dirty = true;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
        self.dirty = true;
    }

    /// Wholesale snapshot refresh from the catalog; individual records are
    /// never patched.
    pub fn replace_courses(&mut self, courses: Vec<CourseSummary>) {
        self.courses = courses;
        self.last_error = None;
        self.dirty = true;
    }

    pub fn record_catalog_failure(&mut self, message: String) {
        self.last_error = Some(message);
        self.dirty = true;
    }

    pub fn view_prefs(&self) -> ViewPrefs {
        ViewPrefs {
            filter: self.filter,
            page: self.current_page(),
        }
    }

    /// Re-apply persisted preferences: filter first (which resets the
    /// page), then the remembered page on top of it.
    pub fn restore_view(&mut self, prefs: ViewPrefs) {
        self.set_filter(prefs.filter);
        self.set_page(prefs.page);
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn filtered(&self) -> Vec<&CourseSummary> {
        self.courses
            .iter()
            .filter(|course| self.filter.matches(course.status))
            .collect()
    }

    fn total_count(&self) -> usize {
        self.filtered().len()
    }

    fn total_pages(&self) -> u32 {
        // Floor of 1 so an empty result set still renders "page 1 of 1".
        let pages = self.total_count().div_ceil(self.page_size as usize) as u32;
        pages.max(1)
    }

    /// The requested page corrected to the `1..=total_pages` range.
    fn current_page(&self) -> u32 {
        self.page.clamp(1, self.total_pages())
    }

    fn page_slice(&self) -> Vec<CourseSummary> {
        let start = (self.current_page() as usize - 1) * self.page_size as usize;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .cloned()
            .collect()
    }
}
