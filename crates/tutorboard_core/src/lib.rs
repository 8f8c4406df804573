//! Tutorboard core: pure course-listing state and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ConfigError, CourseFilter, CourseId, CourseStatus, CourseSummary, DashboardState, ViewPrefs,
    DEFAULT_PAGE_SIZE,
};
pub use update::update;
pub use view_model::DashboardViewModel;
