use tutorboard_core::{CourseFilter, CourseStatus, CourseSummary, DashboardViewModel};

/// Render the read model as a text table with a status line and a pager
/// line.
pub fn render(view: &DashboardViewModel) -> String {
    let status_line = match &view.last_error {
        Some(error) => format!(
            "Filter: {} | Courses: {} | Last refresh failed: {}",
            filter_label(view.filter),
            view.total_count,
            error
        ),
        None => format!(
            "Filter: {} | Courses: {}",
            filter_label(view.filter),
            view.total_count
        ),
    };

    let mut lines = vec![status_line];
    if view.courses.is_empty() {
        lines.push("  (no courses)".to_string());
    }
    for course in &view.courses {
        lines.push(format_course_row(course));
    }
    lines.push(format!("page {} of {}", view.page, view.total_pages));
    lines.join("\n")
}

fn format_course_row(course: &CourseSummary) -> String {
    format!(
        "  [#{id}] {status:<9} {title} ({learners} learners)",
        id = course.id,
        status = status_label(course.status),
        title = course.title,
        learners = course.learners
    )
}

fn status_label(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Published => "published",
        CourseStatus::Draft => "draft",
    }
}

fn filter_label(filter: CourseFilter) -> &'static str {
    match filter {
        CourseFilter::All => "all",
        CourseFilter::Published => "published",
        CourseFilter::Drafts => "drafts",
    }
}
