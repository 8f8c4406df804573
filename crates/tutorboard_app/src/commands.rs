use tutorboard_core::{CourseFilter, DashboardViewModel, Msg};

/// One line of user input mapped onto the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Filter(CourseFilter),
    Page(u32),
    NextPage,
    PrevPage,
    Refresh,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let tail = parts.next();
    if parts.next().is_some() {
        return None;
    }
    let command = match (head, tail) {
        ("all", None) => Command::Filter(CourseFilter::All),
        ("published", None) => Command::Filter(CourseFilter::Published),
        ("drafts", None) => Command::Filter(CourseFilter::Drafts),
        ("page", Some(value)) => Command::Page(value.parse().ok()?),
        ("next", None) | ("n", None) => Command::NextPage,
        ("prev", None) | ("p", None) => Command::PrevPage,
        ("refresh", None) | ("r", None) => Command::Refresh,
        ("help", None) | ("?", None) => Command::Help,
        ("quit", None) | ("q", None) => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Resolve a command against the current view into a core message.
///
/// `next`/`prev` are pager conveniences; the core only knows absolute
/// pages, so they are computed here from the published page number.
pub fn to_msg(command: Command, view: &DashboardViewModel) -> Option<Msg> {
    match command {
        Command::Filter(filter) => Some(Msg::FilterSelected(filter)),
        Command::Page(page) => Some(Msg::PageSelected(page)),
        Command::NextPage => Some(Msg::PageSelected(view.page.saturating_add(1))),
        Command::PrevPage => Some(Msg::PageSelected(view.page.saturating_sub(1))),
        Command::Refresh => Some(Msg::RefreshRequested),
        Command::Help | Command::Quit => None,
    }
}
