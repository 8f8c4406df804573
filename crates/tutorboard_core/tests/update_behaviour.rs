use std::sync::Once;

use tutorboard_core::{
    update, CourseFilter, CourseStatus, CourseSummary, DashboardState, Effect, Msg, ViewPrefs,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn seeded_courses(count: u64) -> Vec<CourseSummary> {
    (0..count)
        .map(|index| CourseSummary {
            id: index + 1,
            title: format!("Course {}", index + 1),
            status: if index % 3 == 0 {
                CourseStatus::Draft
            } else {
                CourseStatus::Published
            },
            learners: ((index * 17 + 3) % 250) as u32,
        })
        .collect()
}

fn seeded_state(count: u64, page_size: u32) -> DashboardState {
    let state = DashboardState::new(page_size).expect("valid page size");
    let (state, _effects) = update(state, Msg::CatalogLoaded(seeded_courses(count)));
    state
}

#[test]
fn filter_change_resets_the_page() {
    init_logging();
    let state = seeded_state(28, 8);
    let (state, _effects) = update(state, Msg::PageSelected(3));
    assert_eq!(state.view().page, 3);

    let (state, _effects) = update(state, Msg::FilterSelected(CourseFilter::Published));
    let view = state.view();

    assert_eq!(view.page, 1);
    assert_eq!(view.filter, CourseFilter::Published);
    // Page 1 of the published subset, not a leftover window of `All`.
    let ids: Vec<u64> = view.courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3, 5, 6, 8, 9, 11, 12]);
}

#[test]
fn reselecting_the_same_filter_still_resets_the_page() {
    init_logging();
    let state = seeded_state(28, 8);
    let (state, _effects) = update(state, Msg::PageSelected(2));
    assert_eq!(state.view().page, 2);

    let (state, _effects) = update(state, Msg::FilterSelected(CourseFilter::All));
    assert_eq!(state.view().page, 1);
}

#[test]
fn filter_and_page_commands_emit_persist_effects() {
    init_logging();
    let state = seeded_state(28, 8);

    let (state, effects) = update(state, Msg::FilterSelected(CourseFilter::Drafts));
    assert_eq!(
        effects,
        vec![Effect::PersistView(ViewPrefs {
            filter: CourseFilter::Drafts,
            page: 1,
        })]
    );

    let (_state, effects) = update(state, Msg::PageSelected(2));
    assert_eq!(
        effects,
        vec![Effect::PersistView(ViewPrefs {
            filter: CourseFilter::Drafts,
            page: 2,
        })]
    );
}

#[test]
fn persisted_page_is_clamped_before_it_is_saved() {
    init_logging();
    let state = seeded_state(28, 8);

    let (_state, effects) = update(state, Msg::PageSelected(99));
    assert_eq!(
        effects,
        vec![Effect::PersistView(ViewPrefs {
            filter: CourseFilter::All,
            page: 4,
        })]
    );
}

#[test]
fn refresh_requests_a_catalog_load() {
    init_logging();
    let state = seeded_state(28, 8);
    let before = state.view();

    let (state, effects) = update(state, Msg::RefreshRequested);

    assert_eq!(effects, vec![Effect::LoadCatalog]);
    assert_eq!(state.view(), before);
}

#[test]
fn catalog_failure_is_surfaced_and_cleared_by_the_next_load() {
    init_logging();
    let state = seeded_state(28, 8);

    let (state, _effects) = update(state, Msg::CatalogFailed("file missing".to_string()));
    let view = state.view();
    assert_eq!(view.last_error.as_deref(), Some("file missing"));
    // A failed refresh keeps the previous snapshot on screen.
    assert_eq!(view.total_count, 28);

    let (state, _effects) = update(state, Msg::CatalogLoaded(seeded_courses(28)));
    assert_eq!(state.view().last_error, None);
}

#[test]
fn restore_view_applies_filter_then_page() {
    init_logging();
    let state = seeded_state(28, 8);

    let (state, effects) = update(
        state,
        Msg::RestoreView(ViewPrefs {
            filter: CourseFilter::Drafts,
            page: 2,
        }),
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.filter, CourseFilter::Drafts);
    assert_eq!(view.page, 2);
}

#[test]
fn commands_mark_the_state_dirty_once() {
    init_logging();
    let state = seeded_state(28, 8);
    let (mut state, _effects) = update(state, Msg::PageSelected(2));

    assert!(state.view().dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn ticks_do_not_dirty_the_state() {
    init_logging();
    let mut state = seeded_state(28, 8);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
