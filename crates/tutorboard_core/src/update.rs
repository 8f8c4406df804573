use crate::{DashboardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilterSelected(filter) => {
            state.set_filter(filter);
            vec![Effect::PersistView(state.view_prefs())]
        }
        Msg::PageSelected(page) => {
            state.set_page(page);
            vec![Effect::PersistView(state.view_prefs())]
        }
        Msg::RefreshRequested => vec![Effect::LoadCatalog],
        Msg::CatalogLoaded(courses) => {
            state.replace_courses(courses);
            Vec::new()
        }
        Msg::CatalogFailed(message) => {
            state.record_catalog_failure(message);
            Vec::new()
        }
        Msg::RestoreView(prefs) => {
            state.restore_view(prefs);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
