#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a status tab.
    FilterSelected(crate::CourseFilter),
    /// User jumped to a page via the pager.
    PageSelected(u32),
    /// User asked for a wholesale reload from the catalog.
    RefreshRequested,
    /// Catalog collaborator delivered a fresh snapshot.
    CatalogLoaded(Vec<crate::CourseSummary>),
    /// Catalog collaborator failed to deliver a snapshot.
    CatalogFailed(String),
    /// Restore view preferences persisted by a previous run.
    RestoreView(crate::ViewPrefs),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
