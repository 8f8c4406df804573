#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog,
    PersistView(crate::ViewPrefs),
}
