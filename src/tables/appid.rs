//! Application ID table entry

use super::TableEntry;

/// An application registry entry; extended data is keyed by these
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId {
    /// Application name
    pub name: String,
}

impl AppId {
    pub fn new(name: impl Into<String>) -> Self {
        AppId { name: name.into() }
    }

    /// The standard "ACAD" application ID
    pub fn acad() -> Self {
        Self::new("ACAD")
    }
}

impl TableEntry for AppId {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "ACAD"
    }
}
