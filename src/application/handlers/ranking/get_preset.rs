//! GetPresetHandler - Query handler for the built-in sample decisions.

use crate::domain::aras::Preset;
use crate::domain::foundation::DomainError;

/// Query for a preset by name.
#[derive(Debug, Clone)]
pub struct GetPresetQuery {
    pub name: String,
}

/// Result of a successful preset lookup.
pub type GetPresetResult = Preset;

/// Handler for preset lookups.
#[derive(Debug, Clone, Default)]
pub struct GetPresetHandler;

impl GetPresetHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetPresetQuery) -> Result<GetPresetResult, DomainError> {
        Ok(Preset::by_name(&query.name)?)
    }
}
