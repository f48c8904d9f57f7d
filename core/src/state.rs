//! What the screen should currently show.

use crate::types::Amphibian;

/// Owned by `AmphibiansViewModel`; read-only to everyone else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Loading,
    /// Amphibians in server response order.
    Success(Vec<Amphibian>),
    /// The last fetch failed. The cause is logged, not kept.
    Error,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UiState::Error)
    }

    pub fn amphibians(&self) -> Option<&[Amphibian]> {
        match self {
            UiState::Success(amphibians) => Some(amphibians),
            _ => None,
        }
    }
}
