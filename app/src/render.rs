//! Plain-text rendering of `UiState`.
//!
//! Image references are printed as-is; resolving them to pixels belongs to
//! whatever image loader sits behind the terminal.

use amphibians_core::{Amphibian, UiState};

pub const LOADING: &str = "Loading amphibians...";
pub const ERROR: &str = "Failed to load amphibians";
pub const RETRY_HINT: &str = "Type 'r' and Enter to retry, 'q' to quit.";
pub const EMPTY: &str = "No amphibians found.";

pub fn render(state: &UiState) -> String {
    match state {
        UiState::Loading => LOADING.to_string(),
        UiState::Error => format!("{ERROR}\n{RETRY_HINT}"),
        UiState::Success(amphibians) if amphibians.is_empty() => EMPTY.to_string(),
        UiState::Success(amphibians) => amphibians
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_card(amphibian: &Amphibian) -> String {
    format!(
        "{} ({})\n  image: {}\n  {}",
        amphibian.name, amphibian.kind, amphibian.img_src, amphibian.description
    )
}
