use crate::fetch::{FetchFailure, Payload};
use crate::ui::mvi::UiState;

/// Text shown until the request resolves.
pub const LOADING_TEXT: &str = "Loading...";

/// Everything the wallets view knows.
///
/// Starts `Uninitialized`, moves once to `Loaded` or `Failed`, and stays
/// there for the life of the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Uninitialized,
    Loaded(Payload),
    Failed(FetchFailure),
}

impl UiState for ViewState {}

impl ViewState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Uninitialized => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }

    /// Text for the view's single display slot.
    ///
    /// A payload and a failure are both shown as compact JSON in the same
    /// slot; callers that want to mark the outcome branch on the variant.
    pub fn render_text(&self) -> String {
        match self {
            Self::Uninitialized => LOADING_TEXT.to_string(),
            Self::Loaded(payload) => payload.to_string(),
            Self::Failed(failure) => failure.to_json(),
        }
    }
}
