use crate::ui::mvi::Reducer;
use crate::ui::wallets::intent::WalletsIntent;
use crate::ui::wallets::state::ViewState;

pub struct WalletsReducer;

impl Reducer for WalletsReducer {
    type State = ViewState;
    type Intent = WalletsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (ViewState::Uninitialized, WalletsIntent::Loaded(payload)) => {
                ViewState::Loaded(payload)
            }
            (ViewState::Uninitialized, WalletsIntent::Failed(failure)) => {
                ViewState::Failed(failure)
            }
            // Resolved states are terminal
            (resolved, _) => resolved,
        }
    }
}
