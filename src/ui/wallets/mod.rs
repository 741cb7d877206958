//! The wallets fetch-and-render view.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WalletsIntent;
pub use reducer::WalletsReducer;
pub use state::{ViewState, LOADING_TEXT};
pub use view::WalletsView;
