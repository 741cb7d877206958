use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::fetch::WalletsClient;
use crate::lifecycle::CancelToken;
use crate::ui::mvi::Reducer;
use crate::ui::wallets::intent::WalletsIntent;
use crate::ui::wallets::reducer::WalletsReducer;
use crate::ui::wallets::state::ViewState;

/// One instance of the wallets view.
///
/// Each instance issues at most one request. Showing fresh data means
/// tearing this instance down and creating a new one with a higher
/// generation; results tagged with an old generation are stale.
pub struct WalletsView {
    generation: u64,
    state: ViewState,
    cancel: CancelToken,
    activated: bool,
}

impl WalletsView {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            state: ViewState::default(),
            cancel: CancelToken::new(),
            activated: false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn render_text(&self) -> String {
        self.state.render_text()
    }

    /// Starts the request on `runtime`.
    ///
    /// `deliver` is called at most once, with the outcome, and never after
    /// [`teardown`](Self::teardown). Returns `None` if this instance was
    /// already activated or has been torn down.
    pub fn activate<F>(
        &mut self,
        runtime: &Handle,
        client: WalletsClient,
        deliver: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce(WalletsIntent) + Send + 'static,
    {
        if self.activated || self.is_torn_down() {
            tracing::debug!(generation = self.generation, "Ignoring repeated activation");
            return None;
        }
        self.activated = true;

        let cancel = self.cancel.clone();
        let generation = self.generation;
        tracing::info!(generation, url = %client.url(), "Activating wallets view");

        Some(runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(generation, "Request cancelled by teardown");
                }
                result = client.fetch() => {
                    if let Err(err) = &result {
                        tracing::warn!(generation, kind = err.kind(), "Request failed: {}", err);
                    }
                    if cancel.is_cancelled() {
                        tracing::debug!(generation, "Dropping result for torn down view");
                        return;
                    }
                    deliver(WalletsIntent::from(result));
                }
            }
        }))
    }

    /// Applies a resolved outcome. Returns whether the state changed.
    pub fn apply(&mut self, intent: WalletsIntent) -> bool {
        if self.is_torn_down() {
            return false;
        }
        let next = WalletsReducer::reduce(self.state.clone(), intent);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Cancels the in-flight request, if any. Later outcomes are ignored.
    pub fn teardown(&mut self) {
        if !self.is_torn_down() {
            tracing::debug!(generation = self.generation, "Tearing down wallets view");
        }
        self.cancel.cancel();
    }
}

impl Drop for WalletsView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
