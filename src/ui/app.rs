use crate::fetch::WalletsClient;
use crate::ui::events::AppEvent;
use crate::ui::wallets::{WalletsIntent, WalletsView};
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

pub struct App {
    should_quit: bool,
    tick: u64,
    client: WalletsClient,
    runtime: Handle,
    events: Sender<AppEvent>,
    endpoint: String,
    /// The live view. Replaced wholesale on reload.
    view: WalletsView,
}

impl App {
    pub fn new(client: WalletsClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        let endpoint = client.url().to_string();
        Self {
            should_quit: false,
            tick: 0,
            client,
            runtime,
            events,
            endpoint,
            view: WalletsView::new(0),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &WalletsView {
        &self.view
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Starts the current view's request. Only the first call has an effect.
    pub fn activate(&mut self) {
        let events = self.events.clone();
        let generation = self.view.generation();
        self.view.activate(&self.runtime, self.client.clone(), move |intent| {
            // The UI loop may already be gone
            let _ = events.send(AppEvent::Fetched { generation, intent });
        });
    }

    /// Replaces the view with a fresh instance and activates it.
    pub fn reload(&mut self) {
        self.view.teardown();
        self.view = WalletsView::new(self.view.generation() + 1);
        tracing::info!(generation = self.view.generation(), "Reloading wallets");
        self.activate();
    }

    pub fn on_fetched(&mut self, generation: u64, intent: WalletsIntent) {
        if generation != self.view.generation() {
            tracing::debug!(
                generation,
                current = self.view.generation(),
                "Discarding result for replaced view"
            );
            return;
        }
        self.view.apply(intent);
    }

    pub fn teardown(&mut self) {
        self.view.teardown();
    }
}
