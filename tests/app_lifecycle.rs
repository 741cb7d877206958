mod common;

use common::{client_for, MockResponse, MockWalletsServer};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tokio::runtime::Handle;
use walletview::ui::app::App;
use walletview::ui::events::AppEvent;
use walletview::ui::input::handle_key;
use walletview::ui::wallets::{ViewState, WalletsIntent, LOADING_TEXT};

fn next_fetched(rx: &Receiver<AppEvent>) -> (u64, WalletsIntent) {
    loop {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Fetched { generation, intent }) => return (generation, intent),
            Ok(_) => continue,
            Err(err) => panic!("no fetch result: {:?}", err),
        }
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_app_starts_loading_then_applies_result() {
    let server = MockWalletsServer::start().await;
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(client_for(&server.wallets_url()), Handle::current(), tx);

    app.activate();
    assert_eq!(app.view().render_text(), LOADING_TEXT);

    let (generation, intent) = tokio::task::spawn_blocking(move || next_fetched(&rx))
        .await
        .unwrap();
    app.on_fetched(generation, intent);

    assert_eq!(app.view().state(), &ViewState::Loaded(json!({"wallets": []})));
    assert_eq!(app.endpoint(), server.wallets_url());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_activate_twice_sends_one_request() {
    let server = MockWalletsServer::start().await;
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(client_for(&server.wallets_url()), Handle::current(), tx);

    app.activate();
    app.activate();
    tokio::task::spawn_blocking(move || next_fetched(&rx))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(server.request_count().await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reload_discards_stale_result() {
    let server = MockWalletsServer::start().await;
    server
        .enqueue(MockResponse::json(r#"{"wallets": ["old"]}"#).with_delay(300))
        .await;
    server
        .enqueue(MockResponse::json(r#"{"wallets": ["new"]}"#))
        .await;
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(client_for(&server.wallets_url()), Handle::current(), tx);

    app.activate();
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.reload();
    assert_eq!(app.view().generation(), 1);
    assert_eq!(app.view().render_text(), LOADING_TEXT);

    // A late result tagged for generation 0 must not land on the new view
    app.on_fetched(0, WalletsIntent::Loaded(json!({"wallets": ["old"]})));
    assert_eq!(app.view().render_text(), LOADING_TEXT);

    let (generation, intent) = tokio::task::spawn_blocking(move || next_fetched(&rx))
        .await
        .unwrap();
    assert_eq!(generation, 1);
    app.on_fetched(generation, intent);

    assert_eq!(app.view().render_text(), r#"{"wallets":["new"]}"#);
    assert_eq!(server.request_count().await, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_keys_drive_reload_and_quit() {
    let server = MockWalletsServer::start().await;
    let (tx, _rx) = mpsc::channel();
    let mut app = App::new(client_for(&server.wallets_url()), Handle::current(), tx);
    app.activate();

    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.view().generation(), 1);
    assert!(!app.should_quit());

    handle_key(&mut app, press(KeyCode::Char('x')));
    assert!(!app.should_quit());

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_teardown_stops_delivery() {
    let server = MockWalletsServer::start().await;
    server
        .enqueue(MockResponse::json("[]").with_delay(300))
        .await;
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(client_for(&server.wallets_url()), Handle::current(), tx);

    app.activate();
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.teardown();

    let received = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_millis(600)))
        .await
        .unwrap();
    assert!(received.is_err());
    assert!(app.view().is_torn_down());
}
