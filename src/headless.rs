//! `--once` mode: fetch, print, exit. No terminal UI.

use std::future::Future;
use std::io::{self, Write};
use std::process::ExitCode;

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::fetch::WalletsClient;
use crate::ui::wallets::{ViewState, WalletsView};

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loaded,
    Failed,
    Interrupted,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Loaded => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(2),
            Outcome::Interrupted => ExitCode::from(130),
        }
    }
}

/// Prints `Loading...`, then the rendered result, one line each.
///
/// Ctrl+C while waiting tears the view down and prints nothing further.
pub async fn run_once<W: Write>(client: &WalletsClient, out: &mut W) -> io::Result<Outcome> {
    run_once_until(client, out, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Like [`run_once`], but stops early when `interrupt` resolves first.
pub async fn run_once_until<W, I>(
    client: &WalletsClient,
    out: &mut W,
    interrupt: I,
) -> io::Result<Outcome>
where
    W: Write,
    I: Future<Output = ()>,
{
    let mut view = WalletsView::new(0);
    writeln!(out, "{}", view.render_text())?;
    out.flush()?;

    let (tx, rx) = oneshot::channel();
    view.activate(&Handle::current(), client.clone(), move |intent| {
        let _ = tx.send(intent);
    });

    tokio::select! {
        resolved = rx => match resolved {
            Ok(intent) => {
                view.apply(intent);
            }
            Err(_) => {
                tracing::error!("Fetch task ended without a result");
                return Ok(Outcome::Interrupted);
            }
        },
        _ = interrupt => {
            tracing::info!("Interrupted before the request resolved");
            view.teardown();
            return Ok(Outcome::Interrupted);
        }
    }

    writeln!(out, "{}", view.render_text())?;
    out.flush()?;

    Ok(match view.state() {
        ViewState::Loaded(_) => Outcome::Loaded,
        _ => Outcome::Failed,
    })
}
