use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use walletview::cli::Cli;
use walletview::config::Config;
use walletview::fetch::WalletsClient;
use walletview::{headless, logging, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(err) = logging::init_tracing(&log_path) {
        eprintln!(
            "Warning: logging disabled, cannot open '{}': {}",
            log_path.display(),
            err
        );
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.apply_overrides(&cli.overrides());
    config.validate().context("Invalid configuration")?;

    let client =
        WalletsClient::from_config(&config.endpoint).context("Failed to prepare request")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.once {
        let outcome = runtime.block_on(async {
            let mut stdout = io::stdout().lock();
            headless::run_once(&client, &mut stdout).await
        })?;
        return Ok(outcome.exit_code());
    }

    ui::run(&config, client, runtime.handle().clone()).context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}
