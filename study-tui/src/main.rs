mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod notify;
mod runtime;
mod types;
mod ui;
mod validation;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::StudyConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    // Must run while the process is still single-threaded.
    ui::utils::capture_local_offset();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?
        .block_on(run())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = StudyConfig::config_path()?;
            if !path.exists() {
                StudyConfig::default().save()?;
                println!("Created default config at {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Run => {
            init_logging();
            let config = StudyConfig::load()?;
            let (gateway, label) = bootstrap::remote_gateway(&config)?;
            run_tui(gateway.as_ref(), label).await
        }
        Commands::Dev => {
            init_logging();
            let (gateway, label) = bootstrap::dev_gateway();
            run_tui(gateway.as_ref(), label).await
        }
    }
}

fn init_logging() {
    let result = StudyConfig::log_path().and_then(|path| logging::init(&path));
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}

async fn run_tui(gateway: &dyn api::EntryGateway, label: String) -> Result<()> {
    let mut app = App::new(label);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("study-tui started");
    let res = runtime::run_app(&mut terminal, &mut app, gateway).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("study-tui exited with error: {:?}", err);
    } else {
        tracing::info!(total_hours = app.list.total_hours(), "study-tui stopped");
    }
    res
}
