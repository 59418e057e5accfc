mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod render;
mod util;
use crate::app::App;
use crate::clock::FrameClock;
use crate::config::{Config, LoggingConfig};
use crate::game::input::CrosstermInput;
use crate::game::Game;
use anyhow::Context;
use crossterm::{execute, terminal::SetTitle};
use log::LevelFilter;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = setup() {
        eprintln!("wrapsnake: {e:?}");
        return ExitCode::from(2);
    }
    let terminal = ratatui::init();
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, SetTitle(consts::WINDOW_TITLE)) {
        log::warn!("Failed to set terminal title: {e}");
    }
    let app = App::new(Game::new(consts::GRID), CrosstermInput, FrameClock::new());
    let r = app.run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Read the configuration file and start logging
fn setup() -> anyhow::Result<()> {
    let path = Config::default_path()?;
    let config = Config::load(&path, true)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    init_logging(&config.logging)?;
    log::info!("Starting wrapsnake {}", env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration path: {}", path.display());
    Ok(())
}

fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    if cfg.level == LevelFilter::Off {
        return Ok(());
    }
    let path = cfg
        .log_file()
        .context("failed to determine path to local data directory")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::File::create(&path).context("failed to create log file")?;
    WriteLogger::init(cfg.level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal terminal error: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
