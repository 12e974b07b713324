//! folio console entry point.
//!
//! Shows the loading animation, then the welcome banner, then reads one
//! command per line from stdin until EOF. Logs go to stderr.
//!
//! Usage: `folio [config.toml]` (falls back to `$FOLIO_CONFIG`, then to the
//! built-in defaults).

mod input;
mod render;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use folio_terminal::{InputResult, Session};
use folio_types::config::FolioConfig;
use folio_types::input::InputEvent;
use folio_vfs::portfolio_tree;

use render::ConsoleRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = resolve_config()?;
    log::info!(
        "Starting folio (loading {} ms, tick {} ms)",
        config.loading_delay_ms,
        config.loading_tick_ms,
    );

    let tree = portfolio_tree().context("building content tree")?;
    let mut session = Session::new(&tree, &config);
    let mut renderer = ConsoleRenderer::new(&config.title);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.header(&mut out)?;

    // Loading phase: the timer is consumed by the transition, so this loop
    // is the only place that sleeps.
    let mut dt_ms = 0;
    while !session.tick(dt_ms) {
        renderer.loading(&mut out, &session.loading_text())?;
        thread::sleep(Duration::from_millis(u64::from(config.loading_tick_ms)));
        dt_ms = config.loading_tick_ms;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    'running: loop {
        renderer.sync(&mut out, &session)?;
        renderer.prompt(&mut out, &session)?;

        let events = match lines.next() {
            Some(line) => input::line_events(&line.context("reading stdin")?),
            None => vec![InputEvent::Quit],
        };
        for event in &events {
            if session.handle_input(event) == InputResult::Quit {
                break 'running;
            }
        }
    }

    log::info!("folio shut down cleanly");
    Ok(())
}

/// Resolve the configuration from the CLI argument, `FOLIO_CONFIG`, or
/// defaults, in that order.
fn resolve_config() -> Result<FolioConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => FolioConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            log::debug!("No config given, using defaults");
            Ok(FolioConfig::default())
        },
    }
}
