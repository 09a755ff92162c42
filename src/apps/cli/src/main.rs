mod app;
mod config;
mod logging;
mod theme;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use app::App;
use config::Config;

const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "neoncode-cli", about = "NeonCode - a simulated AI coding IDE")]
struct Args {
    /// Color theme: cyberpunk, hacker, dark, neon
    #[arg(long)]
    theme: Option<String>,

    /// Path to a config file (defaults to the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = logging::init(args.debug)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(ref theme) = args.theme {
        config.theme = Some(config::parse_theme(theme)?);
    }

    info!(log = %log_path.display(), "starting NeonCode");
    let mut terminal = ui::init_terminal()?;
    let result = run(&mut terminal, App::new(config));
    ui::restore_terminal(terminal)?;
    result
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    mut app: App,
) -> Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, &app))?;
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    info!("shutting down");
    Ok(())
}
