//! Detective Quest: The Final Chapter
//!
//! Explore the mansion, collect clues and accuse the culprit.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::tui::{plain, App};
use detective_quest::{Fixture, Game, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "detective-quest", version, about = "Explore the mansion, collect clues and accuse the culprit")]
struct Cli {
    /// Load the mansion and suspect records from a TOML fixture
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Most distinct suspects the case file can hold
    #[arg(long)]
    max_suspects: Option<usize>,

    /// Play on plain stdin/stdout instead of the full-screen interface
    #[arg(long)]
    plain: bool,
}

/// Puts the terminal back the way it was, however the game ends
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

fn run_tui(fixture: Fixture) -> Result<()> {
    let mut app = App::new(fixture)?;

    let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Main loop
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if !app.handle_input()? {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut fixture = match &cli.fixture {
        Some(path) => Fixture::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Fixture::manor(),
    };
    if let Some(max) = cli.max_suspects {
        fixture.max_suspects = max;
    }

    if cli.plain {
        let mut game = Game::new(&fixture)?;
        plain::run(&mut game, io::stdin().lock(), stdout().lock())?;
        return Ok(());
    }

    run_tui(fixture)?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!                   ║");
    println!("║                                                        ║");
    println!("║  The mansion's secrets are safe with you.              ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}
