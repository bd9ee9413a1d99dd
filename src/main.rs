use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_n::config::{GameConfig, PlayerKind};
use connect_n::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Connect N in the terminal.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play Connect N in the terminal")]
struct Cli {
    /// Number of rows on the board
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns on the board
    #[arg(long)]
    cols: Option<usize>,

    /// Pieces in a row needed to win
    #[arg(long)]
    n: Option<usize>,

    /// Who plays Yellow (moves first)
    #[arg(long, value_enum, ignore_case = true)]
    player1: Option<PlayerKind>,

    /// Who plays Red
    #[arg(long, value_enum, ignore_case = true)]
    player2: Option<PlayerKind>,

    /// Seconds a bot waits before moving
    #[arg(long)]
    bot_delay: Option<f64>,

    /// Seed for the bots' random fallback moves
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.board.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.board.cols = cols;
        }
        if let Some(n) = self.n {
            config.board.n = n;
        }
        if let Some(kind) = self.player1 {
            config.players.player1 = kind;
        }
        if let Some(kind) = self.player2 {
            config.players.player2 = kind;
        }
        if let Some(delay) = self.bot_delay {
            config.players.bot_delay = delay;
        }
        if self.seed.is_some() {
            config.players.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr, which shares the screen with the TUI; stay quiet
    // unless asked.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid game settings")?;

    let mut app = App::new(&config)?;
    info!(
        rows = config.board.rows,
        cols = config.board.cols,
        n = config.board.n,
        "starting game"
    );

    run(&mut app).context("terminal error")?;

    if let Some(line) = app.final_message() {
        println!("{line}");
    }
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
