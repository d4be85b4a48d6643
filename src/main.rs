use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fluent_bundle::FluentArgs;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::i18n::I18n;
use tic_tac_toe::storage::{self, Settings};
use tic_tac_toe::{Difficulty, GameState};

/// Play tic-tac-toe against a minimax opponent in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// AI strength: easy, medium or hard. Saved as the new default.
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Directory holding settings.json and statistics.json.
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Clear the saved win/loss/draw counts before playing.
    #[arg(long)]
    reset_stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => storage::config_dir().context("no usable config directory")?,
    };

    let mut settings = storage::load_settings(&config_dir);
    if let Some(name) = cli.difficulty.as_deref() {
        settings.difficulty = name.parse::<Difficulty>()?;
        save_or_warn(storage::save_settings(&config_dir, &settings));
    }

    let mut statistics = storage::load_statistics(&config_dir);
    if cli.reset_stats {
        statistics.reset();
        save_or_warn(storage::save_statistics(&config_dir, &statistics));
    }

    let i18n = I18n::detect();
    run(&i18n, &settings, &mut statistics, &config_dir)
}

/// Line-oriented game loop: `row col`, `h`, `r` or `q`.
fn run(
    i18n: &I18n,
    settings: &Settings,
    statistics: &mut tic_tac_toe::Statistics,
    config_dir: &std::path::Path,
) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut state = GameState::new(settings.difficulty);

    writeln!(out, "{}  [{}]", i18n.t("app-title"), state.difficulty())?;
    writeln!(out, "{}", i18n.statistics_message(statistics))?;

    loop {
        writeln!(out, "\n{}", state.board())?;
        write!(out, "{} ", i18n.t("your-turn"))?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "q" => return Ok(()),
            "r" => {
                state = state.restart();
                continue;
            }
            "h" => {
                if let Some((row, col)) = state.hint() {
                    let mut args = FluentArgs::new();
                    args.set("row", row);
                    args.set("col", col);
                    writeln!(out, "{}", i18n.t_args("hint", &args))?;
                }
                continue;
            }
            input => {
                let Some((row, col)) = parse_cell(input) else {
                    writeln!(out, "{}", i18n.t("invalid-move"))?;
                    continue;
                };
                match state.apply_human_move(row, col) {
                    Ok(next) => state = next.request_ai_move(),
                    Err(err) => {
                        writeln!(out, "{} ({err})", i18n.t("invalid-move"))?;
                        continue;
                    }
                }
                if let Some(message) = i18n.outcome_message(&state.outcome()) {
                    writeln!(out, "\n{}", state.board())?;
                    writeln!(out, "{}: {}", i18n.t("game-over-title"), message)?;
                    statistics.record(&state.outcome());
                    save_or_warn(storage::save_statistics(config_dir, statistics));
                    writeln!(out, "{}", i18n.statistics_message(statistics))?;
                }
            }
        }
    }
}

fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',');
    let mut next = || -> Option<usize> { parts.find(|p| !p.is_empty())?.parse().ok() };
    let row = next()?;
    let col = next()?;
    Some((row, col))
}

fn save_or_warn(result: io::Result<()>) {
    if let Err(err) = result {
        // Persistence must not break game flow.
        warn!(%err, "could not save");
    }
}
