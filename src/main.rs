//! Terminal flyer runner (default binary).
//!
//! Interactive mode reads the keyboard through crossterm and draws with the
//! framebuffer renderer at the configured tick rate. `--headless` replays a
//! direction script as fast as possible and prints the result.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tui_flyer::core::{GameConfig, GameSession, GameSnapshot, ScoringRule};
use tui_flyer::engine::{FixedRate, FrameSink, GameLoop, LoopReport, Unpaced};
use tui_flyer::input::{KeyboardSource, ScriptedSource};
use tui_flyer::logging;
use tui_flyer::term::TerminalSink;

/// Upper bound for headless runs when `--max-ticks` is not given.
const HEADLESS_TICK_LIMIT: u64 = 100_000;

#[derive(Parser, Debug)]
#[command(about = "Side-scrolling flyer game for the terminal", version)]
struct Args {
    /// TOML config file; missing keys use built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for obstacle gap placement.
    #[arg(long)]
    seed: Option<u32>,
    /// Ticks per second.
    #[arg(long)]
    tick_rate: Option<u32>,
    /// Scoring rule: `threshold` or `exact`.
    #[arg(long, value_parser = parse_scoring)]
    scoring: Option<ScoringRule>,
    /// Run without a terminal, driven by `--script`.
    #[arg(long)]
    headless: bool,
    /// Direction script: `u`/`^` up, `d`/`v` down, `n`/`.` neutral.
    #[arg(long, default_value = "")]
    script: String,
    /// Stop after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Directory for rolling log files.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn parse_scoring(s: &str) -> Result<ScoringRule, String> {
    ScoringRule::from_str(s).ok_or_else(|| format!("unknown scoring rule '{s}' (threshold|exact)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir)?;

    let config = build_config(&args)?;
    let seed = args.seed.or(config.seed).unwrap_or_else(clock_seed);
    let mut session = GameSession::new(config, seed).context("invalid game config")?;

    info!(
        seed,
        headless = args.headless,
        tick_rate_hz = session.config().tick_rate_hz,
        scoring = session.config().scoring.as_str(),
        "session created"
    );

    let report = if args.headless {
        run_headless(&args, &mut session)?
    } else {
        run_terminal(&args, &mut session)?
    };

    println!(
        "{}: score {} after {} ticks (seed {})",
        report.exit.as_str(),
        report.snapshot.score,
        report.snapshot.tick,
        seed
    );
    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(hz) = args.tick_rate {
        config.tick_rate_hz = hz;
    }
    if let Some(rule) = args.scoring {
        config.scoring = rule;
    }
    config.validate()?;
    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run_terminal(args: &Args, session: &mut GameSession) -> Result<LoopReport> {
    let mut sink = TerminalSink::new();
    if let Err(e) = sink.enter() {
        let _ = sink.exit();
        return Err(e);
    }

    let report = {
        let pacer = FixedRate::new(session.config().tick_interval());
        let mut game = GameLoop::new(KeyboardSource::new(), &mut sink, pacer);
        if let Some(max) = args.max_ticks {
            game = game.with_max_iterations(max);
        }
        game.run(session)
    };

    // Always try to restore terminal state.
    let _ = sink.exit();
    Ok(report)
}

fn run_headless(args: &Args, session: &mut GameSession) -> Result<LoopReport> {
    let source = ScriptedSource::parse(&args.script)?;
    let mut game = GameLoop::new(source, SummarySink::default(), Unpaced)
        .exit_on_game_over(true)
        .with_max_iterations(args.max_ticks.unwrap_or(HEADLESS_TICK_LIMIT));
    let report = game.run(session);

    let (_, summary, _) = game.into_parts();
    info!(
        frames = summary.frames,
        score = summary.score,
        "headless run finished"
    );
    Ok(report)
}

/// Tracks score changes without drawing anything.
#[derive(Debug, Default)]
struct SummarySink {
    frames: u64,
    score: u32,
}

impl FrameSink for SummarySink {
    fn present(&mut self, snapshot: &GameSnapshot) {
        self.frames += 1;
        if snapshot.score != self.score {
            self.score = snapshot.score;
            info!(tick = snapshot.tick, score = snapshot.score, "score changed");
        }
    }
}
