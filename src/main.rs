use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xiangqi::{settings, Session, Settings};
use xiangqi_engine::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Red,
    Black,
    /// Two human players
    None,
}

/// Play Xiangqi against the computer in a terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Seconds the computer may think per move
    #[arg(short, long)]
    think_time: Option<f32>,

    /// Search depth limit
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,

    /// Side played by the computer
    #[arg(short, long, value_enum)]
    ai: Option<Side>,

    /// FEN letters instead of Chinese glyphs
    #[arg(long)]
    ascii: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. `debug` or `xiangqi_engine=trace` (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Persist the effective settings
    #[arg(long)]
    save_settings: bool,
}

impl Arguments {
    fn apply(&self, settings: &mut Settings) -> anyhow::Result<()> {
        if let Some(secs) = self.think_time {
            settings.search.think_time = Duration::try_from_secs_f32(secs.max(0.0))
                .with_context(|| format!("invalid think time {secs}"))?;
        }
        if let Some(depth) = self.max_depth {
            settings.search.max_depth = depth;
        }
        if let Some(side) = self.ai {
            settings.ai_color = match side {
                Side::Red => Some(Color::Red),
                Side::Black => Some(Color::Black),
                Side::None => None,
            };
        }
        if self.ascii {
            settings.chinese = false;
        }
        if self.no_color {
            settings.colored = false;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    let filter = match &arguments.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut settings = settings::load_settings();
    arguments.apply(&mut settings)?;
    if arguments.save_settings {
        let path = settings::save_settings(&settings)?;
        info!(?path, "saved settings");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(settings, stdin.lock(), stdout.lock())?;
    session.run()
}
