use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use go_engine::{GameConfig, GoError, MoveSelector, Point, Session, Stone};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::warn;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Play Go on a terminal board against the greedy move selector, or watch it
/// play itself.
#[derive(Parser, Debug)]
#[command(name = "go-play", version, about)]
struct Cli {
    /// Board size, ignored when --config is given
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// JSON game config: size, star points and selector weights
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the selector's random source
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long, default_value_t = 200)]
    max_moves: usize,

    /// Pause before each computer move
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Opening moves as "row,col", alternating from Black
    #[arg(long, num_args = 1..)]
    moves: Vec<Point>,

    /// Play this side from stdin; the selector plays the other
    #[arg(long, value_enum)]
    human: Option<Side>,
}

/// What came of one human turn.
#[derive(Debug, PartialEq, Eq)]
enum HumanTurn {
    Played(Point),
    Resigned,
    /// Input ran out before a legal move.
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_play=info,go_engine=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let human = cli.human.map(Stone::from);
    tracing::info!(size = config.size(), seed, human = ?human, "starting game");

    let selector = MoveSelector::new(config.clone());
    let mut session = Session::new(config);
    let mut rng = StdRng::seed_from_u64(seed);

    for &point in &cli.moves {
        let stone = session.to_play();
        match session.try_play(stone, point) {
            Ok(_) => println!("{stone} plays {point}"),
            Err(GoError::Rejected(reason)) => {
                warn!(%stone, %point, %reason, "skipping opening move");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("opening move {stone} at {point}"));
            }
        }
    }
    println!("{}", session.board());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    while session.winner().is_none() && session.moves().len() < cli.max_moves {
        let stone = session.to_play();

        if human == Some(stone) {
            match human_turn(&mut session, &mut input, &mut out)? {
                HumanTurn::Played(point) => println!("{stone} plays {point}"),
                HumanTurn::Resigned => println!("{stone} resigns"),
                HumanTurn::Quit => break,
            }
        } else {
            if cli.delay_ms > 0 {
                thread::sleep(Duration::from_millis(cli.delay_ms));
            }
            match session.play_selected(&selector, &mut rng)? {
                Some(point) => println!("{stone} plays {point}"),
                None => println!("{stone} has no legal move and resigns"),
            }
        }
        println!("{}", session.board());
    }

    print_result(&session);
    Ok(())
}

/// Read "row,col" lines until the side to play makes a legal move, resigns,
/// or input ends. A rejected move leaves the session as it was and prints the
/// reason, except for occupied points which are ignored silently.
fn human_turn<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<HumanTurn> {
    let stone = session.to_play();
    let mut line = String::new();

    loop {
        write!(out, "{stone} to play (row,col or resign): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(HumanTurn::Quit);
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("resign") {
            session.resign(stone)?;
            return Ok(HumanTurn::Resigned);
        }

        let point: Point = match text.parse() {
            Ok(point) => point,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match session.try_play(stone, point) {
            Ok(_) => return Ok(HumanTurn::Played(point)),
            Err(GoError::Rejected(reason)) => {
                if let Some(msg) = reason.message() {
                    writeln!(out, "{msg}")?;
                }
            }
            Err(e @ GoError::NotOnBoard(_)) => writeln!(out, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config = GameConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(GameConfig::standard(cli.size)?),
    }
}

fn print_result(session: &Session) {
    let captures = session.captures();
    match session.winner() {
        Some(winner) => println!("{winner} wins after {} moves", session.moves().len()),
        None => println!("Stopped after {} moves", session.moves().len()),
    }
    println!(
        "Prisoners: {} {}, {} {}",
        Stone::Black,
        captures.get(Stone::Black),
        Stone::White,
        captures.get(Stone::White)
    );
    tracing::info!(stage = %session.stage(), "finished");
}
