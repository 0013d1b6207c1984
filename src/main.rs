use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tilt_2048::{GameConfig, Model, Side};

#[derive(Debug, Parser)]
#[command(name = "tilt-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// JSON file with `size` and `max_piece`; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the board [default: 4]
    #[arg(long)]
    size: Option<usize>,

    /// Reaching a tile of this value ends the game [default: 2048]
    #[arg(long)]
    max_piece: Option<u32>,

    /// Seed for tile spawning (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play these moves (e.g. "wasd" or "n,e,s,w") instead of reading stdin
    #[arg(long)]
    script: Option<String>,
}

/// Keyboard keys first, then direction names via `Side::from_str`.
fn parse_move(input: &str) -> Option<Side> {
    match input.trim() {
        "w" | "W" => Some(Side::North),
        "a" | "A" => Some(Side::West),
        "s" | "S" => Some(Side::South),
        "d" | "D" => Some(Side::East),
        other => other.parse().ok(),
    }
}

fn script_moves(script: &str) -> Vec<String> {
    if script.contains(',') {
        script.split(',').map(str::to_string).collect()
    } else {
        script.chars().filter(|c| !c.is_whitespace()).map(String::from).collect()
    }
}

/// Config file (if any) first, then command-line overrides.
fn resolve_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GameConfig::from_json_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(max_piece) = args.max_piece {
        config.max_piece = max_piece;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = resolve_config(&args)?;
    info!("board {}x{}, max piece {}", config.size, config.size, config.max_piece);
    let mut model = Model::with_config(config).context("invalid board configuration")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    model.add_random_tile(&mut rng);
    model.add_random_tile(&mut rng);
    println!("{}", model);
    model.take_changed();

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = match &args.script {
        Some(script) => Box::new(script_moves(script).into_iter().map(Ok)),
        None => Box::new(io::stdin().lock().lines()),
    };

    let mut move_count: u64 = 0;
    for line in inputs {
        let line = line.context("failed to read move")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some(side) = parse_move(trimmed) else {
            warn!("ignoring unknown move {trimmed:?}");
            continue;
        };
        if model.tilt(side) {
            move_count += 1;
            model.add_random_tile(&mut rng);
        }
        if model.take_changed() {
            println!("{}", model);
        }
        io::stdout().flush()?;
        if model.game_over() {
            println!("Game over.");
            break;
        }
    }

    info!("session finished after {move_count} moves");
    println!(
        "Moves made: {}, Score: {}, Max score: {}, Highest tile: {}",
        move_count,
        model.score(),
        model.max_score(),
        model.board().highest_tile()
    );
    Ok(())
}
