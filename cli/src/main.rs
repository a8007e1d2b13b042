use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tris_core::{Difficulty, Game, GameConfig, HeuristicSelector, MoveSelector, Player};

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Console tic-tac-toe against a heuristic computer opponent")]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Difficulty level (easy, normal, hard); prompted for when omitted
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Pause after each computer move, in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };
    log::debug!("seed: {seed}");

    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => input::prompt_difficulty()?,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::random(difficulty, &mut rng);
    let mut selector = HeuristicSelector::with_rng(difficulty, rng);

    let mut game = Game::new(config);
    render::draw(&game)?;

    while !game.is_finished() {
        let coords = match game.current_player() {
            Player::Human => input::prompt_move(game.board())?,
            Player::Ai => {
                let coords = selector.select(game.board(), config.marks)?;
                thread::sleep(Duration::from_millis(args.delay_ms));
                coords
            }
        };
        game.play(coords)?;
        render::draw(&game)?;
    }

    render::announce(game.outcome());
    Ok(())
}

fn clock_seed() -> anyhow::Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?;
    Ok(elapsed.as_nanos() as u64)
}
