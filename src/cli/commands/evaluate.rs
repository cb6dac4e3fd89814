//! Evaluate the engine over a batch of seeded games

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{
    board::{Outcome, Player},
    cli::output::{print_kv, print_section},
    opponents::{EngineOpponent, Opponent, RandomOpponent, play_match},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Uniform random legal moves
    Random,
    /// The alpha-beta engine itself
    Engine,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Number of games to play; the engine alternates between X and O
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// Opponent to play against
    #[arg(long, value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Base random seed for reproducible runs
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let mut tally = Tally::default();

    for i in 0..args.games {
        let engine_plays = if i % 2 == 0 { Player::X } else { Player::O };
        let mut engine = EngineOpponent;
        let mut rival: Box<dyn Opponent> = match args.opponent {
            OpponentKind::Random => Box::new(RandomOpponent::seeded(args.seed + i as u64)),
            OpponentKind::Engine => Box::new(EngineOpponent),
        };

        let game = match engine_plays {
            Player::X => play_match(&mut engine, rival.as_mut())?,
            Player::O => play_match(rival.as_mut(), &mut engine)?,
        };

        match game.outcome() {
            Outcome::Win(winner) if winner == engine_plays => tally.wins += 1,
            Outcome::Win(_) => tally.losses += 1,
            Outcome::Draw => tally.draws += 1,
            Outcome::Ongoing => unreachable!("play_match returns finished games"),
        }
    }

    print_section("Evaluation");
    print_kv("games", &args.games.to_string());
    print_kv(
        "opponent",
        match args.opponent {
            OpponentKind::Random => "random",
            OpponentKind::Engine => "engine",
        },
    );
    print_kv("seed", &args.seed.to_string());
    print_kv("engine wins", &tally.wins.to_string());
    print_kv("draws", &tally.draws.to_string());
    print_kv("engine losses", &tally.losses.to_string());

    Ok(())
}
