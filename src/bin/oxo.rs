//! oxo CLI - analysis and evaluation front end for the tic-tac-toe engine
//!
//! Subcommands:
//! - Analyze a position (engine move, score, search statistics)
//! - Solve the full game and export the optimal policy
//! - Evaluate the engine over batches of seeded games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe engine with alpha-beta search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position and report the engine's move
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Solve every reachable position and export the optimal policy
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play batches of games against an opponent and report results
    Evaluate(oxo::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Evaluate(args) => oxo::cli::commands::evaluate::execute(args),
    }
}
