//! Analyze a single position: engine move, score, and search statistics

use anyhow::Result;
use clap::Args;

use crate::{
    board::Board,
    cli::output::{format_number, print_kv, print_section},
    search::Search,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board position: 9 cells ('X', 'O', '.') in row-major order, with an
    /// optional _X/_O turn suffix (e.g. "XO.X.O..._X")
    pub position: String,

    /// Score every legal move instead of only the chosen one
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.position)?;

    print_section("Position");
    println!("{board}");
    print_kv("to move", &board.to_move().to_string());

    let outcome = board.terminal_outcome();
    if outcome.is_terminal() {
        print_kv("outcome", &format!("{outcome:?}"));
        println!("\nPosition is terminal; nothing to search.");
        return Ok(());
    }

    let mut scratch = board;
    let mut search = Search::new(board.to_move());

    print_section("Search");
    if args.all {
        for (mv, score) in search.move_scores(&mut scratch) {
            print_kv(&format!("move {mv}"), &format!("score {score:+}"));
        }
    } else {
        let (mv, score) = search.best_move_scored(&mut scratch);
        print_kv("best move", &mv.to_string());
        print_kv("score", &format!("{score:+}"));
    }

    let stats = search.stats();
    print_kv("nodes visited", &format_number(stats.nodes));
    print_kv("cutoffs", &format_number(stats.cutoffs));

    Ok(())
}
