//! Solve every reachable position and export the optimal policy as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::{
    cli::output::{create_solve_progress, print_kv, print_section},
    policy::{self, PolicyEntry},
    reachable_boards,
};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Output path for the policy JSON
    #[arg(long, default_value = "policy.json")]
    pub output: PathBuf,
}

#[derive(Serialize)]
struct PolicyExport {
    description: &'static str,
    total_positions: usize,
    solved_positions: usize,
    policy: std::collections::BTreeMap<String, PolicyEntry>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let total = reachable_boards().len();
    let pb = create_solve_progress(total as u64);

    let policy = policy::compute_optimal_policy(|done, _| pb.set_position(done as u64));
    pb.finish_and_clear();

    let export = PolicyExport {
        description: "Optimal alpha-beta policy for every reachable tic-tac-toe position",
        total_positions: total,
        solved_positions: policy.len(),
        policy,
    };

    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("create {}", args.output.display()))?;
    serde_json::to_writer_pretty(file, &export)?;

    print_section("Solve");
    print_kv("positions", &total.to_string());
    print_kv("solved", &export.solved_positions.to_string());
    print_kv("output", &args.output.display().to_string());

    Ok(())
}
