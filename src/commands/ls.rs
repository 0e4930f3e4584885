//! # Ls Command Implementation
//!
//! Lists the names of nodes selected out of the assembled tree. A thin,
//! read-only wrapper over `fmf::query::prune`.

use anyhow::Result;
use clap::Args;

use super::selection::SelectArgs;

/// List node names matching a selection
#[derive(Args, Debug)]
pub struct LsArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let nodes = args.select.select()?;
    for node in &nodes {
        println!("{}", node.name());
    }
    Ok(())
}
