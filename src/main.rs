//! CLI entry point for the diagonal bevel illusion generator

use beveltile::io::cli::{Cli, IllusionRunner};
use clap::Parser;

fn main() -> beveltile::Result<()> {
    let cli = Cli::parse();
    let runner = IllusionRunner::new(cli);
    runner.run()
}
