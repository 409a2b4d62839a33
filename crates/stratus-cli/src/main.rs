//! `stratus`: print the schemas synthesized by the Stratus type system.

use clap::Parser;
use stratus_cli::logging::init_tracing;
use stratus_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{}", output);

    Ok(())
}
