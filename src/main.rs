mod cli;
mod runtime;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    runtime::run(args)
}
