//! CLI entry point for marble texture generation

use clap::Parser;
use marble::io::cli::{Cli, TextureBatch};

fn main() -> marble::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut batch = TextureBatch::new(cli);
    batch.process()?;
    Ok(())
}
