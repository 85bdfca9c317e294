//! CLI entry point for the maze page generator

use clap::Parser;
use mazepages::io::cli::{Cli, Generator};

fn main() -> mazepages::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let generator = Generator::new(Cli::parse());
    generator.run()?;
    Ok(())
}
