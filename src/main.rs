//! CLI entry point for batch creature avatar generation

use clap::Parser;
use creaturegen::io::cli::{BatchProcessor, Cli};

fn main() -> creaturegen::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let processor = BatchProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}
