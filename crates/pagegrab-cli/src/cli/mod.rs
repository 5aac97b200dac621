//! CLI for the pagegrab single-page archiver.

use anyhow::Result;
use clap::Parser;
use pagegrab_core::{config, loader, logging};
use std::path::PathBuf;

/// Top-level CLI: one positional URL plus output/debug options.
#[derive(Debug, Parser)]
#[command(name = "pagegrab")]
#[command(about = "pagegrab: save a web page and its assets locally", long_about = None)]
pub struct Cli {
    /// Page URL to download.
    pub url: String,

    /// Destination directory for the page and its assets.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Activate debug logging.
    #[arg(short, long)]
    pub debug: bool,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let page_path = loader::download(&cli.url, &cli.output, &cfg.fetch_options())?;
    println!("{}", page_path.display());
    Ok(())
}
