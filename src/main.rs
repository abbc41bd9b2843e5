use std::io;

use anyhow::{Context, Result};
use binary_converter::{cli::Args, save::FileSink, session::Session, ui};
use clap::Parser;
use log::debug;

fn main() -> Result<()> {
    let args = Args::parse();
    ui::init_logger(args.log_level()).context("Error setting logger")?;

    let sink = FileSink::new(args.output_dir);
    debug!("Saving results to {}", sink.directory().display());

    Session::new(io::stdin().lock(), io::stdout().lock(), sink)
        .run()
        .context("Error talking to the terminal")
}
