use std::path::PathBuf;

use clap::{Parser, builder::ArgAction};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(about = "Convert between text, integers and binary")]
pub struct Args {
    #[arg(long, default_value = ".", help = "Directory for saved results")]
    pub output_dir: PathBuf,
    #[arg(short, long, action = ArgAction::SetTrue, help = "Show debug messages")]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["binary-converter"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn flags() {
        let args =
            Args::try_parse_from(["binary-converter", "--output-dir", "out", "-v"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }
}
