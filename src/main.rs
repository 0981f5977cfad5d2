//! DJcode — validate a token file produced by the DJcode tokenizer.
//!
//! Reads one token record per line, checks grammar and vocabulary, and
//! exits non-zero on the first fault.

use std::path::PathBuf;

use clap::Parser;

use djcode::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Validate a DJcode token file")]
struct Args {
    /// Token file to validate (defaults to the configured input, tokens.txt)
    file: Option<PathBuf>,

    /// Config file to use instead of ~/.djcode/config.yaml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject pattern numbers that are defined more than once
    #[arg(long)]
    strict: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger = colog::default_builder();
    if args.quiet {
        logger.filter_level(log::LevelFilter::Warn);
    } else if cfg!(debug_assertions) {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };
    if args.strict {
        config.strict_duplicates = true;
    }

    let path = args.file.unwrap_or_else(|| config.default_input.clone());
    let source = std::fs::read_to_string(&path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    match config.validator().validate_source(&source) {
        Ok(program) => {
            log::info!(
                "{} pattern(s), {} play statement(s)",
                program.defined.len(),
                program.main.as_ref().map_or(0, Vec::len)
            );
            println!("DJcode parsed successfully.");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
