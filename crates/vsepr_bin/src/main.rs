use std::{error::Error, path::PathBuf};

use clap::Parser;
use vsepr::{Layout, convert};

const USAGE: &str = "Usage: convert <input.csv> <output.h>";

/// convert a CSV table of VSEPR data into a C header
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// the input CSV file followed by the C header to write. anything other
    /// than exactly two files prints a usage message and exits
    #[arg(value_parser)]
    files: Vec<PathBuf>,

    /// TOML file overriding the symbol names used in the generated header
    #[arg(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Don't print the number of rows written. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let [input, output] = args.files.as_slice() else {
        println!("{USAGE}");
        return Ok(());
    };

    let layout = match &args.config {
        Some(path) => Layout::load(path)?,
        None => Layout::default(),
    };
    log::debug!("{layout}");

    let n = convert(input, output, &layout)?;
    if !args.quiet {
        println!("wrote {n} rows to {}", output.display());
    }

    Ok(())
}
