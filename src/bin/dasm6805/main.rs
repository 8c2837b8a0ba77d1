use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colored::*;

use dasm6805::{image, listing, log};

const SIGNON: &str = "M68HC05 Disassembler";

#[derive(Parser)]
#[command(about = SIGNON, version, long_about = None)]
struct Args {
    /// Binary image to disassemble.
    filename: PathBuf,

    /// Print debug messages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", SIGNON.bold());
            eprint!("{}", e);
            process::exit(1);
        }
    };

    log::init(args.verbose);

    let image = image::load(&args.filename)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = listing::write_listing(&mut out, &args.filename.display().to_string(), &image)
        .context("Writing listing failed")?;
    out.flush()?;

    tracing::debug!("{} source lines produced", summary.lines);
    Ok(())
}
