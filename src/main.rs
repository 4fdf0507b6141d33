use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use log::error;
use opening_book::transcode::{transcode_file, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use opening_book::TranscodeError;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Opening book text (pos <FEN> / <move> <eval>) to fen,turn,move records")]
struct Args {
    /// Source book text file
    #[arg(long, short = 's', env = "BOOK_SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Destination record file (.csv), parent directories are created
    #[arg(long, short = 'd', env = "BOOK_DEST", default_value = DEFAULT_DESTINATION)]
    dest: PathBuf,
}

fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match transcode_file(&args.source, &args.dest) {
        Ok(_) => {}
        // A missing source ends the run cleanly, just without the success line.
        Err(e @ TranscodeError::SourceNotFound { .. }) => {
            error!("{e}");
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("transcode {:?} into {:?}", args.source, args.dest));
        }
    }

    println!("Opening book parsed successfully!");
    Ok(())
}
