use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use opening_book::transcode::DEFAULT_DESTINATION;
use opening_book::{position_key, OpeningBook};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Load a transcoded opening book and look positions up")]
struct Args {
    /// Record file to read (fen,turn,move per line)
    #[arg(long, short = 'i', env = "BOOK_DEST", default_value = DEFAULT_DESTINATION)]
    input: PathBuf,

    /// Position to look up; move clocks are ignored
    #[arg(long)]
    fen: Option<String>,

    /// Print every entry of the book
    #[arg(long, default_value_t = false)]
    dump: bool,
}

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (book, report) = OpeningBook::load_file(&args.input)?;

    if args.dump {
        let mut entries = book.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.fen.cmp(&b.fen));
        for record in entries {
            println!("{record}");
        }
    }

    if let Some(fen) = &args.fen {
        match book.get(fen) {
            Some(record) => println!("{} -> {} ({} to move)", position_key(fen), record.mov, record.turn),
            None => println!("{} -> not in book", position_key(fen)),
        }
    }

    eprintln!(
        "Read {} records from {:?} ({} positions, {} malformed lines).",
        report.loaded,
        args.input,
        book.len(),
        report.malformed
    );
    Ok(())
}
