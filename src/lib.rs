//! Opening-book transcoder and loader library.
//!
//! This crate provides the core types and logic used by the `opening_book`
//! transcoder binary and the `book_probe` tool:
//!
//! - `transcode`: line-oriented parser turning `pos <FEN>` / `<move> <aux>`
//!   blocks into flat records, one record per position block
//! - `record`: the `fen,turn,move` record format
//! - `book`: position-keyed lookup over a transcoded record file
//! - `error`: per-line and per-run error kinds
//!
//! The binaries in this repository (`src/main.rs` and `src/bin/book_probe.rs`)
//! write and read record files with these modules.
pub mod book;
pub mod error;
pub mod record;
pub mod transcode;

pub use book::{position_key, LoadReport, OpeningBook};
pub use error::{LineError, RecordError, TranscodeError};
pub use record::BookRecord;
pub use transcode::{transcode, transcode_file, transcode_str, ParseState, SkippedLine, TranscodeSummary};
