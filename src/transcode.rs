//! Opening-book text to flat record transcoder.
//!
//! The source is a sequence of position blocks:
//!
//! ```text
//! pos rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! e4 +0.20
//! ```
//!
//! Each block yields at most one [`BookRecord`]: the first well-formed move
//! line after a marker is consumed and the block is closed, so any further
//! move lines up to the next marker are ignored. Malformed lines are reported
//! as [`SkippedLine`]s and never stop the run.
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::{LineError, TranscodeError};
use crate::record::BookRecord;

/// Prefix of a line introducing a new position block.
pub const MARKER: &str = "pos ";

/// Default source file of the fixed run.
pub const DEFAULT_SOURCE: &str = "Book.txt";
/// Default destination file of the fixed run.
pub const DEFAULT_DESTINATION: &str = "book.csv";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    /// No block open: move lines are ignored.
    #[default]
    Idle,
    /// A marker was read and its move not yet consumed.
    AwaitingMove(String),
}

impl ParseState {
    /// Advance over one raw source line, returning the record it completes.
    pub fn feed(&mut self, line: &str) -> Result<Option<BookRecord>, LineError> {
        let line = line.trim();

        if let Some(fen) = line.strip_prefix(MARKER) {
            // A marker always replaces the current block, consumed or not.
            if fen.split_whitespace().nth(1).is_none() {
                *self = ParseState::Idle;
                return Err(LineError::MalformedFen { fen: fen.to_string() });
            }
            *self = ParseState::AwaitingMove(fen.to_string());
            return Ok(None);
        }

        let fen = match self {
            ParseState::AwaitingMove(fen) if !line.is_empty() => fen,
            _ => return Ok(None),
        };

        let fields = line.split_whitespace().collect::<Vec<_>>();
        let [mov, _aux] = fields[..] else {
            return Err(LineError::MalformedMoveLine { fields: fields.len() });
        };
        let turn = fen
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| LineError::MalformedFen { fen: fen.clone() })?
            .to_string();

        let record = BookRecord { fen: std::mem::take(fen), turn, mov: mov.to_string() };
        *self = ParseState::Idle;
        Ok(Some(record))
    }
}

/// A source line that produced a diagnostic instead of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub text: String,
    pub error: LineError,
}

impl SkippedLine {
    fn new(index: usize, line: &str, error: LineError) -> Self {
        SkippedLine { line_number: index + 1, text: line.trim().to_string(), error }
    }
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping line {} due to format: {} ({})", self.line_number, self.text, self.error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    pub lines: usize,
    pub records: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Transcode a whole source stream into `writer`, one record per line.
///
/// Every skipped line is logged as a warning and kept in the summary. Only
/// I/O failures end the run early.
pub fn transcode<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<TranscodeSummary> {
    let mut state = ParseState::default();
    let mut summary = TranscodeSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        summary.lines += 1;
        match state.feed(&line) {
            Ok(Some(record)) => {
                writeln!(writer, "{record}")?;
                summary.records += 1;
            }
            Ok(None) => {}
            Err(error) => {
                let skipped = SkippedLine::new(index, &line, error);
                warn!("{skipped}");
                summary.skipped.push(skipped);
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// In-memory transcoding, without logging.
pub fn transcode_str(input: &str) -> (Vec<BookRecord>, Vec<SkippedLine>) {
    let (_, records, skipped) = input.lines().enumerate().fold(
        (ParseState::default(), Vec::new(), Vec::new()),
        |(mut state, mut records, mut skipped), (index, line)| {
            match state.feed(line) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(error) => skipped.push(SkippedLine::new(index, line, error)),
            }
            (state, records, skipped)
        },
    );
    (records, skipped)
}

/// Transcode `source` into `destination`.
///
/// The source is opened first, so a missing source never leaves a
/// destination file behind.
pub fn transcode_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<TranscodeSummary, TranscodeError> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    let input = File::open(source).map_err(|e| TranscodeError::SourceNotFound {
        path: source.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output = File::create(destination)?;

    let summary = transcode(BufReader::new(input), BufWriter::new(output))?;
    info!(
        "Transcoded {} into {}: {} records from {} lines, {} skipped",
        source.display(),
        destination.display(),
        summary.records,
        summary.lines,
        summary.skipped.len()
    );
    Ok(summary)
}
