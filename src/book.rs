//! In-memory opening book loaded from a transcoded record file.
//!
//! Records are keyed by position rather than by the full FEN: the halfmove
//! clock and fullmove number are dropped, so the same position reached at a
//! different move number finds the same entry. Loading tolerates malformed
//! lines, counting them in the returned [`LoadReport`].
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::record::BookRecord;

/// Number of leading FEN fields that identify a position.
const KEY_FIELDS: usize = 4;

/// Placement, side-to-move, castling and en-passant fields joined by single spaces.
pub fn position_key(fen: &str) -> String {
    fen.split_whitespace().take(KEY_FIELDS).collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub malformed: usize,
}

#[derive(Debug, Default, Clone)]
pub struct OpeningBook {
    entries: HashMap<String, BookRecord>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record for the same position.
    pub fn insert(&mut self, record: BookRecord) -> Option<BookRecord> {
        self.entries.insert(position_key(&record.fen), record)
    }

    /// Read records from `reader` into the book. Blank lines are skipped silently.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<LoadReport> {
        let mut report = LoadReport::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match BookRecord::parse_csv(&line) {
                Ok(record) => {
                    self.insert(record);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!("Malformed line {}: {} ({})", index + 1, line, e);
                    report.malformed += 1;
                }
            }
        }
        Ok(report)
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open {:?}", path))?;
        let mut book = Self::new();
        let report = book
            .load(BufReader::new(file))
            .with_context(|| format!("read {:?}", path))?;
        Ok((book, report))
    }

    /// Book entry for the position described by `fen`, clocks ignored.
    pub fn get(&self, fen: &str) -> Option<&BookRecord> {
        self.entries.get(&position_key(fen))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

    #[test]
    fn key_drops_move_clocks() {
        assert_eq!(position_key(START), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert_eq!(position_key("8/8/8/8/8/8/8/8  w   -  - 12 40"), "8/8/8/8/8/8/8/8 w - -");
    }

    #[test]
    fn load_counts_malformed_lines() {
        let text = format!("{START},w,e4\n\nnot a record\n{AFTER_E4},b,c5\n{START},w\n");
        let mut book = OpeningBook::new();
        let report = book.load(text.as_bytes()).unwrap();

        assert_eq!(report, LoadReport { loaded: 2, malformed: 2 });
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(AFTER_E4).map(|r| r.mov.as_str()), Some("c5"));
    }

    #[test]
    fn lookup_ignores_clocks() {
        let mut book = OpeningBook::new();
        book.load(format!("{START},w,e4\n").as_bytes()).unwrap();

        let later = START.replace(" 0 1", " 6 9");
        let hit = book.get(&later).unwrap();
        assert_eq!(hit.mov, "e4");
        assert_eq!(hit.fen, START);
        assert!(book.get(AFTER_E4).is_none());
    }

    #[test]
    fn later_duplicates_replace_earlier() {
        let mut book = OpeningBook::new();
        let report = book.load(format!("{START},w,e4\n{START},w,d4\n").as_bytes()).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(START).unwrap().mov, "d4");
    }

    #[test]
    fn empty_input_gives_empty_book() {
        let mut book = OpeningBook::new();
        let report = book.load(&b""[..]).unwrap();
        assert_eq!(report, LoadReport::default());
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
    }
}
