//! Error kinds shared by the transcoder and the book loader.
use std::io;
use std::path::PathBuf;

/// Why a single source line was skipped. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// A move line must carry exactly a move token and one auxiliary field.
    #[error("expected 2 fields on a move line, found {fields}")]
    MalformedMoveLine { fields: usize },
    /// The FEN after a marker has no side-to-move field.
    #[error("FEN {fen:?} has no side-to-move field")]
    MalformedFen { fen: String },
}

/// A line of a transcoded record file that does not read as `fen,turn,move`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record: {reason}")]
    Malformed { reason: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("File {} not found!", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
