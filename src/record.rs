use std::fmt;

use crate::error::RecordError;

/// One position-move pair of the flat book format, rendered as `fen,turn,move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub fen: String,  // verbatim, may contain spaces but never commas
    pub turn: String, // side-to-move field of the FEN, usually `w` or `b`
    pub mov: String,
}

impl BookRecord {
    /// Parse one line of a record file. The trailing newline, if any, is ignored.
    pub fn parse_csv(line: &str) -> Result<Self, RecordError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (fen, rest) = line
            .split_once(',')
            .ok_or(RecordError::Malformed { reason: "missing turn field" })?;
        let (turn, mov) = rest
            .split_once(',')
            .ok_or(RecordError::Malformed { reason: "missing move field" })?;

        if fen.trim().is_empty() {
            return Err(RecordError::Malformed { reason: "empty FEN" });
        }
        let turn = turn.trim();
        if turn.is_empty() {
            return Err(RecordError::Malformed { reason: "empty turn" });
        }
        let mov = mov.trim();
        if mov.is_empty() {
            return Err(RecordError::Malformed { reason: "empty move" });
        }
        if mov.contains(|c: char| c.is_whitespace() || c == ',') {
            return Err(RecordError::Malformed { reason: "move is not a single token" });
        }

        Ok(BookRecord { fen: fen.to_string(), turn: turn.to_string(), mov: mov.to_string() })
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.fen, self.turn, self.mov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn display_is_comma_separated() {
        let r = BookRecord { fen: START.into(), turn: "w".into(), mov: "e4".into() };
        assert_eq!(r.to_string(), format!("{START},w,e4"));
    }

    #[test]
    fn parse_keeps_spaces_inside_fen() {
        let r = BookRecord::parse_csv(&format!("{START},w,e2e4\n")).unwrap();
        assert_eq!(r.fen, START);
        assert_eq!(r.turn, "w");
        assert_eq!(r.mov, "e2e4");
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(BookRecord::parse_csv(START).is_err());
        assert!(BookRecord::parse_csv(&format!("{START},w")).is_err());
        assert!(BookRecord::parse_csv(&format!("{START},w,")).is_err());
        assert!(BookRecord::parse_csv(&format!("{START},,e4")).is_err());
        assert!(BookRecord::parse_csv(",w,e4").is_err());
    }

    #[test]
    fn parse_rejects_extra_move_tokens() {
        let err = BookRecord::parse_csv(&format!("{START},w,e4 e5")).unwrap_err();
        assert_eq!(err, RecordError::Malformed { reason: "move is not a single token" });
        assert!(BookRecord::parse_csv(&format!("{START},w,e4,e5")).is_err());
    }
}
