//! Puzzle file parsing.

/// Errors raised when puzzle text cannot be read as a tile grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The file contains no tile rows at all.
    #[display("no tile rows found in the puzzle file")]
    Empty,
    /// A token is not a tile value.
    #[display("line {line}: cannot read {token:?} as a tile value")]
    InvalidToken {
        /// 1-based line number in the file.
        line: usize,
        /// The offending token.
        token: String,
    },
}

/// Parses puzzle text into rows of tile values.
///
/// One row per non-empty line, whitespace-separated integers, `0` for the
/// blank. Lines starting with `#` are comments. Grid shape and permutation
/// validation is [`Board::from_rows`](taquin_core::Board::from_rows)'s job,
/// not the parser's.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] when no rows remain after skipping blank
/// and comment lines, and [`ParseError::InvalidToken`] for any token that
/// is not an integer in `0..=255`.
pub fn parse_puzzle(text: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse().map_err(|_| ParseError::InvalidToken {
                    line: index + 1,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(rows)
}
