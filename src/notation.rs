//! File-rank notation handling for console input.
//!
//! Converts between human-readable square coordinates (e.g., "e4") and
//! `BoardLocation`, and validates a full line of move input in the
//! two-square "e2 e4" form the game loop accepts.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{board_location::BoardLocation, chess_errors::ChessErrors};

lazy_static! {
    static ref MOVE_PATTERN: Regex =
        Regex::new(r"^[a-h][1-8] [a-h][1-8]( draw\?)?$").expect("move pattern must compile");
}

/// A validated line of move input.
#[derive(Debug)]
pub struct MoveInput {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    /// True when the mover appended " draw?" to offer a draw.
    pub offers_draw: bool,
}

/// Convert a file-rank square (for example "e4") to a `BoardLocation`.
///
/// # Arguments
/// * `square` - Two characters: file letter 'a'..='h', rank digit '1'..='8'.
///
/// # Returns
/// * `Ok(BoardLocation)` on success.
/// * `Err(ChessErrors::InvalidSquareString)` otherwise.
pub fn parse_square(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquareString(square.to_string()));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquareString(square.to_string()));
    }
    // Rank 8 is row 0; rank 1 is row 7.
    let row = (b'8' - rank) as i8;
    let col = (file - b'a') as i8;
    BoardLocation::from_row_col(row, col)
}

/// Convert a `BoardLocation` to its file-rank square string (for example "e4").
pub fn format_square(x: BoardLocation) -> String {
    let file = char::from(b'a' + x.col as u8);
    let rank = char::from(b'8' - x.row as u8);
    format!("{file}{rank}")
}

/// Validate and parse one line of move input.
///
/// The accepted grammar is `<square> <square>`, optionally followed by
/// " draw?" to offer a draw (for example "e2 e4 draw?").
///
/// # Returns
/// * `Ok(MoveInput)` on success.
/// * `Err(ChessErrors::InvalidMoveInput)` for anything else.
pub fn parse_move_input(input: &str) -> Result<MoveInput, ChessErrors> {
    if !MOVE_PATTERN.is_match(input) {
        return Err(ChessErrors::InvalidMoveInput(input.to_string()));
    }
    let start = parse_square(&input[0..2])?;
    let stop = parse_square(&input[3..5])?;
    Ok(MoveInput {
        start,
        stop,
        offers_draw: input.ends_with("draw?"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_squares() -> Result<(), ChessErrors> {
        assert_eq!(parse_square("a1")?, BoardLocation { row: 7, col: 0 });
        assert_eq!(parse_square("h8")?, BoardLocation { row: 0, col: 7 });
        assert_eq!(parse_square("e2")?, BoardLocation { row: 6, col: 4 });
        assert_eq!(format_square(BoardLocation { row: 6, col: 4 }), "e2");
        Ok(())
    }

    #[test]
    fn round_trip_all_64_squares() -> Result<(), ChessErrors> {
        for row in 0..8 {
            for col in 0..8 {
                let location = BoardLocation { row, col };
                assert_eq!(parse_square(&format_square(location))?, location);
            }
        }
        Ok(())
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e22", "i4", "a0", "a9", "E2"] {
            assert!(matches!(
                parse_square(bad),
                Err(ChessErrors::InvalidSquareString(_))
            ));
        }
    }

    #[test]
    fn accepts_plain_move_input() -> Result<(), ChessErrors> {
        let parsed = parse_move_input("e2 e4")?;
        assert_eq!(parsed.start, BoardLocation { row: 6, col: 4 });
        assert_eq!(parsed.stop, BoardLocation { row: 4, col: 4 });
        assert!(!parsed.offers_draw);
        Ok(())
    }

    #[test]
    fn accepts_draw_offer_suffix() -> Result<(), ChessErrors> {
        let parsed = parse_move_input("g1 f3 draw?")?;
        assert!(parsed.offers_draw);
        assert_eq!(parsed.start, BoardLocation { row: 7, col: 6 });
        Ok(())
    }

    #[test]
    fn rejects_malformed_move_input() {
        for bad in [
            "",
            "e2e4",
            "e2  e4",
            "e2 e4 ",
            "e2 e4 draw",
            "e2 e4draw?",
            "e9 e4",
            "resign now",
        ] {
            assert!(matches!(
                parse_move_input(bad),
                Err(ChessErrors::InvalidMoveInput(_))
            ));
        }
    }
}
