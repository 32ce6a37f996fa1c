//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the piece register for the game
//! loop, tests, and diagnostics in text environments.

use crate::{board_location::BoardLocation, game_board::GameBoard};

/// Render the board to a string for terminal output.
///
/// Rank 8 (row 0) is printed first. Occupied squares show the piece's
/// two-character symbol, dark empty squares show "##", light empty squares
/// are blank. Rank numbers run down the right edge, file letters along the
/// bottom.
pub fn render_board(board: &GameBoard) -> String {
    let mut out = String::new();
    out.push('\n');

    for row in 0..8 {
        for col in 0..8 {
            match board.piece_at(BoardLocation { row, col }) {
                Some(piece) => {
                    out.push_str(piece.symbol());
                    out.push(' ');
                }
                None => {
                    if (row + col) % 2 == 0 {
                        out.push_str("   ");
                    } else {
                        out.push_str("## ");
                    }
                }
            }
        }
        out.push(char::from(b'8' - row as u8));
        out.push('\n');
    }

    out.push(' ');
    for file in b'a'..=b'h' {
        out.push(char::from(file));
        out.push_str("  ");
    }
    // Blank line after the footer so consecutive renders stay separated.
    out.push_str("\n\n");

    out
}
