//! Errors used throughout the chess game.
//!
//! This module defines the canonical error type returned by the board model,
//! the notation utilities, and the game loop. The enum `ChessErrors` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate to
//! aid diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Functions should return `Result<..., ChessErrors>` for recoverable or
//!   expected failure modes (invalid input, illegal moves, etc).
//! - The game loop is the recovery boundary: it matches on `ChessErrors` to
//!   present friendly messages and re-prompt.
//! - `MissingKing` represents a corrupted game state and is not intended to
//!   be recovered from by normal play.

use crate::{board_location::BoardLocation, piece_color::PieceColor};

/// Unified error type for the chess game.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while manipulating the board, parsing file-rank notation, or running
/// the game loop. Variants include contextual payloads where useful (for
/// example the offending `BoardLocation` or input string) so that callers can
/// log or display precise diagnostics.
#[derive(Debug)]
pub enum ChessErrors {
    /// Generic failure used in tests when no more specific variant applies.
    FailedTest,

    /// Row or column indices outside `0..=7` were provided.
    ///
    /// Payload: (row, col) as given.
    InvalidRowOrCol((i8, i8)),

    /// Attempted to offset a location by a delta `(d_row, d_col)` which would
    /// place it off the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// A square string (for example "e2") failed to parse.
    ///
    /// Payload: the original string.
    InvalidSquareString(String),

    /// A full line of move input failed validation against the expected
    /// "e2 e4" grammar.
    ///
    /// Payload: the original line.
    InvalidMoveInput(String),

    /// Attempted to place a piece onto a square that already holds one.
    ///
    /// Payload: the occupied square.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to remove a piece from an empty square.
    ///
    /// Payload: the location that was expected to contain a piece.
    CannotRemoveFromEmptyLocation(BoardLocation),

    /// A move named an empty square as its source.
    ///
    /// Payload: the empty source square.
    TryingToMoveFromEmptySquare(BoardLocation),

    /// A move named a source piece that does not belong to the player whose
    /// turn it is.
    ///
    /// Payload: the source square.
    NotYourPiece(BoardLocation),

    /// A move violates the moving piece's geometry or collision rules.
    ///
    /// Payload: (source, destination)
    IllegalMove((BoardLocation, BoardLocation)),

    /// A geometrically legal move would leave the mover's own king in check.
    ///
    /// Payload: (source, destination)
    MoveLeavesKingInCheck((BoardLocation, BoardLocation)),

    /// The board does not contain a king for one side.
    ///
    /// This represents a corrupted or invalid game state; callers should
    /// treat this as a fatal logic error in board construction.
    MissingKing(PieceColor),

    /// The terminal input or output stream failed.
    TerminalIo(std::io::Error),
}

impl From<std::io::Error> for ChessErrors {
    fn from(error: std::io::Error) -> Self {
        ChessErrors::TerminalIo(error)
    }
}
