use crate::{board_location::BoardLocation, piece_class::PieceClass, piece_color::PieceColor};

/// Represents a chess piece with its class, color, and board position.
/// The owning register keeps `location` equal to the piece's grid coordinates.
#[derive(Copy, Clone, Debug)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// The piece's color.
    pub color: PieceColor,
    /// The piece's current square.
    pub location: BoardLocation,
}

impl PieceRecord {
    /// Two-character display symbol used by the board renderer
    /// ("wp", "bK", and so on).
    pub fn symbol(&self) -> &'static str {
        match (self.color, self.class) {
            (PieceColor::White, PieceClass::Pawn) => "wp",
            (PieceColor::White, PieceClass::Knight) => "wN",
            (PieceColor::White, PieceClass::Bishop) => "wB",
            (PieceColor::White, PieceClass::Rook) => "wR",
            (PieceColor::White, PieceClass::Queen) => "wQ",
            (PieceColor::White, PieceClass::King) => "wK",
            (PieceColor::Black, PieceClass::Pawn) => "bp",
            (PieceColor::Black, PieceClass::Knight) => "bN",
            (PieceColor::Black, PieceClass::Bishop) => "bB",
            (PieceColor::Black, PieceClass::Rook) => "bR",
            (PieceColor::Black, PieceClass::Queen) => "bQ",
            (PieceColor::Black, PieceClass::King) => "bK",
        }
    }
}
