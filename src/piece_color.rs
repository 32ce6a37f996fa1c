/// Represents the color (side) of a chess piece.
/// Used to distinguish between the white and black players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceColor {
    /// The white side.
    White,
    /// The black side.
    Black,
}

impl PieceColor {
    /// Returns the opposing color.
    pub fn opposite(&self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Capitalized name used in prompts and win announcements.
    pub fn display_name(&self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}
