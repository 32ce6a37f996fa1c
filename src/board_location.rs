use crate::chess_errors::ChessErrors;

/// A square on the 8x8 board, addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1);
/// column 0 is file 'a'. Values constructed through [`from_row_col`] and
/// [`offset`] are always within `0..=7`.
///
/// [`from_row_col`]: BoardLocation::from_row_col
/// [`offset`]: BoardLocation::offset
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardLocation {
    pub row: i8,
    pub col: i8,
}

impl BoardLocation {
    /// Creates a location from row and column indices.
    ///
    /// # Arguments
    /// * `row` - The row index (0 = rank 8, 7 = rank 1).
    /// * `col` - The column index (0 = file 'a').
    ///
    /// # Returns
    /// * `Ok(BoardLocation)` if both indices are within `0..=7`.
    /// * `Err(ChessErrors::InvalidRowOrCol)` otherwise.
    pub fn from_row_col(row: i8, col: i8) -> Result<Self, ChessErrors> {
        if (row < 0) | (row > 7) | (col < 0) | (col > 7) {
            Err(ChessErrors::InvalidRowOrCol((row, col)))
        } else {
            Ok(BoardLocation { row, col })
        }
    }

    /// Moves this location by a row and column offset.
    ///
    /// # Arguments
    /// * `d_row` - The row offset.
    /// * `d_col` - The column offset.
    ///
    /// # Returns
    /// * `Ok(BoardLocation)` - The new location if within bounds.
    /// * `Err(ChessErrors::TriedToMoveOutOfBounds)` otherwise.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Result<Self, ChessErrors> {
        let y = (self.row + d_row, self.col + d_col);
        if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
            Err(ChessErrors::TriedToMoveOutOfBounds((*self, d_row, d_col)))
        } else {
            Ok(BoardLocation { row: y.0, col: y.1 })
        }
    }
}
