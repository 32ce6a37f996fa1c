use crate::{
    board_location::BoardLocation, chess_errors::ChessErrors, piece_class::PieceClass,
    piece_color::PieceColor, piece_record::PieceRecord,
};

/// The 8x8 mailbox of pieces. Each cell holds at most one record, and a
/// stored record's `location` always equals its cell coordinates.
#[derive(Default, Clone, Debug)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.row as usize][x.col as usize]
    }

    fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.row as usize][x.col as usize]
    }

    pub fn add_piece_record(&mut self, x: PieceRecord) -> Result<(), ChessErrors> {
        if self.view(x.location).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x.location));
        }
        *self.at(x.location) = Some(x);
        Ok(())
    }

    pub fn remove_piece_at_location(&mut self, y: BoardLocation) -> Result<PieceRecord, ChessErrors> {
        self.at(y)
            .take()
            .ok_or(ChessErrors::CannotRemoveFromEmptyLocation(y))
    }

    /// Places or clears a cell without occupancy checks. A placed record's
    /// stored location is rewritten to match the cell.
    pub fn put(&mut self, record: Option<PieceRecord>, y: BoardLocation) {
        *self.at(y) = record.map(|mut piece| {
            piece.location = y;
            piece
        });
    }

    /// Iterates over every piece on the board, by value.
    pub fn iter(&self) -> impl Iterator<Item = PieceRecord> + '_ {
        self.buffer.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn find_king(&self, color: PieceColor) -> Result<BoardLocation, ChessErrors> {
        self.iter()
            .find(|piece| piece.color == color && matches!(piece.class, PieceClass::King))
            .map(|piece| piece.location)
            .ok_or(ChessErrors::MissingKing(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_at(row: i8, col: i8) -> PieceRecord {
        PieceRecord {
            class: PieceClass::Pawn,
            color: PieceColor::White,
            location: BoardLocation { row, col },
        }
    }

    #[test]
    fn add_remove_pieces() -> Result<(), ChessErrors> {
        let mut dut = PieceRegister::default();
        dut.add_piece_record(pawn_at(6, 0))?;
        dut.add_piece_record(pawn_at(6, 1))?;
        let _ = dut.remove_piece_at_location(BoardLocation { row: 6, col: 0 })?;
        let _ = dut.remove_piece_at_location(BoardLocation { row: 6, col: 1 })?;
        if dut
            .remove_piece_at_location(BoardLocation { row: 6, col: 0 })
            .is_err()
        {
            return Ok(());
        }
        Err(ChessErrors::FailedTest)
    }

    #[test]
    fn add_rejects_occupied_cell() {
        let mut dut = PieceRegister::default();
        dut.add_piece_record(pawn_at(4, 4)).unwrap();
        assert!(matches!(
            dut.add_piece_record(pawn_at(4, 4)),
            Err(ChessErrors::BoardLocationOccupied(_))
        ));
    }

    #[test]
    fn put_rewrites_stored_location() {
        let mut dut = PieceRegister::default();
        let misplaced = pawn_at(0, 0);
        dut.put(Some(misplaced), BoardLocation { row: 3, col: 5 });
        let stored = dut.view(BoardLocation { row: 3, col: 5 }).unwrap();
        assert_eq!(stored.location, BoardLocation { row: 3, col: 5 });
    }

    #[test]
    fn find_king_reports_missing() {
        let dut = PieceRegister::default();
        assert!(matches!(
            dut.find_king(PieceColor::White),
            Err(ChessErrors::MissingKing(PieceColor::White))
        ));
    }
}
