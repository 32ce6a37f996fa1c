//! The authoritative board state and the check/checkmate evaluation.
//!
//! `GameBoard` owns the piece register plus the turn flag, validates and
//! executes moves, and answers check/checkmate queries. Hypothetical
//! positions ("would this move leave my king in check?") are always evaluated
//! on a scratch clone; the live board is mutated only by a fully validated
//! `move_piece`.

use crate::{
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    move_rules::can_move_to,
    piece_class::PieceClass,
    piece_color::PieceColor,
    piece_record::PieceRecord,
    piece_register::PieceRegister,
};

#[derive(Clone, Debug)]
pub struct GameBoard {
    register: PieceRegister,
    current_player: PieceColor,
}

impl GameBoard {
    /// An empty board with White to move. Intended for tests and for setting
    /// up custom positions through `set_piece_at`.
    pub fn new_empty() -> Self {
        GameBoard {
            register: PieceRegister::default(),
            current_player: PieceColor::White,
        }
    }

    /// The standard starting position, White to move.
    pub fn new_game() -> Self {
        let mut board = GameBoard::new_empty();
        let back_rank = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        for (col, class) in back_rank.into_iter().enumerate() {
            let col = col as i8;
            board.place(class, PieceColor::Black, BoardLocation { row: 0, col });
            board.place(PieceClass::Pawn, PieceColor::Black, BoardLocation { row: 1, col });
            board.place(PieceClass::Pawn, PieceColor::White, BoardLocation { row: 6, col });
            board.place(class, PieceColor::White, BoardLocation { row: 7, col });
        }
        board
    }

    fn place(&mut self, class: PieceClass, color: PieceColor, location: BoardLocation) {
        self.register.put(
            Some(PieceRecord {
                class,
                color,
                location,
            }),
            location,
        );
    }

    pub fn register(&self) -> &PieceRegister {
        &self.register
    }

    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    pub fn set_current_player(&mut self, color: PieceColor) {
        self.current_player = color;
    }

    /// The piece occupying the given square, if any.
    pub fn piece_at(&self, x: BoardLocation) -> Option<PieceRecord> {
        *self.register.view(x)
    }

    /// Places (or, with `None`, clears) a piece at a square, rewriting the
    /// record's stored coordinates to match.
    pub fn set_piece_at(&mut self, record: Option<PieceRecord>, x: BoardLocation) {
        self.register.put(record, x);
    }

    /// Validates and executes a move for the current player.
    ///
    /// Rejection leaves the board completely untouched. On success the
    /// destination's occupant (if any) is captured, the mover is relocated,
    /// and the turn passes to the opponent.
    ///
    /// # Arguments
    /// * `start` - The source square.
    /// * `stop` - The destination square.
    ///
    /// # Returns
    /// * `Ok(())` if the move was executed.
    /// * `Err(ChessErrors::TryingToMoveFromEmptySquare)` - empty source.
    /// * `Err(ChessErrors::NotYourPiece)` - source piece belongs to the opponent.
    /// * `Err(ChessErrors::IllegalMove)` - the piece's movement rules forbid it.
    /// * `Err(ChessErrors::MoveLeavesKingInCheck)` - the mover's king would be
    ///   attacked afterwards.
    pub fn move_piece(&mut self, start: BoardLocation, stop: BoardLocation) -> Result<(), ChessErrors> {
        let piece = self
            .piece_at(start)
            .ok_or(ChessErrors::TryingToMoveFromEmptySquare(start))?;
        if piece.color != self.current_player {
            return Err(ChessErrors::NotYourPiece(start));
        }
        if !can_move_to(&self.register, &piece, stop) {
            return Err(ChessErrors::IllegalMove((start, stop)));
        }

        // Simulate on a scratch copy before touching the live board.
        let mut trial = self.clone();
        trial.relocate(start, stop);
        if trial.is_check(piece.color)? {
            return Err(ChessErrors::MoveLeavesKingInCheck((start, stop)));
        }

        self.relocate(start, stop);
        self.current_player = self.current_player.opposite();
        Ok(())
    }

    /// Moves whatever sits at `start` onto `stop`, overwriting any occupant.
    /// No rule checking; callers validate first.
    fn relocate(&mut self, start: BoardLocation, stop: BoardLocation) {
        if let Some(piece) = self.piece_at(start) {
            self.register.put(None, start);
            self.register.put(Some(piece), stop);
        }
    }

    /// True iff any enemy piece's movement rules target `color`'s king.
    ///
    /// # Returns
    /// * `Err(ChessErrors::MissingKing)` when the board holds no king of
    ///   `color` (corrupted position).
    pub fn is_check(&self, color: PieceColor) -> Result<bool, ChessErrors> {
        let king_square = self.register.find_king(color)?;
        for piece in self.register.iter() {
            if piece.color != color && can_move_to(&self.register, &piece, king_square) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True iff `color` is in check and no move by any of `color`'s pieces
    /// escapes it.
    ///
    /// Every geometrically legal move of every piece of `color` is simulated
    /// on a scratch clone; checkmate holds only if all of them stay in check.
    /// Not in check means not checkmate, regardless of mobility (stalemate is
    /// not this function's concern).
    pub fn is_checkmate(&self, color: PieceColor) -> Result<bool, ChessErrors> {
        if !self.is_check(color)? {
            return Ok(false);
        }
        for piece in self.register.iter() {
            if piece.color != color {
                continue;
            }
            for row in 0..8 {
                for col in 0..8 {
                    let stop = BoardLocation { row, col };
                    if !can_move_to(&self.register, &piece, stop) {
                        continue;
                    }
                    let mut trial = self.clone();
                    trial.relocate(piece.location, stop);
                    if !trial.is_check(color)? {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }
}
