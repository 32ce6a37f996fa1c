use crate::{
    board_location::BoardLocation, piece_class::PieceClass, piece_color::PieceColor,
    piece_record::PieceRecord, piece_register::PieceRegister,
};

/// Returns the forward row direction for the given color.
/// White advances toward row 0, Black toward row 7.
fn forward_direction(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => -1,
        PieceColor::Black => 1,
    }
}

/// Legality predicate for any piece, dispatching on the piece's class.
///
/// Evaluates only the piece's geometry plus board occupancy (blocking pieces
/// and friendly-fire capture). Turn order and check safety are the board's
/// responsibility. Purely a predicate; never mutates the register.
///
/// # Arguments
/// * `register` - The board occupancy to evaluate against.
/// * `piece` - The moving piece (its stored location is the source square).
/// * `stop` - The destination square.
///
/// # Returns
/// * `true` if the piece's movement rules allow the move.
pub fn can_move_to(register: &PieceRegister, piece: &PieceRecord, stop: BoardLocation) -> bool {
    if piece.location == stop {
        return false;
    }
    // A friendly piece on the destination is always illegal, regardless of
    // geometry.
    if let Some(target) = register.view(stop) {
        if target.color == piece.color {
            return false;
        }
    }
    match piece.class {
        PieceClass::Pawn => can_move_pawn(register, piece, stop),
        PieceClass::Knight => can_move_knight(piece.location, stop),
        PieceClass::Bishop => follows_clear_diagonal(register, piece.location, stop),
        PieceClass::Rook => follows_clear_straight(register, piece.location, stop),
        PieceClass::Queen => {
            follows_clear_straight(register, piece.location, stop)
                || follows_clear_diagonal(register, piece.location, stop)
        }
        PieceClass::King => can_move_king(piece.location, stop),
    }
}

fn can_move_pawn(register: &PieceRegister, piece: &PieceRecord, stop: BoardLocation) -> bool {
    let forward = forward_direction(piece.color);
    let d_row = stop.row - piece.location.row;
    let d_col = stop.col - piece.location.col;

    if d_col != 0 {
        // Diagonal single step, permitted only as a capture. The dispatcher
        // already rejected friendly targets, so occupied means enemy here.
        return d_row == forward && d_col.abs() == 1 && register.view(stop).is_some();
    }

    // Straight ahead never captures.
    if register.view(stop).is_some() {
        return false;
    }
    if d_row == forward {
        return true;
    }

    // Double step only from the starting row, with the intermediate square
    // also empty.
    let starting_row = match piece.color {
        PieceColor::White => 6,
        PieceColor::Black => 1,
    };
    if d_row == 2 * forward && piece.location.row == starting_row {
        if let Ok(intermediate) = piece.location.offset(forward, 0) {
            return register.view(intermediate).is_none();
        }
    }
    false
}

fn can_move_knight(start: BoardLocation, stop: BoardLocation) -> bool {
    // Knights jump; intervening squares are irrelevant.
    let d_row = (stop.row - start.row).abs();
    let d_col = (stop.col - start.col).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}

fn can_move_king(start: BoardLocation, stop: BoardLocation) -> bool {
    (stop.row - start.row).abs() <= 1 && (stop.col - start.col).abs() <= 1
}

fn follows_clear_straight(
    register: &PieceRegister,
    start: BoardLocation,
    stop: BoardLocation,
) -> bool {
    if start.row != stop.row && start.col != stop.col {
        return false;
    }
    path_is_clear(register, start, stop)
}

fn follows_clear_diagonal(
    register: &PieceRegister,
    start: BoardLocation,
    stop: BoardLocation,
) -> bool {
    if (stop.row - start.row).abs() != (stop.col - start.col).abs() {
        return false;
    }
    path_is_clear(register, start, stop)
}

/// Walks from `start` toward `stop` one square at a time and verifies every
/// strictly-intermediate square is empty. Destination occupancy is not
/// examined here.
fn path_is_clear(register: &PieceRegister, start: BoardLocation, stop: BoardLocation) -> bool {
    let d_row = (stop.row - start.row).signum();
    let d_col = (stop.col - start.col).signum();
    let mut cursor = start;
    loop {
        cursor = match cursor.offset(d_row, d_col) {
            Ok(next) => next,
            Err(_) => return false,
        };
        if cursor == stop {
            return true;
        }
        if register.view(cursor).is_some() {
            return false;
        }
    }
}
