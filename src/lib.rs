//! Crate root module declarations for the Parlor Chess project.
//!
//! This file exposes all top-level subsystems (board model, piece types,
//! movement rules, check/checkmate evaluation, notation handling, rendering,
//! and the interactive game loop) so the binary and tests can import stable
//! module paths.

pub mod board_location;
pub mod chess_errors;
pub mod game_board;
pub mod game_loop;
pub mod move_rules;
pub mod notation;
pub mod piece_class;
pub mod piece_color;
pub mod piece_record;
pub mod piece_register;
pub mod render_board;
