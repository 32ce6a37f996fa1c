//! The interactive two-player turn loop.
//!
//! Alternates prompts between the players, feeding validated input to the
//! board and rendering the position after every accepted move. Generic over
//! `BufRead`/`Write` so scripted games drive it in tests exactly the way
//! stdin/stdout does in the binary.
//!
//! Session commands, in addition to moves ("e2 e4"):
//! - `q` quits silently;
//! - `resign` ends the game, the opponent wins;
//! - a move suffixed with " draw?" offers a draw, which the opponent may
//!   accept by answering `draw` before making their own move;
//! - end of input ends the session.

use std::io::{BufRead, Write};

use crate::{
    chess_errors::ChessErrors,
    game_board::GameBoard,
    notation::parse_move_input,
    render_board::render_board,
};

/// Runs one game from the standard starting position until checkmate,
/// resignation, an agreed draw, `q`, or end of input.
///
/// Recoverable problems (malformed input, illegal moves) are reported on
/// `output` and re-prompted; only I/O failures and corrupted-board errors
/// propagate.
pub fn play<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), ChessErrors> {
    let mut board = GameBoard::new_game();
    let mut draw_offered = false;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", render_board(&board))?;

        let mover = board.current_player();
        if board.is_checkmate(mover)? {
            writeln!(output, "Checkmate")?;
            writeln!(output, "{} wins", mover.opposite().display_name())?;
            return Ok(());
        }
        if board.is_check(mover)? {
            writeln!(output, "Check")?;
        }

        loop {
            write!(output, "{}'s move: ", mover.display_name())?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            let line = line.trim();

            if line == "q" {
                return Ok(());
            }
            if line == "resign" {
                writeln!(output, "{} wins", mover.opposite().display_name())?;
                return Ok(());
            }
            if line == "draw" {
                if draw_offered {
                    writeln!(output, "Draw agreed")?;
                    return Ok(());
                }
                writeln!(output, "Invalid input format")?;
                continue;
            }
            // The offer stands for exactly one answer; any other line lapses
            // it, even one that fails to parse.
            draw_offered = false;

            let request = match parse_move_input(line) {
                Ok(request) => request,
                Err(_) => {
                    writeln!(output, "Invalid input format")?;
                    continue;
                }
            };

            match board.move_piece(request.start, request.stop) {
                Ok(()) => {
                    draw_offered = request.offers_draw;
                    break;
                }
                Err(fatal @ ChessErrors::MissingKing(_)) => return Err(fatal),
                Err(_) => {
                    writeln!(output, "Illegal move, try again")?;
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        play(Cursor::new(script.as_bytes().to_vec()), &mut output)
            .expect("session should not error");
        String::from_utf8(output).expect("output should be utf-8")
    }

    #[test]
    fn quit_command_ends_silently() {
        let transcript = run_script("q\n");
        assert!(transcript.contains("White's move: "));
        assert!(!transcript.contains("wins"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let transcript = run_script("");
        assert!(transcript.contains("White's move: "));
    }

    #[test]
    fn resignation_announces_the_winner() {
        let transcript = run_script("e2 e4\nresign\n");
        assert!(transcript.contains("White wins"));
        assert!(!transcript.contains("Checkmate"));
    }

    #[test]
    fn malformed_input_reprompts() {
        let transcript = run_script("hello there\ne2e4\nq\n");
        assert_eq!(transcript.matches("Invalid input format").count(), 2);
        assert_eq!(transcript.matches("White's move: ").count(), 3);
    }

    #[test]
    fn illegal_move_reprompts_without_side_effects() {
        // Rook through its own pawn, then a legal pawn move.
        let transcript = run_script("a1 a4\ne2 e4\nq\n");
        assert!(transcript.contains("Illegal move, try again"));
        assert!(transcript.contains("Black's move: "));
    }

    #[test]
    fn fools_mate_is_announced() {
        let transcript = run_script("f2 f3\ne7 e5\ng2 g4\nd8 h4\n");
        assert!(transcript.contains("Checkmate"));
        assert!(transcript.contains("Black wins"));
    }

    #[test]
    fn scholars_mate_is_announced() {
        let transcript =
            run_script("e2 e4\ne7 e5\nf1 c4\nb8 c6\nd1 h5\ng8 f6\nh5 f7\n");
        assert!(transcript.contains("Checkmate"));
        assert!(transcript.contains("White wins"));
    }

    #[test]
    fn check_is_announced() {
        // 1. e4 f5 2. Qh5+ and Black must hear about it.
        let transcript = run_script("e2 e4\nf7 f5\nd1 h5\nq\n");
        assert!(transcript.contains("Check\n"));
    }

    #[test]
    fn draw_offer_and_acceptance() {
        let transcript = run_script("e2 e4 draw?\ndraw\n");
        assert!(transcript.contains("Draw agreed"));
    }

    #[test]
    fn draw_offer_lapses_after_a_move() {
        let transcript = run_script("e2 e4 draw?\ne7 e5\ndraw\nq\n");
        assert!(!transcript.contains("Draw agreed"));
        assert!(transcript.contains("Invalid input format"));
    }

    #[test]
    fn draw_offer_lapses_on_any_other_input() {
        // Even a line that fails to parse consumes the offer.
        let transcript = run_script("e2 e4 draw?\ngarbage\ndraw\nq\n");
        assert!(!transcript.contains("Draw agreed"));
        assert_eq!(transcript.matches("Invalid input format").count(), 2);
    }

    #[test]
    fn unprompted_draw_is_rejected() {
        let transcript = run_script("draw\nq\n");
        assert!(!transcript.contains("Draw agreed"));
        assert!(transcript.contains("Invalid input format"));
    }

    #[test]
    fn moving_into_check_is_refused() {
        // 1. e4 e5 2. Qh5 leaves Black's f7 pawn pinned against the king;
        // pushing it must be refused and Black re-prompted.
        let transcript = run_script("e2 e4\ne7 e5\nd1 h5\nf7 f6\nq\n");
        assert!(transcript.contains("Illegal move, try again"));
    }
}
