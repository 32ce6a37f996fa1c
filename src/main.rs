use std::io;

use parlor_chess::game_loop::play;

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(error) = play(stdin.lock(), &mut stdout) {
        eprintln!("game ended with an error: {error:?}");
        std::process::exit(1);
    }
}
