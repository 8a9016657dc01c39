use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    chess_rules::cli::run(stdin.lock(), stdout.lock())
}
