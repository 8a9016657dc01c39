//! Line-oriented text harness around [`Board`].
//!
//! Each input line is one command; each command writes one line of output
//! (the `board` command writes the whole diagram).

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, FenError, Move, MoveParseError, Square, SquareError};

pub mod command;

pub use command::{parse_command, Command};

/// Why a harness command failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidFen(FenError),
    InvalidSquare(SquareError),
    InvalidMove(MoveParseError),
    Usage(&'static str),
    UnknownCommand(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CliError::InvalidSquare(e) => write!(f, "{e}"),
            CliError::InvalidMove(e) => write!(f, "{e}"),
            CliError::Usage(usage) => write!(f, "usage: {usage}"),
            CliError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidFen(e) => Some(e),
            CliError::InvalidSquare(e) => Some(e),
            CliError::InvalidMove(e) => Some(e),
            CliError::Usage(_) | CliError::UnknownCommand(_) => None,
        }
    }
}

impl From<FenError> for CliError {
    fn from(e: FenError) -> Self {
        CliError::InvalidFen(e)
    }
}

impl From<SquareError> for CliError {
    fn from(e: SquareError) -> Self {
        CliError::InvalidSquare(e)
    }
}

impl From<MoveParseError> for CliError {
    fn from(e: MoveParseError) -> Self {
        CliError::InvalidMove(e)
    }
}

/// A board plus the commands that act on it
#[derive(Debug, Default)]
pub struct Session {
    board: Board,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            board: Board::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run one command and return its output text.
    ///
    /// `quit` is handled by the caller and yields an empty reply here.
    pub fn execute(&mut self, command: &Command) -> Result<String, CliError> {
        match command {
            Command::ShowFen => Ok(self.board.fen()),
            Command::SetFen(fen) => {
                self.board.set_fen(fen)?;
                Ok("ok".to_string())
            }
            Command::Board => Ok(format!("{:#}", self.board)),
            Command::Moves(square) => {
                let from: Square = square.parse()?;
                let targets: Vec<String> = self
                    .board
                    .legal_destinations(from)
                    .iter()
                    .map(|sq| sq.to_string())
                    .collect();
                if targets.is_empty() {
                    Ok("none".to_string())
                } else {
                    Ok(targets.join(" "))
                }
            }
            Command::Move(notation) => match self.board.make_move_uci(notation)? {
                Some(captured) => Ok(format!("ok, captured {}", captured.kind)),
                None => Ok("ok".to_string()),
            },
            Command::Legal(notation) => {
                let mv: Move = notation.parse()?;
                Ok(match self.board.move_is_legal(mv.from, mv.to) {
                    Ok(()) => "legal".to_string(),
                    Err(reason) => format!("illegal: {reason}"),
                })
            }
            Command::Reset => {
                self.board.reset();
                Ok("ok".to_string())
            }
            Command::Quit => Ok(String::new()),
            Command::Usage(usage) => Err(CliError::Usage(usage)),
            Command::Unknown(line) => Err(CliError::UnknownCommand(line.clone())),
        }
    }
}

/// Read commands from `input` until `quit` or end of input, writing replies
/// (and `error: ...` lines for failed commands) to `output`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut session = Session::new();

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }

        match session.execute(&command) {
            Ok(reply) => writeln!(output, "{}", reply.trim_end())?,
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_moves_and_fen() {
        let out = run_script("move e2e4\nmove e7e5\nfen\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "ok");
        assert_eq!(
            lines[2],
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_session_reports_errors() {
        let out = run_script("move a1a3\nmoves z9\nfrobnicate\nfen 8/8 w - - 0 1\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.starts_with("error: ")));
        assert!(lines[0].contains("a2"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("fen\nquit\nfen\n");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_moves_and_legal_queries() {
        let mut session = Session::new();
        let reply = session.execute(&Command::Moves("g1".to_string())).unwrap();
        assert_eq!(reply, "f3 h3");
        let reply = session.execute(&Command::Legal("e2e5".to_string())).unwrap();
        assert!(reply.starts_with("illegal: "));
        let reply = session.execute(&Command::Legal("e2e4".to_string())).unwrap();
        assert_eq!(reply, "legal");
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_capture_reply() {
        let mut session = Session::new();
        session
            .execute(&Command::SetFen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".to_string()))
            .unwrap();
        let reply = session.execute(&Command::Move("e4d5".to_string())).unwrap();
        assert_eq!(reply, "ok, captured pawn");
    }
}
