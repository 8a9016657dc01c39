//! Parsing of harness input lines into commands.

/// One line of input to the text harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `fen` with no arguments
    ShowFen,
    /// `fen <six fields>`
    SetFen(String),
    Board,
    /// `moves <square>`
    Moves(String),
    /// `move <from><to>`
    Move(String),
    /// `legal <from><to>`
    Legal(String),
    Reset,
    Quit,
    /// A known command used with the wrong arguments
    Usage(&'static str),
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&name, args) = parts.split_first()?;

    let single = |usage: &'static str, make: fn(String) -> Command| match args {
        [arg] => make((*arg).to_string()),
        _ => Command::Usage(usage),
    };

    let cmd = match name {
        "fen" if args.is_empty() => Command::ShowFen,
        "fen" => Command::SetFen(args.join(" ")),
        "board" | "d" => Command::Board,
        "moves" => single("moves <square>", Command::Moves),
        "move" => single("move <from><to>", Command::Move),
        "legal" => single("legal <from><to>", Command::Legal),
        "reset" | "new" => Command::Reset,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
