//! Text diagram of a board.

use std::fmt;

use super::{Board, Square};

/// Eight rows, rank 8 first, one character per square (`.` when empty).
///
/// The alternate form (`{:#}`) adds rank numbers and a file legend.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            if f.alternate() {
                write!(f, "{} ", rank + 1)?;
            }
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let symbol = self.piece_at(sq).map_or('.', |piece| piece.symbol());
                if file > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        if f.alternate() {
            writeln!(f, "  a b c d e f g h")?;
        }
        Ok(())
    }
}
