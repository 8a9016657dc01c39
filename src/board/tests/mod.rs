//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Per-piece legality rules and rejection reasons
//! - `castling.rs` - Castling preconditions, rook relocation and rights
//! - `check.rs` - Pins, moving into check and escaping check
//! - `edge_cases.rs` - Unusual positions and FEN inputs
//! - `proptest.rs` - Property-based tests

mod castling;
mod edge_cases;
