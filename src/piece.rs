//! Piece tokens moved between the queue and the stack
//!
//! A piece here is just an identity: a kind from a closed 4-symbol set and a
//! process-unique id. No geometry, no rotation - containers move these around
//! by value.

use ratatui::style::Color;
use std::fmt;

/// The 4 piece kinds this simulator deals in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl PieceKind {
    /// Get all kinds, in a fixed order, for random selection
    pub fn all() -> [PieceKind; 4] {
        [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L]
    }

    /// Single-character symbol for display
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Get the color for this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::Rgb(255, 165, 0), // Orange
        }
    }
}

/// A single piece: kind plus a unique, never-reused id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.symbol(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_distinct() {
        let unique: HashSet<_> = PieceKind::all().iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_display_format() {
        let piece = Piece::new(PieceKind::T, 42);
        assert_eq!(piece.to_string(), "[T 42]");
    }
}
