//! Reserve stack of pieces set aside by the player
//!
//! Fixed-capacity LIFO over an array of 3 slots. Unlike the lookahead queue
//! there is no auto-replenishment: the stack only changes by explicit player
//! action. The top sits at index `len - 1`; empty means `len == 0`.

use crate::error::{CoreError, Result};
use crate::piece::Piece;

/// Fixed capacity of the reserve stack
pub const STACK_CAPACITY: usize = 3;

/// LIFO of reserved pieces
#[derive(Debug, Clone)]
pub struct ReserveStack {
    slots: [Option<Piece>; STACK_CAPACITY],
    /// Number of occupied slots; top of stack is `len - 1`
    len: usize,
}

impl ReserveStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    /// Push a piece onto the top
    pub fn push(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(CoreError::StackFull);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top piece
    pub fn pop(&mut self) -> Result<Piece> {
        if self.is_empty() {
            return Err(CoreError::StackEmpty);
        }
        self.len -= 1;
        let piece = self.slots[self.len]
            .take()
            .unwrap_or_else(|| panic!("reserve stack slot {} empty below len", self.len));
        Ok(piece)
    }

    /// Pieces in top-to-base order, without mutating the stack
    pub fn snapshot(&self) -> Vec<Piece> {
        (0..self.len)
            .rev()
            .filter_map(|i| self.slots[i])
            .collect()
    }

    /// Mutable access to the top slot (single swap)
    pub(crate) fn top_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.len - 1].as_mut()
    }

    /// Copy of the piece at base-relative position `index` (0 = base)
    pub(crate) fn piece_at(&self, index: usize) -> Option<Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[index]
    }

    /// Overwrite the occupied slot at base-relative position `index`
    ///
    /// Only valid for occupied slots; used by the bulk swap, which has already
    /// verified the stack is full.
    pub(crate) fn set_piece_at(&mut self, index: usize, piece: Piece) {
        debug_assert!(index < self.len);
        self.slots[index] = Some(piece);
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack = ReserveStack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.snapshot(), vec![]);
    }

    #[test]
    fn test_push_pop_lifo_order() {
        let mut stack = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        stack.push(piece(3)).unwrap();

        assert!(stack.is_full());
        assert_eq!(stack.pop().unwrap().id, 3);
        assert_eq!(stack.pop().unwrap().id, 2);
        assert_eq!(stack.pop().unwrap().id, 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_snapshot_top_to_base() {
        let mut stack = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        stack.push(piece(3)).unwrap();

        let ids: Vec<u64> = stack.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_push_full_fails_repeatedly() {
        let mut stack = ReserveStack::new();
        for id in 0..STACK_CAPACITY as u64 {
            stack.push(piece(id)).unwrap();
        }
        let before = stack.snapshot();
        for _ in 0..3 {
            assert_eq!(stack.push(piece(99)), Err(CoreError::StackFull));
        }
        assert_eq!(stack.snapshot(), before);
        assert_eq!(stack.len(), STACK_CAPACITY);
    }

    #[test]
    fn test_pop_empty_fails_repeatedly() {
        let mut stack = ReserveStack::new();
        for _ in 0..3 {
            assert_eq!(stack.pop(), Err(CoreError::StackEmpty));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_len_stays_within_bounds() {
        let mut stack = ReserveStack::new();
        for id in 0..10u64 {
            let _ = stack.push(piece(id));
            assert!(stack.len() <= STACK_CAPACITY);
        }
        for _ in 0..10 {
            let _ = stack.pop();
        }
        assert_eq!(stack.len(), 0);
    }
}
