//! Lookahead queue of upcoming pieces
//!
//! Fixed-capacity circular FIFO over an array of 5 slots. The queue is created
//! full and `play_and_refill` keeps it that way: every piece that leaves
//! through normal play is immediately replaced by a freshly generated one.
//! Capacity is a hard invariant, so the backing storage never grows or
//! shrinks.

use crate::error::{CoreError, Result};
use crate::piece::Piece;
use crate::source::PieceSource;

/// Fixed capacity of the lookahead queue
pub const QUEUE_CAPACITY: usize = 5;

/// Circular FIFO of the next pieces to play
#[derive(Debug, Clone)]
pub struct LookaheadQueue {
    /// Slot storage; occupied slots are `Some`, addressed circularly
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Index of the oldest piece
    front: usize,
    /// Number of occupied slots
    len: usize,
}

impl LookaheadQueue {
    /// Create a queue pre-filled with 5 freshly generated pieces
    pub fn new(source: &mut PieceSource) -> Self {
        let mut queue = Self::empty();
        for _ in 0..QUEUE_CAPACITY {
            // Cannot fail: we insert exactly CAPACITY pieces into an empty queue
            let _ = queue.enqueue(source.generate());
        }
        queue
    }

    /// Create an empty queue; normal play starts from [`LookaheadQueue::new`]
    pub fn empty() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    /// Number of pieces currently in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Insert a piece at the back
    pub fn enqueue(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(CoreError::QueueFull);
        }
        let back = (self.front + self.len) % QUEUE_CAPACITY;
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the piece at the front
    pub fn dequeue(&mut self) -> Result<Piece> {
        if self.is_empty() {
            return Err(CoreError::QueueEmpty);
        }
        let piece = self.slots[self.front]
            .take()
            .unwrap_or_else(|| panic!("lookahead queue slot {} empty with len {}", self.front, self.len));
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Play the front piece and immediately refill from the source
    ///
    /// This is the composite operation normal play goes through: the queue is
    /// back at 5 pieces by the time this returns. A refill failure right after
    /// a successful dequeue means the length tracking is corrupted, which is a
    /// bug in this module, not a user-facing condition.
    pub fn play_and_refill(&mut self, source: &mut PieceSource) -> Result<Piece> {
        let played = self.dequeue()?;
        let replacement = source.generate();
        if self.enqueue(replacement).is_err() {
            panic!("lookahead queue full immediately after a successful dequeue");
        }
        tracing::debug!("played {}, refilled with {}", played, replacement);
        Ok(played)
    }

    /// Pieces in front-to-back order, without mutating the queue
    pub fn snapshot(&self) -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(self.len);
        let mut index = self.front;
        for _ in 0..self.len {
            if let Some(piece) = self.slots[index] {
                pieces.push(piece);
            }
            index = (index + 1) % QUEUE_CAPACITY;
        }
        pieces
    }

    /// Mutable access to the front slot (single swap)
    pub(crate) fn front_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_mut()
    }

    /// Copy of the piece `offset` positions behind the front
    pub(crate) fn piece_at(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.front + offset) % QUEUE_CAPACITY]
    }

    /// Overwrite the occupied slot `offset` positions behind the front
    ///
    /// Only valid for occupied slots; used by the bulk swap, which has already
    /// verified the queue is full.
    pub(crate) fn set_piece_at(&mut self, offset: usize, piece: Piece) {
        debug_assert!(offset < self.len);
        self.slots[(self.front + offset) % QUEUE_CAPACITY] = Some(piece);
    }
}
