//! Error types for queue, stack and swap operations
//!
//! Every variant is an expected, recoverable condition local to a single
//! requested action. The driver surfaces them as messages and keeps looping.

use thiserror::Error;

/// Errors from the piece-management core
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Dequeue or single swap attempted on an empty lookahead queue.
    #[error("Lookahead queue is empty! No piece to take.")]
    QueueEmpty,

    /// Enqueue attempted on a full lookahead queue.
    #[error("Lookahead queue is full! Cannot add another piece.")]
    QueueFull,

    /// Pop or single swap attempted on an empty reserve stack.
    #[error("Reserve stack is empty! Send a piece to the reserve first.")]
    StackEmpty,

    /// Push attempted on a full reserve stack.
    #[error("Reserve stack is full! Use a reserved piece to free a slot.")]
    StackFull,

    /// Bulk swap requires the queue to hold exactly 5 pieces.
    #[error("Bulk swap needs a full queue of 5 pieces.")]
    QueueNotFull,

    /// Bulk swap requires the stack to hold exactly 3 pieces.
    #[error("Bulk swap needs a full reserve of 3 pieces.")]
    StackNotFull,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
