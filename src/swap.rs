//! Swap operations between the lookahead queue and the reserve stack
//!
//! Two exchanges that move pieces between the containers without changing
//! either size: a single front-top transposition and a bulk swap of the
//! queue's 3 oldest pieces against all 3 stack pieces. Both validate every
//! precondition before touching a slot, so a failed call leaves both
//! containers exactly as they were.

use crate::error::{CoreError, Result};
use crate::piece::Piece;
use crate::queue::{LookaheadQueue, QUEUE_CAPACITY};
use crate::stack::{ReserveStack, STACK_CAPACITY};

/// Number of pieces exchanged by the bulk swap on each side
const BULK_COUNT: usize = 3;

/// Exchange the queue's front piece with the stack's top piece in place
///
/// Sizes of both containers are unchanged; only the two values transpose.
/// Returns `(former queue front, former stack top)` for display.
pub fn swap_single(
    queue: &mut LookaheadQueue,
    stack: &mut ReserveStack,
) -> Result<(Piece, Piece)> {
    if queue.is_empty() {
        return Err(CoreError::QueueEmpty);
    }
    if stack.is_empty() {
        return Err(CoreError::StackEmpty);
    }

    // Both checked non-empty above, so both slots exist
    let (Some(front), Some(top)) = (queue.front_mut(), stack.top_mut()) else {
        unreachable!("non-empty containers must expose front and top slots");
    };
    std::mem::swap(front, top);

    let from_queue = *top;
    let from_stack = *front;
    tracing::info!("single swap: {} from queue <-> {} from stack", from_queue, from_stack);
    Ok((from_queue, from_stack))
}

/// Exchange the queue's 3 oldest pieces with all 3 stack pieces
///
/// Requires a full queue (5) and a full stack (3). The stack pieces enter the
/// queue top-first: the former stack top becomes the new queue front. The
/// queue pieces enter the stack so that the former front ends up on top
/// (`stack[i] = saved_queue[2 - i]`). The queue's remaining two slots are
/// untouched and both sizes stay the same.
pub fn swap_bulk(queue: &mut LookaheadQueue, stack: &mut ReserveStack) -> Result<()> {
    // Validate both preconditions independently before any mutation
    let queue_ok = queue.len() == QUEUE_CAPACITY;
    let stack_ok = stack.len() == STACK_CAPACITY;
    if !queue_ok {
        return Err(CoreError::QueueNotFull);
    }
    if !stack_ok {
        return Err(CoreError::StackNotFull);
    }

    let mut saved_queue = [None; BULK_COUNT];
    let mut saved_stack = [None; BULK_COUNT];
    for i in 0..BULK_COUNT {
        saved_queue[i] = queue.piece_at(i);
        saved_stack[i] = stack.piece_at(i);
    }

    for i in 0..BULK_COUNT {
        // Stack enters the queue in reverse: top first
        if let Some(piece) = saved_stack[BULK_COUNT - 1 - i] {
            queue.set_piece_at(i, piece);
        }
        // Queue enters the stack in reverse: former front lands on top
        if let Some(piece) = saved_queue[BULK_COUNT - 1 - i] {
            stack.set_piece_at(i, piece);
        }
    }

    tracing::info!("bulk swap: 3 oldest queue pieces <-> 3 reserve pieces");
    Ok(())
}
