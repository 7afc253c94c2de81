//! Simulator state and action processing
//!
//! Owns the piece source plus both containers and turns menu actions into
//! core operations. Every failure from the core becomes a message for the UI;
//! the loop always continues.

use crate::error::{CoreError, Result};
use crate::piece::Piece;
use crate::queue::LookaheadQueue;
use crate::source::PieceSource;
use crate::stack::ReserveStack;
use crate::swap;

/// Actions the player can request from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the front piece (queue refills automatically)
    PlayPiece,
    /// Move the front piece to the reserve stack
    SendToReserve,
    /// Use the top piece of the reserve stack
    UseReserved,
    /// Exchange queue front with stack top
    SwapSingle,
    /// Exchange the 3 oldest queue pieces with all 3 stack pieces
    SwapBulk,
    Quit,
}

/// The running simulation
pub struct Game {
    pub queue: LookaheadQueue,
    pub stack: ReserveStack,
    source: PieceSource,
    /// Outcome of the last successful action, for display
    pub last_action: Option<String>,
    /// Last rejected action, for display
    pub last_error: Option<String>,
    /// Pieces played from the queue this session
    pub pieces_played: u32,
    /// Pieces consumed from the reserve this session
    pub reserved_used: u32,
}

impl Game {
    /// Create a game with a random seed
    pub fn new() -> Self {
        Self::with_source(PieceSource::new())
    }

    /// Create a game with a fixed seed (deterministic piece sequence)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(PieceSource::with_seed(seed))
    }

    fn with_source(mut source: PieceSource) -> Self {
        let queue = LookaheadQueue::new(&mut source);
        Self {
            queue,
            stack: ReserveStack::new(),
            source,
            last_action: None,
            last_error: None,
            pieces_played: 0,
            reserved_used: 0,
        }
    }

    /// Process a menu action, recording the outcome for display
    pub fn process_action(&mut self, action: Action) {
        let outcome = match action {
            Action::PlayPiece => self.play_piece(),
            Action::SendToReserve => self.send_to_reserve(),
            Action::UseReserved => self.use_reserved(),
            Action::SwapSingle => self.swap_single(),
            Action::SwapBulk => self.swap_bulk(),
            Action::Quit => return,
        };

        match outcome {
            Ok(message) => {
                tracing::info!("{}", message);
                self.last_action = Some(message);
                self.last_error = None;
            }
            Err(error) => {
                tracing::warn!("rejected {:?}: {}", action, error);
                self.last_error = Some(error.to_string());
            }
        }
    }

    /// Play the front piece; the queue refills to 5 on its own
    fn play_piece(&mut self) -> Result<String> {
        let played = self.queue.play_and_refill(&mut self.source)?;
        self.pieces_played += 1;
        Ok(format!("Played {} - a new piece joined the queue", played))
    }

    /// Move the front piece to the reserve and refill the queue
    ///
    /// The stack is checked first so a full reserve rejects the action before
    /// anything leaves the queue.
    fn send_to_reserve(&mut self) -> Result<String> {
        if self.stack.is_full() {
            return Err(CoreError::StackFull);
        }
        let piece = self.queue.dequeue()?;
        if self.stack.push(piece).is_err() {
            // Guarded against above; the stack cannot fill in between
            panic!("reserve stack full despite pre-checked capacity");
        }
        let replacement = self.source.generate();
        if self.queue.enqueue(replacement).is_err() {
            panic!("lookahead queue full immediately after a successful dequeue");
        }
        Ok(format!("Reserved {} - a new piece joined the queue", piece))
    }

    /// Pop the top reserved piece
    fn use_reserved(&mut self) -> Result<String> {
        let piece = self.stack.pop()?;
        self.reserved_used += 1;
        Ok(format!("Used reserved {}", piece))
    }

    fn swap_single(&mut self) -> Result<String> {
        let (from_queue, from_stack) = swap::swap_single(&mut self.queue, &mut self.stack)?;
        Ok(format!(
            "Swapped {} from the queue with {} from the reserve",
            from_queue, from_stack
        ))
    }

    fn swap_bulk(&mut self) -> Result<String> {
        swap::swap_bulk(&mut self.queue, &mut self.stack)?;
        Ok("Swapped the 3 front queue pieces with all 3 reserved pieces".to_string())
    }

    /// Snapshot of the queue, front to back
    pub fn queue_snapshot(&self) -> Vec<Piece> {
        self.queue.snapshot()
    }

    /// Snapshot of the stack, top to base
    pub fn stack_snapshot(&self) -> Vec<Piece> {
        self.stack.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_ids(game: &Game) -> Vec<u64> {
        game.queue_snapshot().iter().map(|p| p.id).collect()
    }

    fn stack_ids(game: &Game) -> Vec<u64> {
        game.stack_snapshot().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_game_starts_full_queue_empty_stack() {
        let game = Game::with_seed(1);
        assert_eq!(queue_ids(&game), vec![0, 1, 2, 3, 4]);
        assert!(game.stack.is_empty());
    }

    #[test]
    fn test_play_piece_advances_and_refills() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::PlayPiece);

        assert_eq!(queue_ids(&game), vec![1, 2, 3, 4, 5]);
        assert_eq!(game.pieces_played, 1);
        assert!(game.last_action.is_some());
        assert!(game.last_error.is_none());
    }

    #[test]
    fn test_send_to_reserve_moves_front_and_refills() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::SendToReserve);

        assert_eq!(stack_ids(&game), vec![0]);
        assert_eq!(queue_ids(&game), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_send_to_reserve_full_stack_leaves_queue_untouched() {
        let mut game = Game::with_seed(1);
        for _ in 0..3 {
            game.process_action(Action::SendToReserve);
        }
        let queue_before = queue_ids(&game);

        game.process_action(Action::SendToReserve);
        assert!(game.last_error.is_some());
        assert_eq!(queue_ids(&game), queue_before);
        assert_eq!(game.stack.len(), 3);
    }

    #[test]
    fn test_use_reserved_pops_top() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::SendToReserve);
        game.process_action(Action::SendToReserve);

        game.process_action(Action::UseReserved);
        assert_eq!(stack_ids(&game), vec![0]);
        assert_eq!(game.reserved_used, 1);
    }

    #[test]
    fn test_use_reserved_empty_sets_error() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::UseReserved);
        assert!(game.last_error.is_some());
        assert!(game.last_action.is_none());
    }

    #[test]
    fn test_swap_single_through_actions() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::SendToReserve); // reserve id 0, queue [1..6)

        game.process_action(Action::SwapSingle);
        assert_eq!(queue_ids(&game)[0], 0);
        assert_eq!(stack_ids(&game), vec![1]);
    }

    #[test]
    fn test_swap_bulk_through_actions() {
        let mut game = Game::with_seed(1);
        for _ in 0..3 {
            game.process_action(Action::SendToReserve);
        }
        // Stack base-to-top [0,1,2]; queue [3,4,5,6,7]
        game.process_action(Action::SwapBulk);

        assert_eq!(queue_ids(&game), vec![2, 1, 0, 6, 7]);
        // Former queue front (3) lands on top
        assert_eq!(stack_ids(&game), vec![3, 4, 5]);
    }

    #[test]
    fn test_swap_bulk_without_full_stack_sets_error() {
        let mut game = Game::with_seed(1);
        let before = queue_ids(&game);

        game.process_action(Action::SwapBulk);
        assert!(game.last_error.is_some());
        assert_eq!(queue_ids(&game), before);
    }

    #[test]
    fn test_error_then_success_clears_error() {
        let mut game = Game::with_seed(1);
        game.process_action(Action::UseReserved);
        assert!(game.last_error.is_some());

        game.process_action(Action::PlayPiece);
        assert!(game.last_error.is_none());
        assert!(game.last_action.is_some());
    }
}
