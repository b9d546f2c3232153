//! Thread-backed pacing for opponent moves.

use alloc::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::OpponentError;
use crate::snapshot::GameSnapshot;

use super::Game;

/// Handle to an opponent move running on a worker thread.
pub type OpponentHandle = JoinHandle<Result<GameSnapshot, OpponentError>>;

/// Schedules the opponent's move on a worker thread.
///
/// The thread sleeps for the configured think-time and then applies the
/// move. Returns `None` if it is not the opponent's turn. Starting a new game
/// while the thread sleeps cancels the move: the thread then finishes with
/// [`OpponentError::Superseded`] and the new game is left alone.
pub fn spawn_opponent_turn(game: &Arc<Game>) -> Option<OpponentHandle> {
    let turn = game.pending_opponent_turn()?;
    let game = Arc::clone(game);

    Some(thread::spawn(move || {
        thread::sleep(turn.delay);
        game.play_opponent_turn(turn)
    }))
}
