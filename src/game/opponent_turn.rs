//! Deferred opponent moves.
//!
//! When the turn passes to the opponent the game does not move on its own.
//! The presentation layer asks for an [`OpponentTurn`] ticket, waits for
//! its think-time, and hands it back. A ticket only applies to the exact
//! table it was issued for: any change in between, including a new game,
//! cancels it.

use core::time::Duration;

use crate::error::OpponentError;
use crate::opponent::{self, OpponentMove};
use crate::snapshot::GameSnapshot;

use super::{Game, GameState, Side};

/// A scheduled opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTurn {
    /// Table version the move was scheduled against.
    pub version: u64,
    /// Think-time to wait before applying the move.
    pub delay: Duration,
}

impl Game {
    /// Returns a ticket for the opponent's move if it is the opponent's turn.
    pub fn pending_opponent_turn(&self) -> Option<OpponentTurn> {
        let table = self.table.lock();
        (table.state == GameState::OpponentTurn).then(|| OpponentTurn {
            version: table.version,
            delay: self.options.opponent_delay,
        })
    }

    /// Applies the opponent's move for `turn`.
    ///
    /// The opponent plays the card chosen by [`opponent::choose_move`]. With
    /// nothing to play it draws once: a playable drawn card is played at
    /// once, otherwise (or with an empty deck) the turn passes back.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::Superseded`] if the table changed since the
    /// ticket was issued, or [`OpponentError::NotOpponentTurn`] if it is not
    /// the opponent's turn.
    pub fn play_opponent_turn(&self, turn: OpponentTurn) -> Result<GameSnapshot, OpponentError> {
        self.table.with(|table| {
            if table.version != turn.version {
                return Err(OpponentError::Superseded);
            }
            if table.state != GameState::OpponentTurn {
                return Err(OpponentError::NotOpponentTurn);
            }

            let mut rng = self.rng.lock();
            let chosen =
                opponent::choose_move(table.opponent.cards(), table.top, table.active_suit, &mut *rng);
            drop(rng);

            let play = match chosen {
                OpponentMove::Play { card, suit } => Some((card, suit.unwrap_or(card.suit))),
                OpponentMove::Draw => table.draw_for(Side::Opponent).map(|card| {
                    let suit = if card.is_wild() {
                        opponent::suit_for_wild(table.opponent.cards(), card)
                    } else {
                        card.suit
                    };
                    (card, suit)
                }),
            };

            if let Some((card, suit)) = play {
                table.complete_play(Side::Opponent, card, suit);
            }

            Ok(table.snapshot())
        })
    }
}
