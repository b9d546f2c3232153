//! Read-only view of the table handed to the presentation layer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::game::{GameEvent, GameState, Phase, Side};

/// A consistent copy of the table, taken under a single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Cards in the player's hand, including a pending wild card.
    pub player_hand: Vec<Card>,
    /// Cards in the opponent's hand.
    pub opponent_hand: Vec<Card>,
    /// Number of cards in the player's hand.
    pub player_count: usize,
    /// Number of cards in the opponent's hand.
    pub opponent_count: usize,
    /// The card new plays must match by rank.
    pub top_discard: Card,
    /// Number of cards in the discard pile.
    pub discard_count: usize,
    /// Number of cards left to draw.
    pub draw_pile_count: usize,
    /// The suit new plays must match.
    pub active_suit: Suit,
    /// Full game state.
    pub state: GameState,
    /// Coarse phase.
    pub phase: Phase,
    /// Whose turn it is while playing.
    pub turn: Option<Side>,
    /// The eight waiting for a suit, if any.
    pub pending_wild: Option<Card>,
    /// The winner once the game is over.
    pub winner: Option<Side>,
    /// The player's legal cards while it is the player's turn, for
    /// highlighting. Empty otherwise.
    pub playable: Vec<Card>,
    /// The last thing that happened.
    pub last_event: GameEvent,
    /// Human-readable description of `last_event`.
    pub status: String,
    /// Counter bumped on every change to the table.
    pub version: u64,
}

impl GameSnapshot {
    /// Total number of cards across the draw pile, both hands and the
    /// discard pile. Always 52.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.draw_pile_count + self.player_count + self.opponent_count + self.discard_count
    }

    /// Returns whether the player may act on this snapshot.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        matches!(self.state, GameState::PlayerTurn)
    }
}
