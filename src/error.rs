//! Error types for game operations.
//!
//! Every error is returned before any state is touched: a rejected call
//! leaves the table exactly as it was.

use thiserror::Error;

use crate::card::Card;
use crate::game::Side;

/// Errors that can occur when the player draws or plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action (dealing, game over, or a wild
    /// card waiting for its suit).
    #[error("invalid game state for this action")]
    InvalidState,
    /// It is the opponent's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The card id does not name a card.
    #[error("unknown card id {0}")]
    UnknownCard(u8),
    /// The card is not in the player's hand.
    #[error("{0} is not in your hand")]
    CardNotInHand(Card),
    /// The card does not match the active suit or the top card's rank.
    #[error("{0} cannot be played now")]
    IllegalCard(Card),
}

/// Errors that can occur while settling a wild card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WildError {
    /// No wild card is waiting for a suit.
    #[error("no wild card is waiting for a suit")]
    NoPendingWild,
}

/// Errors that can occur when applying a deferred opponent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpponentError {
    /// It is not the opponent's turn.
    #[error("not the opponent's turn")]
    NotOpponentTurn,
    /// The table changed since the turn was scheduled.
    #[error("opponent turn was superseded")]
    Superseded,
}

/// Errors that can occur when setting up an arranged position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// A card appears more than once.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
    /// A card has a rank outside `1..=13`.
    #[error("card has invalid rank {}", .0.rank)]
    InvalidRank(Card),
    /// A side starts with no cards.
    #[error("{0:?} hand is empty")]
    EmptyHand(Side),
}
