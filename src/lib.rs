//! A two-player Crazy Eights rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the table (draw pile, both
//! hands, discard pile, active suit) and runs the turn state machine between
//! the human player and a computer opponent. A presentation layer calls the
//! player actions and renders the [`GameSnapshot`] each one returns.
//!
//! # Example
//!
//! ```
//! use crazy8s::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let snapshot = game.player_draw().unwrap();
//!
//! if snapshot.state == GameState::OpponentTurn {
//!     let turn = game.pending_opponent_turn().unwrap();
//!     // Wait `turn.delay`, then:
//!     let snapshot = game.play_opponent_turn(turn).unwrap();
//!     assert_eq!(snapshot.total_cards(), 52);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod opponent;
pub mod options;
pub mod rules;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, HAND_SIZE, Suit, WILD_RANK};
pub use error::{ActionError, OpponentError, PositionError, WildError};
#[cfg(feature = "std")]
pub use game::scheduler::{OpponentHandle, spawn_opponent_turn};
pub use game::{Game, GameEvent, GameState, OpponentTurn, Phase, Position, Side};
pub use hand::Hand;
pub use opponent::OpponentMove;
pub use options::GameOptions;
pub use snapshot::GameSnapshot;
