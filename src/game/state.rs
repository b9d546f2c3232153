//! Game state types.

use core::fmt;

use crate::card::{Card, Suit};

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Cards are being dealt.
    Dealing,
    /// Sides are taking turns.
    Playing,
    /// A side has emptied its hand.
    GameOver,
}

/// Game state.
///
/// The pending wild card lives inside its own state, so resolving a suit is
/// only possible while the state is [`GameState::PendingWild`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Dealing a new game. The deal completes under the table lock, so
    /// this state is never observed through a [`Game`](super::Game).
    Dealing,
    /// Waiting for the player to draw or play.
    PlayerTurn,
    /// The player committed an eight and must name a suit. The card is
    /// still in the player's hand.
    PendingWild {
        /// The committed eight.
        card: Card,
    },
    /// Waiting for the opponent's move.
    OpponentTurn,
    /// The game has ended.
    GameOver {
        /// The side that emptied its hand.
        winner: Side,
    },
}

impl GameState {
    /// Returns the coarse phase.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::Dealing => Phase::Dealing,
            Self::PlayerTurn | Self::PendingWild { .. } | Self::OpponentTurn => Phase::Playing,
            Self::GameOver { .. } => Phase::GameOver,
        }
    }

    /// Returns whose turn it is, if the game is being played.
    #[must_use]
    pub const fn turn(self) -> Option<Side> {
        match self {
            Self::PlayerTurn | Self::PendingWild { .. } => Some(Side::Player),
            Self::OpponentTurn => Some(Side::Opponent),
            Self::Dealing | Self::GameOver { .. } => None,
        }
    }

    /// Returns the eight waiting for a suit, if any.
    #[must_use]
    pub const fn pending_wild(self) -> Option<Card> {
        match self {
            Self::PendingWild { card } => Some(card),
            _ => None,
        }
    }

    /// Returns the winner once the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub(super) const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Opponent => Self::OpponentTurn,
        }
    }
}

/// The last thing that happened at the table.
///
/// Its [`Display`](fmt::Display) output is the status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A new game was dealt.
    Dealt,
    /// A non-wild card was played.
    Played {
        /// Who played.
        side: Side,
        /// The card played.
        card: Card,
    },
    /// An eight was played and a suit was called.
    WildPlayed {
        /// Who played.
        side: Side,
        /// The eight.
        card: Card,
        /// The called suit.
        suit: Suit,
    },
    /// The player committed an eight and must name a suit.
    AwaitingSuit {
        /// The committed eight.
        card: Card,
    },
    /// The player took back a committed eight.
    WildCancelled,
    /// The player drew a card that can be played straight away.
    DrewPlayable {
        /// The drawn card.
        card: Card,
    },
    /// A side drew a card it could not play; the turn passed.
    DrewUnplayable {
        /// Who drew.
        side: Side,
    },
    /// A side tried to draw from an empty deck; the turn passed.
    DeckEmpty {
        /// Who tried to draw.
        side: Side,
    },
    /// A side emptied its hand.
    Won {
        /// The winner.
        side: Side,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Dealt => f.write_str("New game. Your turn."),
            Self::Played { side: Side::Player, card } => write!(f, "You played {card}."),
            Self::Played { side: Side::Opponent, card } => write!(f, "Opponent played {card}."),
            Self::WildPlayed { side: Side::Player, suit, .. } => {
                write!(f, "You played an 8 and chose {suit}.")
            }
            Self::WildPlayed { side: Side::Opponent, suit, .. } => {
                write!(f, "Opponent played an 8 and chose {suit}.")
            }
            Self::AwaitingSuit { card } => write!(f, "Choose a suit for {card}."),
            Self::WildCancelled => f.write_str("Wild card returned to your hand."),
            Self::DrewPlayable { card } => write!(f, "You drew {card}. You can play it."),
            Self::DrewUnplayable { side: Side::Player } => {
                f.write_str("You drew a card that can't be played. Opponent's turn.")
            }
            Self::DrewUnplayable { side: Side::Opponent } => f.write_str("Opponent drew a card."),
            Self::DeckEmpty { side: Side::Player } => {
                f.write_str("The deck is empty. Opponent's turn.")
            }
            Self::DeckEmpty { side: Side::Opponent } => {
                f.write_str("The deck is empty. Opponent passes.")
            }
            Self::Won { side: Side::Player } => f.write_str("You win!"),
            Self::Won { side: Side::Opponent } => f.write_str("Opponent wins!"),
        }
    }
}
