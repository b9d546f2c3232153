//! Card types and identifiers.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }

    /// Unicode symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Rank of the wild card.
pub const WILD_RANK: u8 = 8;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 8;

/// Stable identifier of a card within the deck, in `0..52`.
///
/// The id is `suit_index * 13 + (rank - 1)`, so ids follow the canonical
/// build order of [`crate::deck::build`].
pub type CardId = u8;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::is_valid`]
    /// or [`Card::from_id`] when the input is untrusted.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Looks up the card with the given id.
    ///
    /// Returns `None` if the id is not in `0..52`.
    #[must_use]
    pub const fn from_id(id: CardId) -> Option<Self> {
        if id as usize >= DECK_SIZE {
            return None;
        }
        let suit = Suit::ALL[(id / RANKS_PER_SUIT) as usize];
        Some(Self::new(suit, id % RANKS_PER_SUIT + 1))
    }

    /// Returns the stable id of this card.
    #[must_use]
    pub const fn id(self) -> CardId {
        self.suit.index() as u8 * RANKS_PER_SUIT + self.rank.saturating_sub(1)
    }

    /// Returns whether the rank is in `1..=13`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.rank >= 1 && self.rank <= RANKS_PER_SUIT
    }

    /// Returns whether this card is an eight.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.rank == WILD_RANK
    }

    const fn rank_label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
