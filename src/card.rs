//! Card types and the point-value rules.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    /// Spades (black).
    Spades,
    /// Clubs (black).
    Clubs,
    /// Hearts (red).
    Hearts,
    /// Diamonds (red).
    Diamonds,
}

impl Suit {
    /// All four suits, in catalog order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns whether the suit is black (spades or clubs).
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Spades | Self::Clubs)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, in catalog order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];
}

/// A playing card.
///
/// Cards are immutable values; everything about a card is derived from its
/// suit and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The card's point value at scoring time.
    ///
    /// Black Kings are worth 0, Aces 1, other face cards 10, and number
    /// cards their face value.
    #[must_use]
    pub const fn point_value(self) -> u32 {
        if self.suit.is_black() && matches!(self.rank, Rank::King) {
            return 0;
        }
        match self.rank {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Returns whether the card carries a special action when discarded.
    ///
    /// Only the black Jacks and black Queens do.
    #[must_use]
    pub const fn is_action_card(self) -> bool {
        self.suit.is_black() && matches!(self.rank, Rank::Jack | Rank::Queen)
    }

    /// Returns whether the card is a black Queen, the card that incurs the
    /// flat scoring penalty when held at round end.
    #[must_use]
    pub const fn is_black_queen(self) -> bool {
        self.suit.is_black() && matches!(self.rank, Rank::Queen)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
