//! Players: hand mutation primitives and round scoring.

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::ActionError;

/// Flat penalty for holding a black Queen at scoring time.
pub const BLACK_QUEEN_PENALTY: u32 = 50;

/// A participant in the session.
///
/// The session owns its players for the whole game; a round engine borrows
/// them and mutates only their hands and scores, never their identity.
/// Hand order is significant: cards are addressed by slot index for swaps
/// and display.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    automated: bool,
    hand: Vec<Card>,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a zero score.
    #[must_use]
    pub fn new(name: impl Into<String>, automated: bool) -> Self {
        Self {
            name: name.into(),
            automated,
            hand: Vec::new(),
            score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the seat is driven by automation rather than a human.
    #[must_use]
    pub const fn is_automated(&self) -> bool {
        self.automated
    }

    /// The player's hand, in slot order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cumulative score across rounds. Lowest wins.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Draws up to `count` cards from the deck into the hand.
    ///
    /// Never fails; a short deck simply yields fewer cards.
    pub fn draw(&mut self, deck: &mut Deck, count: usize) {
        for card in deck.draw_many(count) {
            self.add_card(card);
        }
    }

    /// Replaces the card at `index` and returns the displaced card.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidIndex`] if `index` is outside the hand;
    /// the hand is left untouched.
    pub fn swap_card(&mut self, index: usize, new_card: Card) -> Result<Card, ActionError> {
        let slot = self.hand.get_mut(index).ok_or(ActionError::InvalidIndex)?;
        Ok(std::mem::replace(slot, new_card))
    }

    /// Removes and returns every card of the given rank, preserving the
    /// relative order of the rest.
    pub fn discard_rank(&mut self, rank: Rank) -> Vec<Card> {
        let mut removed = Vec::new();
        self.hand.retain(|card| {
            if card.rank == rank {
                removed.push(*card);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Scores the current hand: the sum of point values, plus the flat
    /// penalty if the hand holds a black Queen.
    ///
    /// This is a pure read; the hand is not touched.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        let total: u32 = self.hand.iter().map(|card| card.point_value()).sum();
        if self.hand.iter().any(|card| card.is_black_queen()) {
            total + BLACK_QUEEN_PENALTY
        } else {
            total
        }
    }

    /// Adds a finished round's score to the cumulative total.
    pub(crate) const fn apply_round_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Empties the hand at the start of a new round.
    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }
}
