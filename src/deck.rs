//! Deck building, shuffling, and drawing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pile of undrawn cards.
///
/// A deck is built once per round as the full 52-card set and permuted with
/// the injected RNG; nothing else ever adds cards except a discard-pile
/// refill.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck, shuffled with the given RNG.
    #[must_use]
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from a prearranged card order.
    ///
    /// The last card is the next to be drawn. Intended for deterministic
    /// replays and tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws up to `count` cards, stopping early if the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count.min(self.cards.len()));
        for _ in 0..count {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Returns cards to the deck and reshuffles it.
    pub fn refill<R: Rng + ?Sized>(&mut self, cards: Vec<Card>, rng: &mut R) {
        self.cards.extend(cards);
        self.cards.shuffle(rng);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the undrawn cards, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn standard_deck_is_a_permutation_of_all_52_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = Deck::standard(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn draw_many_stops_early_on_a_short_deck() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Spades, Rank::Ace),
        ]);
        let drawn = deck.draw_many(5);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0], Card::new(Suit::Spades, Rank::Ace));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn refill_returns_cards_to_the_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Clubs, Rank::Nine)]);
        deck.refill(
            vec![
                Card::new(Suit::Hearts, Rank::Four),
                Card::new(Suit::Diamonds, Rank::King),
            ],
            &mut rng,
        );
        assert_eq!(deck.len(), 3);
    }
}
