//! Round engine: dealing, turn flow, and scoring.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
pub mod state;

pub use state::{CardView, DrawSource, GambioCall, PendingEffect, Phase, RoundSnapshot};

/// Per-slot knowledge flags, kept parallel to a player's hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SlotInfo {
    /// Face-up for everyone.
    revealed: bool,
    /// Seen by the owner.
    known: bool,
}

/// The state machine for a single round.
///
/// The engine borrows the session's roster: it mutates hands and scores but
/// never creates or destroys players. Exactly one engine is active per
/// session at a time and every action runs to completion before the next is
/// accepted, so no internal locking is needed; for networked play, pin each
/// room's engine to one serialized execution context. Dropping the engine
/// mid-round abandons the round, discarding any pending card without
/// touching cumulative scores.
#[derive(Debug)]
pub struct RoundEngine<'a> {
    players: &'a mut [Player],
    options: GameOptions,
    rng: ChaCha8Rng,
    deck: Deck,
    discard: Vec<Card>,
    phase: Phase,
    gambio: Option<GambioCall>,
    slots: Vec<Vec<SlotInfo>>,
}

impl<'a> RoundEngine<'a> {
    /// Deals a fresh round: builds and shuffles the deck, flips the starter
    /// discard, deals every hand, and lets each player peek at the bottom
    /// two cards of their own hand.
    pub(crate) fn deal(
        players: &'a mut [Player],
        options: GameOptions,
        opening_player: usize,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let deck = Deck::standard(&mut rng);
        Self::deal_from(players, options, opening_player, rng, deck)
    }

    /// Deals from a prearranged deck. Replay/test seam.
    pub(crate) fn deal_from(
        players: &'a mut [Player],
        options: GameOptions,
        opening_player: usize,
        rng: ChaCha8Rng,
        mut deck: Deck,
    ) -> Self {
        let starter = deck.draw();
        for player in players.iter_mut() {
            player.clear_hand();
            player.draw(&mut deck, options.hand_size);
        }
        let slots = players
            .iter()
            .map(|player| {
                let mut infos = vec![SlotInfo::default(); player.hand().len()];
                // initial peek: every player looks at their bottom two cards
                let first_peeked = infos.len().saturating_sub(2);
                for info in infos.iter_mut().skip(first_peeked) {
                    info.known = true;
                }
                infos
            })
            .collect();
        Self {
            players,
            options,
            rng,
            deck,
            discard: starter.into_iter().collect(),
            phase: Phase::PlayerTurn {
                player: opening_player,
            },
            gambio: None,
            slots,
        }
    }
}

impl RoundEngine<'_> {
    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The player expected to act, if the round is still running.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.phase.acting_player()
    }

    /// The active Gambio countdown, if one was declared.
    #[must_use]
    pub const fn gambio(&self) -> Option<GambioCall> {
        self.gambio
    }

    /// The players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.players
    }

    /// The undrawn deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The discard pile, bottom to top.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The top of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Returns whether the round has been scored.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::RoundOver { .. })
    }

    /// The finished round's per-player scores, in seat order.
    #[must_use]
    pub fn round_scores(&self) -> Option<&[u32]> {
        match &self.phase {
            Phase::RoundOver { scores } => Some(scores),
            _ => None,
        }
    }

    /// Builds a snapshot of the round for rendering or rebroadcast.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase.clone(),
            current_player: self.current_player(),
            hands: self
                .players
                .iter()
                .zip(&self.slots)
                .map(|(player, infos)| {
                    player
                        .hand()
                        .iter()
                        .zip(infos)
                        .map(|(card, info)| CardView {
                            card: *card,
                            face_up: info.revealed,
                            known_to_owner: info.known,
                        })
                        .collect()
                })
                .collect(),
            discard_top: self.discard_top(),
            deck_remaining: self.deck.len(),
            gambio: self.gambio,
            scores: self.players.iter().map(Player::score).collect(),
        }
    }

    /// Draws from the deck, refilling it from the discard pile (minus its
    /// top card) if it is empty.
    fn draw_or_reshuffle(&mut self) -> Result<Card, ActionError> {
        if let Some(card) = self.deck.draw() {
            return Ok(card);
        }
        if self.discard.len() <= 1 {
            return Err(ActionError::DeckExhausted);
        }
        let returned: Vec<Card> = self.discard.drain(..self.discard.len() - 1).collect();
        self.deck.refill(returned, &mut self.rng);
        self.deck.draw().ok_or(ActionError::DeckExhausted)
    }

    /// Ends the acting player's committed turn: ticks the Gambio countdown
    /// or passes play to the next player.
    fn complete_turn(&mut self, player: usize) {
        if let Some(gambio) = &mut self.gambio {
            gambio.turns_remaining -= 1;
            if gambio.turns_remaining == 0 {
                self.finish_round();
                return;
            }
        }
        self.phase = Phase::PlayerTurn {
            player: (player + 1) % self.players.len(),
        };
    }

    /// Reveals every hand, applies round scores (plus the Gambio penalty
    /// when the caller was beaten), and terminates the round.
    fn finish_round(&mut self) {
        for infos in &mut self.slots {
            for info in infos {
                info.revealed = true;
                info.known = true;
            }
        }
        let mut scores: Vec<u32> = self.players.iter().map(Player::round_score).collect();
        if let Some(gambio) = self.gambio {
            let caller_score = scores[gambio.caller];
            let beaten = scores
                .iter()
                .enumerate()
                .any(|(seat, &score)| seat != gambio.caller && score < caller_score);
            if beaten {
                scores[gambio.caller] += self.options.gambio_penalty;
            }
        }
        for (player, &points) in self.players.iter_mut().zip(&scores) {
            player.apply_round_score(points);
        }
        self.phase = Phase::RoundOver { scores };
    }
}
