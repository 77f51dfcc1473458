use crate::card::{Card, Rank};
use crate::error::ActionError;

use super::state::{DrawSource, GambioCall, PendingEffect, Phase};
use super::{RoundEngine, SlotInfo};

impl RoundEngine<'_> {
    fn ensure_turn(&self, player: usize) -> Result<(), ActionError> {
        match &self.phase {
            Phase::PlayerTurn { player: current } => {
                if *current == player {
                    Ok(())
                } else {
                    Err(ActionError::NotYourTurn)
                }
            }
            _ => Err(ActionError::WrongPhase),
        }
    }

    fn ensure_awaiting(&self, player: usize) -> Result<(Card, DrawSource), ActionError> {
        match &self.phase {
            Phase::AwaitingSwap {
                player: current,
                drawn,
                source,
            } => {
                if *current == player {
                    Ok((*drawn, *source))
                } else {
                    Err(ActionError::NotYourTurn)
                }
            }
            _ => Err(ActionError::WrongPhase),
        }
    }

    fn ensure_resolving(&self, player: usize) -> Result<PendingEffect, ActionError> {
        match &self.phase {
            Phase::ResolvingAction {
                player: current,
                effect,
            } => {
                if *current == player {
                    Ok(*effect)
                } else {
                    Err(ActionError::NotYourTurn)
                }
            }
            _ => Err(ActionError::WrongPhase),
        }
    }

    /// Player action: draw the top card of the deck.
    ///
    /// The card becomes the pending card; the player must then commit it
    /// with [`swap_hand_card`](Self::swap_hand_card) or
    /// [`discard_matching_rank`](Self::discard_matching_rank). An empty
    /// deck is refilled from the discard pile (minus its top card) before
    /// the draw is allowed to fail.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn, the phase does not
    /// permit a draw, or both the deck and the refillable part of the
    /// discard pile are empty.
    pub fn draw_from_deck(&mut self, player: usize) -> Result<Card, ActionError> {
        self.ensure_turn(player)?;
        let card = self.draw_or_reshuffle()?;
        self.phase = Phase::AwaitingSwap {
            player,
            drawn: card,
            source: DrawSource::Deck,
        };
        Ok(card)
    }

    /// Player action: take the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn, the phase does not
    /// permit a draw, or the discard pile is empty.
    pub fn draw_from_discard(&mut self, player: usize) -> Result<Card, ActionError> {
        self.ensure_turn(player)?;
        let card = self.discard.pop().ok_or(ActionError::EmptyDiscard)?;
        self.phase = Phase::AwaitingSwap {
            player,
            drawn: card,
            source: DrawSource::Discard,
        };
        Ok(card)
    }

    /// Player action: commit the pending card into the hand slot at `index`.
    ///
    /// The displaced card goes to the discard pile and is returned. When the
    /// displaced card is an action card its resolution opens before the turn
    /// advances. A card taken from the discard pile stays public knowledge
    /// in its new slot; a deck draw is known only to its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn, no card is pending,
    /// or `index` is outside the hand. On error nothing moves.
    pub fn swap_hand_card(&mut self, player: usize, index: usize) -> Result<Card, ActionError> {
        let (drawn, source) = self.ensure_awaiting(player)?;
        let displaced = self.players[player].swap_card(index, drawn)?;
        self.slots[player][index] = SlotInfo {
            revealed: source == DrawSource::Discard,
            known: true,
        };
        self.discard.push(displaced);
        if displaced.is_action_card() {
            let effect = if displaced.rank == Rank::Jack {
                PendingEffect::JackSwap
            } else {
                PendingEffect::QueenReveal
            };
            self.phase = Phase::ResolvingAction { player, effect };
        } else {
            self.complete_turn(player);
        }
        Ok(displaced)
    }

    /// Player action: discard every hand card matching the pending card's
    /// rank, instead of swapping.
    ///
    /// The pending card and the matched cards all go to the discard pile
    /// and the hand shrinks. Returns the matched cards.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn, no card is pending,
    /// or no hand card matches the pending rank. On error nothing moves.
    pub fn discard_matching_rank(&mut self, player: usize) -> Result<Vec<Card>, ActionError> {
        let (drawn, _) = self.ensure_awaiting(player)?;
        if !self.players[player]
            .hand()
            .iter()
            .any(|card| card.rank == drawn.rank)
        {
            return Err(ActionError::NoMatchingRank);
        }
        // keep the slot flags aligned with the shrinking hand
        let keep: Vec<bool> = self.players[player]
            .hand()
            .iter()
            .map(|card| card.rank != drawn.rank)
            .collect();
        let mut keep_flags = keep.iter();
        self.slots[player].retain(|_| *keep_flags.next().unwrap_or(&false));

        let matched = self.players[player].discard_rank(drawn.rank);
        self.discard.push(drawn);
        self.discard.extend(matched.iter().copied());
        self.complete_turn(player);
        Ok(matched)
    }

    /// Player action: declare Gambio, ending the turn without a draw.
    ///
    /// Every other player gets exactly one more turn before the round is
    /// scored. Legal once per round, only during one's own turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn, the phase does not
    /// permit it, or Gambio has already been called this round.
    pub fn call_gambio(&mut self, player: usize) -> Result<(), ActionError> {
        self.ensure_turn(player)?;
        if self.gambio.is_some() {
            return Err(ActionError::GambioAlreadyCalled);
        }
        self.gambio = Some(GambioCall {
            caller: player,
            turns_remaining: self.players.len() - 1,
        });
        // the caller's own turn ends without ticking the countdown
        self.phase = Phase::PlayerTurn {
            player: (player + 1) % self.players.len(),
        };
        Ok(())
    }

    /// Action-card resolution: blindly exchange one own card with one of an
    /// opponent's.
    ///
    /// Available after discarding a black Jack. Neither side sees the
    /// exchanged cards, so both slots become unknown to their new owners.
    ///
    /// # Errors
    ///
    /// Returns an error if no Jack resolution is pending for this player,
    /// the target is not another player, or an index is out of bounds.
    pub fn swap_with_opponent(
        &mut self,
        player: usize,
        own_index: usize,
        target: usize,
        target_index: usize,
    ) -> Result<(), ActionError> {
        match self.ensure_resolving(player)? {
            PendingEffect::JackSwap => {}
            PendingEffect::QueenReveal => return Err(ActionError::WrongPhase),
        }
        if target == player || target >= self.players.len() {
            return Err(ActionError::InvalidTarget);
        }
        if own_index >= self.players[player].hand().len()
            || target_index >= self.players[target].hand().len()
        {
            return Err(ActionError::InvalidIndex);
        }
        let target_card = self.players[target].hand()[target_index];
        let own_card = self.players[player].swap_card(own_index, target_card)?;
        self.players[target].swap_card(target_index, own_card)?;
        self.slots[player][own_index] = SlotInfo::default();
        self.slots[target][target_index] = SlotInfo::default();
        self.complete_turn(player);
        Ok(())
    }

    /// Action-card resolution: turn one own card face-up for everyone.
    ///
    /// Required after discarding a black Queen. Returns the revealed card.
    ///
    /// # Errors
    ///
    /// Returns an error if no Queen resolution is pending for this player
    /// or `index` is outside the hand.
    pub fn reveal_own_card(&mut self, player: usize, index: usize) -> Result<Card, ActionError> {
        match self.ensure_resolving(player)? {
            PendingEffect::QueenReveal => {}
            PendingEffect::JackSwap => return Err(ActionError::WrongPhase),
        }
        let info = self.slots[player]
            .get_mut(index)
            .ok_or(ActionError::InvalidIndex)?;
        info.revealed = true;
        info.known = true;
        let card = self.players[player].hand()[index];
        self.complete_turn(player);
        Ok(card)
    }

    /// Action-card resolution: decline the pending effect.
    ///
    /// Only the black Jack's exchange may be skipped; the black Queen's
    /// reveal is mandatory.
    ///
    /// # Errors
    ///
    /// Returns an error if no skippable resolution is pending for this
    /// player.
    pub fn skip_action(&mut self, player: usize) -> Result<(), ActionError> {
        match self.ensure_resolving(player)? {
            PendingEffect::JackSwap => {
                self.complete_turn(player);
                Ok(())
            }
            PendingEffect::QueenReveal => Err(ActionError::WrongPhase),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::card::Suit;
    use crate::deck::Deck;
    use crate::options::GameOptions;
    use crate::player::Player;

    use super::*;

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    /// Builds a deck that yields `draws` in order (first element drawn
    /// first).
    fn deck_from_draws(draws: &[Card]) -> Deck {
        let mut cards = draws.to_vec();
        cards.reverse();
        Deck::from_cards(cards)
    }

    fn two_players() -> Vec<Player> {
        vec![Player::new("P1", false), Player::new("P2", false)]
    }

    /// Draw order: starter discard, then four cards for each player.
    /// All inert cards unless a test overrides a slot.
    fn plain_nine_cards() -> Vec<Card> {
        vec![
            card(Suit::Hearts, Rank::Five), // starter discard
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Diamonds, Rank::Six),
        ]
    }

    fn engine<'a>(players: &'a mut [Player], draws: &[Card]) -> RoundEngine<'a> {
        RoundEngine::deal_from(
            players,
            GameOptions::default(),
            0,
            ChaCha8Rng::seed_from_u64(0),
            deck_from_draws(draws),
        )
    }

    #[test]
    fn displacing_a_black_jack_opens_a_skippable_exchange() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws[1] = card(Suit::Spades, Rank::Jack); // p1 hand slot 0
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        let displaced = round.swap_hand_card(0, 0).unwrap();
        assert_eq!(displaced, card(Suit::Spades, Rank::Jack));
        assert_eq!(
            *round.phase(),
            Phase::ResolvingAction {
                player: 0,
                effect: PendingEffect::JackSwap,
            }
        );

        round.skip_action(0).unwrap();
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 1 });
    }

    #[test]
    fn jack_exchange_moves_cards_and_clears_knowledge() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws[1] = card(Suit::Clubs, Rank::Jack); // p1 hand slot 0
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        round.swap_hand_card(0, 0).unwrap();

        let own_before = round.players()[0].hand()[3];
        let theirs_before = round.players()[1].hand()[1];
        round.swap_with_opponent(0, 3, 1, 1).unwrap();
        assert_eq!(round.players()[0].hand()[3], theirs_before);
        assert_eq!(round.players()[1].hand()[1], own_before);

        // both moved cards are unknown to their new owners
        let snapshot = round.snapshot();
        assert!(!snapshot.hands[0][3].known_to_owner);
        assert!(!snapshot.hands[1][1].known_to_owner);
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 1 });
    }

    #[test]
    fn queen_reveal_is_mandatory() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws[1] = card(Suit::Spades, Rank::Queen); // p1 hand slot 0
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        round.swap_hand_card(0, 0).unwrap();
        assert_eq!(
            *round.phase(),
            Phase::ResolvingAction {
                player: 0,
                effect: PendingEffect::QueenReveal,
            }
        );
        assert_eq!(round.skip_action(0).unwrap_err(), ActionError::WrongPhase);

        let revealed = round.reveal_own_card(0, 1).unwrap();
        assert_eq!(revealed, round.players()[0].hand()[1]);
        let snapshot = round.snapshot();
        assert!(snapshot.hands[0][1].face_up);
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 1 });
    }

    #[test]
    fn red_court_cards_trigger_no_action() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws[1] = card(Suit::Hearts, Rank::Queen); // p1 hand slot 0
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        round.swap_hand_card(0, 0).unwrap();
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 1 });
    }

    #[test]
    fn matching_rank_discard_shrinks_the_hand() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws[1] = card(Suit::Spades, Rank::Nine); // p1 hand slot 0
        draws[3] = card(Suit::Clubs, Rank::Nine); // p1 hand slot 2
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        let matched = round.discard_matching_rank(0).unwrap();
        assert_eq!(
            matched,
            [card(Suit::Spades, Rank::Nine), card(Suit::Clubs, Rank::Nine)]
        );
        assert_eq!(round.players()[0].hand().len(), 2);
        // drawn card plus both matches landed on the pile
        assert_eq!(round.discard_top(), Some(card(Suit::Clubs, Rank::Nine)));
        assert_eq!(round.discard_pile().len(), 4);
        assert_eq!(round.snapshot().hands[0].len(), 2);
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 1 });
    }

    #[test]
    fn matching_rank_discard_without_a_match_is_a_no_op() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        let before = round.players()[0].hand().to_vec();
        assert_eq!(
            round.discard_matching_rank(0).unwrap_err(),
            ActionError::NoMatchingRank
        );
        assert_eq!(round.players()[0].hand(), before);
        assert!(matches!(*round.phase(), Phase::AwaitingSwap { .. }));
    }

    #[test]
    fn discard_draw_stays_public_in_its_new_slot() {
        let mut players = two_players();
        let draws = plain_nine_cards();
        let starter = draws[0];
        let mut round = engine(&mut players, &draws);

        let taken = round.draw_from_discard(0).unwrap();
        assert_eq!(taken, starter);
        round.swap_hand_card(0, 1).unwrap();

        let snapshot = round.snapshot();
        assert!(snapshot.hands[0][1].face_up);
        assert!(snapshot.hands[0][1].known_to_owner);
        assert_eq!(snapshot.hands[0][1].card, starter);
    }

    #[test]
    fn deck_draw_swap_marks_only_the_swapped_slot() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws.push(card(Suit::Hearts, Rank::Nine)); // p1's draw
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        round.swap_hand_card(0, 1).unwrap();

        // known to its owner but not turned face-up; the rest keep their
        // deal-time flags
        let snapshot = round.snapshot();
        assert!(snapshot.hands[0][1].known_to_owner);
        assert!(!snapshot.hands[0][0].known_to_owner);
        assert!(snapshot.hands[0][2].known_to_owner);
        assert!(snapshot.hands[0][3].known_to_owner);
        assert!(snapshot.hands[0].iter().all(|view| !view.face_up));
    }

    #[test]
    fn empty_deck_refills_from_the_discard_pile() {
        let mut players = two_players();
        // exactly starter + eight hand cards + one spare for p1's first draw
        let mut draws = plain_nine_cards();
        draws.push(card(Suit::Hearts, Rank::Nine));
        let mut round = engine(&mut players, &draws);

        round.draw_from_deck(0).unwrap();
        round.swap_hand_card(0, 0).unwrap();
        assert!(round.deck().is_empty());
        assert_eq!(round.discard_pile().len(), 2);

        // the starter goes back into the deck; the top card stays
        let top = round.discard_top().unwrap();
        let drawn = round.draw_from_deck(1).unwrap();
        assert_eq!(drawn, card(Suit::Hearts, Rank::Five));
        assert_eq!(round.discard_pile(), [top]);
    }

    #[test]
    fn exhausted_deck_with_a_bare_discard_pile_fails() {
        let mut players = two_players();
        let mut round = engine(&mut players, &plain_nine_cards());

        assert_eq!(
            round.draw_from_deck(0).unwrap_err(),
            ActionError::DeckExhausted
        );
        // rejected action leaves the turn open
        assert_eq!(*round.phase(), Phase::PlayerTurn { player: 0 });
        assert_eq!(round.discard_pile().len(), 1);
    }

    #[test]
    fn beaten_gambio_caller_pays_the_penalty() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        // p1: 10 + 10 + 10 + 10 = 40; p2: 2 + 3 + 4 + 6 = 15
        draws[1] = card(Suit::Hearts, Rank::King);
        draws[2] = card(Suit::Hearts, Rank::Jack);
        draws[3] = card(Suit::Diamonds, Rank::King);
        draws[4] = card(Suit::Diamonds, Rank::Jack);
        draws.push(card(Suit::Diamonds, Rank::Five)); // p2's draw
        let mut round = engine(&mut players, &draws);

        round.call_gambio(0).unwrap();
        round.draw_from_deck(1).unwrap();
        round.swap_hand_card(1, 3).unwrap(); // six out, five in

        assert!(round.is_over());
        // caller scored 40, beaten by 14, so +20 penalty
        assert_eq!(round.round_scores(), Some([60, 14].as_slice()));
        assert_eq!(round.players()[0].score(), 60);
        assert_eq!(round.players()[1].score(), 14);
    }

    #[test]
    fn zeroed_gambio_penalty_charges_a_beaten_caller_nothing() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        // p1: 10 + 10 + 10 + 10 = 40; p2: 2 + 3 + 4 + 6 = 15
        draws[1] = card(Suit::Hearts, Rank::King);
        draws[2] = card(Suit::Hearts, Rank::Jack);
        draws[3] = card(Suit::Diamonds, Rank::King);
        draws[4] = card(Suit::Diamonds, Rank::Jack);
        draws.push(card(Suit::Diamonds, Rank::Five)); // p2's draw
        let mut round = RoundEngine::deal_from(
            &mut players,
            GameOptions::default().with_gambio_penalty(0),
            0,
            ChaCha8Rng::seed_from_u64(0),
            deck_from_draws(&draws),
        );

        round.call_gambio(0).unwrap();
        round.draw_from_deck(1).unwrap();
        round.swap_hand_card(1, 3).unwrap(); // six out, five in

        assert!(round.is_over());
        // beaten by 14, but the penalty is disabled
        assert_eq!(round.round_scores(), Some([40, 14].as_slice()));
        assert_eq!(round.players()[0].score(), 40);
    }

    #[test]
    fn unbeaten_gambio_caller_pays_nothing() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        // p1: 2 + 3 + 4 + 6 = 15; p2 ends well above
        draws[5] = card(Suit::Hearts, Rank::King);
        draws[6] = card(Suit::Hearts, Rank::Queen);
        draws[7] = card(Suit::Diamonds, Rank::King);
        draws[8] = card(Suit::Diamonds, Rank::Queen);
        draws.push(card(Suit::Diamonds, Rank::Ten)); // p2's draw
        let mut round = engine(&mut players, &draws);

        round.call_gambio(0).unwrap();
        round.draw_from_deck(1).unwrap();
        round.swap_hand_card(1, 0).unwrap();

        assert!(round.is_over());
        assert_eq!(round.round_scores(), Some([15, 40].as_slice()));
    }

    #[test]
    fn round_over_reveals_every_card() {
        let mut players = two_players();
        let mut draws = plain_nine_cards();
        draws.push(card(Suit::Diamonds, Rank::Five));
        let mut round = engine(&mut players, &draws);

        round.call_gambio(0).unwrap();
        round.draw_from_deck(1).unwrap();
        round.swap_hand_card(1, 0).unwrap();

        let snapshot = round.snapshot();
        for hand in &snapshot.hands {
            for view in hand {
                assert!(view.face_up);
            }
        }
        assert_eq!(snapshot.current_player, None);
    }
}
