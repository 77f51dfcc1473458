//! Round phases and state snapshots.

use serde::Serialize;

use crate::card::Card;

/// Where a pending card was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawSource {
    /// The top of the face-down deck.
    Deck,
    /// The top of the face-up discard pile.
    Discard,
}

/// The special resolution unlocked by discarding an action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PendingEffect {
    /// Black Jack: a blind exchange with one opponent card. May be skipped.
    JackSwap,
    /// Black Queen: one own card must be turned face-up. Mandatory.
    QueenReveal,
}

/// The phase of a round.
///
/// Each variant carries exactly the data that is valid for it; in
/// particular, a drawn-but-uncommitted card exists only inside
/// [`Phase::AwaitingSwap`]. Dealing happens inside round construction and
/// is never observable as a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum Phase {
    /// The current player chooses to draw a card or to call Gambio.
    PlayerTurn {
        /// Index of the player to act.
        player: usize,
    },
    /// The current player holds a drawn card and must commit it.
    AwaitingSwap {
        /// Index of the player to act.
        player: usize,
        /// The drawn, not yet committed card.
        drawn: Card,
        /// Where the card was drawn from.
        source: DrawSource,
    },
    /// An action card was discarded and its effect awaits resolution.
    ResolvingAction {
        /// Index of the player to act.
        player: usize,
        /// Which effect is pending.
        effect: PendingEffect,
    },
    /// The round is finished and scored.
    RoundOver {
        /// Each player's score for this round, in seat order.
        scores: Vec<u32>,
    },
}

impl Phase {
    /// The player expected to act, if the round is still running.
    #[must_use]
    pub const fn acting_player(&self) -> Option<usize> {
        match self {
            Self::PlayerTurn { player }
            | Self::AwaitingSwap { player, .. }
            | Self::ResolvingAction { player, .. } => Some(*player),
            Self::RoundOver { .. } => None,
        }
    }
}

/// An active Gambio countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GambioCall {
    /// The player who declared Gambio.
    pub caller: usize,
    /// Turns left for the other players before the round is scored.
    pub turns_remaining: usize,
}

/// One hand slot as seen in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// The card occupying the slot.
    pub card: Card,
    /// Whether the card is face-up for everyone.
    pub face_up: bool,
    /// Whether the slot's owner has seen the card.
    pub known_to_owner: bool,
}

/// A full view of the round after an accepted transition.
///
/// Snapshots carry every card; hiding face-down cards from remote clients
/// is the relay's presentation concern, not the engine's. All legality
/// enforcement lives in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    /// The current phase.
    pub phase: Phase,
    /// The player expected to act, if the round is still running.
    pub current_player: Option<usize>,
    /// Every player's hand, in seat order.
    pub hands: Vec<Vec<CardView>>,
    /// The top of the discard pile.
    pub discard_top: Option<Card>,
    /// Cards remaining in the deck.
    pub deck_remaining: usize,
    /// The active Gambio countdown, if one was declared.
    pub gambio: Option<GambioCall>,
    /// Cumulative scores, in seat order.
    pub scores: Vec<u32>,
}
