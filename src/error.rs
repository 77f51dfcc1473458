//! Error types for engine and session operations.

use thiserror::Error;

/// Errors that can occur when constructing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players.
    #[error("at least two players are required")]
    TooFewPlayers,
    /// More than five players.
    #[error("at most five players are supported")]
    TooManyPlayers,
    /// Hand size of zero.
    #[error("hand size must be at least one")]
    ZeroHandSize,
    /// Round count of zero.
    #[error("at least one round must be played")]
    ZeroRounds,
    /// The deck cannot cover the requested hands plus the starter discard.
    #[error("not enough cards for the requested hand size and player count")]
    NotEnoughCards,
}

/// Errors that can occur when a player action is rejected.
///
/// A rejected action is a full no-op: engine state, hands, and piles are
/// left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The current phase does not permit this action.
    #[error("action not permitted in the current phase")]
    WrongPhase,
    /// The action came from a player other than the current one.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Gambio has already been called this round.
    #[error("gambio has already been called this round")]
    GambioAlreadyCalled,
    /// A hand index outside the hand's bounds.
    #[error("hand index out of bounds")]
    InvalidIndex,
    /// An opponent exchange aimed at an invalid player.
    #[error("invalid target player")]
    InvalidTarget,
    /// No hand card matches the drawn card's rank.
    #[error("no hand card matches the drawn rank")]
    NoMatchingRank,
    /// The discard pile has no card to take.
    #[error("the discard pile is empty")]
    EmptyDiscard,
    /// The deck is empty and the discard pile has nothing to reshuffle.
    #[error("the deck is exhausted")]
    DeckExhausted,
}

/// Errors that can occur at the session level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// All rounds have been played; no further round may begin.
    #[error("the session has played all of its rounds")]
    SessionOver,
    /// The result was requested while rounds remain to be played.
    #[error("the session still has rounds to play")]
    NotFinished,
}
