//! A headless engine for the Gambio card game.
//!
//! Gambio is a turn-based trick-avoidance game for 2–5 players: each round
//! everyone holds a small face-down hand, improves it by drawing and
//! swapping, and may end the round early by calling "Gambio", after which
//! every other player gets exactly one final turn. Lowest cumulative score
//! after all rounds wins.
//!
//! The crate contains no rendering and no I/O. A [`GameSession`] owns the
//! roster and sequences rounds; each [`RoundEngine`] is driven by discrete,
//! legality-checked action calls; and every accepted transition can be
//! observed through [`RoundSnapshot`] values that a UI or transport relay
//! consumes as-is.
//!
//! # Example
//!
//! ```
//! use gambio::{GameOptions, GameSession, Seat};
//!
//! let seats = vec![Seat::human("Ada"), Seat::automated("Bot")];
//! let mut session = GameSession::new(seats, GameOptions::default(), 42)?;
//!
//! let mut round = session.begin_round()?;
//! let drawn = round.draw_from_deck(0)?;
//! let displaced = round.swap_hand_card(0, 0)?;
//! assert_eq!(round.discard_top(), Some(displaced));
//! let _ = drawn;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod options;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use engine::{
    CardView, DrawSource, GambioCall, PendingEffect, Phase, RoundEngine, RoundSnapshot,
};
pub use error::{ActionError, SessionError, SetupError};
pub use options::GameOptions;
pub use player::{BLACK_QUEEN_PENALTY, Player};
pub use result::{SessionResult, Standing};
pub use session::{GameSession, MAX_PLAYERS, MIN_PLAYERS, Seat};
