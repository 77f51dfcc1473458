//! Session sequencing: the roster, round rotation, and the overall winner.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::engine::RoundEngine;
use crate::error::{SessionError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::SessionResult;

/// Minimum roster size.
pub const MIN_PLAYERS: usize = 2;
/// Maximum roster size.
pub const MAX_PLAYERS: usize = 5;

/// A seat in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Display name.
    pub name: String,
    /// Whether the seat is driven by automation.
    pub automated: bool,
}

impl Seat {
    /// Creates a seat for a human player.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: false,
        }
    }

    /// Creates a seat for an automated player.
    #[must_use]
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: true,
        }
    }
}

/// A full game of Gambio: a fixed roster playing `max_rounds` rounds.
///
/// The session owns the players and the master RNG. Players are created
/// once at construction and never recreated; each round borrows the roster
/// through a [`RoundEngine`] and folds its scores back into the cumulative
/// totals. Nothing outside the current session's scores is persisted.
#[derive(Debug)]
pub struct GameSession {
    players: Vec<Player>,
    options: GameOptions,
    rng: ChaCha8Rng,
    rounds_started: u32,
}

impl GameSession {
    /// Creates a session with the given seats, options, and RNG seed.
    ///
    /// The seed drives every shuffle of the session, so a session is fully
    /// reproducible from its seats, options, and seed.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the roster size is outside
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`], an option is degenerate, or the
    /// deck cannot cover the deal plus the starter discard.
    ///
    /// # Example
    ///
    /// ```
    /// use gambio::{GameOptions, GameSession, Seat};
    ///
    /// let seats = vec![Seat::human("Ada"), Seat::automated("Bot")];
    /// let session = GameSession::new(seats, GameOptions::default(), 42)?;
    /// assert_eq!(session.players().len(), 2);
    /// # Ok::<(), gambio::SetupError>(())
    /// ```
    pub fn new(seats: Vec<Seat>, options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        if seats.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers);
        }
        if seats.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers);
        }
        if options.hand_size == 0 {
            return Err(SetupError::ZeroHandSize);
        }
        if options.max_rounds == 0 {
            return Err(SetupError::ZeroRounds);
        }
        if seats.len() * options.hand_size + 1 > DECK_SIZE {
            return Err(SetupError::NotEnoughCards);
        }
        let players = seats
            .into_iter()
            .map(|seat| Player::new(seat.name, seat.automated))
            .collect();
        Ok(Self {
            players,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds_started: 0,
        })
    }

    /// The players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Rounds started so far.
    #[must_use]
    pub const fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Returns whether every round has been played.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.rounds_started >= self.options.max_rounds
    }

    /// Deals the next round and returns its engine.
    ///
    /// The opening player rotates from round to round. The engine borrows
    /// the roster exclusively until it is dropped; drive it to round over
    /// to score the round, or drop it early to abandon the round without
    /// touching cumulative scores.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionOver`] once all rounds have started.
    pub fn begin_round(&mut self) -> Result<RoundEngine<'_>, SessionError> {
        if self.is_over() {
            return Err(SessionError::SessionOver);
        }
        let opening_player = (self.rounds_started as usize) % self.players.len();
        self.rounds_started += 1;
        let round_rng = ChaCha8Rng::seed_from_u64(self.rng.next_u64());
        Ok(RoundEngine::deal(
            &mut self.players,
            self.options,
            opening_player,
            round_rng,
        ))
    }

    /// Final standings and the winner set.
    ///
    /// Winners are every player tied on the minimum cumulative score.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFinished`] while rounds remain.
    pub fn result(&self) -> Result<SessionResult, SessionError> {
        if !self.is_over() {
            return Err(SessionError::NotFinished);
        }
        Ok(SessionResult::from_players(&self.players))
    }
}
