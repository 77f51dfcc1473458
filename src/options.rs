//! Session configuration options.

/// Configuration options for a Gambio session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gambio::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_max_rounds(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to every player at the start of a round.
    pub hand_size: usize,
    /// Rounds played before the session ends.
    pub max_rounds: u32,
    /// Flat penalty added to the Gambio caller's round score when another
    /// player finishes the round strictly below them. Zero disables it.
    pub gambio_penalty: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 4,
            max_rounds: 5,
            gambio_penalty: 20,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to every player.
    ///
    /// # Example
    ///
    /// ```
    /// use gambio::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(6);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of rounds in the session.
    ///
    /// # Example
    ///
    /// ```
    /// use gambio::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(3);
    /// assert_eq!(options.max_rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the penalty for a Gambio call that another player beats.
    ///
    /// # Example
    ///
    /// ```
    /// use gambio::GameOptions;
    ///
    /// let options = GameOptions::default().with_gambio_penalty(0);
    /// assert_eq!(options.gambio_penalty, 0);
    /// ```
    #[must_use]
    pub const fn with_gambio_penalty(mut self, penalty: u32) -> Self {
        self.gambio_penalty = penalty;
        self
    }
}
