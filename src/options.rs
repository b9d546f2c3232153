//! Game configuration options.

use core::time::Duration;

/// Default think-time before the opponent's move is applied.
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(800);

/// Configuration options for a game.
///
/// The rules themselves are fixed; options only cover pacing and dealing.
///
/// ```
/// use core::time::Duration;
/// use crazy8s::GameOptions;
///
/// let options = GameOptions::default()
///     .with_opponent_delay(Duration::from_millis(250))
///     .with_shuffle(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Think-time the opponent waits before its move is applied. Purely
    /// presentational; it has no effect on the outcome.
    pub opponent_delay: Duration,
    /// Whether the deck is shuffled before dealing. When `false` the deal
    /// follows the canonical build order.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opponent_delay: DEFAULT_OPPONENT_DELAY,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the opponent think-time.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponent_delay(Duration::ZERO);
    /// assert_eq!(options.opponent_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
