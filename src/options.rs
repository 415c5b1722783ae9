//! Round configuration options.

use alloc::string::String;

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_dealer_stays_above(16)
///     .with_stay_keyword("s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of human players (the dealer is added on top).
    pub players: u8,
    /// The dealer stays once its sum is strictly greater than this.
    pub dealer_stays_above: u16,
    /// Answer that makes a human player stay. Anything else is a heat.
    pub stay_keyword: String,
    /// Whether the shoe is shuffled before dealing.
    /// Disable only to play a pre-arranged shoe.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 1,
            dealer_stays_above: 17,
            stay_keyword: String::from("stay"),
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of human players.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the sum above which the dealer stays.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stays_above(16);
    /// assert_eq!(options.dealer_stays_above, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stays_above(mut self, threshold: u16) -> Self {
        self.dealer_stays_above = threshold;
        self
    }

    /// Sets the answer that makes a human player stay.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_stay_keyword("s");
    /// assert_eq!(options.stay_keyword, "s");
    /// ```
    #[must_use]
    pub fn with_stay_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.stay_keyword = keyword.into();
        self
    }

    /// Sets whether the shoe is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
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
