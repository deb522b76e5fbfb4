//! Table configuration options.

/// Signed amount of money. Bankrolls may go negative.
pub type Money = i64;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a Pontoon table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::PontoonOptions;
///
/// let options = PontoonOptions::default()
///     .with_stake(20)
///     .with_twenty_one_pays(1.5)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PontoonOptions {
    /// Bankroll each player starts the game with.
    pub starting_bankroll: Money,
    /// Flat stake played every round.
    pub stake: Money,
    /// Amount forfeited on surrender.
    pub surrender_penalty: Money,
    /// Payout ratio for a win with a total of 21.
    pub twenty_one_pays: f64,
    /// Payout ratio for any other win.
    pub win_pays: f64,
    /// The dealer hits while below this total.
    pub dealer_stands_on: u8,
    /// Maximum number of seats at the table.
    pub max_players: u8,
    /// Whether surrender is offered at the start of a turn.
    pub surrender: bool,
    /// Whether double down is offered before the first hit.
    pub double_down: bool,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
}

impl Default for PontoonOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 100,
            stake: 10,
            surrender_penalty: 5,
            twenty_one_pays: 1.5,
            win_pays: 2.0,
            dealer_stands_on: 17,
            max_players: 7,
            surrender: true,
            double_down: true,
            rounding: RoundingMode::Down,
        }
    }
}

impl PontoonOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: Money) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the flat stake.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_stake(25);
    /// assert_eq!(options.stake, 25);
    /// ```
    #[must_use]
    pub const fn with_stake(mut self, stake: Money) -> Self {
        self.stake = stake;
        self
    }

    /// Sets the surrender penalty.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_surrender_penalty(3);
    /// assert_eq!(options.surrender_penalty, 3);
    /// ```
    #[must_use]
    pub const fn with_surrender_penalty(mut self, penalty: Money) -> Self {
        self.surrender_penalty = penalty;
        self
    }

    /// Sets the payout ratio for a win at 21.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_twenty_one_pays(1.2);
    /// assert_eq!(options.twenty_one_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_twenty_one_pays(mut self, ratio: f64) -> Self {
        self.twenty_one_pays = ratio;
        self
    }

    /// Sets the payout ratio for an ordinary win.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_win_pays(1.0);
    /// assert_eq!(options.win_pays, 1.0);
    /// ```
    #[must_use]
    pub const fn with_win_pays(mut self, ratio: f64) -> Self {
        self.win_pays = ratio;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the number of seats at the table.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, seats: u8) -> Self {
        self.max_players = seats;
        self
    }

    /// Sets whether surrender is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_surrender(false);
    /// assert_eq!(options.surrender, false);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, offered: bool) -> Self {
        self.surrender = offered;
        self
    }

    /// Sets whether double down is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::PontoonOptions;
    ///
    /// let options = PontoonOptions::default().with_double_down(false);
    /// assert_eq!(options.double_down, false);
    /// ```
    #[must_use]
    pub const fn with_double_down(mut self, offered: bool) -> Self {
        self.double_down = offered;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{PontoonOptions, RoundingMode};
    ///
    /// let options = PontoonOptions::default().with_rounding(RoundingMode::Nearest);
    /// assert_eq!(options.rounding, RoundingMode::Nearest);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}
