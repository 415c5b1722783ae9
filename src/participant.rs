//! Round participants and their decision strategies.

use core::fmt;

use crate::card::Card;
use crate::console::Console;
use crate::hand::Hand;
use crate::options::GameOptions;

/// Where a participant sits at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// A numbered player, starting at 1.
    Player(u8),
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(number) => write!(f, "Player{number}"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// How a participant chooses between heat and stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Ask the console.
    HumanPrompt,
    /// Stay once the sum passes the dealer threshold.
    DealerRule,
}

/// A heat-or-stay decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Heat,
    /// Stop drawing for the rest of the round.
    Stay,
}

/// Participant status, derived from the hand and the staying flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Still deciding.
    Active,
    /// Has stayed.
    Staying,
    /// Hand is over 21.
    Busted,
}

/// A player or the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    seat: Seat,
    strategy: Strategy,
    hand: Hand,
    staying: bool,
}

impl Participant {
    /// Creates a human-controlled player with an empty hand.
    #[must_use]
    pub const fn player(number: u8) -> Self {
        Self {
            seat: Seat::Player(number),
            strategy: Strategy::HumanPrompt,
            hand: Hand::new(),
            staying: false,
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            seat: Seat::Dealer,
            strategy: Strategy::DealerRule,
            hand: Hand::new(),
            staying: false,
        }
    }

    /// Returns the seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the decision strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns whether this participant is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.seat, Seat::Dealer)
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the hand.
    pub fn give(&mut self, card: Card) {
        self.hand.give(card);
    }

    /// Returns the hand sum.
    #[must_use]
    pub fn sum(&self) -> u16 {
        self.hand.sum()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Returns whether the participant has stayed.
    #[must_use]
    pub const fn is_staying(&self) -> bool {
        self.staying
    }

    /// Marks the participant as staying for the rest of the round.
    pub const fn mark_staying(&mut self) {
        self.staying = true;
    }

    /// Returns the current status.
    ///
    /// A busted hand wins over the staying flag.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.hand.is_busted() {
            Status::Busted
        } else if self.staying {
            Status::Staying
        } else {
            Status::Active
        }
    }

    /// Recomputes the status after the hand changed.
    ///
    /// Nothing is stored: the status is read back from the hand and the
    /// staying flag, which is left untouched.
    #[must_use]
    pub fn update_status(&self) -> Status {
        self.status()
    }

    /// Returns whether the participant no longer takes decisions.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status() != Status::Active
    }

    /// Decides whether to take another card.
    ///
    /// A [`Decision::Stay`] also marks the participant as staying.
    pub fn decide<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        options: &GameOptions,
    ) -> Decision {
        let decision = match self.strategy {
            Strategy::HumanPrompt => {
                if console.ask(self) == options.stay_keyword {
                    Decision::Stay
                } else {
                    Decision::Heat
                }
            }
            Strategy::DealerRule => {
                if self.sum() > options.dealer_stays_above {
                    Decision::Stay
                } else {
                    Decision::Heat
                }
            }
        };

        if decision == Decision::Stay {
            self.mark_staying();
        }

        tracing::debug!(participant = %self.seat, sum = self.sum(), ?decision, "decided");
        console.decided(self, decision);
        decision
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.seat.fmt(f)
    }
}
