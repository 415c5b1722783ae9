//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Clovers (clubs).
    Clover,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in shoe order.
    pub const ALL: [Self; 4] = [Self::Diamond, Self::Heart, Self::Clover, Self::Spade];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Clover => "Clover",
            Self::Spade => "Spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but are worth no points and have no label.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the point value of the card.
    ///
    /// Aces always count as 1 and face cards count as 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns the rank label (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {})", self.suit, self.label())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Highest hand sum that is not a bust.
pub const BLACKJACK: u16 = 21;
