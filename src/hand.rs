//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{BLACKJACK, Card};

/// An ordered set of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn give(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the sum of the point values of every card.
    #[must_use]
    pub fn sum(&self) -> u16 {
        self.cards.iter().map(|card| u16::from(card.value())).sum()
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.sum() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
