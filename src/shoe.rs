//! The shoe of cards dealt during a round.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DrawError;

/// A single-deck shoe. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds the full 52-card deck in canonical order.
    ///
    /// Suits follow [`Suit::ALL`]; within a suit ranks run A, 2..10, J, Q, K.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a shoe that yields `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyShoe`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyShoe)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::build()
    }
}
