use crate::error::DealError;

use super::{Round, RoundState};

/// Cards each participant receives in the initial deal.
const INITIAL_CARDS: usize = 2;

impl Round {
    /// Shuffles the shoe and deals two cards to every participant.
    ///
    /// A round without at least one player next to the dealer ends
    /// immediately with no winner; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the shoe
    /// cannot cover the initial deal.
    pub fn ready(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.participants.len() < 2 {
            tracing::info!("no players seated, ending round");
            self.winner = None;
            self.state = RoundState::Ended;
            return Ok(());
        }

        if self.options.shuffle {
            self.shoe.shuffle(&mut self.rng);
        }

        let cards_needed = self.participants.len() * INITIAL_CARDS;
        if self.shoe.len() < cards_needed {
            tracing::error!(
                cards_needed,
                remaining = self.shoe.len(),
                "shoe cannot cover the initial deal"
            );
            return Err(DealError::EmptyShoe);
        }

        for index in 0..self.participants.len() {
            for _ in 0..INITIAL_CARDS {
                let card = self.draw()?;
                self.participants[index].give(card);
            }
            let participant = &self.participants[index];
            tracing::debug!(%participant, sum = participant.sum(), "dealt");
        }

        self.state = RoundState::InProgress;
        tracing::info!(
            participants = self.participants.len(),
            remaining = self.shoe.len(),
            "round in progress"
        );

        Ok(())
    }
}
