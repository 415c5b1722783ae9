use crate::card::BLACKJACK;
use crate::console::Console;
use crate::error::{RoundError, TurnError};
use crate::participant::{Decision, Participant, Status};

use super::{Round, RoundState};

/// Picks the participant closest to 21 without going over.
///
/// Ties go to whoever sits first. Returns `None` if everyone busted.
#[must_use]
pub fn select_winner(participants: &[Participant]) -> Option<usize> {
    participants
        .iter()
        .enumerate()
        .filter(|(_, participant)| !participant.is_busted())
        .min_by_key(|(_, participant)| BLACKJACK - participant.sum())
        .map(|(index, _)| index)
}

impl Round {
    /// Plays one pass over every participant.
    ///
    /// Busted and staying participants are skipped. Everyone else decides,
    /// drawing one card on a heat. The end of the round is checked once the
    /// whole pass is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or the shoe runs out
    /// while a participant is drawing.
    pub fn proceed_turn<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), TurnError> {
        if self.state != RoundState::InProgress {
            return Err(TurnError::InvalidState);
        }

        console.table(&self.participants);

        for index in 0..self.participants.len() {
            if self.participants[index].is_done() {
                console.skipped(&self.participants[index]);
                continue;
            }

            let decision = self.participants[index].decide(console, &self.options);
            if decision == Decision::Heat {
                let card = self.draw()?;
                self.participants[index].give(card);
            }

            let participant = &self.participants[index];
            if participant.update_status() == Status::Busted {
                tracing::debug!(%participant, sum = participant.sum(), "busted");
            }
            console.render(participant);
        }

        self.update_round_status();
        Ok(())
    }

    /// Re-evaluates whether every participant is done and picks the winner
    /// if so.
    fn update_round_status(&mut self) {
        if !self.participants.iter().all(Participant::is_done) {
            return;
        }

        self.winner = select_winner(&self.participants);
        self.state = RoundState::Ended;

        match self.winner() {
            Some(winner) => tracing::info!(%winner, sum = winner.sum(), "round ended"),
            None => tracing::info!("round ended without a winner"),
        }
    }

    /// Plays the whole round: deal, take turns until everyone is done, then
    /// announce the result.
    ///
    /// Returns the winner, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the shoe runs
    /// out of cards.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<Option<&Participant>, RoundError> {
        self.ready()?;

        while !self.is_ended() {
            self.proceed_turn(console)?;
        }

        let winner = self.winner.and_then(|index| self.participants.get(index));
        console.announce(&self.participants, winner);

        Ok(winner)
    }
}
