//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DrawError;
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::shoe::Shoe;

mod deal;
pub mod state;
mod turn;

pub use state::RoundState;
pub use turn::select_winner;

/// A single round of heat-or-stay blackjack.
///
/// The round owns the shoe and every participant. Players sit in order and
/// the dealer always sits last.
#[derive(Debug)]
pub struct Round {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Round options.
    pub options: GameOptions,
    /// Players followed by the dealer.
    participants: Vec<Participant>,
    /// Current round state.
    state: RoundState,
    /// Index of the winner, set when the round ends.
    winner: Option<usize>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, Round, RoundState};
    ///
    /// let round = Round::new(GameOptions::default().with_players(2), 42);
    /// assert_eq!(round.participants().len(), 3);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut participants: Vec<Participant> =
            (1..=options.players).map(Participant::player).collect();
        participants.push(Participant::dealer());

        Self {
            shoe: Shoe::build(),
            options,
            participants,
            state: RoundState::Dealing,
            winner: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.shoe.draw()?;
        tracing::trace!(%card, remaining = self.shoe.len(), "drew card");
        Ok(card)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state == RoundState::Ended
    }

    /// Returns every participant, players first and the dealer last.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns the dealer.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the dealer is seated in new() and never removed"
    )]
    #[must_use]
    pub fn dealer(&self) -> &Participant {
        self.participants
            .last()
            .expect("the dealer is seated when the round is created")
    }

    /// Returns the winner.
    ///
    /// Returns `None` while the round is still running, when every
    /// participant busted, or when the round ended for lack of players.
    #[must_use]
    pub fn winner(&self) -> Option<&Participant> {
        if !self.is_ended() {
            return None;
        }
        self.winner.and_then(|index| self.participants.get(index))
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}
