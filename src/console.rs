//! The console the round talks to for human input and presentation.

use alloc::string::String;

use crate::participant::{Decision, Participant};

/// Input and output hooks used by a round.
///
/// Only [`Console::ask`] feeds back into the round. Every other hook is
/// presentation and must not influence play.
pub trait Console {
    /// Asks a human player for a decision.
    ///
    /// The answer is compared against
    /// [`GameOptions::stay_keyword`](crate::GameOptions::stay_keyword); any
    /// other answer is a heat.
    fn ask(&mut self, participant: &Participant) -> String;

    /// Shows a participant's cards, sum, and bust state.
    fn render(&mut self, participant: &Participant);

    /// Shows every participant. Called at the start of each turn.
    fn table(&mut self, participants: &[Participant]) {
        for participant in participants {
            self.render(participant);
        }
    }

    /// Reports a participant skipped because it is busted or staying.
    fn skipped(&mut self, participant: &Participant) {
        let _ = participant;
    }

    /// Reports a decision once it has been made.
    fn decided(&mut self, participant: &Participant, decision: Decision) {
        let _ = (participant, decision);
    }

    /// Announces the result once the round has ended.
    fn announce(&mut self, participants: &[Participant], winner: Option<&Participant>) {
        let _ = (participants, winner);
    }
}
