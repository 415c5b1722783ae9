//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Participants are seated and waiting for the initial deal.
    Dealing,
    /// Participants are taking turns.
    InProgress,
    /// Every participant is busted or staying, or nobody sat down.
    Ended,
}
