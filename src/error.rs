//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe for every participant.
    #[error("not enough cards in the shoe to deal every participant")]
    EmptyShoe,
}

impl From<DrawError> for DealError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyShoe => Self::EmptyShoe,
        }
    }
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid round state for playing a turn.
    #[error("invalid round state for playing a turn")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl From<DrawError> for TurnError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyShoe => Self::EmptyShoe,
        }
    }
}

/// Errors that can end a full round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The initial deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A turn failed.
    #[error("turn failed: {0}")]
    Turn(#[from] TurnError),
}

impl RoundError {
    /// Returns whether the error was caused by running out of cards.
    #[must_use]
    pub const fn is_empty_shoe(&self) -> bool {
        matches!(
            self,
            Self::Deal(DealError::EmptyShoe) | Self::Turn(TurnError::EmptyShoe)
        )
    }
}
