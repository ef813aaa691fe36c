//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards mid-round.
    ///
    /// A round consumes well under 52 cards, so this indicates a broken
    /// invariant rather than a playable condition.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DealError> for RoundError {
    fn from(_: DealError) -> Self {
        Self::DeckExhausted
    }
}
