//! Round state types.

/// State of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Opening cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player went over 21. Terminal; the dealer does not play.
    PlayerBust,
    /// The dealer draws to the stand threshold.
    DealerTurn,
    /// The round has finished and the outcome can be read.
    Resolved,
}
