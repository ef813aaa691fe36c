//! Round outcome types.

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player went over 21; the dealer wins without playing out their
    /// hand.
    PlayerBust,
    /// The player wins: the dealer busted, or the player finished with the
    /// higher score.
    PlayerWin,
    /// The dealer wins: the dealer finished at or above the player's score
    /// without busting. Ties go to the dealer in this variant.
    DealerWin,
}
