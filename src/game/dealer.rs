use crate::card::Card;
use crate::error::RoundError;
use crate::result::RoundOutcome;

use super::{DEALER_STAND_SCORE, Round, RoundState, TARGET_SCORE};

impl Round {
    /// Plays out the dealer's hand.
    ///
    /// The dealer follows a fixed policy with no decisions: draw until the
    /// hand scores 17 or higher, then stand. Returns the cards drawn and
    /// transitions to [`RoundState::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn state or the
    /// deck empties while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.score() < DEALER_STAND_SCORE {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.state = RoundState::Resolved;
        Ok(drawn)
    }

    /// Returns the outcome of the round, or `None` while it is still in
    /// progress.
    ///
    /// Resolution order: a busted dealer loses outright; otherwise the
    /// player must finish strictly higher to win. Ties go to the dealer in
    /// this variant rather than pushing.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::PlayerBust => Some(RoundOutcome::PlayerBust),
            RoundState::Resolved => {
                let dealer_score = self.dealer.score();
                let player_score = self.player.score();

                let outcome = if dealer_score > TARGET_SCORE || player_score > dealer_score {
                    RoundOutcome::PlayerWin
                } else {
                    RoundOutcome::DealerWin
                };
                Some(outcome)
            }
            RoundState::Dealing | RoundState::PlayerTurn | RoundState::DealerTurn => None,
        }
    }
}
