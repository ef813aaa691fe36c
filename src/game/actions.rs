use crate::card::Card;
use crate::error::RoundError;

use super::{Round, RoundState, TARGET_SCORE};

impl Round {
    /// Player action: hit (draw one more card).
    ///
    /// Returns the drawn card. If the new total exceeds 21 the round ends
    /// in [`RoundState::PlayerBust`] and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn state or the
    /// deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.score() > TARGET_SCORE {
            self.state = RoundState::PlayerBust;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// Hands the round over to the dealer. Standing on a total that already
    /// exceeds 21 (possible only when the opening deal itself busts, e.g.
    /// two aces) ends the round in [`RoundState::PlayerBust`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn state.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        self.state = if self.player.score() > TARGET_SCORE {
            RoundState::PlayerBust
        } else {
            RoundState::DealerTurn
        };
        Ok(())
    }
}
