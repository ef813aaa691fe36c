//! Round engine and state management.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Score a hand must not exceed.
pub const TARGET_SCORE: u8 = 21;

/// Score at which the dealer stops drawing.
pub const DEALER_STAND_SCORE: u8 = 17;

/// A single round of twenty-one: one deck, one player hand, one dealer hand.
///
/// A round is created fresh, played to a terminal state, and discarded.
/// Nothing is shared between rounds except the caller's random number
/// generator, so each round's cards are independent of the last.
///
/// The engine performs no I/O; drive it by checking [`Round::state`] and
/// calling the matching operation.
#[derive(Debug)]
pub struct Round {
    /// Cards not yet dealt this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a new round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use twentyone::{Round, RoundState};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let round = Round::new(&mut rng);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(deck)
    }

    /// Creates a round that draws from the given deck as-is.
    ///
    /// No shuffle is applied; useful for deterministic setups.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
        }
    }

    /// Deals the opening hands: two cards to the player, then two to the
    /// dealer. Transitions to [`RoundState::PlayerTurn`].
    ///
    /// Both dealer cards are dealt here; concealing the second one until
    /// the round resolves is the caller's display concern (show only
    /// [`Self::dealer_up_card`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state, or if the
    /// deck runs out of cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-up card (the first one dealt).
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Draws the next card from the deck.
    fn draw(&mut self) -> Result<Card, RoundError> {
        Ok(self.deck.deal()?)
    }
}
