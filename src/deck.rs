//! The 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DealError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of playing cards.
///
/// A fresh deck holds all 52 suit/rank combinations in a fixed enumeration
/// order; shuffle it before dealing.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck, unshuffled.
    ///
    /// Cards are enumerated suit-major: every rank of the first suit, then
    /// the next, in [`Suit::ALL`] and [`Rank::ALL`] order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last card in `cards` is dealt first. Intended for deterministic
    /// setups such as stacked-deck tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Reorders the remaining cards uniformly at random, in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the next card from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] when no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::Exhausted)
    }

    /// Returns the remaining cards, next-dealt last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
