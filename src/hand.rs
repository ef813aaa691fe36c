//! Participant hands and scoring.

use core::fmt;

use crate::card::Card;

/// An ordered collection of cards held by the player or the dealer.
///
/// A hand lives for one round and only grows; the score is recomputed from
/// the cards on demand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in addition order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// The score is the sum of the card values; an empty hand scores 0.
    /// Aces always count as 11, so there is no soft total to track.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0, |total, card| total.saturating_add(card.value()))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    /// Renders the card labels as a comma-joined list, in addition order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
