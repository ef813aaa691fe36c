//! A simplified twenty-one card game played against an automated dealer.
//!
//! The crate provides a [`Round`] engine that manages one round of play:
//! dealing, the player's hit/stand decisions, the dealer's fixed drawing
//! policy, and outcome resolution. The rules are deliberately simple: aces
//! always count as 11, the dealer stands on 17, and ties go to the dealer.
//! There is no betting, splitting, or doubling.
//!
//! The engine performs no I/O. The bundled binary drives it as an
//! interactive console session.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{Round, RoundState};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut round = Round::new(&mut rng);
//! round.deal()?;
//!
//! // Stand immediately; the dealer plays out unless the opening deal
//! // already busted the player.
//! round.stand()?;
//! if round.state() == RoundState::DealerTurn {
//!     round.dealer_play()?;
//! }
//! assert!(round.outcome().is_some());
//! # Ok::<(), twentyone::RoundError>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{DealError, RoundError};
pub use game::{DEALER_STAND_SCORE, Round, RoundState, TARGET_SCORE};
pub use hand::Hand;
pub use result::RoundOutcome;
