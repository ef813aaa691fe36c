//! Interactive console session for the twenty-one game.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use twentyone::{Round, RoundError, RoundOutcome, RoundState, TARGET_SCORE};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        if let Err(err) = play_round(&mut rng) {
            eprintln!("fatal: {err}");
            return ExitCode::FAILURE;
        }

        println!("Would you like to play again? (y/n)");
        if !read_affirmative() {
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Plays a single round to a terminal state, printing the table as it goes.
fn play_round<R: Rng>(rng: &mut R) -> Result<(), RoundError> {
    let mut round = Round::new(rng);
    round.deal()?;

    println!("Your hand: {}", round.player_hand());
    if let Some(up_card) = round.dealer_up_card() {
        println!("Dealer shows: {up_card}");
    }

    while round.state() == RoundState::PlayerTurn && round.player_hand().score() < TARGET_SCORE {
        println!("Would you like to hit? (y/n)");
        if !read_affirmative() {
            break;
        }
        round.hit()?;
        println!("Your hand: {}", round.player_hand());
    }

    if round.state() == RoundState::PlayerTurn {
        round.stand()?;
    }

    if round.state() == RoundState::DealerTurn {
        round.dealer_play()?;
        println!("Dealer's hand: {}", round.dealer_hand());
    }

    match round.outcome() {
        Some(RoundOutcome::PlayerBust) => println!("Bust! Dealer wins."),
        Some(RoundOutcome::PlayerWin) => println!("You win!"),
        Some(RoundOutcome::DealerWin) => println!("Dealer wins."),
        None => {}
    }

    Ok(())
}

/// Reads one line from stdin. Only a case-insensitive `"y"` is affirmative;
/// anything else, including empty input or closed stdin, is a no.
fn read_affirmative() -> bool {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}
