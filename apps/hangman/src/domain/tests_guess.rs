use crate::domain::rules::STARTING_LIVES;
use crate::domain::state::{GuessOutcome, RoundStatus};
use crate::domain::test_state_helpers::{guess, guess_all, session_with_word};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

#[test]
fn correct_letter_reveals_all_occurrences() {
    let mut s = session_with_word("chocolat");
    let outcome = guess(&mut s, "o").unwrap();
    assert_eq!(outcome, GuessOutcome::Hit { revealed: 2 });
    assert_eq!(s.pattern.render(), "_ _ o _ o _ _ _");
    assert_eq!(s.lives, STARTING_LIVES);
    assert!(s.tried_letters.contains(&'o'));
}

#[test]
fn wrong_letter_costs_one_life() {
    let mut s = session_with_word("mer");
    assert_eq!(guess(&mut s, "z").unwrap(), GuessOutcome::Miss);
    assert_eq!(s.lives, STARTING_LIVES - 1);
    assert_eq!(s.pattern.render(), "_ _ _");
    assert_eq!(s.status, RoundStatus::Active);
}

#[test]
fn repeated_letter_is_rejected_without_penalty() {
    let mut s = session_with_word("mer");
    guess(&mut s, "z").unwrap();
    guess(&mut s, "e").unwrap();
    let lives = s.lives;
    let pattern = s.pattern.clone();

    for raw in ["z", "e", "E"] {
        let err = guess(&mut s, raw).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::LetterAlreadyTried, _)
        ));
    }
    assert_eq!(s.lives, lives);
    assert_eq!(s.pattern, pattern);
}

#[test]
fn uppercase_input_is_normalized() {
    let mut s = session_with_word("lune");
    assert_eq!(guess(&mut s, "L").unwrap(), GuessOutcome::Hit { revealed: 1 });
    assert_eq!(s.pattern.render(), "l _ _ _");
}

#[test]
fn non_letter_is_rejected_without_state_change() {
    let mut s = session_with_word("lune");
    assert!(guess(&mut s, "3").is_err());
    assert!(guess(&mut s, "").is_err());
    assert!(s.tried_letters.is_empty());
    assert_eq!(s.lives, STARTING_LIVES);
}

#[test]
fn guessing_every_letter_wins_with_full_lives() {
    let mut s = session_with_word("lune");
    let outcomes = guess_all(&mut s, "lune");
    assert_eq!(outcomes.last(), Some(&GuessOutcome::Solved));
    assert!(s.pattern.is_complete());
    assert_eq!(s.lives, STARTING_LIVES);
    assert_eq!(s.status, RoundStatus::Won);
    assert!(!s.is_active());
}

#[test]
fn seven_misses_lose_the_round() {
    let mut s = session_with_word("mer");
    let outcomes = guess_all(&mut s, "abcdfgh");
    assert!(outcomes.iter().all(|o| *o == GuessOutcome::Miss));
    assert_eq!(s.lives, 0);
    assert_eq!(s.status, RoundStatus::Lost);
    assert!(!s.is_active());
}

#[test]
fn full_word_guess_wins_immediately() {
    let mut s = session_with_word("chocolat");
    guess(&mut s, "z").unwrap();
    assert_eq!(guess(&mut s, "Chocolat").unwrap(), GuessOutcome::Solved);
    assert!(s.pattern.is_complete());
    assert_eq!(s.status, RoundStatus::Won);
    // Tried letters are not affected by a word guess.
    assert_eq!(s.tried_letters.len(), 1);
    assert_eq!(s.lives, STARTING_LIVES - 1);
}

#[test]
fn wrong_full_word_costs_one_life() {
    let mut s = session_with_word("chocolat");
    assert_eq!(guess(&mut s, "fromage").unwrap(), GuessOutcome::WrongWord);
    assert_eq!(s.lives, STARTING_LIVES - 1);
    assert!(s.tried_letters.is_empty());
    assert_eq!(s.pattern.hidden_count(), 8);
}

#[test]
fn wrong_word_on_last_life_loses() {
    let mut s = session_with_word("mer");
    guess_all(&mut s, "abcdfg");
    assert_eq!(s.lives, 1);
    guess(&mut s, "mur").unwrap();
    assert_eq!(s.lives, 0);
    assert_eq!(s.status, RoundStatus::Lost);
}

#[test]
fn guesses_after_round_end_are_rejected() {
    let mut s = session_with_word("mer");
    guess(&mut s, "mer").unwrap();
    let err = guess(&mut s, "a").unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::RoundOver));

    let mut lost = session_with_word("mer");
    guess_all(&mut lost, "abcdfgh");
    let err = guess(&mut lost, "mer").unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::RoundOver));
    assert_eq!(lost.lives, 0);
}

#[test]
fn next_round_resets_round_state_but_keeps_identity() {
    let mut s = session_with_word("lune");
    guess_all(&mut s, "lunz");
    s.score = 40;
    s.next_round("chocolat");
    assert_eq!(s.nickname, "tester");
    assert_eq!(s.score, 40);
    assert_eq!(s.round, 2);
    assert_eq!(s.lives, STARTING_LIVES);
    assert!(s.tried_letters.is_empty());
    assert_eq!(s.pattern.len(), 8);
    assert_eq!(s.pattern.hidden_count(), 8);
    assert_eq!(s.status, RoundStatus::Active);
}
