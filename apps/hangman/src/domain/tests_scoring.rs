use crate::domain::rules::{round_award, STARTING_LIVES};
use crate::domain::scoring::{conclude_round, settle_win};
use crate::domain::test_state_helpers::{guess, guess_all, session_with_word};
use crate::errors::domain::StateKind;

#[test]
fn award_is_ten_points_per_life() {
    assert_eq!(round_award(7), 70);
    assert_eq!(round_award(1), 10);
    assert_eq!(round_award(0), 0);
}

#[test]
fn winning_lune_without_mistakes_scores_seventy() {
    let mut s = session_with_word("lune");
    guess_all(&mut s, "lune");
    let outcome = conclude_round(&mut s).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.revealed_word, "lune");
    assert_eq!(outcome.award, 70);
    assert_eq!(outcome.final_score, 70);
    assert_eq!(s.score, 70);
}

#[test]
fn win_award_counts_remaining_lives() {
    let mut s = session_with_word("mer");
    guess_all(&mut s, "xyz");
    guess(&mut s, "mer").unwrap();
    let outcome = conclude_round(&mut s).unwrap();
    assert_eq!(outcome.lives_remaining, STARTING_LIVES - 3);
    assert_eq!(outcome.final_score, 40);
}

#[test]
fn concluding_twice_awards_once() {
    let mut s = session_with_word("mer");
    guess(&mut s, "mer").unwrap();
    conclude_round(&mut s).unwrap();
    let again = conclude_round(&mut s).unwrap();
    assert_eq!(again.final_score, 70);
    assert_eq!(again.award, 0);
    assert_eq!(s.score, 70);
    assert_eq!(settle_win(&mut s), 0);
}

#[test]
fn score_accumulates_across_rounds() {
    let mut s = session_with_word("mer");
    guess(&mut s, "mer").unwrap();
    conclude_round(&mut s).unwrap();
    s.next_round("lune");
    guess_all(&mut s, "lunxe");
    let outcome = conclude_round(&mut s).unwrap();
    assert_eq!(outcome.award, 60);
    assert_eq!(outcome.final_score, 130);
}

#[test]
fn loss_reports_score_without_resetting() {
    let mut s = session_with_word("mer");
    s.score = 120;
    guess_all(&mut s, "abcdfgh");
    let outcome = conclude_round(&mut s).unwrap();
    assert!(!outcome.won);
    assert_eq!(outcome.revealed_word, "mer");
    assert_eq!(outcome.final_score, 120);
    assert_eq!(outcome.award, 0);
    // Caller records first, then resets.
    assert_eq!(s.score, 120);
}

#[test]
fn active_round_cannot_be_concluded() {
    let mut s = session_with_word("mer");
    let err = conclude_round(&mut s).unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::RoundInProgress));
    assert_eq!(s.score, 0);
}

#[test]
fn settle_win_ignores_unfinished_rounds() {
    let mut s = session_with_word("mer");
    assert_eq!(settle_win(&mut s), 0);
    assert!(!s.awarded);
}
