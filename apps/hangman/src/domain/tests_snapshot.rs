use crate::domain::snapshot::snapshot;
use crate::domain::state::SessionPhase;
use crate::domain::test_state_helpers::{guess, guess_all, session_with_word};

#[test]
fn active_snapshot_hides_the_word() {
    let mut s = session_with_word("chocolat");
    guess_all(&mut s, "oz");
    let view = snapshot(&s);
    assert_eq!(view.phase, SessionPhase::Active);
    assert_eq!(view.pattern, "_ _ o _ o _ _ _");
    assert_eq!(view.word_length, 8);
    assert_eq!(view.tried_letters, vec!['o', 'z']);
    assert_eq!(view.lives, 6);
    assert_eq!(view.max_lives, 7);
    assert_eq!(view.word, None);

    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("word").is_none());
    assert_eq!(json["phase"], "active");
}

#[test]
fn finished_snapshot_discloses_the_word() {
    let mut s = session_with_word("mer");
    guess_all(&mut s, "abcdfgh");
    let view = snapshot(&s);
    assert_eq!(view.phase, SessionPhase::Lost);
    assert_eq!(view.word.as_deref(), Some("mer"));

    let mut won = session_with_word("mer");
    guess(&mut won, "mer").unwrap();
    assert_eq!(snapshot(&won).phase, SessionPhase::Won);
    assert_eq!(snapshot(&won).pattern, "m e r");
}
