use crate::models::{Feedback, GameState, SoundEvent, Transition, MIN_WORD_LEN};
use crate::utils::can_form;
use log::debug;

/// Run one word through the submission rules.
///
/// Rules apply in order and the first match wins: repeats are ignored
/// without feedback, short words and words the pool cannot spell are
/// rejected, anything else scores its length. Rejections apply in any
/// state; only an active round takes a word into the score.
pub fn submit(state: &GameState, word: &str) -> Transition {
    let word = word.to_uppercase();

    if state.accepted.contains(&word) {
        debug!("Repeat submission: {}", word);
        return Transition::quiet(state.clone());
    }

    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        debug!("Too short: {}", word);
        return Transition::quiet(GameState {
            feedback: Feedback::TooShort,
            ..state.clone()
        });
    }

    let formable = state
        .pool
        .as_ref()
        .is_some_and(|pool| can_form(&word, pool.letters()));
    if !formable {
        debug!("Not formable: {}", word);
        return Transition::quiet(GameState {
            feedback: Feedback::InvalidWord,
            ..state.clone()
        });
    }

    if !state.is_active() {
        debug!("Not scoring '{}' outside an active round", word);
        return Transition::quiet(state.clone());
    }

    let mut next = state.clone();
    next.score += len as u32;
    next.accepted.push(word);
    next.feedback = Feedback::Empty;
    debug!("Accepted {:?}, score now {}", next.accepted.last(), next.score);
    Transition::with_sound(next, SoundEvent::Submit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LetterPool, SessionStatus};

    fn active_round() -> GameState {
        GameState {
            round: 1,
            pool: Some(LetterPool::new(['E', 'A', 'I', 'B', 'C', 'D', 'F', 'G', 'H'])),
            remaining: 60,
            status: SessionStatus::Active,
            ..GameState::default()
        }
    }

    #[test]
    fn test_accepts_formable_word() {
        let t = submit(&active_round(), "BEAD");
        assert_eq!(t.state.score, 4);
        assert_eq!(t.state.accepted, vec!["BEAD".to_string()]);
        assert_eq!(t.state.feedback, Feedback::Empty);
        assert_eq!(t.sound, Some(SoundEvent::Submit));
    }

    #[test]
    fn test_accepted_word_is_uppercased() {
        let t = submit(&active_round(), "bEad");
        assert_eq!(t.state.accepted, vec!["BEAD".to_string()]);
    }

    #[test]
    fn test_repeat_is_silent_in_any_case() {
        let first = submit(&active_round(), "BEAD").state;

        for repeat in ["BEAD", "bead", "Bead"] {
            let t = submit(&first, repeat);
            assert_eq!(t.state, first);
            assert_eq!(t.sound, None);
        }
    }

    #[test]
    fn test_repeat_keeps_previous_feedback() {
        let first = submit(&active_round(), "BEAD").state;
        let rejected = submit(&first, "ZZZZZ").state;
        assert_eq!(rejected.feedback, Feedback::InvalidWord);

        let t = submit(&rejected, "bead");
        assert_eq!(t.state.feedback, Feedback::InvalidWord);
    }

    #[test]
    fn test_too_short() {
        for word in ["", "A", "BE", "ab"] {
            let t = submit(&active_round(), word);
            assert_eq!(t.state.feedback, Feedback::TooShort, "word {:?}", word);
            assert_eq!(t.state.score, 0);
            assert!(t.state.accepted.is_empty());
            assert_eq!(t.sound, None);
        }
    }

    #[test]
    fn test_short_check_precedes_feasibility() {
        // "ZZ" is unformable but too short wins
        let t = submit(&active_round(), "ZZ");
        assert_eq!(t.state.feedback, Feedback::TooShort);
    }

    #[test]
    fn test_invalid_word() {
        let t = submit(&active_round(), "ZZZZZ");
        assert_eq!(t.state.feedback, Feedback::InvalidWord);
        assert_eq!(t.state.score, 0);
        assert!(t.state.accepted.is_empty());
    }

    #[test]
    fn test_spaces_count_as_letters() {
        // " ab" is three characters, and the pool has no space
        let t = submit(&active_round(), " ab");
        assert_eq!(t.state.feedback, Feedback::InvalidWord);
    }

    #[test]
    fn test_letters_are_not_reused_within_a_word() {
        // one A in the pool
        let t = submit(&active_round(), "BAA");
        assert_eq!(t.state.feedback, Feedback::InvalidWord);
    }

    #[test]
    fn test_letters_are_reusable_across_words() {
        let state = submit(&active_round(), "BEAD").state;
        let t = submit(&state, "BADE");
        assert_eq!(t.state.score, 8);
        assert_eq!(t.state.accepted, vec!["BEAD".to_string(), "BADE".to_string()]);
    }

    #[test]
    fn test_acceptance_clears_feedback() {
        let state = submit(&active_round(), "ZZZZZ").state;
        let t = submit(&state, "CAB");
        assert_eq!(t.state.feedback, Feedback::Empty);
        assert_eq!(t.state.score, 3);
    }

    #[test]
    fn test_rejections_apply_in_any_state() {
        let inactive = GameState::default();
        assert_eq!(submit(&inactive, "ab").state.feedback, Feedback::TooShort);
        // no pool dealt yet, so nothing is formable
        assert_eq!(submit(&inactive, "BEAD").state.feedback, Feedback::InvalidWord);

        let ended = GameState {
            status: SessionStatus::Ended,
            feedback: Feedback::Outcome("Work hard!".into()),
            ..active_round()
        };
        assert_eq!(submit(&ended, "ab").state.feedback, Feedback::TooShort);
        assert_eq!(submit(&ended, "ZZZZZ").state.feedback, Feedback::InvalidWord);
    }

    #[test]
    fn test_no_scoring_outside_active_round() {
        let ended = GameState {
            status: SessionStatus::Ended,
            feedback: Feedback::Outcome("Work hard!".into()),
            ..active_round()
        };
        let t = submit(&ended, "BEAD");
        assert_eq!(t.state, ended);
        assert_eq!(t.sound, None);

        let inactive = GameState::default();
        assert_eq!(submit(&inactive, "ab").state.score, 0);
        assert!(submit(&inactive, "ab").state.accepted.is_empty());
    }
}
