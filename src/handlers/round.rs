use crate::config::GameRules;
use crate::models::{Feedback, GameState, LetterPool, SessionStatus, SoundEvent, Transition};
use crate::services::outcome::select_outcome;
use log::{debug, info};

/// Begin a new round on `pool`, discarding whatever the previous round left.
pub fn start(state: &GameState, pool: LetterPool, rules: &GameRules) -> Transition {
    let next = GameState {
        round: state.round + 1,
        pool: Some(pool),
        accepted: Vec::new(),
        score: 0,
        remaining: rules.round_secs,
        status: SessionStatus::Active,
        feedback: Feedback::Empty,
    };
    Transition::with_sound(next, SoundEvent::NewGame)
}

/// One second passes. Ending the round happens here when the clock hits zero.
pub fn tick(state: &GameState, rules: &GameRules) -> Transition {
    if !state.is_active() || state.remaining == 0 {
        return Transition::quiet(state.clone());
    }

    let mut next = state.clone();
    next.remaining -= 1;
    debug!("Round {}: {} seconds left", next.round, next.remaining);

    if next.remaining == 0 {
        next = finish(next, rules);
    }
    Transition::quiet(next)
}

/// End the active round early. The clock keeps whatever time was left.
pub fn stop(state: &GameState, rules: &GameRules) -> Transition {
    if !state.is_active() {
        return Transition::quiet(state.clone());
    }
    Transition::quiet(finish(state.clone(), rules))
}

fn finish(mut state: GameState, rules: &GameRules) -> GameState {
    let outcome = select_outcome(state.score, rules.fallback_outcome.as_deref());
    info!(
        "Round {} over: score {} from {} words",
        state.round,
        state.score,
        state.accepted.len()
    );

    state.status = SessionStatus::Ended;
    state.feedback = outcome.map(Feedback::Outcome).unwrap_or_default();
    state
}
