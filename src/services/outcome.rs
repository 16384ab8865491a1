pub const WORK_HARD: &str = "Work hard!";
pub const BETTER: &str = "Better!";
pub const WELL_DONE: &str = "Well done!";

/// Pick the end-of-round message for a final score.
///
/// The ladder is checked in order and the first match wins. Scores 4, 6 and 8
/// match no rung and get `fallback`, which is `None` unless configured.
pub fn select_outcome(score: u32, fallback: Option<&str>) -> Option<String> {
    if score < 4 {
        Some(WORK_HARD.to_string())
    } else if score == 5 || score == 7 {
        Some(BETTER.to_string())
    } else if score > 8 {
        Some(WELL_DONE.to_string())
    } else {
        fallback.map(str::to_string)
    }
}
