use serde::Serialize;
use std::fmt;

/// Number of letters dealt each round
pub const POOL_SIZE: usize = 9;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 3;

/// Default round length in seconds
pub const ROUND_SECS: u32 = 60;

pub const TOO_SHORT_MSG: &str = "Word must be at least 3 letters long.";
pub const INVALID_WORD_MSG: &str = "Invalid word!";

/// The nine letters dealt for a round. Always uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LetterPool([char; POOL_SIZE]);

impl LetterPool {
    pub fn new(letters: [char; POOL_SIZE]) -> Self {
        LetterPool(letters.map(|c| c.to_ascii_uppercase()))
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Inactive,
    Active,
    Ended,
}

/// Text shown to the player after the latest event
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Feedback {
    #[default]
    Empty,
    TooShort,
    InvalidWord,
    Outcome(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Empty => "",
            Feedback::TooShort => TOO_SHORT_MSG,
            Feedback::InvalidWord => INVALID_WORD_MSG,
            Feedback::Outcome(msg) => msg,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Events handed to the audio collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEvent {
    NewGame,
    Submit,
}

impl SoundEvent {
    pub fn name(self) -> &'static str {
        match self {
            SoundEvent::NewGame => "newGame",
            SoundEvent::Submit => "submit",
        }
    }

    /// Asset file played for this event
    pub fn asset(self) -> &'static str {
        match self {
            SoundEvent::NewGame => "new-game.mp3",
            SoundEvent::Submit => "submit.mp3",
        }
    }
}

/// Snapshot of a game session. Transitions never mutate a snapshot in place,
/// they build the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub round: u64,
    pub pool: Option<LetterPool>,
    pub accepted: Vec<String>,
    pub score: u32,
    pub remaining: u32,
    pub status: SessionStatus,
    pub feedback: Feedback,
}

impl GameState {
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

/// Result of applying one event to a snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub sound: Option<SoundEvent>,
}

impl Transition {
    pub fn quiet(state: GameState) -> Self {
        Transition { state, sound: None }
    }

    pub fn with_sound(state: GameState, sound: SoundEvent) -> Self {
        Transition { state, sound: Some(sound) }
    }
}
