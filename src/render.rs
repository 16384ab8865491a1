use crate::models::{GameState, SessionStatus};
use std::io::{self, Write};

/// Rendering collaborator. Sees every snapshot, never changes one.
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

const RULES: &str = "\
Form words using the letters displayed.
Each valid word scores points based on its length.
Words must be at least 3 letters long.
Type a word and press Enter. :new starts a round, :stop ends it, :quit leaves.";

/// Board for a human at a terminal
pub struct TextRenderer<W: Write> {
    out: W,
    last: Option<GameState>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out, last: None }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn only_clock_moved(&self, state: &GameState) -> bool {
        self.last
            .as_ref()
            .is_some_and(|last| GameState { remaining: state.remaining, ..last.clone() } == *state)
    }

    fn draw_board(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== Words Countdown ===")?;

        match state.status {
            SessionStatus::Inactive => {
                writeln!(self.out, "{}", RULES)?;
            }
            SessionStatus::Active => {
                if let Some(pool) = &state.pool {
                    for row in pool.letters().chunks(3) {
                        let row: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                        writeln!(self.out, "   {}", row.join("  "))?;
                    }
                }
                writeln!(self.out, "{} seconds", state.remaining)?;
            }
            SessionStatus::Ended => {
                if state.remaining == 0 {
                    writeln!(self.out, "Time's up!")?;
                } else {
                    writeln!(self.out, "Round stopped with {} seconds left.", state.remaining)?;
                }
            }
        }

        if state.status != SessionStatus::Inactive {
            writeln!(self.out, "Your Score: {}", state.score)?;
            self.draw_chart(state)?;
        }

        if !state.feedback.is_empty() {
            writeln!(self.out, ">> {}", state.feedback.text())?;
        }
        Ok(())
    }

    /// One bar per accepted word, as long as the word
    fn draw_chart(&mut self, state: &GameState) -> io::Result<()> {
        let width = state.accepted.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        for word in &state.accepted {
            let len = word.chars().count();
            writeln!(self.out, "  {:<width$} {} {}", word, "#".repeat(len), len, width = width)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        if self.only_clock_moved(state) {
            // a line every ten seconds, then every second near the end
            if state.remaining % 10 == 0 || state.remaining <= 5 {
                writeln!(self.out, "{} seconds", state.remaining)?;
            }
        } else {
            self.draw_board(state)?;
        }

        self.last = Some(state.clone());
        self.out.flush()
    }
}

/// One JSON snapshot per line, for whatever draws the board elsewhere
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, state)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
