use crate::config::GameRules;
use crate::handlers::input::{parse_line, Command};
use crate::handlers::{round, validation};
use crate::models::{GameState, Transition};
use crate::render::Renderer;
use crate::services::generator::generate_pool;
use crate::services::sound::SoundSink;
use crate::services::timer::{RoundTimer, Tick};
use rand::rngs::StdRng;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use log::{debug, info, warn};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the current snapshot and the one running round timer.
/// Every event goes through a pure transition; the session only stores the
/// result, plays its sound and keeps the timer in step with the status.
pub struct GameSession {
    state: GameState,
    rules: GameRules,
    rng: StdRng,
    sound: Box<dyn SoundSink>,
    timer: Option<RoundTimer>,
    ticks: UnboundedSender<Tick>,
}

impl GameSession {
    /// Returns the session and the receiving end of its timer ticks.
    pub fn new(rules: GameRules, rng: StdRng, sound: Box<dyn SoundSink>) -> (Self, UnboundedReceiver<Tick>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let session = GameSession {
            state: GameState::default(),
            rules,
            rng,
            sound,
            timer: None,
            ticks,
        };
        (session, rx)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn start(&mut self) -> bool {
        self.cancel_timer();

        let pool = generate_pool(&mut self.rng);
        let changed = self.apply(round::start(&self.state, pool, &self.rules));
        info!(
            "Round {} started with {} ({} seconds)",
            self.state.round,
            self.state.pool.as_ref().map(|p| p.to_string()).unwrap_or_default(),
            self.state.remaining
        );

        self.timer = Some(RoundTimer::spawn(self.state.round, TICK_PERIOD, self.ticks.clone()));
        changed
    }

    pub fn submit(&mut self, word: &str) -> bool {
        self.apply(validation::submit(&self.state, word))
    }

    pub fn tick(&mut self, tick: Tick) -> bool {
        if tick.round != self.state.round {
            debug!("Dropping tick from round {} during round {}", tick.round, self.state.round);
            return false;
        }

        let changed = self.apply(round::tick(&self.state, &self.rules));
        if !self.state.is_active() {
            self.cancel_timer();
        }
        changed
    }

    pub fn stop(&mut self) -> bool {
        let changed = self.apply(round::stop(&self.state, &self.rules));
        self.cancel_timer();
        changed
    }

    /// Apply a parsed input command. Quit is the caller's business.
    pub fn command(&mut self, command: Command) -> bool {
        match command {
            Command::NewGame => self.start(),
            Command::Stop => self.stop(),
            Command::Submit(word) => self.submit(&word),
            Command::Unknown(text) => {
                warn!("Unknown command: {}", text);
                false
            }
            Command::Quit => false,
        }
    }

    pub fn shutdown(&mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn apply(&mut self, transition: Transition) -> bool {
        let changed = transition.state != self.state;
        self.state = transition.state;

        if let Some(event) = transition.sound {
            if let Err(e) = self.sound.play(event) {
                warn!("Failed to play {} sound: {}", event.name(), e);
            }
        }
        changed
    }
}

/// Drive a session from committed input lines and timer ticks until the
/// player quits or input ends. The renderer sees every changed snapshot.
pub async fn run<I>(
    session: &mut GameSession,
    renderer: &mut dyn Renderer,
    input: I,
    ticks: &mut UnboundedReceiver<Tick>,
) -> io::Result<()>
where
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    renderer.render(session.state())?;

    loop {
        let changed = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse_line(&line) {
                    Some(Command::Quit) => break,
                    Some(command) => session.command(command),
                    None => false,
                },
                None => {
                    debug!("Input closed");
                    break;
                }
            },
            Some(tick) = ticks.recv() => session.tick(tick),
        };

        if changed {
            renderer.render(session.state())?;
        }
    }

    session.shutdown();
    Ok(())
}
