use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use log::debug;

/// One second elapsed in the given round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub round: u64,
}

/// Handle to the recurring tick task of a single round.
/// The task is aborted when the handle is cancelled or dropped.
pub struct RoundTimer {
    round: u64,
    handle: JoinHandle<()>,
}

impl RoundTimer {
    /// Start ticking every `period`, first tick one period from now.
    pub fn spawn(round: u64, period: Duration, tx: UnboundedSender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(Tick { round }).is_err() {
                    // session is gone
                    break;
                }
            }
        });

        debug!("Timer started for round {}", round);
        RoundTimer { round, handle }
    }

    #[cfg(test)]
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn cancel(self) {
        debug!("Timer cancelled for round {}", self.round);
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
