//! Doorman runtime - delayed, cancellable verdict delivery
//!
//! Screening itself is synchronous and cheap; the doorman spends a beat
//! "checking the clipboard" before answering. Every submission gets a
//! monotonically increasing id and its verdict is delivered on a timer
//! task. Only a verdict whose id still matches the latest submission may
//! be applied, so a newer submit or a reset turns older timers into
//! no-ops. Last write wins; nothing is forcibly cancelled.

use std::time::Duration;

use tokio::sync::mpsc;
use velvet_core::ScreeningResult;

/// A verdict tagged with the submission that produced it
#[derive(Debug)]
pub struct Verdict {
    pub submission: u64,
    /// Trimmed candidate name
    pub candidate: String,
    pub owner: Option<String>,
    pub result: ScreeningResult,
}

/// Issues submission ids and schedules verdict delivery
pub struct Doorman {
    delay: Duration,
    latest: u64,
    tx: mpsc::Sender<Verdict>,
}

impl Doorman {
    /// Returns the doorman and the receiving end of its verdict channel
    pub fn new(delay: Duration) -> (Self, mpsc::Receiver<Verdict>) {
        let (tx, rx) = mpsc::channel(8);
        (
            Self {
                delay,
                latest: 0,
                tx,
            },
            rx,
        )
    }

    /// Schedule a verdict for delayed delivery; returns its submission id
    pub fn deliver_later(
        &mut self,
        candidate: String,
        owner: Option<String>,
        result: ScreeningResult,
    ) -> u64 {
        self.latest += 1;
        let submission = self.latest;
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session is shutting down
            let _ = tx
                .send(Verdict {
                    submission,
                    candidate,
                    owner,
                    result,
                })
                .await;
        });

        submission
    }

    /// Whether a delivered verdict is still the current one
    pub fn is_current(&self, submission: u64) -> bool {
        submission == self.latest
    }

    /// Turn every in-flight verdict stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
