//! Account creation completion polling
//!
//! A bounded state machine: `Pending -> Succeeded | Failed | TimedOut`.
//! Transitions are pure; [`CreationPoll::run`] drives them against a status
//! source and a [`Clock`].

use std::time::Duration;

use crate::domain::ports::{Clock, CreationStatus};

/// Number of status checks before giving up
pub const CREATION_POLL_ATTEMPTS: u32 = 15;

/// Wait between status checks
pub const CREATION_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    /// Still waiting; `attempts` status checks have been made so far
    Pending { attempts: u32 },
    Succeeded { account_id: String, attempts: u32 },
    Failed { reason: String, attempts: u32 },
    TimedOut { attempts: u32 },
}

impl PollState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Pending { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationPoll {
    max_attempts: u32,
    interval: Duration,
}

impl Default for CreationPoll {
    fn default() -> Self {
        Self {
            max_attempts: CREATION_POLL_ATTEMPTS,
            interval: CREATION_POLL_INTERVAL,
        }
    }
}

impl CreationPoll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observed status into the state
    pub fn advance(&self, state: PollState, status: CreationStatus) -> PollState {
        let attempts = match state {
            PollState::Pending { attempts } => attempts + 1,
            terminal => return terminal,
        };

        match status {
            CreationStatus::Succeeded { account_id } => PollState::Succeeded {
                account_id,
                attempts,
            },
            CreationStatus::Failed { reason } => PollState::Failed { reason, attempts },
            CreationStatus::InProgress if attempts >= self.max_attempts => {
                PollState::TimedOut { attempts }
            }
            CreationStatus::InProgress => PollState::Pending { attempts },
        }
    }

    /// Check status until a terminal state, sleeping between checks.
    ///
    /// No sleep follows the final check. Errors from `check` end the poll.
    pub fn run<C, F, E>(&self, clock: &C, mut check: F) -> Result<PollState, E>
    where
        C: Clock + ?Sized,
        F: FnMut(u32) -> Result<CreationStatus, E>,
    {
        let mut state = PollState::Pending { attempts: 0 };
        loop {
            let attempt = match state {
                PollState::Pending { attempts } => attempts + 1,
                _ => return Ok(state),
            };
            let status = check(attempt)?;
            state = self.advance(state, status);
            if state.is_terminal() {
                return Ok(state);
            }
            tracing::debug!(attempt, "account creation still in progress");
            clock.sleep(self.interval);
        }
    }
}
