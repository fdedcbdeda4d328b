//! Submission lifecycle for one mounted form. The machine owns the phase and
//! the last result message; the controller may only read them and request
//! transitions through the three operations below. Each attempt gets an
//! epoch-backed ticket so an outcome that lands after the form was reset is
//! discarded instead of resurrecting stale state.

use super::types::SubmitOutcome;

/// Lifecycle phase of the current submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Pairs an in-flight request with the submission generation that started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// State machine behind the submit button, spinner, and result banners.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    phase: Phase,
    message: String,
    epoch: u64,
    success_message: &'static str,
    fallback_error: &'static str,
}

impl Submission {
    pub fn new(success_message: &'static str, fallback_error: &'static str) -> Self {
        Self {
            phase: Phase::Idle,
            message: String::new(),
            epoch: 0,
            success_message,
            fallback_error,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last success or failure message; empty while idle or submitting.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Starts a new attempt and returns its ticket. Only legal from `Idle`:
    /// a re-entrant submit while one is in flight is a no-op, and a shown
    /// result must be reset away first. Every attempt passes through
    /// `Submitting`; no outcome can skip it.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.epoch += 1;
        self.phase = Phase::Submitting;
        self.message.clear();
        Some(Ticket(self.epoch))
    }

    /// Applies the outcome of the attempt identified by `ticket`. Outcomes
    /// carrying a stale ticket (the form was reset or re-submitted since)
    /// are dropped.
    pub fn finish(&mut self, ticket: Ticket, outcome: &SubmitOutcome) {
        if self.phase != Phase::Submitting || ticket.0 != self.epoch {
            return;
        }
        match outcome {
            SubmitOutcome::Accepted { .. } => {
                self.phase = Phase::Succeeded;
                self.message = self.success_message.to_string();
            }
            SubmitOutcome::Rejected { message } | SubmitOutcome::Unreachable { message } => {
                self.phase = Phase::Failed;
                self.message = if message.trim().is_empty() {
                    self.fallback_error.to_string()
                } else {
                    message.clone()
                };
            }
        }
    }

    /// Returns to `Idle` with no message, from any phase.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = Phase::Idle;
        self.message.clear();
    }
}
