//! Cooldown gate in front of the two LLM-calling operations.
//!
//! Each gate remembers when it last admitted a call. A call arriving within
//! the cooldown window of that instant is rejected and dropped; nothing is
//! queued and nothing backs off. Rejected calls never move the timestamp.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Default cooldown between two admitted calls on the same gate.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// Source of "now". Injected so the cooldown can be driven from tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The operations guarded by a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateId {
    Analyze,
    Generate,
}

impl GateId {
    fn action(self) -> &'static str {
        match self {
            GateId::Analyze => "analyze a job description",
            GateId::Generate => "generate a resume",
        }
    }
}

#[derive(Debug, Default)]
struct GateTimestamps {
    analyze: Option<DateTime<Utc>>,
    generate: Option<DateTime<Utc>>,
}

impl GateTimestamps {
    fn slot(&mut self, gate: GateId) -> &mut Option<DateTime<Utc>> {
        match gate {
            GateId::Analyze => &mut self.analyze,
            GateId::Generate => &mut self.generate,
        }
    }
}

/// Process-wide cooldown state for the analyze and generate gates.
///
/// Check-and-set happens under one lock, so two concurrent callers can never
/// both be admitted inside the same window.
#[derive(Debug)]
pub struct RateGate {
    cooldown: Duration,
    last_admitted: Mutex<GateTimestamps>,
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl RateGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_admitted: Mutex::new(GateTimestamps::default()),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Returns `true` and records `now` if the gate is open, `false` otherwise.
    pub fn admit(&self, gate: GateId, now: DateTime<Utc>) -> bool {
        // A poisoned lock still holds valid timestamps.
        let mut guard = self
            .last_admitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let slot = guard.slot(gate);

        if let Some(last) = *slot {
            let elapsed = now.signed_duration_since(last);
            // Clock stepping backwards counts as "inside the window".
            let within_window = match elapsed.to_std() {
                Ok(elapsed) => elapsed < self.cooldown,
                Err(_) => true,
            };
            if within_window {
                return false;
            }
        }

        *slot = Some(now);
        true
    }

    /// User-facing text shown when `gate` rejects a call.
    pub fn rejection_message(&self, gate: GateId) -> String {
        format!(
            "Slow down! You can only {} every {} seconds.",
            gate.action(),
            self.cooldown.as_secs()
        )
    }
}
