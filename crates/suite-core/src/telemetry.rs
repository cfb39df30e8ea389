//! Telemetry simulator: timer-driven mutation of the agent roster.
//!
//! Emulates live platform activity by bumping the task counter of every
//! `Active` agent once per interval. The timer is a virtual clock: callers
//! feed `Instant`s into [`TelemetrySimulator::poll`], so the schedule is
//! deterministic under test and needs no background task.

use std::time::{Duration, Instant};

use strum::Display;
use tracing::debug;

use crate::random::RandomSource;

/// Interval between simulated activity ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Maximum per-tick task increment (exclusive); draws are `floor(r * 5)`.
const TASK_INCREMENT_RANGE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AgentStatus {
    Active,
    Paused,
    Training,
}

/// One row of the agent roster. Identity is `id`; display order is
/// insertion order of the seed list.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub status: AgentStatus,
    /// Measured efficiency; `None` renders as "N/A".
    pub efficiency: Option<String>,
    pub tasks: u64,
}

/// Proof of a running timer. Stale handles (from before a re-start) are
/// ignored by [`TelemetrySimulator::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

#[derive(Debug)]
struct Timer {
    interval: Duration,
    next_due: Instant,
    generation: u64,
}

#[derive(Debug)]
pub struct TelemetrySimulator {
    agents: Vec<Agent>,
    timer: Option<Timer>,
    generation: u64,
}

impl TelemetrySimulator {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            agents,
            timer: None,
            generation: 0,
        }
    }

    /// Simulator over the fixed catalog roster.
    pub fn seeded() -> Self {
        Self::new(crate::catalog::agent_seed())
    }

    /// Current roster snapshot, in display order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Begin (or restart) the recurring timer. Restarting replaces any
    /// previous timer, so re-initialization can never double ticks.
    pub fn start(&mut self, interval: Duration, now: Instant) -> TickHandle {
        let interval = interval.max(Duration::from_millis(1));
        self.generation += 1;
        self.timer = Some(Timer {
            interval,
            next_due: now + interval,
            generation: self.generation,
        });
        debug!(?interval, generation = self.generation, "telemetry timer started");
        TickHandle {
            generation: self.generation,
        }
    }

    /// Cancel the timer identified by `handle`. Stale handles and repeated
    /// stops are no-ops; once stopped, no further tick is ever delivered
    /// for that handle.
    pub fn stop(&mut self, handle: TickHandle) {
        match &self.timer {
            Some(timer) if timer.generation == handle.generation => {
                self.timer = None;
                debug!(generation = handle.generation, "telemetry timer stopped");
            }
            _ => {}
        }
    }

    /// Advance the virtual clock, applying one tick per elapsed interval.
    /// Returns the number of ticks applied.
    pub fn poll(&mut self, now: Instant, rng: &mut dyn RandomSource) -> u32 {
        let ticks = match self.timer.as_mut() {
            Some(timer) => {
                let mut due = 0u32;
                while now >= timer.next_due {
                    timer.next_due += timer.interval;
                    due += 1;
                }
                due
            }
            None => return 0,
        };
        for _ in 0..ticks {
            self.tick(rng);
        }
        ticks
    }

    /// Apply one activity tick: every `Active` agent gains a uniform
    /// `[0, 5)` task increment; everyone else is untouched. The roster is
    /// replaced as a whole so observers never see a partial update.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        self.agents = self
            .agents
            .iter()
            .map(|agent| {
                if agent.status == AgentStatus::Active {
                    let increment = (rng.next_f64() * TASK_INCREMENT_RANGE).floor() as u64;
                    Agent {
                        tasks: agent.tasks + increment,
                        ..agent.clone()
                    }
                } else {
                    agent.clone()
                }
            })
            .collect();
    }

    /// Flip a single agent between `Active` and `Paused`. `Training` agents
    /// and unknown ids are left alone.
    pub fn toggle_status(&mut self, id: u32) {
        if let Some(agent) = self.agents.iter_mut().find(|a| a.id == id) {
            agent.status = match agent.status {
                AgentStatus::Active => AgentStatus::Paused,
                AgentStatus::Paused => AgentStatus::Active,
                AgentStatus::Training => return,
            };
            debug!(id, status = %agent.status, "agent status toggled");
        }
    }
}
