//! Rebuild debouncing
//!
//! Every edit cancels the pending rebuild timer and schedules a fresh one, so
//! only a quiet period of `delay` after the last edit produces a rebuild.
//! Timers sit behind the [`Timers`] trait so tests can drive a simulated
//! clock instead of sleeping.

use std::time::{Duration, Instant};

/// Default quiet period before a rebuild
pub const REBUILD_DEBOUNCE_MS: u64 = 300;

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Cancellable one-shot timers
pub trait Timers {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
    /// Remove and return every timer whose deadline has passed, oldest first
    fn expired(&mut self) -> Vec<TimerId>;
}

/// Deadline bookkeeping shared by both clocks
#[derive(Debug)]
struct TimerTable<T> {
    next_id: u64,
    pending: Vec<(TimerId, T)>,
}

impl<T> Default for TimerTable<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: Copy + Ord> TimerTable<T> {
    fn insert(&mut self, deadline: T) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((id, deadline));
        id
    }

    fn remove(&mut self, id: TimerId) {
        self.pending.retain(|(pending, _)| *pending != id);
    }

    fn drain_due(&mut self, now: T) -> Vec<TimerId> {
        let mut due: Vec<(TimerId, T)> = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id.0));
        due.into_iter().map(|(id, _)| id).collect()
    }

    fn next_deadline(&self) -> Option<T> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }
}

/// Simulated clock; time only moves through [`ManualTimers::advance`]
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    table: TimerTable<Duration>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.table.pending.len()
    }
}

impl Timers for ManualTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.table.insert(self.now + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.table.remove(id);
    }

    fn expired(&mut self) -> Vec<TimerId> {
        self.table.drain_due(self.now)
    }
}

/// Wall-clock timers, polled from the runtime loop
#[derive(Debug, Default)]
pub struct SystemTimers {
    table: TimerTable<Instant>,
}

impl SystemTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time until the earliest pending deadline, if any
    pub fn time_until_next(&self) -> Option<Duration> {
        self.table
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Timers for SystemTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.table.insert(Instant::now() + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.table.remove(id);
    }

    fn expired(&mut self) -> Vec<TimerId> {
        self.table.drain_due(Instant::now())
    }
}

/// Debounce state for one document: at most one pending rebuild timer
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    delay: Duration,
    pending: Option<TimerId>,
}

impl UpdateScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Supersede any pending rebuild with a new timer
    pub fn on_edit(&mut self, timers: &mut dyn Timers) -> TimerId {
        if let Some(old) = self.pending.take() {
            timers.cancel(old);
        }
        let id = timers.schedule(self.delay);
        self.pending = Some(id);
        id
    }

    /// Returns true if `id` is the surviving timer and a rebuild should run
    pub fn on_timer_fired(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            tracing::debug!("Ignoring superseded rebuild timer {:?}", id);
            false
        }
    }

    /// Drop the pending rebuild (document closed or replaced)
    pub fn cancel(&mut self, timers: &mut dyn Timers) {
        if let Some(old) = self.pending.take() {
            timers.cancel(old);
        }
    }
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(REBUILD_DEBOUNCE_MS))
    }
}
