//! Cooperative timer queue over a virtual millisecond clock.
//!
//! The scheduler never sleeps. The host calls [`Scheduler::pop_due`] in a
//! loop to drain every task due up to some instant, runs each one, then
//! moves the clock with [`Scheduler::advance_to`]. Tasks may schedule or
//! cancel other timers while they run; a cancelled timer never fires.

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work a timer can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// End of the pre-snap countdown.
    BeginPlay,
    /// One defender AI tick.
    DefenderTick,
    /// One second off the game clock.
    ClockTick,
    /// End of the post-tackle pause.
    TackleResolved,
    /// Toggle of the touchdown banner.
    TouchdownBlink,
    /// Delayed crowd reaction after the opening kickoff.
    CrowdCue,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    due: u64,
    interval: Option<u64>,
    task: Task,
}

/// Pending one-shot and repeating timers.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    /// An empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Number of timers still pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Run `task` once, `delay` ms from now.
    pub fn schedule_once(&mut self, delay: u64, task: Task) -> TimerId {
        self.push(delay, None, task)
    }

    /// Run `task` every `interval` ms, first after one interval.
    ///
    /// An interval of zero is treated as one millisecond so that draining
    /// always makes progress.
    pub fn schedule_repeating(&mut self, interval: u64, task: Task) -> TimerId {
        let interval = interval.max(1);
        self.push(interval, Some(interval), task)
    }

    fn push(&mut self, delay: u64, interval: Option<u64>, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now.saturating_add(delay),
            interval,
            task,
        });
        id
    }

    /// Drop a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Drop every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Take the earliest timer due at or before `until`.
    ///
    /// Ties are broken in scheduling order. The clock moves to the timer's
    /// due time; repeating timers are re-armed one interval later under the
    /// same id.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, Task)> {
        let (index, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;

        let timer = self.timers[index];
        self.now = self.now.max(timer.due);
        match timer.interval {
            Some(interval) => self.timers[index].due = timer.due.saturating_add(interval),
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some((timer.id, timer.task))
    }

    /// Move the clock forward to `t`. Never moves it backwards.
    pub fn advance_to(&mut self, t: u64) {
        self.now = self.now.max(t);
    }
}
