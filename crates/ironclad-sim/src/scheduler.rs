//! Scheduled re-plan tasks.
//!
//! Replaces a host timer manager with an explicit task list the engine
//! scans each tick. Tasks are one-shot and owned: cancellation removes
//! every entry for an owner token, and a stale firing against an owner
//! that no longer holds a tank is a no-op at the call site.

/// One pending task: fire at `fire_tick` on behalf of `owner`.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledTask {
    pub fire_tick: u64,
    pub owner: u32,
}

/// Pending one-shot tasks, keyed by owner token.
#[derive(Debug, Default)]
pub struct TaskSchedule {
    tasks: Vec<ScheduledTask>,
}

impl TaskSchedule {
    /// Add a one-shot task for `owner`.
    pub fn schedule(&mut self, owner: u32, fire_tick: u64) {
        self.tasks.push(ScheduledTask { fire_tick, owner });
    }

    /// Remove every pending task belonging to `owner`.
    pub fn cancel(&mut self, owner: u32) {
        self.tasks.retain(|task| task.owner != owner);
    }

    /// Remove and return the owners of all tasks due at `current_tick`.
    pub fn drain_due(&mut self, current_tick: u64) -> Vec<u32> {
        let mut due = Vec::new();
        self.tasks.retain(|task| {
            if task.fire_tick <= current_tick {
                due.push(task.owner);
                false
            } else {
                true
            }
        });
        due
    }

    /// Whether `owner` has any task pending.
    pub fn has_pending(&self, owner: u32) -> bool {
        self.tasks.iter().any(|task| task.owner == owner)
    }
}
