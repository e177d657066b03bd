// Deferred tasks keyed by screen epoch
//
// Tasks are polled from the UI loop. A task scheduled under an older epoch
// than the current one is dropped when it comes due instead of running.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Resolve a pending join attempt with this code
    ValidateInvite { code: String },
    /// Shrink the expanded "New Chore" button back to its icon
    CollapseActionButton,
    /// Hide the "Copied!" note on the invite popup
    ClearCopiedFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ValidateInvite,
    CollapseActionButton,
    ClearCopiedFeedback,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::ValidateInvite { .. } => TaskKind::ValidateInvite,
            Self::CollapseActionButton => TaskKind::CollapseActionButton,
            Self::ClearCopiedFeedback => TaskKind::ClearCopiedFeedback,
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    task: Task,
    due: Instant,
    epoch: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    pending: Vec<Scheduled>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to come due after `delay`. Replaces any pending task
    /// of the same kind.
    pub fn schedule(&mut self, task: Task, now: Instant, delay: Duration, epoch: u64) {
        self.cancel(task.kind());
        debug!(?task, ?delay, epoch, "task scheduled");
        self.pending.push(Scheduled {
            task,
            due: now + delay,
            epoch,
        });
    }

    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.task.kind() != kind);
        before != self.pending.len()
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|s| s.task.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove every task due at `now` and return the ones still belonging to
    /// `epoch`, in the order they come due.
    pub fn take_due(&mut self, now: Instant, epoch: u64) -> Vec<Task> {
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by_key(|s| s.due);
        due.into_iter()
            .filter_map(|s| {
                if s.epoch == epoch {
                    Some(s.task)
                } else {
                    debug!(task = ?s.task, scheduled = s.epoch, current = epoch, "stale task dropped");
                    None
                }
            })
            .collect()
    }
}
