use std::time::Duration;

/// Handle for a scheduled task; pass it back to [`TimerQueue::cancel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    token: TimerToken,
    task: T,
}

/// Single-threaded queue of delayed tasks keyed by session time.
///
/// Tasks come out in due order; ties keep scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, task: T) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        // insert after every entry due at or before `due`
        let at = self.pending.partition_point(|p| p.due <= due);
        self.pending.insert(at, Pending { due, token, task });
        token
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.pending.iter().position(|p| p.token == token) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop every pending task matching `pred`; returns how many were dropped.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !pred(&p.task));
        before - self.pending.len()
    }

    /// Next task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        if self.pending.first().is_some_and(|p| p.due <= now) {
            Some(self.pending.remove(0).task)
        } else {
            None
        }
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|p| p.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_pop_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(Duration::from_millis(10), "a");
        q.schedule(Duration::from_millis(5), "b");
        q.schedule(Duration::from_millis(10), "c");
        let now = Duration::from_millis(10);
        assert_eq!(q.pop_due(now), Some("b"));
        assert_eq!(q.pop_due(now), Some("a"));
        assert_eq!(q.pop_due(now), Some("c"));
        assert_eq!(q.pop_due(now), None);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut q = TimerQueue::new();
        let t = q.schedule(Duration::from_millis(1), 1);
        q.schedule(Duration::from_millis(2), 2);
        assert!(q.cancel(t));
        assert!(!q.cancel(t));
        assert_eq!(q.pop_due(Duration::from_secs(1)), Some(2));
        assert!(q.is_empty());
    }
}
