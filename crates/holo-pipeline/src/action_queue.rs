use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Pending depth above which [`ActionQueue::offer`] rejects new work.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Deferred work run against the consumer context `C`.
pub type Action<C> = Box<dyn FnOnce(&mut C) + Send>;

/// Thread-safe FIFO of deferred actions with a drop-newest admission policy.
///
/// Any thread may enqueue; a single consumer calls [`drain_all`] once per
/// tick. The lock is held only to push or pop one entry, never while an
/// action runs, so an action may enqueue more work. [`offer`] refuses an
/// action when more than `max_depth` entries are already pending; the caller
/// is expected to discard that work rather than retry.
///
/// [`drain_all`]: ActionQueue::drain_all
/// [`offer`]: ActionQueue::offer
pub struct ActionQueue<C> {
    entries: Arc<Mutex<VecDeque<Action<C>>>>,
    max_depth: usize,
}

impl<C> Clone for ActionQueue<C> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_depth: self.max_depth,
        }
    }
}

impl<C> Default for ActionQueue<C> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<C> std::fmt::Debug for ActionQueue<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionQueue")
            .field("depth", &self.depth())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<C> ActionQueue<C> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_depth,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Action<C>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an action unconditionally.
    pub fn enqueue(&self, action: impl FnOnce(&mut C) + Send + 'static) {
        self.lock().push_back(Box::new(action));
    }

    /// Append an action unless the queue is saturated. Returns whether it was accepted.
    pub fn offer(&self, action: impl FnOnce(&mut C) + Send + 'static) -> bool {
        let mut entries = self.lock();
        if entries.len() > self.max_depth {
            return false;
        }
        entries.push_back(Box::new(action));
        true
    }

    /// Number of pending actions.
    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    /// Whether new work offered now would be dropped.
    pub fn is_saturated(&self) -> bool {
        self.depth() > self.max_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Run pending actions oldest first until the queue is empty, including
    /// any enqueued while draining. Returns how many ran.
    pub fn drain_all(&self, ctx: &mut C) -> usize {
        let mut ran = 0;
        loop {
            let next = self.lock().pop_front();
            let Some(action) = next else {
                break;
            };
            action(ctx);
            ran += 1;
        }
        ran
    }
}
