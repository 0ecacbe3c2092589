//! Zero-delay deferred tasks on the single render thread
//!
//! A task deferred during a frame runs on the next [`TaskQueue::run_pending`] call, i.e. on
//! the next turn of the host's event loop, after every synchronous property write of the
//! current turn has been applied. There is no cancellation: a task that outlives its target
//! is expected to notice and do nothing.

type Task = Box<dyn FnOnce()>;

/// Cloneable handle to the queue of deferred tasks.
#[derive(Clone)]
pub struct TaskQueue {
    tx: flume::Sender<Task>,
    rx: flume::Receiver<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }

    pub fn defer(&self, task: impl FnOnce() + 'static) {
        // The queue owns a receiver, so the channel can never be disconnected here.
        let _ = self.tx.send(Box::new(task));
    }

    /// Run the tasks queued before this call. Tasks deferred while running wait for the
    /// next turn.
    pub fn run_pending(&self) -> usize {
        let queued = self.rx.len();
        let mut ran = 0;
        for _ in 0..queued {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        if ran > 0 {
            log::trace!("ran {} deferred task(s)", ran);
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn tasks_run_in_order_on_the_next_turn() {
        let queue = TaskQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = Rc::clone(&log);
            queue.defer(move || log.borrow_mut().push(i));
        }
        assert!(log.borrow().is_empty());
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.borrow(), [0, 1, 2]);
    }

    #[test]
    fn tasks_deferred_while_running_wait_a_turn() {
        let queue = TaskQueue::new();
        let inner = queue.clone();
        queue.defer(move || inner.defer(|| {}));
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(queue.pending(), 0);
    }
}
