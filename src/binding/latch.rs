//! One-shot completion latch between a `bind_in` task and the thread that
//! waits for it.

use std::mem;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

/// What the waiting side learns about a task.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome<A> {
    Pending,
    Completed(A),
    Panicked(String),
    Dropped,
}

#[derive(Debug)]
pub(crate) struct Latch<A> {
    outcome: Mutex<Outcome<A>>,
    signal: Condvar,
}

impl<A> Latch<A> {
    fn settle(&self, outcome: Outcome<A>) {
        let mut slot = self.outcome.lock();
        if matches!(*slot, Outcome::Pending) {
            *slot = outcome;
            self.signal.notify_all();
        }
    }

    /// Blocks until the task completes, panics, or is dropped.
    pub(crate) fn wait(&self) -> Outcome<A> {
        let mut slot = self.outcome.lock();
        while matches!(*slot, Outcome::Pending) {
            self.signal.wait(&mut slot);
        }
        mem::replace(&mut *slot, Outcome::Dropped)
    }
}

/// The task's half of the latch.
///
/// Dropping it without calling [`Completion::complete`] or
/// [`Completion::panicked`] settles the latch as [`Outcome::Dropped`], so a
/// context that discards the task never leaves the waiter blocked.
#[derive(Debug)]
pub(crate) struct Completion<A> {
    latch: Arc<Latch<A>>,
    settled: bool,
}

impl<A> Completion<A> {
    pub(crate) fn complete(mut self, value: A) {
        self.settled = true;
        self.latch.settle(Outcome::Completed(value));
    }

    pub(crate) fn panicked(mut self, message: String) {
        self.settled = true;
        self.latch.settle(Outcome::Panicked(message));
    }
}

impl<A> Drop for Completion<A> {
    fn drop(&mut self) {
        if !self.settled {
            self.latch.settle(Outcome::Dropped);
        }
    }
}

/// Creates a connected latch and completion.
pub(crate) fn latch<A>() -> (Arc<Latch<A>>, Completion<A>) {
    let latch = Arc::new(Latch {
        outcome: Mutex::new(Outcome::Pending),
        signal: Condvar::new(),
    });
    let completion = Completion {
        latch: Arc::clone(&latch),
        settled: false,
    };
    (latch, completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn completion_on_another_thread_wakes_the_waiter() {
        let (latch, completion) = latch();
        let worker = thread::spawn(move || completion.complete(42));
        assert_eq!(latch.wait(), Outcome::Completed(42));
        worker.join().unwrap();
    }

    #[rstest]
    fn dropped_completion_settles_as_dropped() {
        let (latch, completion) = latch::<i32>();
        drop(completion);
        assert_eq!(latch.wait(), Outcome::Dropped);
    }

    #[rstest]
    fn panics_are_reported_with_their_message() {
        let (latch, completion) = latch::<i32>();
        completion.panicked("boom".to_string());
        assert_eq!(latch.wait(), Outcome::Panicked("boom".to_string()));
    }
}
