//! Schedule Module - Single-slot deferred task
//!
//! A [`DebounceSlot`] holds at most one pending task. Scheduling a new task
//! replaces (and thereby cancels) the previous one, which is the whole
//! cancellation model: there is no queue, no task ids, no separate cancel
//! bookkeeping beyond [`DebounceSlot::cancel`].
//!
//! The slot does not own a thread. The host event loop pumps it by calling
//! [`DebounceSlot::run_due`] each tick (a poll loop already wakes on a
//! timeout; `next_deadline` tells it how long it may sleep). Time itself sits
//! behind the [`Clock`] trait so tests can drive expiry with a
//! [`ManualClock`] instead of sleeping.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use std::time::Duration;
//! use input_modality::{DebounceSlot, MonotonicClock};
//!
//! let slot = Rc::new(DebounceSlot::monotonic());
//! slot.schedule(Duration::from_millis(100), Box::new(|| {
//!     // runs once the deadline passes, unless replaced first
//! }));
//!
//! // in the event loop:
//! slot.run_due();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// CLOCK
// =============================================================================

/// Source of monotonic time for deadline checks.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Real monotonic clock.
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic timing tests.
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    /// Create a manual clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// =============================================================================
// DEBOUNCE SLOT
// =============================================================================

struct PendingTask {
    deadline: Instant,
    task: Box<dyn FnOnce()>,
}

/// Single-slot deferred-task handle.
///
/// Invariant: at most one task is pending. [`DebounceSlot::schedule`]
/// replaces any previous pending task, so rapid rescheduling keeps pushing
/// the deadline out (a debounce, not a queue).
pub struct DebounceSlot {
    clock: Rc<dyn Clock>,
    pending: RefCell<Option<PendingTask>>,
}

impl DebounceSlot {
    /// Create a slot driven by the given clock.
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            pending: RefCell::new(None),
        }
    }

    /// Create a slot driven by the real monotonic clock.
    pub fn monotonic() -> Self {
        Self::new(Rc::new(MonotonicClock))
    }

    /// Schedule `task` to run after `delay`, replacing any pending task.
    pub fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let deadline = self.clock.now() + delay;
        *self.pending.borrow_mut() = Some(PendingTask { deadline, task });
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }

    /// Check whether a task is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Deadline of the pending task, if any. Event loops use this to bound
    /// their poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.borrow().as_ref().map(|p| p.deadline)
    }

    /// Run the pending task if its deadline has passed.
    ///
    /// Returns true if a task ran. The slot is emptied before the task runs,
    /// so the task may itself schedule a replacement.
    pub fn run_due(&self) -> bool {
        let now = self.clock.now();
        let due = {
            let mut pending = self.pending.borrow_mut();
            match pending.as_ref() {
                Some(p) if p.deadline <= now => pending.take(),
                _ => None,
            }
        };

        match due {
            Some(p) => {
                (p.task)();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn manual_slot() -> (Rc<ManualClock>, DebounceSlot) {
        let clock = Rc::new(ManualClock::new());
        let slot = DebounceSlot::new(clock.clone());
        (clock, slot)
    }

    #[test]
    fn test_runs_after_deadline() {
        let (clock, slot) = manual_slot();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();

        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || fired_clone.set(true)),
        );
        assert!(slot.is_pending());

        // Not yet due
        clock.advance(Duration::from_millis(50));
        assert!(!slot.run_due());
        assert!(!fired.get());

        // Due
        clock.advance(Duration::from_millis(50));
        assert!(slot.run_due());
        assert!(fired.get());
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let (clock, slot) = manual_slot();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let first_clone = first.clone();
        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || first_clone.set(true)),
        );

        let second_clone = second.clone();
        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || second_clone.set(true)),
        );

        clock.advance(Duration::from_millis(200));
        slot.run_due();

        // The first task was replaced, never ran
        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn test_reschedule_pushes_deadline_out() {
        let (clock, slot) = manual_slot();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || count_clone.set(count_clone.get() + 1)),
        );

        // 60ms later, re-arm: the original deadline no longer applies
        clock.advance(Duration::from_millis(60));
        let count_clone = count.clone();
        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || count_clone.set(count_clone.get() + 1)),
        );

        // 60ms past the original deadline, still 40ms short of the new one
        clock.advance(Duration::from_millis(80));
        assert!(!slot.run_due());
        assert_eq!(count.get(), 0);

        clock.advance(Duration::from_millis(20));
        assert!(slot.run_due());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel() {
        let (clock, slot) = manual_slot();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();

        slot.schedule(
            Duration::from_millis(100),
            Box::new(move || fired_clone.set(true)),
        );
        slot.cancel();
        assert!(!slot.is_pending());

        clock.advance(Duration::from_millis(200));
        assert!(!slot.run_due());
        assert!(!fired.get());
    }

    #[test]
    fn test_next_deadline() {
        let (clock, slot) = manual_slot();
        assert!(slot.next_deadline().is_none());

        slot.schedule(Duration::from_millis(100), Box::new(|| {}));
        let deadline = slot.next_deadline().unwrap();
        assert_eq!(deadline, clock.now() + Duration::from_millis(100));
    }

    #[test]
    fn test_task_may_reschedule() {
        let (clock, slot) = manual_slot();
        // The slot is emptied before the task runs, so scheduling from
        // inside a task must not panic.
        let slot = Rc::new(slot);

        let slot_clone = slot.clone();
        slot.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                slot_clone.schedule(Duration::from_millis(10), Box::new(|| {}));
            }),
        );

        clock.advance(Duration::from_millis(10));
        assert!(slot.run_due());
        assert!(slot.is_pending());
    }
}
