//! Transient "added to cart" messages.
//!
//! Each notification goes through `Inserted → Visible → Hiding → Removed`,
//! driven only by timers measured from the moment it was inserted:
//!
//! | at (ms) | phase     |
//! |---------|-----------|
//! | 0       | Inserted  |
//! | 100     | Visible   |
//! | 2000    | Hiding    |
//! | 2300    | Removed   |
//!
//! Timers are never cancelled. Several notifications may be alive at once,
//! each on its own timers.

/// Delay before an inserted notification becomes visible
pub const SHOW_DELAY_MS: u32 = 100;
/// Time from insertion until the notification starts hiding
pub const HIDE_AFTER_MS: u32 = 2000;
/// Length of the hide transition before the element is removed
pub const REMOVE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPhase {
    Inserted,
    Visible,
    Hiding,
    Removed,
}

impl NotificationPhase {
    /// Phase of a notification `elapsed_ms` after insertion
    #[cfg(test)]
    pub fn at(elapsed_ms: u64) -> Self {
        if elapsed_ms >= u64::from(HIDE_AFTER_MS + REMOVE_DELAY_MS) {
            Self::Removed
        } else if elapsed_ms >= u64::from(HIDE_AFTER_MS) {
            Self::Hiding
        } else if elapsed_ms >= u64::from(SHOW_DELAY_MS) {
            Self::Visible
        } else {
            Self::Inserted
        }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Visible
    }
}

/// Transitions after insertion, as `(delay from insertion, phase)`
pub fn lifecycle() -> [(u32, NotificationPhase); 3] {
    [
        (SHOW_DELAY_MS, NotificationPhase::Visible),
        (HIDE_AFTER_MS, NotificationPhase::Hiding),
        (HIDE_AFTER_MS + REMOVE_DELAY_MS, NotificationPhase::Removed),
    ]
}

pub fn added_message(name: &str) -> String {
    format!("{} added to cart!", name)
}

// ============================================================================
// Scheduling
// ============================================================================

/// Runs deferred tasks. The browser uses real timeouts; tests use a manual clock.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Schedules every transition of one notification.
///
/// `on_phase` is called once per transition, in order, when its timer fires.
pub fn schedule_lifecycle<S, F>(scheduler: &S, on_phase: F)
where
    S: Scheduler + ?Sized,
    F: Fn(NotificationPhase) + Clone + 'static,
{
    for (delay_ms, phase) in lifecycle() {
        let on_phase = on_phase.clone();
        scheduler.schedule(delay_ms, Box::new(move || on_phase(phase)));
    }
}

// ============================================================================
// Board
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub phase: NotificationPhase,
}

/// Notifications currently on the page, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationBoard {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hidden notification and returns its id.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            phase: NotificationPhase::Inserted,
        });
        id
    }

    /// Moves notification `id` forward to `phase`.
    ///
    /// Backward moves and unknown ids are ignored; `Removed` drops the entry.
    pub fn advance(&mut self, id: u64, phase: NotificationPhase) {
        if phase == NotificationPhase::Removed {
            self.items.retain(|n| n.id != id);
            return;
        }
        if let Some(notification) = self.items.iter_mut().find(|n| n.id == id) {
            if phase > notification.phase {
                notification.phase = phase;
            }
        }
    }

    pub fn phase(&self, id: u64) -> Option<NotificationPhase> {
        self.items.iter().find(|n| n.id == id).map(|n| n.phase)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Scheduler driven by an explicit clock.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<u64>,
        pending: RefCell<Vec<(u64, u64, Box<dyn FnOnce()>)>>,
        seq: Cell<u64>,
    }

    impl ManualScheduler {
        /// Runs every task due at or before `now + ms`, in fire-time order.
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    let position = pending
                        .iter()
                        .enumerate()
                        .filter(|(_, (due, _, _))| *due <= target)
                        .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                        .map(|(i, _)| i);
                    let next = position.map(|i| pending.remove(i));
                    next
                };
                match next {
                    Some((due, _, task)) => {
                        self.now.set(due);
                        task();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let seq = self.seq.get();
            self.seq.set(seq + 1);
            self.pending
                .borrow_mut()
                .push((self.now.get() + u64::from(delay_ms), seq, task));
        }
    }

    fn notify(
        board: &Rc<RefCell<NotificationBoard>>,
        scheduler: &ManualScheduler,
        name: &str,
    ) -> u64 {
        let id = board.borrow_mut().push(added_message(name));
        let board = Rc::clone(board);
        schedule_lifecycle(scheduler, move |phase| board.borrow_mut().advance(id, phase));
        id
    }

    #[test]
    fn test_phase_at_boundaries() {
        assert_eq!(NotificationPhase::at(0), NotificationPhase::Inserted);
        assert_eq!(NotificationPhase::at(99), NotificationPhase::Inserted);
        assert_eq!(NotificationPhase::at(100), NotificationPhase::Visible);
        assert_eq!(NotificationPhase::at(1999), NotificationPhase::Visible);
        assert_eq!(NotificationPhase::at(2000), NotificationPhase::Hiding);
        assert_eq!(NotificationPhase::at(2299), NotificationPhase::Hiding);
        assert_eq!(NotificationPhase::at(2300), NotificationPhase::Removed);
    }

    #[test]
    fn test_lifecycle_agrees_with_phase_at() {
        for (delay, phase) in lifecycle() {
            assert_eq!(NotificationPhase::at(u64::from(delay)), phase);
        }
    }

    #[test]
    fn test_single_notification_runs_full_lifecycle() {
        let board = Rc::new(RefCell::new(NotificationBoard::new()));
        let scheduler = ManualScheduler::default();

        let id = notify(&board, &scheduler, "Latte");
        assert_eq!(board.borrow().items()[0].message, "Latte added to cart!");
        assert_eq!(board.borrow().phase(id), Some(NotificationPhase::Inserted));

        scheduler.advance(100);
        assert_eq!(board.borrow().phase(id), Some(NotificationPhase::Visible));

        scheduler.advance(1899);
        assert_eq!(board.borrow().phase(id), Some(NotificationPhase::Visible));

        scheduler.advance(1);
        assert_eq!(board.borrow().phase(id), Some(NotificationPhase::Hiding));

        scheduler.advance(300);
        assert_eq!(board.borrow().phase(id), None);
        assert!(board.borrow().is_empty());
    }

    #[test]
    fn test_rapid_additions_are_independent() {
        let board = Rc::new(RefCell::new(NotificationBoard::new()));
        let scheduler = ManualScheduler::default();

        let first = notify(&board, &scheduler, "Latte");
        scheduler.advance(50);
        let second = notify(&board, &scheduler, "Latte");
        assert_ne!(first, second);
        assert_eq!(board.borrow().len(), 2);

        scheduler.advance(2250);
        assert_eq!(board.borrow().phase(first), None);
        assert_eq!(board.borrow().phase(second), Some(NotificationPhase::Hiding));

        scheduler.advance(50);
        assert!(board.borrow().is_empty());
    }

    #[test]
    fn test_advance_never_moves_backwards() {
        let mut board = NotificationBoard::new();
        let id = board.push("x");

        board.advance(id, NotificationPhase::Hiding);
        board.advance(id, NotificationPhase::Visible);

        assert_eq!(board.phase(id), Some(NotificationPhase::Hiding));
    }

    #[test]
    fn test_advance_unknown_id_is_ignored() {
        let mut board = NotificationBoard::new();
        board.push("x");

        board.advance(42, NotificationPhase::Removed);
        board.advance(42, NotificationPhase::Visible);

        assert_eq!(board.len(), 1);
    }
}
