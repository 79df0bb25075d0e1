// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timer controller.
//!
//! The controller never sleeps or spawns anything itself. [`AutoDismiss::reschedule`]
//! hands back a [`Schedule`] describing the deferred hide, and the host
//! delivers [`AutoDismiss::fire`] with the same [`TimerId`] once the delay has
//! elapsed. Ids are generation numbers, so a late callback from a superseded
//! schedule is recognised and ignored.

use super::timeout::Timeout;
use std::time::Duration;

/// Identifier of one scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A hide the host must deliver back via [`AutoDismiss::fire`] after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub id: TimerId,
    pub after: Duration,
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Nothing pending: hidden, hovered, or auto-dismiss disabled.
    #[default]
    Idle,
    /// A hide is scheduled.
    Armed,
}

/// Schedules, supersedes and cancels the single pending hide of one snackbar.
#[derive(Debug, Default)]
pub struct AutoDismiss {
    /// The only live schedule, if any.
    pending: Option<Schedule>,
    /// Next generation number to hand out.
    next_id: u64,
}

impl AutoDismiss {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates any pending hide and, when `visible` with a finite
    /// timeout, schedules a new one.
    pub fn reschedule(&mut self, visible: bool, timeout: Timeout) -> Option<Schedule> {
        self.cancel();

        if !visible {
            return None;
        }
        let after = timeout.duration()?;

        let schedule = Schedule {
            id: TimerId(self.next_id),
            after,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(schedule);
        tracing::debug!(
            id = schedule.id.0,
            after_ms = u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
            "snackbar timer armed"
        );
        Some(schedule)
    }

    /// Pins the snackbar while the pointer is over it.
    pub fn on_hover_enter(&mut self) {
        self.cancel();
    }

    /// Restarts the countdown from zero once the pointer leaves.
    pub fn on_hover_leave(&mut self, visible: bool, timeout: Timeout) -> Option<Schedule> {
        self.reschedule(visible, timeout)
    }

    /// Consumes the pending schedule if `id` is still the live one.
    ///
    /// Returns `true` when the owner must now hide the snackbar. Stale ids
    /// leave the controller untouched.
    pub fn fire(&mut self, id: TimerId) -> bool {
        match self.pending {
            Some(schedule) if schedule.id == id => {
                self.pending = None;
                tracing::debug!(id = id.0, "snackbar timer fired");
                true
            }
            _ => {
                tracing::trace!(id = id.0, "ignoring stale snackbar timer");
                false
            }
        }
    }

    /// Drops the pending schedule without firing it.
    ///
    /// Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(schedule) => {
                tracing::debug!(id = schedule.id.0, "snackbar timer cancelled");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.pending.is_some() {
            TimerState::Armed
        } else {
            TimerState::Idle
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the live schedule, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Schedule> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Timeout {
        Timeout::After(Duration::from_secs(value))
    }

    #[test]
    fn starts_idle() {
        let timer = AutoDismiss::new();
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.pending().is_none());
    }

    #[test]
    fn reschedule_arms_when_visible() {
        let mut timer = AutoDismiss::new();
        let schedule = timer.reschedule(true, secs(3)).expect("should arm");

        assert_eq!(schedule.after, Duration::from_secs(3));
        assert_eq!(timer.state(), TimerState::Armed);
        assert_eq!(timer.pending(), Some(schedule));
    }

    #[test]
    fn hidden_or_never_stays_idle() {
        let mut timer = AutoDismiss::new();
        assert!(timer.reschedule(false, secs(3)).is_none());
        assert!(timer.reschedule(true, Timeout::Never).is_none());
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn reschedule_supersedes_previous_id() {
        let mut timer = AutoDismiss::new();
        let first = timer.reschedule(true, secs(3)).expect("first");
        let second = timer.reschedule(true, secs(3)).expect("second");

        assert_ne!(first.id, second.id);
        assert!(!timer.fire(first.id));
        assert!(timer.is_armed());
        assert!(timer.fire(second.id));
        assert!(!timer.is_armed());
    }

    #[test]
    fn fire_is_one_shot() {
        let mut timer = AutoDismiss::new();
        let schedule = timer.reschedule(true, secs(1)).expect("armed");

        assert!(timer.fire(schedule.id));
        assert!(!timer.fire(schedule.id));
    }

    #[test]
    fn hover_enter_cancels_and_leave_rearms() {
        let mut timer = AutoDismiss::new();
        let before = timer.reschedule(true, secs(3)).expect("armed");

        timer.on_hover_enter();
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(!timer.fire(before.id));

        let after = timer.on_hover_leave(true, secs(3)).expect("rearmed");
        assert_ne!(before.id, after.id);
        assert!(timer.is_armed());
    }

    #[test]
    fn hover_leave_while_hidden_does_nothing() {
        let mut timer = AutoDismiss::new();
        timer.on_hover_enter();
        assert!(timer.on_hover_leave(false, secs(3)).is_none());
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_reports_whether_something_was_pending() {
        let mut timer = AutoDismiss::new();
        assert!(!timer.cancel());
        timer.reschedule(true, secs(2));
        assert!(timer.cancel());
        assert!(!timer.cancel());
    }

    #[test]
    fn hiding_cancels_pending() {
        let mut timer = AutoDismiss::new();
        let schedule = timer.reschedule(true, secs(2)).expect("armed");
        assert!(timer.reschedule(false, secs(2)).is_none());
        assert!(!timer.fire(schedule.id));
    }

    #[test]
    fn independent_controllers_do_not_share_state() {
        let mut a = AutoDismiss::new();
        let mut b = AutoDismiss::new();
        let from_a = a.reschedule(true, secs(1)).expect("a");
        b.reschedule(true, secs(1)).expect("b");

        a.cancel();
        assert!(b.is_armed());
        assert!(!a.fire(from_a.id));
    }

    #[test]
    fn huge_timeout_arms_with_exact_duration() {
        let mut timer = AutoDismiss::new();
        let schedule = timer
            .reschedule(true, Timeout::After(Duration::MAX))
            .expect("armed");
        assert_eq!(schedule.after, Duration::MAX);
        assert!(timer.fire(schedule.id));
    }
}
