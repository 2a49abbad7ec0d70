use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::errors::MasonryError;

#[cfg(feature = "browser")]
pub use browser::BrowserTimerQueue;

/// Clock and deferred callbacks used by the rate limiters.
pub trait TimerQueue: Clone + 'static {
    type Handle: 'static;

    /// Current time, measured from an origin fixed by the implementation.
    fn now(&self) -> Duration;

    /// Schedules `callback` to run once after `delay`.
    fn set_timeout(
        &self,
        callback: Box<dyn FnOnce()>,
        delay: Duration,
    ) -> Result<Self::Handle, MasonryError>;

    /// Cancels a scheduled callback. Clearing a timer that already fired is a no-op.
    fn clear_timeout(&self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimerHandle {
    deadline: Duration,
    timer_id: u64,
}

#[derive(Default)]
struct ManualTimerState {
    now: Duration,
    next_timer_id: u64,
    timers: BTreeMap<ManualTimerHandle, Box<dyn FnOnce()>>,
}

/// Timer queue driven by a virtual clock, timers only fire when the clock is advanced.
#[derive(Clone, Default)]
pub struct ManualTimerQueue {
    state: Rc<RefCell<ManualTimerState>>,
}

impl ManualTimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`, running every timer that becomes due.
    pub fn advance(&self, duration: Duration) {
        let target = self.now().saturating_add(duration);
        self.advance_to(target);
    }

    /// Moves the clock to `instant`, running due timers in deadline order.
    /// While a timer runs, `now` equals its deadline.
    pub fn advance_to(&self, instant: Duration) {
        loop {
            let next_callback = {
                let mut state = self.state.borrow_mut();
                let due_handle = state
                    .timers
                    .first_key_value()
                    .map(|(handle, _)| *handle)
                    .filter(|handle| handle.deadline <= instant);
                match due_handle {
                    Some(handle) => {
                        state.now = state.now.max(handle.deadline);
                        state.timers.remove(&handle)
                    }
                    None => None,
                }
            };
            match next_callback {
                // the state is released so the callback can schedule or clear timers
                Some(callback) => callback(),
                None => break,
            }
        }
        let mut state = self.state.borrow_mut();
        state.now = state.now.max(instant);
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl TimerQueue for ManualTimerQueue {
    type Handle = ManualTimerHandle;

    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn set_timeout(
        &self,
        callback: Box<dyn FnOnce()>,
        delay: Duration,
    ) -> Result<Self::Handle, MasonryError> {
        let mut state = self.state.borrow_mut();
        let deadline = state.now.checked_add(delay).ok_or_else(|| {
            MasonryError::TimerScheduling(format!("delay {delay:?} overflows the clock at {:?}", state.now))
        })?;
        let handle = ManualTimerHandle {
            deadline,
            timer_id: state.next_timer_id,
        };
        state.next_timer_id += 1;
        state.timers.insert(handle, callback);
        Ok(handle)
    }

    fn clear_timeout(&self, handle: Self::Handle) {
        self.state.borrow_mut().timers.remove(&handle);
    }
}

#[cfg(feature = "browser")]
mod browser {
    use std::time::Duration;

    use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
    use web_sys::js_sys::Date;

    use crate::errors::MasonryError;
    use crate::timer::TimerQueue;

    /// Timer queue backed by the browser's `setTimeout` and `Date.now()`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTimerQueue;

    impl TimerQueue for BrowserTimerQueue {
        type Handle = TimeoutHandle;

        fn now(&self) -> Duration {
            Duration::from_millis(Date::now() as u64)
        }

        fn set_timeout(
            &self,
            callback: Box<dyn FnOnce()>,
            delay: Duration,
        ) -> Result<Self::Handle, MasonryError> {
            set_timeout_with_handle(callback, delay).map_err(MasonryError::timer_scheduling)
        }

        fn clear_timeout(&self, handle: Self::Handle) {
            handle.clear();
        }
    }
}
