use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::timer::TimerQueue;

/// Wraps `callback` so that it runs at most once per `delay`, dropping the calls in between.
///
/// The reference time is taken when the wrapper is created: a call arriving within `delay`
/// of the creation is dropped, even if it is the first one.
pub fn throttle<T, A, F>(
    timer_queue: T,
    delay: Duration,
    callback: F,
) -> impl Fn(A)
where
    T: TimerQueue,
    F: Fn(A),
{
    let last_fired = Cell::new(timer_queue.now());
    move |args: A| {
        let elapsed = timer_queue.now().saturating_sub(last_fired.get());
        if elapsed < delay {
            return;
        }
        callback(args);
        last_fired.set(timer_queue.now());
    }
}

/// Wraps `callback` so that it only runs after `delay` has passed without any new call.
///
/// Each call cancels the pending invocation and schedules a new one with its own arguments,
/// a burst of calls therefore results in a single trailing invocation.
pub fn debounce<T, A, F>(
    timer_queue: T,
    delay: Duration,
    callback: F,
) -> impl Fn(A)
where
    T: TimerQueue,
    A: 'static,
    F: Fn(A) + 'static,
{
    let callback = Rc::new(callback);
    let pending_timer: Rc<Cell<Option<T::Handle>>> = Rc::new(Cell::new(None));
    move |args: A| {
        if let Some(handle) = pending_timer.take() {
            timer_queue.clear_timeout(handle);
        }
        let callback = callback.clone();
        let fired_timer = pending_timer.clone();
        let scheduled = timer_queue.set_timeout(
            Box::new(move || {
                fired_timer.take();
                callback(args);
            }),
            delay,
        );
        match scheduled {
            Ok(handle) => pending_timer.set(Some(handle)),
            Err(e) => log::error!("Debounced call dropped: {e}"),
        }
    }
}
