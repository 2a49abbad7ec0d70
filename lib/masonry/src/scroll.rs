use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{GetUntracked, Signal};

use masonry_utils::constants::{DEFAULT_SCROLL_DELAY_MS, REACH_BOTTOM_EVENT, REACH_BOTTOM_THRESHOLD};
use masonry_utils::errors::MasonryError;
use masonry_utils::rate_limit::debounce;
use masonry_utils::timer::TimerQueue;

/// Parameters of the scroll trigger, `is_over` is owned by the host and only read here.
#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    /// signal indicating that no more content should be requested, e.g. when all data is loaded or while loading
    pub is_over: Signal<bool>,
    /// quiet period after the last scroll event before the position is evaluated
    pub delay: Duration,
}

impl ScrollConfig {
    pub fn new(is_over: impl Into<Signal<bool>>, delay: Duration) -> Self {
        Self {
            is_over: is_over.into(),
            delay,
        }
    }

    pub fn with_default_delay(is_over: impl Into<Signal<bool>>) -> Self {
        Self::new(is_over, Duration::from_millis(DEFAULT_SCROLL_DELAY_MS))
    }
}

/// Global source of scroll events and document geometry.
pub trait ScrollSource: 'static {
    type Listener;

    fn add_scroll_listener(&self, handler: Rc<dyn Fn()>) -> Result<Self::Listener, MasonryError>;

    fn remove_scroll_listener(&self, listener: Self::Listener) -> Result<(), MasonryError>;

    /// Distance scrolled from the top of the document
    fn scroll_top(&self) -> i32;

    /// Height of the visible viewport
    fn client_height(&self) -> i32;
}

/// Reference to the marker element placed at the bottom of the grid.
pub trait SentinelRef: 'static {
    /// Vertical offset of the marker from the document origin, `None` while it is not mounted
    fn offset_top(&self) -> Option<i32>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollGeometry {
    pub scroll_top: i32,
    pub client_height: i32,
    pub loading_offset_top: i32,
}

impl ScrollGeometry {
    pub fn read<S: ScrollSource, R: SentinelRef>(source: &S, sentinel: &R) -> Self {
        Self {
            scroll_top: source.scroll_top(),
            client_height: source.client_height(),
            loading_offset_top: sentinel.offset_top().unwrap_or_default(),
        }
    }

    /// Distance between the sentinel and the bottom of the viewport, negative once the sentinel is visible
    pub fn distance_to_sentinel(&self) -> i32 {
        self.loading_offset_top
            .saturating_sub(self.scroll_top)
            .saturating_sub(self.client_height)
    }

    pub fn has_reached_bottom(&self) -> bool {
        self.distance_to_sentinel() < REACH_BOTTOM_THRESHOLD
    }
}

/// Active scroll listener emitting the reach-bottom event. The listener is removed when the trigger is dropped.
pub struct ScrollTrigger<S: ScrollSource> {
    source: Rc<S>,
    listener: Option<S::Listener>,
    is_active: Rc<Cell<bool>>,
}

impl<S: ScrollSource> ScrollTrigger<S> {
    /// Registers a debounced scroll listener on `source` that calls `on_reach_bottom` when the
    /// sentinel gets close to the viewport and `config.is_over` is false.
    pub fn activate<R, T, E>(
        source: S,
        sentinel: R,
        timer_queue: T,
        config: ScrollConfig,
        on_reach_bottom: E,
    ) -> Result<Self, MasonryError>
    where
        R: SentinelRef,
        T: TimerQueue,
        E: Fn() + 'static,
    {
        let source = Rc::new(source);
        let is_active = Rc::new(Cell::new(true));

        let on_settled_scroll = {
            let source = source.clone();
            let is_active = is_active.clone();
            let is_over = config.is_over;
            move |()| {
                // a timer scheduled before deactivation can still fire
                if !is_active.get() || is_over.get_untracked() {
                    return;
                }
                let geometry = ScrollGeometry::read(source.as_ref(), &sentinel);
                log::trace!("Scroll settled, distance to sentinel: {}", geometry.distance_to_sentinel());
                if geometry.has_reached_bottom() {
                    log::debug!("Emit {REACH_BOTTOM_EVENT}: {geometry:?}");
                    on_reach_bottom();
                }
            }
        };
        let debounced_scroll = debounce(timer_queue, config.delay, on_settled_scroll);
        let handler: Rc<dyn Fn()> = Rc::new(move || debounced_scroll(()));

        let listener = source.add_scroll_listener(handler)?;
        log::debug!("Scroll trigger activated with delay {:?}", config.delay);

        Ok(Self {
            source,
            listener: Some(listener),
            is_active,
        })
    }

    pub fn is_active(&self) -> bool {
        self.is_active.get()
    }

    /// Removes the scroll listener, equivalent to dropping the trigger.
    pub fn deactivate(self) {
        drop(self);
    }
}

impl<S: ScrollSource> Drop for ScrollTrigger<S> {
    fn drop(&mut self) {
        self.is_active.set(false);
        if let Some(listener) = self.listener.take() {
            match self.source.remove_scroll_listener(listener) {
                Ok(()) => log::debug!("Scroll trigger deactivated."),
                Err(e) => log::error!("{e}"),
            }
        }
    }
}
