#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use masonry_core::scroll::{ScrollSource, SentinelRef};
use masonry_utils::errors::MasonryError;

#[derive(Default)]
struct ScrollState {
    scroll_top: i32,
    client_height: i32,
    listeners: Vec<(u64, Rc<dyn Fn()>)>,
    next_listener_id: u64,
    reject_listeners: bool,
    reject_removal: bool,
}

/// Scroll source whose geometry and events are driven by the test
#[derive(Clone, Default)]
pub struct ScriptedScrollSource {
    state: Rc<RefCell<ScrollState>>,
}

impl ScriptedScrollSource {
    pub fn new(scroll_top: i32, client_height: i32) -> Self {
        let source = Self::default();
        {
            let mut state = source.state.borrow_mut();
            state.scroll_top = scroll_top;
            state.client_height = client_height;
        }
        source
    }

    pub fn rejecting_listeners() -> Self {
        let source = Self::default();
        source.state.borrow_mut().reject_listeners = true;
        source
    }

    /// Source that keeps its listeners when asked to remove them
    pub fn rejecting_removal(scroll_top: i32, client_height: i32) -> Self {
        let source = Self::new(scroll_top, client_height);
        source.state.borrow_mut().reject_removal = true;
        source
    }

    /// Sets the scroll position and dispatches a scroll event, like the browser does
    pub fn scroll_to(&self, scroll_top: i32) {
        self.state.borrow_mut().scroll_top = scroll_top;
        self.dispatch_scroll();
    }

    pub fn dispatch_scroll(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn set_client_height(&self, client_height: i32) {
        self.state.borrow_mut().client_height = client_height;
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ScrollSource for ScriptedScrollSource {
    type Listener = u64;

    fn add_scroll_listener(&self, handler: Rc<dyn Fn()>) -> Result<Self::Listener, MasonryError> {
        let mut state = self.state.borrow_mut();
        if state.reject_listeners {
            return Err(MasonryError::ListenerRegistration(String::from("listeners are rejected")));
        }
        let listener_id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((listener_id, handler));
        Ok(listener_id)
    }

    fn remove_scroll_listener(&self, listener: Self::Listener) -> Result<(), MasonryError> {
        let mut state = self.state.borrow_mut();
        if state.reject_removal {
            return Err(MasonryError::ListenerRemoval(format!("listener {listener} is locked")));
        }
        let count_before = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != listener);
        match state.listeners.len() < count_before {
            true => Ok(()),
            false => Err(MasonryError::ListenerRemoval(format!("unknown listener {listener}"))),
        }
    }

    fn scroll_top(&self) -> i32 {
        self.state.borrow().scroll_top
    }

    fn client_height(&self) -> i32 {
        self.state.borrow().client_height
    }
}

/// Sentinel with an offset controlled by the test, `None` means not mounted
#[derive(Clone, Default)]
pub struct TestSentinel {
    offset_top: Rc<Cell<Option<i32>>>,
}

impl TestSentinel {
    pub fn mounted_at(offset_top: i32) -> Self {
        let sentinel = Self::default();
        sentinel.offset_top.set(Some(offset_top));
        sentinel
    }

    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn set_offset_top(&self, offset_top: Option<i32>) {
        self.offset_top.set(offset_top);
    }
}

impl SentinelRef for TestSentinel {
    fn offset_top(&self) -> Option<i32> {
        self.offset_top.get()
    }
}

/// Returns a counter and a callback incrementing it
pub fn emission_counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let count_clone = count.clone();
    (count, move || count_clone.set(count_clone.get() + 1))
}
