use std::rc::Rc;

use leptos::html;
use leptos::prelude::{document, GetUntracked, NodeRef};
use leptos::wasm_bindgen::closure::Closure;
use leptos::wasm_bindgen::JsCast;

use masonry_utils::constants::SCROLL_EVENT;
use masonry_utils::errors::MasonryError;

use crate::scroll::{ScrollSource, SentinelRef};

/// Scroll events and geometry of the whole document
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScrollSource;

impl ScrollSource for DocumentScrollSource {
    type Listener = Closure<dyn Fn()>;

    fn add_scroll_listener(&self, handler: Rc<dyn Fn()>) -> Result<Self::Listener, MasonryError> {
        let listener = Closure::<dyn Fn()>::new(move || handler());
        document()
            .add_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
            .map_err(MasonryError::listener_registration)?;
        Ok(listener)
    }

    fn remove_scroll_listener(&self, listener: Self::Listener) -> Result<(), MasonryError> {
        document()
            .remove_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
            .map_err(MasonryError::listener_removal)
    }

    fn scroll_top(&self) -> i32 {
        document()
            .document_element()
            .map(|element| element.scroll_top())
            .unwrap_or_default()
    }

    fn client_height(&self) -> i32 {
        document()
            .document_element()
            .map(|element| element.client_height())
            .unwrap_or_default()
    }
}

impl SentinelRef for NodeRef<html::Div> {
    fn offset_top(&self) -> Option<i32> {
        self.get_untracked().map(|element| element.offset_top())
    }
}
