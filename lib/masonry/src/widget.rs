use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use masonry_utils::constants::DEFAULT_SCROLL_DELAY_MS;

use crate::scroll::ScrollConfig;

const SENTINEL_CLASS: &str = "masonry-loading w-full flex justify-center";

/// Creates the reference of the sentinel element and, in the browser, listens to the document's scroll
/// events to call `on_reach_bottom` when the sentinel gets close to the viewport.
/// The listener is removed when the reactive owner is cleaned up.
pub fn use_reach_bottom(
    config: ScrollConfig,
    on_reach_bottom: Callback<()>,
) -> NodeRef<html::Div> {
    let sentinel_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "browser")]
    {
        use masonry_utils::timer::BrowserTimerQueue;
        use send_wrapper::SendWrapper;

        use crate::browser::DocumentScrollSource;
        use crate::scroll::ScrollTrigger;

        match ScrollTrigger::activate(
            DocumentScrollSource,
            sentinel_ref,
            BrowserTimerQueue,
            config,
            move || on_reach_bottom.run(()),
        ) {
            Ok(scroll_trigger) => {
                // the trigger holds javascript closures, the wrapper lets it move into the cleanup callback
                let scroll_trigger = SendWrapper::new(scroll_trigger);
                on_cleanup(move || scroll_trigger.take().deactivate());
            },
            Err(e) => log::error!("{e}"),
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (config, on_reach_bottom);
    }

    sentinel_ref
}

/// Component marking the bottom of the masonry grid, requests more content when scrolled into view
#[component]
pub fn MasonrySentinel(
    /// signal indicating that no more content should be requested
    #[prop(into)]
    is_over: Signal<bool>,
    /// quiet period in milliseconds after the last scroll event before checking the position
    #[prop(default = DEFAULT_SCROLL_DELAY_MS)]
    delay_ms: u64,
    /// called when the sentinel is close to the viewport
    on_reach_bottom: Callback<()>,
    #[prop(default = "")]
    class: &'static str,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let sentinel_ref = use_reach_bottom(
        ScrollConfig::new(is_over, Duration::from_millis(delay_ms)),
        on_reach_bottom,
    );
    let sentinel_class = match class.is_empty() {
        true => String::from(SENTINEL_CLASS),
        false => format!("{SENTINEL_CLASS} {class}"),
    };

    view! {
        <div class=sentinel_class node_ref=sentinel_ref>
            {children.map(|children| children())}
        </div>
    }
}
