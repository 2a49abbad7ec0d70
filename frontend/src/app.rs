use std::time::Duration;

use leptos::prelude::*;

use masonry_core::types::{BlockInfo, ImageInfo};
use masonry_core::widget::MasonrySentinel;

const PAGE_SIZE: usize = 24;
const PAGE_COUNT: usize = 6;
const IMAGE_WIDTH: usize = 300;
const FETCH_LATENCY: Duration = Duration::from_millis(600);

/// Simulates a fetched page of images with varying heights
fn get_block_page(page: usize) -> Vec<BlockInfo> {
    (0..PAGE_SIZE)
        .map(|index| {
            let image_id = page * PAGE_SIZE + index;
            let height = 150 + (image_id * 37) % 250;
            BlockInfo::new(ImageInfo::new(
                format!("https://picsum.photos/seed/masonry-{image_id}/{IMAGE_WIDTH}/{height}"),
                IMAGE_WIDTH as f64,
                height as f64,
            ))
        })
        .collect()
}

fn has_loaded_all_pages(loaded_page_count: usize) -> bool {
    loaded_page_count >= PAGE_COUNT
}

/// Demo page loading a new page of images each time the bottom of the grid is reached
#[component]
pub fn App() -> impl IntoView {
    let block_vec = RwSignal::new(get_block_page(0));
    let loaded_page_count = RwSignal::new(1usize);
    let is_loading = RwSignal::new(false);
    let is_exhausted = Signal::derive(move || !is_loading.get() && has_loaded_all_pages(loaded_page_count.get()));
    let is_over = Signal::derive(move || is_loading.get() || has_loaded_all_pages(loaded_page_count.get()));

    let load_next_page = Callback::new(move |_: ()| {
        let page = loaded_page_count.get_untracked();
        log::info!("Load page {page}");
        is_loading.set(true);
        set_timeout(
            move || {
                block_vec.update(|block_vec| block_vec.extend(get_block_page(page)));
                loaded_page_count.set(page + 1);
                is_loading.set(false);
            },
            FETCH_LATENCY,
        );
    });

    view! {
        <div class="masonry-grid" style="column-count: 4; column-gap: 8px;">
            <For
                each=move || block_vec.get()
                key=|block| block.image.url.clone()
                children=move |block: BlockInfo| view! {
                    <img
                        class="masonry-block"
                        style="width: 100%; margin-bottom: 8px;"
                        src=block.image.url
                        alt=""
                    />
                }
            />
        </div>
        <MasonrySentinel is_over on_reach_bottom=load_next_page>
            <Show when=move || is_loading.get()>
                <span>"Loading..."</span>
            </Show>
            <Show when=move || is_exhausted.get()>
                <span>"No more images"</span>
            </Show>
        </MasonrySentinel>
    }
}
