use leptos::prelude::*;

use crate::gallery::{TILE_ASPECT_RATIO, TILE_HEIGHT, TILE_SIZES, TILE_WIDTH};

use super::overlay::Overlay;
use super::SharedPage;

/// Tiles for whatever gallery is on screen, the overlay or the detail gallery tab.
#[component]
pub fn ImageGrid() -> impl IntoView {
    let page = expect_context::<SharedPage>();
    let slots = Memo::new(move |_| page.with(|p| p.visible_image_slots().unwrap_or_default()));
    let tile_style = format!("aspect-ratio: {TILE_ASPECT_RATIO}");
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            {move || slots
                .get()
                .into_iter()
                .map(|slot| {
                    view! {
                        <div
                            class="relative w-full rounded-xl overflow-hidden bg-neutral-900 border border-neutral-700/50 hover:border-neutral-500 transition-all shadow-2xl group"
                            style=tile_style.clone()
                        >
                            <img
                                src=slot.src.clone()
                                alt=slot.alt.clone()
                                width=TILE_WIDTH.to_string()
                                height=TILE_HEIGHT.to_string()
                                sizes=TILE_SIZES
                                loading=slot.loading()
                                class="absolute inset-0 h-full w-full object-contain p-2 group-hover:scale-[1.02] transition-transform duration-300"
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn GalleryModal() -> impl IntoView {
    view! {
        <Overlay label="Project gallery">
            <ImageGrid />
        </Overlay>
    }
}
