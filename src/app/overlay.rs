use leptos::{ev::MouseEvent, prelude::*};

use super::SharedPage;

/// Full-viewport backdrop shared by all modals.
///
/// Clicking the backdrop or the close button closes the current overlay; clicks on the
/// content never reach the backdrop.
#[component]
pub fn Overlay(
    #[prop(into)] label: String,
    #[prop(into, default = "max-w-7xl".to_string())] width: String,
    children: Children,
) -> impl IntoView {
    let page = expect_context::<SharedPage>();
    let close = move |_: MouseEvent| page.update(|p| p.close());

    view! {
        <div
            class="fixed inset-0 z-[100] overflow-y-auto bg-black/95 backdrop-blur-xl"
            role="dialog"
            aria-modal="true"
            aria-label=label
            on:click=close
        >
            <button
                type="button"
                class="fixed top-6 right-6 z-50 p-3 rounded-full bg-white/10 hover:bg-white/20 border border-white/20 backdrop-blur-md transition-all"
                aria-label="Close"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    close(ev);
                }
            >
                <i class="icon-x text-white"></i>
            </button>
            <div class="min-h-full flex items-center justify-center py-20 px-4 md:px-8">
                <div
                    class=format!("w-full {width} mx-auto")
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </div>
    }
}
