mod card;
mod contact;
mod detail;
mod gallery;
mod overlay;
mod scroll;
mod sections;

use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_document, use_event_listener};

use crate::catalog::catalog;
use crate::config::{page_title, SITE_TITLE};
use crate::page::PageState;

use contact::ContactModal;
use detail::ProjectDetailModal;
use gallery::GalleryModal;
use scroll::BodyScroll;
use sections::{About, ContactCta, Footer, Hero, SelectedWork, TechStack};

/// Page state shared with every section and overlay through context.
pub type SharedPage = RwSignal<PageState<'static, BodyScroll>>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-neutral-950 text-neutral-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title: String| page_title(&title) />
        <Router>
            <main class="min-h-screen selection:bg-indigo-500/30">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <p class="py-32 text-center text-neutral-400">"Page not found."</p>
    }
}

/// Lays out the sections in order and owns the overlays that sit above them.
#[component]
fn HomePage() -> impl IntoView {
    let page: SharedPage = RwSignal::new(PageState::new(catalog(), BodyScroll));
    provide_context(page);

    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && page.with_untracked(|p| p.modal().is_open()) {
            page.update(|p| p.close());
        }
    });

    let contact_open = Memo::new(move |_| page.with(|p| p.modal().is_contact()));
    let gallery_open = Memo::new(move |_| page.with(|p| p.modal().gallery_images().is_some()));
    let detail_project = Memo::new(move |_| {
        page.with(|p| p.modal().detail().map(|(project, _)| project.clone()))
    });

    view! {
        <Title text=SITE_TITLE />
        <Show when=move || contact_open.get()>
            <ContactModal />
        </Show>
        <Show when=move || gallery_open.get()>
            <GalleryModal />
        </Show>
        {move || detail_project.get().map(|project| view! { <ProjectDetailModal project /> })}

        <Hero />
        <TechStack />
        <SelectedWork />
        <About />
        <ContactCta />
        <Footer />
    }
}
