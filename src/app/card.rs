use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

use crate::card::{CardAction, EXTERNAL_REL};
use crate::catalog::ProjectRecord;

use super::SharedPage;

const CARD_CLASS: &str = "group flex flex-col h-full w-full text-left bg-neutral-900/50 border border-neutral-800 rounded-3xl overflow-hidden hover:border-neutral-600 hover:-translate-y-2 transition-all cursor-pointer";

#[component]
pub fn ProjectCard(record: ProjectRecord) -> impl IntoView {
    let action = CardAction::for_record(&record);
    let hover_label = action.hover_label(record.presentation);
    let hover_icon = if action.is_navigation() {
        "icon-external-link"
    } else {
        "icon-arrow-up-right"
    };
    let cover = record.cover_image().map(|src| {
        let src = src.to_string();
        let alt = record.title.clone();
        view! {
            <div class="relative w-full h-full scale-90 group-hover:scale-100 transition-transform duration-500">
                <img src=src alt=alt class="absolute inset-0 h-full w-full object-contain" />
            </div>
        }
    });

    let body = view! {
        <div class="relative h-64 w-full bg-neutral-950 overflow-hidden flex items-center justify-center p-8">
            <div class="absolute inset-0 bg-gradient-to-t from-neutral-950/60 to-transparent z-10"></div>
            {cover}
            <div class="absolute inset-0 bg-indigo-600/10 opacity-0 group-hover:opacity-100 transition-opacity z-20 flex items-center justify-center">
                <div class="px-4 py-2 bg-white text-black rounded-full text-sm font-bold flex items-center gap-2 shadow-xl">
                    {hover_label}
                    <i class=hover_icon></i>
                </div>
            </div>
        </div>
        <div class="p-8 flex flex-col flex-1">
            <div class="flex flex-wrap gap-2 mb-4">
                {record
                    .tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="px-2 py-1 rounded-md bg-neutral-800 text-[10px] font-bold uppercase tracking-wider text-neutral-400 border border-neutral-700">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <h3 class="text-2xl font-bold text-white mb-1">{record.title}</h3>
            <p class="text-indigo-400 text-sm font-medium mb-4">{record.subtitle}</p>
            <p class="text-neutral-400 text-sm leading-relaxed">{record.short_description}</p>
        </div>
    };

    match action {
        CardAction::ExternalLink(url) => Either::Left(view! {
            <a href=url target="_blank" rel=EXTERNAL_REL class=CARD_CLASS>
                {body}
            </a>
        }),
        CardAction::Callback(id) => {
            let page = expect_context::<SharedPage>();
            let activate = Callback::new(move |_: ()| {
                page.update(|p| {
                    if let Err(e) = p.open_project(&id) {
                        log::debug!("card activation ignored: {e}");
                    }
                })
            });
            Either::Right(view! {
                <div
                    role="button"
                    tabindex="0"
                    class=CARD_CLASS
                    on:click=move |_| activate.run(())
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" || ev.key() == " " {
                            ev.prevent_default();
                            activate.run(());
                        }
                    }
                >
                    {body}
                </div>
            })
        }
    }
}
