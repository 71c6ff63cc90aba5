use leptos::{either::EitherOf3, prelude::*};

use crate::card::EXTERNAL_REL;
use crate::catalog::{Feature, ProjectRecord};
use crate::modal::DetailTab;

use super::gallery::ImageGrid;
use super::overlay::Overlay;
use super::SharedPage;

/// Tabbed view over one project. Stays mounted while tabs change.
#[component]
pub fn ProjectDetailModal(project: ProjectRecord) -> impl IntoView {
    let page = expect_context::<SharedPage>();
    let tab = Memo::new(move |_| {
        page.with(|p| p.modal().detail().map(|(_, t)| t).unwrap_or_default())
    });
    let title = project.title.clone();
    let subtitle = project.subtitle.clone();
    let project = StoredValue::new(project);

    view! {
        <Overlay label=title.clone()>
            <div class="bg-neutral-900 border border-neutral-800 rounded-3xl p-8 md:p-12 shadow-2xl">
                <header class="mb-8">
                    <h2 class="text-4xl font-bold text-white mb-2">{title}</h2>
                    <p class="text-indigo-400 font-medium">{subtitle}</p>
                </header>
                <nav role="tablist" class="flex gap-2 mb-8 border-b border-neutral-800">
                    {DetailTab::all()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected=move || (tab.get() == t).to_string()
                                    class=move || {
                                        if tab.get() == t {
                                            "px-4 py-2 -mb-px border-b-2 border-indigo-400 text-white font-medium"
                                        } else {
                                            "px-4 py-2 -mb-px border-b-2 border-transparent text-neutral-400 hover:text-white"
                                        }
                                    }
                                    on:click=move |_| {
                                        page.update(|p| {
                                            p.select_tab(t);
                                        })
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div role="tabpanel">
                    {move || match tab.get() {
                        DetailTab::Overview => {
                            EitherOf3::A(view! { <Overview project=project.get_value() /> })
                        }
                        DetailTab::Features => {
                            EitherOf3::B(
                                view! {
                                    <FeatureList features=project.with_value(|p| p.features.clone()) />
                                },
                            )
                        }
                        DetailTab::Gallery => {
                            EitherOf3::C(
                                view! {
                                    <GalleryTab images=project.with_value(|p| p.images.clone()) />
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </Overlay>
    }
}

#[component]
fn Narrative(heading: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-neutral-950 border border-neutral-800">
            <h4 class="text-sm font-bold uppercase tracking-wider text-neutral-500 mb-3">
                {heading}
            </h4>
            <p class="text-neutral-300 leading-relaxed">{text}</p>
        </div>
    }
}

#[component]
fn Overview(project: ProjectRecord) -> impl IntoView {
    let achievements = project.achievements().to_vec();
    let links = project.links().to_vec();

    view! {
        <div class="space-y-8">
            <p class="text-lg text-neutral-300 leading-relaxed">{project.full_description}</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <Narrative heading="The Problem" text=project.problem />
                <Narrative heading="Our Solution" text=project.solution />
                <Narrative heading="Target Market" text=project.target_market />
                <Narrative heading="Unique Value" text=project.unique_value />
            </div>
            <div>
                <h4 class="text-sm font-bold uppercase tracking-wider text-neutral-500 mb-3">
                    "Technologies"
                </h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-indigo-500/10 text-indigo-300 border border-indigo-500/30 text-sm">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {(!achievements.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h4 class="text-sm font-bold uppercase tracking-wider text-neutral-500 mb-3">
                                "Achievements"
                            </h4>
                            <ul class="list-disc list-inside space-y-1 text-neutral-300">
                                {achievements
                                    .into_iter()
                                    .map(|a| view! { <li>{a}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
            {(!links.is_empty())
                .then(|| {
                    view! {
                        <div class="flex flex-wrap gap-3">
                            {links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel=EXTERNAL_REL
                                            class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white text-black font-medium hover:bg-neutral-200 transition-all"
                                        >
                                            {link.label}
                                            <i class="icon-external-link"></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn FeatureList(features: Vec<Feature>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {features
                .into_iter()
                .map(|f| {
                    view! {
                        <div class="p-6 rounded-2xl bg-neutral-950 border border-neutral-800 hover:border-neutral-600 transition-all">
                            <div class="w-12 h-12 rounded-xl bg-indigo-500/10 flex items-center justify-center mb-4">
                                <i class=format!("icon-{} text-indigo-400 text-xl", f.icon)></i>
                            </div>
                            <h4 class="text-lg font-bold text-white mb-2">{f.title}</h4>
                            <p class="text-sm text-neutral-400 leading-relaxed">{f.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn GalleryTab(images: Vec<String>) -> impl IntoView {
    let page = expect_context::<SharedPage>();
    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    type="button"
                    class="text-sm text-neutral-400 hover:text-white transition-colors"
                    on:click=move |_| {
                        let images = images.clone();
                        page.update(|p| {
                            p.open_gallery(images);
                        })
                    }
                >
                    "Full screen"
                    <i class="icon-arrow-up-right ml-1"></i>
                </button>
            </div>
            <ImageGrid />
        </div>
    }
}
