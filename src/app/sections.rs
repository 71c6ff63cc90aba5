use leptos::prelude::*;

use crate::card::EXTERNAL_REL;
use crate::catalog::catalog;
use crate::config::{build_year, ACADEMIC_FOCUS, FOCUS_TILES, GITHUB_URL, TECH_STACK};

use super::card::ProjectCard;
use super::SharedPage;

#[component]
fn Section(
    #[prop(into)] id: String,
    #[prop(into, default = String::new())] layout: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("px-6 py-24 md:py-32 max-w-7xl mx-auto {layout}")>
            {children()}
        </section>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-20 px-6 max-w-7xl mx-auto min-h-[85vh] flex flex-col justify-center">
            <div class="absolute top-0 right-0 -z-10 opacity-20 overflow-hidden pointer-events-none">
                <div class="w-[600px] h-[600px] bg-indigo-600 rounded-full blur-[120px] -translate-y-1/2 translate-x-1/2"></div>
            </div>
            <div class="inline-flex w-fit items-center gap-2 px-3 py-1 rounded-full bg-neutral-900 border border-neutral-800 text-xs text-indigo-400 font-medium mb-6">
                <span class="relative flex h-2 w-2">
                    <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-indigo-400 opacity-75"></span>
                    <span class="relative inline-flex rounded-full h-2 w-2 bg-indigo-500"></span>
                </span>
                "Open to Work & Collaboration"
            </div>
            <h1 class="text-6xl md:text-8xl font-bold tracking-tight text-white mb-8 leading-[1.1]">
                "Building the " <br />
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-cyan-300">
                    "tech of tomorrow."
                </span>
            </h1>
            <p class="text-xl text-neutral-400 max-w-2xl leading-relaxed mb-12">
                "Hi, I'm a Computer Science student dedicated to building next-generation technologies. My focus lies in "
                <span class="text-white font-medium">"UI/UX"</span>
                ", crafting interfaces that are as intuitive as they are powerful."
            </p>
            <div class="flex flex-wrap gap-4">
                <a
                    href="#work"
                    class="group flex items-center gap-2 px-6 py-3 bg-white text-black rounded-full font-medium hover:bg-neutral-200 transition-all"
                >
                    "View Selected Work"
                    <i class="icon-arrow-up-right"></i>
                </a>
                <a
                    href=GITHUB_URL
                    target="_blank"
                    rel=EXTERNAL_REL
                    class="flex items-center gap-2 px-6 py-3 bg-neutral-900 text-white border border-neutral-800 rounded-full font-medium hover:bg-neutral-800 transition-all"
                >
                    <i class="devicon-github-plain"></i>
                    "GitHub"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <div class="w-full overflow-hidden bg-neutral-900/30 border-y border-neutral-800 py-10">
            <div class="max-w-7xl mx-auto px-6">
                <p class="text-neutral-500 text-sm font-medium mb-6 uppercase tracking-wider">
                    "Core Technologies"
                </p>
                <div class="flex gap-12 flex-wrap text-neutral-400 font-semibold text-xl">
                    {TECH_STACK
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="hover:text-white transition-colors cursor-default">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SelectedWork() -> impl IntoView {
    view! {
        <Section id="work">
            <div class="mb-12">
                <h2 class="text-4xl font-bold text-white mb-4">"Selected Work"</h2>
                <p class="text-neutral-400">
                    "Some of my featured projects and contributions that I've worked on."
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {catalog()
                    .iter()
                    .map(|record| view! { <ProjectCard record=record.clone() /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Section id="about" layout="grid grid-cols-1 md:grid-cols-2 gap-16">
            <div>
                <h2 class="text-4xl font-bold text-white mb-6">"About Me"</h2>
                <p class="text-neutral-400 text-lg leading-relaxed mb-8">
                    "As a Computer Science student, I combine technical discipline with a passion for "
                    <span class="text-white font-medium">"creative design"</span>
                    ", ensuring every line of code serves a purpose."
                </p>
                <div class="grid grid-cols-2 gap-4">
                    {FOCUS_TILES
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="flex items-center gap-3 p-4 rounded-lg bg-neutral-900 border border-neutral-800">
                                    <i class=format!("{icon} text-indigo-400")></i>
                                    <span class="font-medium text-neutral-300">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="relative">
                <div class="absolute inset-0 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-2xl blur-3xl opacity-20"></div>
                <div class="relative h-full bg-neutral-900/80 backdrop-blur-sm border border-neutral-800 rounded-2xl p-8">
                    <h3 class="text-xl font-bold text-white mb-6">"Academic Focus"</h3>
                    <ul class="space-y-4">
                        {ACADEMIC_FOCUS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, description))| {
                                view! {
                                    <li class="flex gap-4">
                                        <div class="w-12 h-12 rounded-full bg-neutral-800 flex items-center justify-center shrink-0 font-bold">
                                            {i + 1}
                                        </div>
                                        <div>
                                            <h4 class="font-bold text-neutral-200">{*title}</h4>
                                            <p class="text-sm text-neutral-400">{*description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn ContactCta() -> impl IntoView {
    let page = expect_context::<SharedPage>();
    view! {
        <section class="py-32 border-t border-neutral-800">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h2 class="text-5xl md:text-7xl font-bold text-white mb-8">
                    "Let's build something " <br />
                    <span class="relative inline-block">
                        <span class="text-white relative z-10">"extraordinary."</span>
                        <span class="absolute inset-0 blur-2xl bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 opacity-60 animate-pulse"></span>
                    </span>
                </h2>
                <button
                    type="button"
                    class="inline-flex items-center gap-3 px-8 py-4 bg-white text-black rounded-full font-bold text-lg hover:scale-105 transition-transform"
                    on:click=move |_| page.update(|p| p.open_contact())
                >
                    <i class="icon-mail"></i>
                    "Get in Touch"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-neutral-950 border-t border-neutral-900 text-center text-neutral-500 text-sm">
            <p>{format!("© {} Portfolio. Built with lots of love.", build_year())}</p>
        </footer>
    }
}
