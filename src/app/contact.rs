use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::config::{HANDOFF_DELAY, SUCCESS_DISPLAY};
use crate::contact::{Dispatched, Field, MailHandler, MailtoRequest, SubmitStatus};

use super::overlay::Overlay;
use super::SharedPage;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-neutral-950 border border-neutral-800 rounded-lg text-white placeholder-neutral-500 focus:outline-none focus:border-indigo-500 transition-colors";

/// Hands compose requests to whatever the browser has registered for `mailto:`.
struct BrowserMailHandler;

impl MailHandler for BrowserMailHandler {
    fn dispatch(&self, request: &MailtoRequest) -> Dispatched {
        let uri = request.to_uri();
        #[cfg(feature = "hydrate")]
        if let Err(e) = window().location().set_href(&uri) {
            log::warn!("mail handoff failed to start: {e:?}");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = uri;
        Dispatched
    }
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let page = expect_context::<SharedPage>();
    let status = Memo::new(move |_| page.with(|p| p.contact().status()));
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ticket = match page.try_update(|p| p.submit_contact(&BrowserMailHandler)) {
            Some(Ok((ticket, Dispatched))) => ticket,
            Some(Err(e)) => {
                set_error(Some(e.to_string()));
                return;
            }
            None => return,
        };
        set_error(None);
        set_timeout(
            move || {
                let shown = page.try_update(|p| p.handoff_elapsed(ticket));
                if shown != Some(true) {
                    return;
                }
                set_timeout(
                    move || {
                        page.try_update(|p| p.success_elapsed(ticket));
                    },
                    SUCCESS_DISPLAY,
                );
            },
            HANDOFF_DELAY,
        );
    };

    view! {
        <Overlay label="Get in Touch" width="max-w-md">
            <div class="relative w-full bg-neutral-900 border border-neutral-800 rounded-2xl p-8 shadow-2xl">
                <h3 class="text-2xl font-bold text-white mb-2">"Get in Touch"</h3>
                <p class="text-neutral-400 text-sm mb-6">
                    "Send me a message and I'll get back to you soon."
                </p>
                {move || {
                    if status.get() == SubmitStatus::Success {
                        Either::Left(
                            view! {
                                <div class="text-center py-8">
                                    <div class="w-16 h-16 bg-green-500/20 rounded-full flex items-center justify-center mx-auto mb-4">
                                        <i class="icon-mail text-green-500 text-3xl"></i>
                                    </div>
                                    <p class="text-green-500 font-medium">
                                        "Opening your email client..."
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <form class="space-y-4" on:submit=on_submit>
                                    <ContactField field=Field::Name />
                                    <ContactField field=Field::Email />
                                    <ContactField field=Field::Message />
                                    {move || {
                                        error
                                            .get()
                                            .map(|e| {
                                                view! {
                                                    <p class="text-sm text-red-400" role="alert">
                                                        {e}
                                                    </p>
                                                }
                                            })
                                    }}
                                    <SubmitButton status />
                                </form>
                            },
                        )
                    }
                }}
            </div>
        </Overlay>
    }
}

#[component]
fn ContactField(field: Field) -> impl IntoView {
    let page = expect_context::<SharedPage>();
    let (id, placeholder) = match field {
        Field::Name => ("name", "Your full name"),
        Field::Email => ("email", "your.email@example.com"),
        Field::Message => ("message", "Tell me about your project or inquiry..."),
    };
    let input_type = if field == Field::Email { "email" } else { "text" };
    let value = move || page.with(|p| p.contact().value(field).to_string());
    let on_input = move |ev: Event| page.update(|p| p.set_field(field, event_target_value(&ev)));

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-neutral-300 mb-2">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=id
                            rows="5"
                            required
                            placeholder=placeholder
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=input_type
                            id=id
                            name=id
                            required
                            placeholder=placeholder
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}

#[component]
fn SubmitButton(status: Memo<SubmitStatus>) -> impl IntoView {
    let submitting = move || status.get() == SubmitStatus::Submitting;
    view! {
        <button
            type="submit"
            disabled=submitting
            class="w-full py-3 bg-white text-black rounded-lg font-bold hover:bg-neutral-200 transition-all disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2"
        >
            {move || {
                if submitting() {
                    Either::Left(
                        view! {
                            <div class="w-5 h-5 border-2 border-black/20 border-t-black rounded-full animate-spin"></div>
                            "Sending..."
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <i class="icon-mail"></i>
                            "Send Message"
                        },
                    )
                }
            }}
        </button>
    }
}
