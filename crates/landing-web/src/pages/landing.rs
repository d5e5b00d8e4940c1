//! Landing Page
//!
//! Renders the canned transcript and suggestion prompts, and drives
//! the onboarding flow: any suggestion click or chat submission is a
//! trigger, and the flow decides which dialog opens.

use leptos::prelude::*;

use landing_core::{content, Dialog, OnboardingFlow};

use crate::api::ApiResolver;
use crate::components::MessageBubble;
use crate::dialogs::{NotifyDialog, SubscribeDialog, ThanksDialog};
use crate::storage::LocalStorage;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (flow, set_flow) = signal(OnboardingFlow::resume(&LocalStorage::new()));
    let (warning, set_warning) = signal(None::<String>);
    let (busy, set_busy) = signal(false);
    let (input, set_input) = signal(String::new());

    let trigger = move || set_flow.update(|f| f.trigger());

    let on_next = Callback::new(move |()| set_flow.update(|f| f.advance()));

    let on_close = Callback::new(move |()| {
        set_warning.set(None);
        set_flow.update(|f| f.dismiss());
    });

    let on_register = Callback::new(move |email: String| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_warning.set(None);

        leptos::task::spawn_local(async move {
            let mut next = flow.get_untracked();
            match next
                .submit_email(&email, &ApiResolver::new(), &LocalStorage::new())
                .await
            {
                Ok(()) => set_flow.set(next),
                Err(e) => set_warning.set(Some(e.user_message())),
            }
            set_busy.set(false);
        });
    });

    let transcript = content::demo_transcript();
    let suggestions = content::demo_suggestions();

    view! {
        <div class="landing">
            <header class="hero">
                <h1>"💬 Courtside - NBA Analytics Agent"</h1>
                <p class="tagline">"Ask about any team, season, or stat line."</p>
            </header>

            <div class="messages">
                {transcript
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message /> })
                    .collect_view()}
            </div>

            <div class="suggestions">
                {suggestions
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button class="suggestion" on:click=move |_| trigger()>
                                {s.text}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="input-area">
                <input
                    placeholder="Ask me about NBA analytics..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            trigger();
                        }
                    }
                />
                <button on:click=move |_| trigger()>"Send"</button>
            </div>

            {move || match flow.get().open_dialog() {
                Some(Dialog::Notify) => view! { <NotifyDialog on_next=on_next /> }.into_any(),
                Some(Dialog::Subscribe) => {
                    view! { <SubscribeDialog on_register=on_register warning=warning busy=busy /> }
                        .into_any()
                }
                Some(Dialog::Thanks) => view! { <ThanksDialog on_close=on_close /> }.into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
