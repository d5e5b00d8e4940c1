//! Onboarding Dialogs
//!
//! The three modals driven by [`landing_core::OnboardingFlow`]. All
//! sequencing decisions live in the flow; these components only
//! render the open dialog and report clicks upward.

use leptos::prelude::*;

use landing_core::email::is_well_formed;

/// Teaser: the agent is not live yet
#[component]
pub fn NotifyDialog(on_next: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>"We're not live yet"</h2>
                <p>
                    "The Courtside agent is still in closed preview. "
                    "Want to be first in line when real answers ship?"
                </p>
                <button class="btn btn-primary" on:click=move |_| on_next.run(())>
                    "Next"
                </button>
            </div>
        </div>
    }
}

/// Email capture. The Register button stays disabled until the
/// address is syntactically plausible; the server-side domain check
/// can still reject it, which shows up through `warning`.
#[component]
pub fn SubscribeDialog(
    on_register: Callback<String>,
    warning: ReadSignal<Option<String>>,
    busy: ReadSignal<bool>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let well_formed = move || is_well_formed(&email.get());

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>"Get early access"</h2>
                <p>"Enter your email to get early access! No spam - unsubscribe anytime."</p>
                <input
                    type="email"
                    placeholder="example@gmail.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <Show when=move || !email.get().is_empty() && !well_formed()>
                    <p class="hint">"Please enter a valid email to register."</p>
                </Show>
                {move || warning.get().map(|w| view! { <p class="warning">{w}</p> })}
                <button
                    class="btn btn-primary"
                    disabled=move || !well_formed() || busy.get()
                    on:click=move |_| on_register.run(email.get())
                >
                    {move || if busy.get() { "Checking..." } else { "Register" }}
                </button>
            </div>
        </div>
    }
}

/// Thank-you for registered visitors
#[component]
pub fn ThanksDialog(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>"You're on the list"</h2>
                <p>"Thanks - you'll hear from us soon!"</p>
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
