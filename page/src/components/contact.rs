use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::dispatch;
use crate::state::{PageEvent, PageState};

/// Contact form. Submitting keeps the user on the page and does nothing else.
#[component]
pub fn ContactForm(state: RwSignal<PageState>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(state, PageEvent::ContactSubmitted);
    };

    view! {
        <section id="contact" class="ml-section">
            <h3>"Get in touch"</h3>
            <p class="ml-muted">
                "Questions about integrations, pricing, or pilot programs? Send a quick message."
            </p>

            <form class="ml-contact" on:submit=on_submit>
                <input name="name" placeholder="Your name" aria-label="Your name" />
                <input name="email" placeholder="Email" aria-label="Email" />
                <textarea name="message" placeholder="How can we help?" aria-label="Message" rows="3"></textarea>
                <div class="ml-contact-actions">
                    <button class="ml-btn" type="submit">"Send message"</button>
                </div>
            </form>
        </section>
    }
}
