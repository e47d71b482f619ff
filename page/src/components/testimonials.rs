use leptos::prelude::*;

use crate::content::{CALENDAR_SLOTS, TESTIMONIAL_QUOTE, USE_CASES};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="ml-section ml-testimonials">
            <div class="ml-card">
                <h3>"What customers say"</h3>
                <blockquote class="ml-quote">{TESTIMONIAL_QUOTE}</blockquote>

                <div class="ml-grid-2">
                    {USE_CASES
                        .iter()
                        .map(|case| {
                            view! {
                                <div class="ml-tile">
                                    <div class="ml-small ml-muted">"Use case"</div>
                                    <div class="ml-use-case-title">{case.title}</div>
                                    <p class="ml-muted">{case.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <CalendarPreview />
        </section>
    }
}

/// Placeholder grid; the real calendar lives in the app.
#[component]
pub fn CalendarPreview() -> impl IntoView {
    view! {
        <aside class="ml-card">
            <h4>"Professor calendar (preview)"</h4>
            <p class="ml-small ml-muted">
                "Clickable placeholder — will open full calendar view in the app."
            </p>
            <div class="ml-grid-3">
                {(0..CALENDAR_SLOTS).map(|_| view! { <div class="ml-slot">"Slot"</div> }).collect_view()}
            </div>
        </aside>
    }
}
