use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::dispatch;
use crate::content::{HERO_LEAD, HERO_TITLE, PREVIEW_METRICS, SUBSCRIBED_MESSAGE};
use crate::selftest::TestHook;
use crate::state::{PageEvent, PageState};
use crate::types::{Metric, Trend};

#[component]
pub fn Hero(state: RwSignal<PageState>) -> impl IntoView {
    let on_subscribe = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(state, PageEvent::SubscribeSubmitted);
    };

    view! {
        <section class="ml-hero">
            <div>
                <h1 data-testid={TestHook::HeroTitle.testid()}>{HERO_TITLE}</h1>
                <p class="ml-muted ml-hero-lead">{HERO_LEAD}</p>

                <div class="ml-hero-actions">
                    <a href="#pricing" class="ml-btn ml-btn-link">"Start free trial"</a>
                    <a href="#features" class="ml-btn ghost ml-btn-link">"Explore features"</a>
                </div>

                <form class="ml-subscribe" on:submit=on_subscribe>
                    <div class="ml-subscribe-row">
                        <input
                            id="email"
                            class="ml-input"
                            type="email"
                            required=true
                            placeholder="your@company.com"
                            prop:value=move || state.with(|s| s.email.clone())
                            on:input=move |ev| {
                                dispatch(state, PageEvent::EmailChanged(event_target_value(&ev)))
                            }
                        />
                        <button class="ml-btn" type="submit">"Get notified"</button>
                    </div>
                    <Show when=move || state.with(|s| s.subscribed)>
                        <p class="ml-confirm" data-testid="subscribed" role="status">
                            {SUBSCRIBED_MESSAGE}
                        </p>
                    </Show>
                </form>
            </div>

            <div>
                <DashboardPreview />
            </div>
        </section>
    }
}

/// Static dashboard mock shown next to the hero copy.
#[component]
pub fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="ml-card">
            <div class="ml-card-head">
                <div>
                    <h3>"Acme Corp — Weekly Overview"</h3>
                    <p class="ml-small ml-muted">"Live · last updated 2m ago"</p>
                </div>
                <div class="ml-small ml-muted">"Region: US"</div>
            </div>

            <div class="ml-grid-2">
                {PREVIEW_METRICS.iter().copied().map(|metric| view! { <MetricTile metric=metric /> }).collect_view()}
            </div>

            // Charts are out of scope, the box only reserves the space.
            <div class="ml-chart-placeholder">"(chart placeholder)"</div>
        </div>
    }
}

#[component]
fn MetricTile(metric: Metric) -> impl IntoView {
    let delta_class = match metric.trend {
        Trend::Up => "ml-small ml-up",
        Trend::Down => "ml-small ml-down",
    };

    view! {
        <div class="ml-tile">
            <div class="ml-small ml-muted">{metric.label}</div>
            <div class="ml-metric-value">{metric.value}</div>
            <div class=delta_class>{metric.delta}</div>
        </div>
    }
}
