use leptos::prelude::*;

use super::dispatch;
use crate::content::pricing_for;
use crate::state::{PageEvent, PageState};
use crate::types::{Plan, PricingTier};

/// One card per plan, cheapest first.
#[component]
pub fn Pricing(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <section id="pricing" class="ml-section">
            <h2>"Pricing"</h2>
            <p class="ml-muted">"Simple, transparent pricing — upgrade anytime."</p>

            <div class="ml-pricing">
                {Plan::ALL
                    .iter()
                    .filter_map(|&plan| pricing_for(plan).copied())
                    .map(|tier| view! { <TierCard tier=tier state=state /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One plan. Clicking the button only records the selection.
#[component]
pub fn TierCard(tier: PricingTier, state: RwSignal<PageState>) -> impl IntoView {
    let button_class = if tier.primary { "ml-btn ml-tier-cta" } else { "ml-btn-plain" };
    let plan = tier.plan;

    view! {
        <div class="ml-tier">
            <h3>{tier.name}</h3>
            <div class="ml-price">
                {tier.price}
                {tier.price_suffix.map(|suffix| view! { <span class="ml-price-suffix">{suffix}</span> })}
            </div>
            <p class="ml-muted">{tier.blurb}</p>
            <button
                class=button_class
                type="button"
                data-plan={plan.as_str()}
                on:click=move |_| dispatch(state, PageEvent::PlanSelected(plan))
            >
                {tier.cta}
            </button>
        </div>
    }
}
