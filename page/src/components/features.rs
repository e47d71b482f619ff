use leptos::prelude::*;

use crate::selftest::TestHook;
use crate::types::Feature;

/// Feature section, one card per entry in declaration order.
#[component]
pub fn FeatureGrid(features: &'static [Feature]) -> impl IntoView {
    view! {
        <section id="features" class="ml-section">
            <h2>"Core features"</h2>
            <p class="ml-muted ml-section-lead">
                "Everything your team needs to measure, share, and act on growth — built for speed and collaboration."
            </p>

            <div class="ml-features">
                {features.iter().copied().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="ml-feature" data-testid={TestHook::Feature.testid()} data-feature-id={feature.id}>
            <div class="ml-feature-icon" aria-hidden="true">{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p>{feature.desc}</p>
        </article>
    }
}
