use leptos::prelude::*;

use super::{ContactForm, FeatureGrid, Footer, Header, Hero, Pricing, Testimonials};
use crate::config::SiteConfig;
use crate::content::FEATURES;
use crate::state::PageState;
use crate::styles::PAGE_CSS;

/// The whole landing page.
///
/// `initial` seeds the page state; a fresh page view uses the default. The
/// returned view owns its state, so two mounted pages never share it.
#[component]
pub fn MarketlyPage(
    #[prop(optional)] config: SiteConfig,
    #[prop(optional)] initial: PageState,
    /// Host-owned state, for hosts that watch the page. `initial` is ignored
    /// when this is given.
    #[prop(optional)]
    state: Option<RwSignal<PageState>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(initial));
    let SiteConfig {
        brand,
        copyright_year,
        ..
    } = config;

    view! {
        <div class="ml-root">
            <style>{PAGE_CSS}</style>

            <Header brand=brand.clone() state=state />

            <main>
                <Hero state=state />
                <FeatureGrid features=FEATURES />
                <Pricing state=state />
                <Testimonials />
                <ContactForm state=state />
            </main>

            <Footer brand=brand year=copyright_year />
        </div>
    }
}
