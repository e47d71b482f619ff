//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! MarketlyPage (owns RwSignal<PageState>)
//! ├── Header        brand, nav, search input
//! ├── Hero          title, CTAs, subscribe form, DashboardPreview
//! ├── FeatureGrid   one FeatureCard per content::FEATURES entry
//! ├── Pricing       one TierCard per plan
//! ├── Testimonials  quote, use cases, CalendarPreview
//! ├── ContactForm   inert placeholder form
//! └── Footer
//! ```
//!
//! Child components receive the page's `RwSignal<PageState>` and change it
//! only through [`dispatch`].

mod contact;
mod features;
mod footer;
mod header;
mod hero;
mod page;
mod pricing;
mod testimonials;

pub use contact::ContactForm;
pub use features::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use header::Header;
pub use hero::{DashboardPreview, Hero};
pub use page::MarketlyPage;
pub use pricing::{Pricing, TierCard};
pub use testimonials::{CalendarPreview, Testimonials};

use leptos::prelude::*;

use crate::state::{PageEvent, PageState};

/// Applies an interaction to the page state and notifies subscribers.
pub fn dispatch(state: RwSignal<PageState>, event: PageEvent) {
    state.update(|s| s.apply(event));
}
