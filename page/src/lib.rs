//! # marketly-page
//!
//! The Marketly landing page as Leptos components.
//!
//! The same component tree is mounted in the browser by the `marketly-landing`
//! binary (client-side rendering) and rendered to a static HTML document by
//! [`render_page`], which is also what the native tests inspect.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use marketly_page::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Make data-driven decisions faster."));
//! # }
//! ```
//!
//! ## Features
//!
//! - `ssr` (default) - enables [`render_page`]; Leptos can only render to
//!   a string with its SSR backend
//! - `csr` - client-side rendering, for the browser host. Combine with
//!   `default-features = false`
//!
//! ## Architecture
//!
//! - [`content`] - static copy: features, pricing, testimonials
//! - [`types`] - data types for content and self-test results
//! - [`state`] - per-page UI state and its transitions
//! - [`components`] - Leptos UI components
//! - [`styles`] - inlined stylesheet
//! - [`selftest`] - post-render smoke checks and reporters
//! - [`config`] - host-supplied overrides
//!
//! ---
//!
//! Developed by the Marketly team (c)2025

pub mod components;
pub mod config;
pub mod content;
pub mod selftest;
pub mod state;
pub mod styles;
pub mod types;

pub use components::MarketlyPage;
pub use config::SiteConfig;
pub use state::{PageEvent, PageState};

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

#[cfg(feature = "ssr")]
use styles::CSP;

/// Renders a fresh page view as a complete HTML document.
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    render_page_with(config, PageState::default())
}

/// Renders the page with a given starting state.
///
/// Useful for static snapshots of a page after some interaction, e.g. with
/// the subscribe confirmation visible.
#[cfg(feature = "ssr")]
pub fn render_page_with(config: &SiteConfig, state: PageState) -> String {
    let title = format!("{} — Data-driven decisions, faster", config.brand);
    let doc = view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
            </head>
            <body>
                <MarketlyPage config=config.clone() initial=state />
            </body>
        </html>
    };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "rendered page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
