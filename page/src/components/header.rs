use leptos::prelude::*;

use super::dispatch;
use crate::content::{NAV_LINKS, SEARCH_LABEL, SEARCH_PLACEHOLDER};
use crate::selftest::TestHook;
use crate::state::{PageEvent, PageState};

#[component]
pub fn Header(brand: String, state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <header class="ml-header">
            <div class="ml-container">
                <div class="ml-header-start">
                    <div class="ml-brand" data-testid={TestHook::Brand.testid()}>{brand}</div>
                    <nav class="ml-nav">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a href={link.href}>{link.label}</a> })
                            .collect_view()}
                    </nav>
                </div>

                <div class="ml-header-end">
                    <input
                        class="ml-search"
                        type="search"
                        aria-label=SEARCH_LABEL
                        placeholder=SEARCH_PLACEHOLDER
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            dispatch(state, PageEvent::SearchChanged(event_target_value(&ev)))
                        }
                    />
                    <button class="ml-btn" type="button">"Sign in"</button>
                </div>
            </div>
        </header>
    }
}
