// Marketly Landing Page — Leptos 0.8 CSR
// Developed by the Marketly team (c)2025

mod config;
mod console;
mod harness;
mod probe;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

use harness::{SelfTestHarness, publish_results};
use leptos::prelude::*;
use marketly_page::{MarketlyPage, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();
    console::init_tracing();

    let config = config::load_site_config();
    tracing::info!(brand = %config.brand, self_test = config.self_test, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let self_test = config.self_test;
    view! {
        <MarketlyPage config=config />
        {self_test.then(|| view! { <SelfTestHarness on_results=Callback::new(publish_results) /> })}
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::harness::RESULTS_ATTRIBUTE;
    use crate::testing::{click, fire, mount, next_tick, type_into};
    use marketly_page::content::SUBSCRIBED_MESSAGE;
    use marketly_page::types::{Plan, TestResult};
    use marketly_page::{PageEvent, PageState};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> web_sys::HtmlElement {
        web_sys::window().unwrap().document().unwrap().body().unwrap()
    }

    #[wasm_bindgen_test]
    async fn subscribe_submit_shows_confirmation() {
        let state = RwSignal::new(PageState::default());
        let page = mount(move || view! { <MarketlyPage state=state /> });
        assert_eq!(page.count(r#"[data-testid="subscribed"]"#), 0);

        type_into(&page.query(".ml-subscribe input"), "ada@example.com");
        assert_eq!(state.get_untracked().email, "ada@example.com");

        let not_prevented = fire(&page.query(".ml-subscribe"), "submit");
        assert!(!not_prevented, "subscribe submit must not navigate");
        assert!(state.get_untracked().subscribed);

        next_tick().await;
        let confirm = page.query(r#"[data-testid="subscribed"]"#);
        assert_eq!(confirm.text_content().as_deref(), Some(SUBSCRIBED_MESSAGE));

        // A second submit keeps the single confirmation.
        fire(&page.query(".ml-subscribe"), "submit");
        next_tick().await;
        assert_eq!(page.count(r#"[data-testid="subscribed"]"#), 1);
    }

    #[wasm_bindgen_test]
    async fn search_input_only_updates_search() {
        let state = RwSignal::new(PageState::default());
        let page = mount(move || view! { <MarketlyPage state=state /> });

        type_into(&page.query(".ml-search"), "churn");

        let expected = PageState::default().with(PageEvent::SearchChanged("churn".into()));
        assert_eq!(state.get_untracked(), expected);
        next_tick().await;
        assert_eq!(page.count(r#"[data-testid="feature"]"#), 4);
    }

    #[wasm_bindgen_test]
    fn plan_buttons_keep_last_selection() {
        let state = RwSignal::new(PageState::default());
        let page = mount(move || view! { <MarketlyPage state=state /> });
        let before = page.html();

        click(&page.query(r#"button[data-plan="pro"]"#));
        assert_eq!(state.get_untracked().plan, Plan::Pro);

        click(&page.query(r#"button[data-plan="starter"]"#));
        assert_eq!(state.get_untracked().plan, Plan::Starter);
        assert_eq!(page.html(), before);
    }

    #[wasm_bindgen_test]
    fn contact_submit_is_swallowed() {
        let seeded = PageState::default()
            .with(PageEvent::EmailChanged("ada@example.com".into()))
            .with(PageEvent::PlanSelected(Plan::Enterprise));
        let state = RwSignal::new(seeded.clone());
        let page = mount(move || view! { <MarketlyPage state=state /> });

        let not_prevented = fire(&page.query(".ml-contact"), "submit");

        assert!(!not_prevented, "contact submit must not navigate");
        assert_eq!(state.get_untracked(), seeded);
    }

    #[wasm_bindgen_test]
    async fn app_publishes_passing_self_tests() {
        body().remove_attribute(RESULTS_ATTRIBUTE).unwrap();
        let _app = mount(|| view! { <App config=SiteConfig::default() /> });
        next_tick().await;

        let json = body().get_attribute(RESULTS_ATTRIBUTE).expect("results published");
        let results: Vec<TestResult> = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["brandPresent", "heroTitle", "featuresCount"]);
        assert!(results.iter().all(|r| r.pass), "{results:?}");
    }

    #[wasm_bindgen_test]
    async fn app_skips_self_tests_when_disabled() {
        body().remove_attribute(RESULTS_ATTRIBUTE).unwrap();
        let config = SiteConfig {
            self_test: false,
            ..SiteConfig::default()
        };
        let _app = mount(move || view! { <App config=config /> });
        next_tick().await;

        assert_eq!(body().get_attribute(RESULTS_ATTRIBUTE), None);
    }
}
