//! Mount-time self-test.

use leptos::prelude::*;
use marketly_page::selftest::run_and_report;
use marketly_page::types::TestResult;

use crate::console::ConsoleReporter;
use crate::probe::WebProbe;

/// Attribute on `<body>` holding the last self-test results as JSON.
pub const RESULTS_ATTRIBUTE: &str = "data-marketly-self-tests";

/// Runs the self-test once after the page has mounted.
///
/// Results go to the console and, when given, to `on_results`.
#[component]
#[allow(clippy::unused_unit)]
pub fn SelfTestHarness(
    /// Overrides the expected feature count
    #[prop(optional)]
    expected_features: Option<usize>,
    #[prop(optional)] on_results: Option<Callback<Vec<TestResult>>>,
) -> impl IntoView {
    // Reads no signals, so it runs exactly once.
    Effect::new(move || {
        let probe = WebProbe::from_window();
        let results = run_and_report(&probe, expected_features, &mut ConsoleReporter);

        let failed = results.iter().filter(|r| !r.pass).count();
        if failed == 0 {
            tracing::info!(checks = results.len(), "self-tests passed");
        } else {
            tracing::warn!(checks = results.len(), failed, "self-tests failed");
        }

        if let Some(callback) = on_results {
            callback.run(results);
        }
    });

    view! {}
}

/// Exposes results on `<body>` for scripted inspection.
pub fn publish_results(results: Vec<TestResult>) {
    let json = match serde_json::to_string(&results) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "could not serialize self-test results");
            return;
        }
    };

    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        tracing::warn!("no <body> to publish self-test results on");
        return;
    };
    if let Err(err) = body.set_attribute(RESULTS_ATTRIBUTE, &json) {
        tracing::warn!(error = ?err, "could not publish self-test results");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::testing::{mount, next_tick};
    use marketly_page::selftest::CHECK_FEATURES;
    use marketly_page::{MarketlyPage, PageEvent, PageState};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn harness_runs_once_after_mount() {
        let state = RwSignal::new(PageState::default());
        let runs = RwSignal::new(0usize);
        let last = RwSignal::new(Vec::<TestResult>::new());
        let on_results = Callback::new(move |results: Vec<TestResult>| {
            runs.update(|n| *n += 1);
            last.set(results);
        });
        let _page = mount(move || {
            view! {
                <MarketlyPage state=state />
                <SelfTestHarness on_results=on_results />
            }
        });
        next_tick().await;

        assert_eq!(runs.get_untracked(), 1);
        let results = last.get_untracked();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.pass), "{results:?}");

        state.update(|s| s.apply(PageEvent::SubscribeSubmitted));
        next_tick().await;
        assert_eq!(runs.get_untracked(), 1);
    }

    #[wasm_bindgen_test]
    async fn harness_reports_feature_count_mismatch() {
        let last = RwSignal::new(Vec::<TestResult>::new());
        let _page = mount(move || {
            view! {
                <MarketlyPage />
                <SelfTestHarness expected_features=5 on_results=Callback::new(move |r: Vec<TestResult>| last.set(r)) />
            }
        });
        next_tick().await;

        let results = last.get_untracked();
        let features = results
            .iter()
            .find(|r| r.name == CHECK_FEATURES)
            .expect("feature check ran");
        assert!(!features.pass);
        assert_eq!(features.details.as_deref(), Some("found 4"));
    }

    #[wasm_bindgen_test]
    fn publish_results_writes_json_to_body() {
        let results = vec![
            TestResult::new("brandPresent", true, None),
            TestResult::new("featuresCount", false, Some("found 3".into())),
        ];
        publish_results(results.clone());

        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
        let json = body.get_attribute(RESULTS_ATTRIBUTE).expect("attribute set");
        assert_eq!(
            json,
            r#"[{"name":"brandPresent","pass":true},{"name":"featuresCount","pass":false,"details":"found 3"}]"#
        );
        let parsed: Vec<TestResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
        body.remove_attribute(RESULTS_ATTRIBUTE).unwrap();
    }
}
