//! Post-render smoke checks.
//!
//! Three structural checks run against a [`DomProbe`]:
//!
//! | name            | passes when                                            |
//! |-----------------|--------------------------------------------------------|
//! | `brandPresent`  | the brand marker exists                                |
//! | `heroTitle`     | the top-level heading contains [`HERO_TITLE_PREFIX`]   |
//! | `featuresCount` | rendered feature cards == expected feature count       |
//!
//! Results are returned in that order and can be handed to any
//! [`Reporter`]. A failed check is data, never an error: the page keeps
//! working whatever the harness finds.
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use marketly_page::render_page;
//! use marketly_page::selftest::{run_self_tests, HtmlProbe};
//!
//! let html = render_page(&Default::default());
//! let results = run_self_tests(&HtmlProbe::new(&html), None);
//! assert!(results.iter().all(|r| r.pass));
//! # }
//! ```
//!
//! [`HERO_TITLE_PREFIX`]: crate::content::HERO_TITLE_PREFIX

mod html;

pub use html::HtmlProbe;

use thiserror::Error;

use crate::content::{FEATURES, HERO_TITLE_PREFIX};
use crate::types::TestResult;

/// Heading the report is grouped under.
pub const SELF_TEST_GROUP: &str = "Marketly Self-Tests";

pub const CHECK_BRAND: &str = "brandPresent";
pub const CHECK_HERO: &str = "heroTitle";
pub const CHECK_FEATURES: &str = "featuresCount";

/// Elements the harness looks up. Each is tagged with a `data-testid`
/// attribute so lookups do not depend on styling classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestHook {
    Brand,
    HeroTitle,
    Feature,
}

impl TestHook {
    /// Value of the element's `data-testid` attribute.
    pub fn testid(self) -> &'static str {
        match self {
            TestHook::Brand => "brand",
            TestHook::HeroTitle => "hero-title",
            TestHook::Feature => "feature",
        }
    }

    /// CSS selector matching the hook.
    pub fn selector(self) -> String {
        format!("[data-testid=\"{}\"]", self.testid())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("no document available")]
    NoDocument,
    #[error("query {selector} failed: {message}")]
    Query { selector: String, message: String },
}

/// Read-only view of a rendered page.
pub trait DomProbe {
    /// Number of elements carrying the hook.
    fn count(&self, hook: TestHook) -> Result<usize, ProbeError>;

    /// Text content of the first element carrying the hook.
    fn text(&self, hook: TestHook) -> Result<Option<String>, ProbeError>;

    fn exists(&self, hook: TestHook) -> Result<bool, ProbeError> {
        Ok(self.count(hook)? > 0)
    }
}

/// Runs all checks once.
///
/// `expected_features` defaults to the length of the feature table.
pub fn run_self_tests<P: DomProbe + ?Sized>(
    probe: &P,
    expected_features: Option<usize>,
) -> Vec<TestResult> {
    let expected_features = expected_features.unwrap_or(FEATURES.len());
    vec![
        check_brand(probe),
        check_hero(probe),
        check_features(probe, expected_features),
    ]
}

fn check_brand<P: DomProbe + ?Sized>(probe: &P) -> TestResult {
    match probe.exists(TestHook::Brand) {
        Ok(true) => TestResult::new(CHECK_BRAND, true, None),
        Ok(false) => TestResult::new(CHECK_BRAND, false, Some("ml-brand element not found".into())),
        Err(err) => TestResult::new(CHECK_BRAND, false, Some(err.to_string())),
    }
}

fn check_hero<P: DomProbe + ?Sized>(probe: &P) -> TestResult {
    match probe.text(TestHook::HeroTitle) {
        Ok(Some(text)) => TestResult::new(CHECK_HERO, text.contains(HERO_TITLE_PREFIX), None),
        Ok(None) => TestResult::new(CHECK_HERO, false, Some("Hero title missing".into())),
        Err(err) => TestResult::new(CHECK_HERO, false, Some(err.to_string())),
    }
}

fn check_features<P: DomProbe + ?Sized>(probe: &P, expected: usize) -> TestResult {
    match probe.count(TestHook::Feature) {
        Ok(found) => TestResult::new(CHECK_FEATURES, found == expected, Some(format!("found {found}"))),
        Err(err) => TestResult::new(CHECK_FEATURES, false, Some(err.to_string())),
    }
}

/// Sink for self-test output.
pub trait Reporter {
    fn group_start(&mut self, _title: &str) {}

    fn result(&mut self, result: &TestResult);

    fn group_end(&mut self) {}
}

/// Writes `results` to `reporter` under [`SELF_TEST_GROUP`].
pub fn report<R: Reporter + ?Sized>(results: &[TestResult], reporter: &mut R) {
    reporter.group_start(SELF_TEST_GROUP);
    for result in results {
        reporter.result(result);
    }
    reporter.group_end();
}

/// Runs the checks, reports them, and returns the results.
pub fn run_and_report<P, R>(probe: &P, expected_features: Option<usize>, reporter: &mut R) -> Vec<TestResult>
where
    P: DomProbe + ?Sized,
    R: Reporter + ?Sized,
{
    let results = run_self_tests(probe, expected_features);
    report(&results, reporter);
    results
}

/// Emits one `tracing` event per result, failures at `warn`.
#[derive(Debug, Default)]
pub struct TracingReporter {
    group: Option<String>,
}

impl Reporter for TracingReporter {
    fn group_start(&mut self, title: &str) {
        self.group = Some(title.to_string());
    }

    fn result(&mut self, result: &TestResult) {
        let group = self.group.as_deref().unwrap_or(SELF_TEST_GROUP);
        if result.pass {
            tracing::info!(group, check = %result.name, "{result}");
        } else {
            tracing::warn!(group, check = %result.name, "{result}");
        }
    }

    fn group_end(&mut self) {
        self.group = None;
    }
}

/// Keeps the report as text lines. Group headers are recorded too.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectingReporter {
    pub groups: Vec<String>,
    pub lines: Vec<String>,
}

impl Reporter for CollectingReporter {
    fn group_start(&mut self, title: &str) {
        self.groups.push(title.to_string());
    }

    fn result(&mut self, result: &TestResult) {
        self.lines.push(result.to_string());
    }
}

/// Adapts a closure into a [`Reporter`].
pub struct FnReporter<F>(pub F);

impl<F: FnMut(&TestResult)> Reporter for FnReporter<F> {
    fn result(&mut self, result: &TestResult) {
        (self.0)(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FakeProbe {
        brand: usize,
        hero: Option<&'static str>,
        features: usize,
    }

    impl DomProbe for FakeProbe {
        fn count(&self, hook: TestHook) -> Result<usize, ProbeError> {
            Ok(match hook {
                TestHook::Brand => self.brand,
                TestHook::HeroTitle => usize::from(self.hero.is_some()),
                TestHook::Feature => self.features,
            })
        }

        fn text(&self, hook: TestHook) -> Result<Option<String>, ProbeError> {
            Ok(match hook {
                TestHook::HeroTitle => self.hero.map(str::to_string),
                _ => None,
            })
        }
    }

    struct NoDocument;

    impl DomProbe for NoDocument {
        fn count(&self, _hook: TestHook) -> Result<usize, ProbeError> {
            Err(ProbeError::NoDocument)
        }

        fn text(&self, _hook: TestHook) -> Result<Option<String>, ProbeError> {
            Err(ProbeError::NoDocument)
        }
    }

    fn healthy() -> FakeProbe {
        FakeProbe {
            brand: 1,
            hero: Some("Make data-driven decisions faster."),
            features: 4,
        }
    }

    #[test]
    fn healthy_page_passes_all_three() {
        let results = run_self_tests(&healthy(), None);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, [CHECK_BRAND, CHECK_HERO, CHECK_FEATURES]);
        assert!(results.iter().all(|r| r.pass));
        assert_eq!(results[2].details.as_deref(), Some("found 4"));
    }

    #[test]
    fn missing_brand_is_reported() {
        let probe = FakeProbe { brand: 0, ..healthy() };
        let results = run_self_tests(&probe, None);

        assert!(!results[0].pass);
        assert_eq!(results[0].details.as_deref(), Some("ml-brand element not found"));
        assert!(results[1].pass && results[2].pass);
    }

    #[test]
    fn hero_with_wrong_copy_fails_without_details() {
        let probe = FakeProbe { hero: Some("Welcome"), ..healthy() };
        let result = &run_self_tests(&probe, None)[1];

        assert!(!result.pass);
        assert_eq!(result.details, None);
    }

    #[test]
    fn missing_hero_says_so() {
        let probe = FakeProbe { hero: None, ..healthy() };
        let result = &run_self_tests(&probe, None)[1];

        assert!(!result.pass);
        assert_eq!(result.details.as_deref(), Some("Hero title missing"));
    }

    #[test]
    fn feature_count_mismatch_reports_actual_count() {
        let result = &run_self_tests(&healthy(), Some(5))[2];

        assert!(!result.pass);
        assert_eq!(result.details.as_deref(), Some("found 4"));
    }

    #[test]
    fn probe_errors_become_failed_checks() {
        let results = run_self_tests(&NoDocument, None);

        assert_eq!(results.len(), 3);
        for result in &results {
            assert!(!result.pass);
            assert_eq!(result.details.as_deref(), Some("no document available"));
        }
    }

    #[test]
    fn report_groups_one_line_per_check() {
        let mut reporter = CollectingReporter::default();
        let probe = FakeProbe { features: 3, ..healthy() };
        run_and_report(&probe, None, &mut reporter);

        assert_eq!(reporter.groups, [SELF_TEST_GROUP]);
        assert_eq!(
            reporter.lines,
            [
                "brandPresent: PASS",
                "heroTitle: PASS",
                "featuresCount: FAIL found 3",
            ]
        );
    }

    #[test]
    fn closure_reporter_sees_every_result() {
        let mut seen = Vec::new();
        let results = run_self_tests(&healthy(), None);
        report(&results, &mut FnReporter(|r: &TestResult| seen.push(r.name.clone())));

        assert_eq!(seen, [CHECK_BRAND, CHECK_HERO, CHECK_FEATURES]);
    }

    #[test]
    fn tracing_reporter_does_not_panic_without_subscriber() {
        let mut reporter = TracingReporter::default();
        let results = run_and_report(&NoDocument, None, &mut reporter);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn hook_selectors_use_test_ids() {
        assert_eq!(TestHook::Feature.selector(), "[data-testid=\"feature\"]");
    }
}
