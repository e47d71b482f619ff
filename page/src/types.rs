//! Data types for the landing page content and diagnostics.
//!
//! Content types borrow `'static` strings: every piece of copy on the page
//! is compiled in and never mutated.
//!
//! # Example
//!
//! ```rust
//! use marketly_page::types::Plan;
//!
//! let plan: Plan = "pro".parse().unwrap();
//! assert_eq!(plan, Plan::Pro);
//! assert_eq!(plan.as_str(), "pro");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry in the product feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Unique identifier, also used as the render key
    pub id: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence description
    pub desc: &'static str,
    /// Optional glyph shown above the title
    pub icon: Option<&'static str>,
}

/// Subscription tier offered in the pricing section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Free tier, the initial selection
    #[default]
    Starter,
    /// Paid tier
    Pro,
    /// Sales-led tier
    Enterprise,
}

impl Plan {
    /// All plans in pricing order.
    pub const ALL: [Plan; 3] = [Plan::Starter, Plan::Pro, Plan::Enterprise];

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Starter => "starter",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plan identifier: {0:?}")]
pub struct UnknownPlan(pub String);

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Plan::Starter),
            "pro" => Ok(Plan::Pro),
            "enterprise" => Ok(Plan::Enterprise),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

/// A pricing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub plan: Plan,
    pub name: &'static str,
    pub price: &'static str,
    /// Smaller text after the price, e.g. "/mo"
    pub price_suffix: Option<&'static str>,
    pub blurb: &'static str,
    /// Button label
    pub cta: &'static str,
    /// Highlighted with the primary button style
    pub primary: bool,
}

/// Which way a metric moved, drives the delta colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A headline number on the dashboard preview card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub trend: Trend,
}

/// Customer use case tile in the testimonials section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCase {
    pub title: &'static str,
    pub summary: &'static str,
}

/// A navigation or footer link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Outcome of one self-test check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Check name, e.g. `featuresCount`
    pub name: String,
    pub pass: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TestResult {
    pub fn new(name: impl Into<String>, pass: bool, details: Option<String>) -> Self {
        Self {
            name: name.into(),
            pass,
            details,
        }
    }

    /// `PASS` or `FAIL`.
    pub fn verdict(&self) -> &'static str {
        if self.pass { "PASS" } else { "FAIL" }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.verdict())?;
        if let Some(details) = &self.details {
            write!(f, " {}", details)?;
        }
        Ok(())
    }
}
