//! Local UI state for one mounted page.
//!
//! The four fields are independent. Components never mutate a field
//! directly; they dispatch a [`PageEvent`] and [`PageState::apply`] performs
//! the transition, which keeps every handler a one-liner and the transitions
//! testable without a browser.

use serde::{Deserialize, Serialize};

use crate::types::Plan;

/// State owned by the page component.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Last plan button clicked. Stored only, nothing renders from it yet.
    pub plan: Plan,
    /// Subscribe form email input
    pub email: String,
    /// Header search input. Stored only, no filtering.
    pub search: String,
    /// Set once by the subscribe form, never cleared
    pub subscribed: bool,
}

/// A user interaction the page reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    SearchChanged(String),
    EmailChanged(String),
    SubscribeSubmitted,
    PlanSelected(Plan),
    /// The contact form is an inert placeholder.
    ContactSubmitted,
}

impl PageState {
    /// Applies one interaction.
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::SearchChanged(value) => self.search = value,
            PageEvent::EmailChanged(value) => self.email = value,
            PageEvent::SubscribeSubmitted => {
                if !self.subscribed {
                    tracing::debug!("subscribe form submitted");
                }
                self.subscribed = true;
            }
            PageEvent::PlanSelected(plan) => {
                tracing::debug!(plan = %plan, "plan selected");
                self.plan = plan;
            }
            PageEvent::ContactSubmitted => {
                tracing::debug!("contact form submitted (no-op)");
            }
        }
    }

    /// Builder-style [`apply`](Self::apply).
    pub fn with(mut self, event: PageEvent) -> Self {
        self.apply(event);
        self
    }
}
