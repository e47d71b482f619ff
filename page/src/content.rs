//! Static page copy.
//!
//! Everything the page shows that is not driven by state lives here, in
//! render order.

use crate::types::{Feature, Link, Metric, Plan, PricingTier, Trend, UseCase};

/// Product name shown in the header brand marker.
pub const BRAND: &str = "Marketly";

/// Hero heading. The self-test matches on [`HERO_TITLE_PREFIX`].
pub const HERO_TITLE: &str = "Make data-driven decisions faster.";

/// Opening phrase the `heroTitle` self-test looks for.
pub const HERO_TITLE_PREFIX: &str = "Make data-driven";

pub const HERO_LEAD: &str = "Marketly helps teams turn raw data into clear actions: realtime dashboards, automated reports, and AI-powered insights — all in one place.";

/// Shown once the subscribe form has been submitted.
pub const SUBSCRIBED_MESSAGE: &str = "Thanks — we'll keep you posted!";

pub const SEARCH_LABEL: &str = "Search Marketly";
pub const SEARCH_PLACEHOLDER: &str = "Search docs, dashboards...";

/// Feature grid entries, in display order.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "f1",
        title: "Realtime Dashboards",
        desc: "Connect data sources and get live metrics and alerts.",
        icon: Some("📊"),
    },
    Feature {
        id: "f2",
        title: "Automated Reports",
        desc: "Schedule PDF or email reports for stakeholders.",
        icon: Some("📬"),
    },
    Feature {
        id: "f3",
        title: "Predictive Insights",
        desc: "Machine-learning models suggest next-best actions.",
        icon: Some("🤖"),
    },
    Feature {
        id: "f4",
        title: "Team Collaboration",
        desc: "Share comments, assign tasks, and tag teammates.",
        icon: Some("👥"),
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        plan: Plan::Starter,
        name: "Starter",
        price: "Free",
        price_suffix: None,
        blurb: "Small teams, limited to 3 dashboards.",
        cta: "Select",
        primary: false,
    },
    PricingTier {
        plan: Plan::Pro,
        name: "Pro",
        price: "$29",
        price_suffix: Some("/mo"),
        blurb: "Advanced analytics, 24/7 support.",
        cta: "Choose Pro",
        primary: true,
    },
    PricingTier {
        plan: Plan::Enterprise,
        name: "Enterprise",
        price: "Custom",
        price_suffix: None,
        blurb: "SAML, dedicated account manager, SLAs.",
        cta: "Contact sales",
        primary: false,
    },
];

/// Dashboard preview numbers in the hero card.
pub const PREVIEW_METRICS: &[Metric] = &[
    Metric {
        label: "Revenue",
        value: "$48,420",
        delta: "+8.2% vs last week",
        trend: Trend::Up,
    },
    Metric {
        label: "Active Users",
        value: "12,430",
        delta: "-2.1% vs last week",
        trend: Trend::Down,
    },
];

pub const TESTIMONIAL_QUOTE: &str = "“Marketly cut our reporting time in half and gave us reliable forecasts we actually trust.” — Ana P., Head of Growth";

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Campaign analysis",
        summary: "Connected ad platforms and reduced CPA by 22%.",
    },
    UseCase {
        title: "Ops automation",
        summary: "Automated alerts for anomalies sped up response time.",
    },
];

/// Number of placeholder slots in the calendar preview aside.
pub const CALENDAR_SLOTS: usize = 9;

pub const NAV_LINKS: &[Link] = &[
    Link {
        label: "Features",
        href: "#features",
    },
    Link {
        label: "Pricing",
        href: "#pricing",
    },
    Link {
        label: "Customers",
        href: "#testimonials",
    },
];

pub const FOOTER_LINKS: &[Link] = &[
    Link {
        label: "Privacy",
        href: "#",
    },
    Link {
        label: "Terms",
        href: "#",
    },
];

/// Looks up the pricing card for a plan.
pub fn pricing_for(plan: Plan) -> Option<&'static PricingTier> {
    PRICING.iter().find(|tier| tier.plan == plan)
}
