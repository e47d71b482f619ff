//! CSS for the landing page.
//!
//! The page ships its own stylesheet inside a `<style>` element so it has
//! no utility-CSS build step and no runtime asset fetches. Class names are
//! prefixed with `ml-`.
//!
//! # Customization
//!
//! ```rust
//! use marketly_page::styles::PAGE_CSS;
//!
//! let my_css = ".ml-brand { background: #111827; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains(".ml-root"));
//! ```

/// Complete stylesheet for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --ml-bg: #f7fafc;
    --ml-surface: #ffffff;
    --ml-text: #1f2937;
    --ml-text-muted: #6b7280;
    --ml-text-quote: #374151;
    --ml-border: #e5e7eb;
    --ml-border-strong: #d1d5db;
    --ml-accent: #4f46e5;
    --ml-positive: #059669;
    --ml-negative: #dc2626;
    --ml-success: #15803d;
    --ml-container-max: 1100px;
}

.ml-root {
    font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial;
    background: var(--ml-bg);
    color: var(--ml-text);
    min-height: 100vh;
}

.ml-muted { color: var(--ml-text-muted); }
.ml-small { font-size: 12px; }

/* Header */
.ml-header { background: var(--ml-surface); box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.ml-container {
    max-width: var(--ml-container-max);
    margin: 0 auto;
    padding: 20px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.ml-header-start, .ml-header-end { display: flex; align-items: center; }
.ml-header-start { gap: 16px; }
.ml-header-end { gap: 12px; }
.ml-brand { background: var(--ml-accent); color: #fff; padding: 8px 12px; border-radius: 8px; font-weight: 700; }
.ml-nav { display: flex; gap: 12px; color: var(--ml-text-muted); }
.ml-search { padding: 8px 10px; border-radius: 8px; border: 1px solid var(--ml-border); }

/* Buttons */
.ml-btn {
    background: var(--ml-accent);
    color: #fff;
    padding: 10px 14px;
    border-radius: 10px;
    border: none;
    cursor: pointer;
}
.ml-btn.ghost { background: transparent; border: 1px solid var(--ml-border-strong); color: inherit; }
.ml-btn-link { text-decoration: none; display: inline-flex; align-items: center; justify-content: center; }
.ml-btn-plain { margin-top: 8px; padding: 8px 12px; border-radius: 8px; }

/* Hero */
.ml-hero {
    max-width: var(--ml-container-max);
    margin: 48px auto;
    display: grid;
    grid-template-columns: 1fr 420px;
    gap: 32px;
    align-items: center;
    padding: 0 20px;
}
.ml-hero h1 { font-size: 32px; line-height: 1.05; margin: 0 0 12px 0; font-weight: 800; }
.ml-hero-lead { max-width: 520px; }
.ml-hero-actions { margin-top: 16px; display: flex; gap: 12px; }
.ml-subscribe { margin-top: 16px; max-width: 420px; }
.ml-subscribe-row { display: flex; gap: 8px; }
.ml-input { flex: 1; padding: 10px; border-radius: 8px; border: 1px solid var(--ml-border); }
.ml-confirm { color: var(--ml-success); margin-top: 8px; }

/* Cards */
.ml-card { background: var(--ml-surface); border-radius: 16px; padding: 16px; box-shadow: 0 4px 10px rgba(16,24,40,0.04); }
.ml-card-head { display: flex; justify-content: space-between; align-items: center; }
.ml-card-head h3, .ml-card-head p { margin: 0; }
.ml-tile { padding: 12px; border: 1px solid var(--ml-border); border-radius: 8px; }
.ml-grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 12px; }
.ml-grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; margin-top: 12px; }
.ml-metric-value { font-size: 24px; font-weight: 700; }
.ml-up { color: var(--ml-positive); }
.ml-down { color: var(--ml-negative); }
.ml-chart-placeholder {
    height: 140px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-top: 12px;
    color: var(--ml-accent);
}

/* Sections */
.ml-section { max-width: var(--ml-container-max); margin: 24px auto; padding: 0 20px; }
.ml-section-lead { max-width: 720px; }
#features.ml-section { margin-top: 40px; }

/* Features */
.ml-features { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin-top: 12px; }
.ml-feature { background: var(--ml-surface); border-radius: 10px; padding: 12px; border: 1px solid var(--ml-border); }
.ml-feature-icon { font-size: 24px; }
.ml-feature h3 { margin-top: 8px; }
.ml-feature p { color: var(--ml-text-muted); font-size: 14px; margin-top: 6px; }

/* Pricing */
.ml-pricing { display: flex; gap: 12px; margin-top: 12px; flex-wrap: wrap; }
.ml-tier { flex: 1 1 260px; padding: 16px; border-radius: 10px; border: 1px solid var(--ml-border); }
.ml-price { font-size: 24px; font-weight: 700; }
.ml-price-suffix { font-size: 14px; font-weight: 500; }

/* Testimonials */
.ml-testimonials { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; }
.ml-quote { font-style: italic; color: var(--ml-text-quote); }
.ml-use-case-title { font-weight: 700; }
.ml-slot {
    height: 40px;
    border-radius: 8px;
    border: 1px solid var(--ml-border);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 13px;
    color: var(--ml-text-muted);
}

/* Contact */
.ml-contact { display: grid; grid-template-columns: 2fr 1fr; gap: 12px; margin-top: 12px; }
.ml-contact input, .ml-contact textarea { padding: 10px; border-radius: 8px; border: 1px solid var(--ml-border); }
.ml-contact textarea, .ml-contact-actions { grid-column: 1 / -1; }
.ml-contact-actions { text-align: right; }

/* Footer */
.ml-footer { margin-top: 32px; background: var(--ml-surface); border-top: 1px solid var(--ml-border); }
.ml-footer-inner {
    max-width: var(--ml-container-max);
    margin: 0 auto;
    padding: 16px 20px;
    display: flex;
    justify-content: space-between;
    align-items: center;
    color: var(--ml-text-muted);
}
.ml-footer-links { display: flex; gap: 12px; }

@media (max-width: 800px) {
    .ml-hero { grid-template-columns: 1fr; }
    .ml-features { grid-template-columns: repeat(2, 1fr); }
    .ml-testimonials { grid-template-columns: 1fr; }
}
"#;

/// Content-Security-Policy for the statically rendered document. The page
/// makes no network requests of its own.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'wasm-unsafe-eval'; connect-src 'none';";
