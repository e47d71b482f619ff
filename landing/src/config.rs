//! Reads [`SiteConfig`] from the host page.

use marketly_page::SiteConfig;
use marketly_page::config::CONFIG_ELEMENT_ID;
use serde_json::{Map, Value};

/// Embedded JSON config, with the footer year taken from the browser clock
/// unless the JSON sets one.
pub fn load_site_config() -> SiteConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let config = resolve(embedded.as_deref(), current_year());
    tracing::debug!(?config, embedded = embedded.is_some(), "site config loaded");
    config
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

fn resolve(embedded: Option<&str>, year: i32) -> SiteConfig {
    let mut fields = match embedded.map(serde_json::from_str::<Value>) {
        None => Map::new(),
        Some(Ok(Value::Object(fields))) => fields,
        Some(Ok(other)) => {
            tracing::warn!(kind = ?other, "site config is not a JSON object, using defaults");
            Map::new()
        }
        Some(Err(err)) => {
            tracing::warn!(error = %err, "invalid site config, using defaults");
            Map::new()
        }
    };
    fields.entry("copyright_year").or_insert_with(|| Value::from(year));

    SiteConfig::from_json_or_default(&Value::Object(fields).to_string())
}
