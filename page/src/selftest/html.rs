//! [`DomProbe`] over a rendered HTML string.
//!
//! Good enough for markup produced by [`crate::render_page`]: attributes are
//! double-quoted and hooked elements do not nest inside an element with the
//! same tag.

use super::{DomProbe, ProbeError, TestHook};

pub struct HtmlProbe<'a> {
    html: &'a str,
}

impl<'a> HtmlProbe<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }

    fn marker(hook: TestHook) -> String {
        format!("data-testid=\"{}\"", hook.testid())
    }

    /// Inner HTML of the element whose opening tag contains `attr_at`.
    fn inner_html(&self, attr_at: usize) -> Option<&'a str> {
        let open = self.html[..attr_at].rfind('<')?;
        let tag: String = self.html[open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if tag.is_empty() {
            return None;
        }
        let body_start = attr_at + self.html[attr_at..].find('>')? + 1;
        let close = format!("</{tag}>");
        let body_len = self.html[body_start..].find(&close)?;
        Some(&self.html[body_start..body_start + body_len])
    }
}

impl DomProbe for HtmlProbe<'_> {
    fn count(&self, hook: TestHook) -> Result<usize, ProbeError> {
        Ok(self.html.matches(&Self::marker(hook)).count())
    }

    fn text(&self, hook: TestHook) -> Result<Option<String>, ProbeError> {
        let Some(attr_at) = self.html.find(&Self::marker(hook)) else {
            return Ok(None);
        };
        Ok(self.inner_html(attr_at).map(text_content))
    }
}

/// Drops tags and comments, decodes the entities the renderer emits.
fn text_content(inner: &str) -> String {
    let mut text = String::with_capacity(inner.len());
    let mut in_tag = false;
    for c in inner.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
