//! [`DomProbe`] over the live document.

use marketly_page::selftest::{DomProbe, ProbeError, TestHook};
use web_sys::Document;

pub struct WebProbe {
    document: Option<Document>,
}

impl WebProbe {
    /// Probe for the current window's document. Without one every query
    /// fails with [`ProbeError::NoDocument`].
    pub fn from_window() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn document(&self) -> Result<&Document, ProbeError> {
        self.document.as_ref().ok_or(ProbeError::NoDocument)
    }
}

fn query_error(selector: String, err: wasm_bindgen::JsValue) -> ProbeError {
    ProbeError::Query {
        selector,
        message: format!("{err:?}"),
    }
}

impl DomProbe for WebProbe {
    fn count(&self, hook: TestHook) -> Result<usize, ProbeError> {
        let selector = hook.selector();
        let nodes = self
            .document()?
            .query_selector_all(&selector)
            .map_err(|err| query_error(selector, err))?;
        Ok(nodes.length() as usize)
    }

    fn text(&self, hook: TestHook) -> Result<Option<String>, ProbeError> {
        let selector = hook.selector();
        let element = self
            .document()?
            .query_selector(&selector)
            .map_err(|err| query_error(selector, err))?;
        Ok(element.map(|el| el.text_content().unwrap_or_default()))
    }
}
