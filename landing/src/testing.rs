//! Helpers for the in-browser component tests.

use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::task::Executor;
use leptos::tachys::view::Mountable;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

/// A component mounted into its own `<div>` under `<body>`.
pub struct Mounted<M: Mountable> {
    host: HtmlElement,
    handle: Option<UnmountHandle<M>>,
}

impl<M: Mountable> Mounted<M> {
    pub fn query(&self, selector: &str) -> Element {
        self.host
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.host.query_selector_all(selector).unwrap().length()
    }

    pub fn html(&self) -> String {
        self.host.inner_html()
    }
}

impl<M: Mountable> Drop for Mounted<M> {
    fn drop(&mut self) {
        drop(self.handle.take());
        self.host.remove();
    }
}

pub fn mount<F, N>(view: F) -> Mounted<N::State>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let _ = Executor::init_wasm_bindgen();
    let document = document();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();

    let handle = mount_to(host.clone(), view);
    Mounted {
        host,
        handle: Some(handle),
    }
}

/// Waits for scheduled effects and DOM updates to run.
pub async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Dispatches a bubbling, cancelable event. Returns `false` when a handler
/// prevented the default action.
pub fn fire(target: &Element, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Types `value` into an input the way the browser reports it.
pub fn type_into(input: &Element, value: &str) {
    input.unchecked_ref::<HtmlInputElement>().set_value(value);
    fire(input, "input");
}

pub fn click(target: &Element) {
    target.unchecked_ref::<HtmlElement>().click();
}
