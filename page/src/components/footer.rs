use leptos::prelude::*;

use crate::content::FOOTER_LINKS;

#[component]
pub fn Footer(brand: String, year: i32) -> impl IntoView {
    view! {
        <footer class="ml-footer">
            <div class="ml-footer-inner">
                <div>{format!("© {} {} — Prototype", year, brand)}</div>
                <div class="ml-footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href={link.href}>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
