//! Brand mark linking back to the storefront home.

use leptos::prelude::*;

pub const BRAND_NAME: &str = "DentMart";

#[component]
pub fn Logo(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <a class="logo" class:logo--compact=compact href="/" aria-label=format!("{BRAND_NAME} home")>
            <span class="logo__mark" aria-hidden="true">"🦷"</span>
            {(!compact).then(|| view! { <span class="logo__text">{BRAND_NAME}</span> })}
        </a>
    }
}
