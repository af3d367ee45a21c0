//! Storefront landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::how_it_works::HowItWorks;
use crate::components::logo::Logo;
use crate::state::auth::{AuthState, AuthStore};
use crate::util::storage::LocalStorage;

/// Header greeting for the current session.
pub fn greeting(state: &AuthState) -> String {
    match (&state.user, state.is_authenticated) {
        (Some(user), true) => format!("Welcome back, {}", user.name),
        _ => "Dental supplies for clinics, wholesale".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStore<LocalStorage>>>();

    let headline = move || auth.with(|store| greeting(store.state()));
    let signed_in = move || auth.with(AuthStore::is_authenticated);
    let on_logout = move |_| auth.update(AuthStore::clear_auth);

    view! {
        <div class="home-page">
            <header class="site-header">
                <Logo/>
                <Show when=signed_in>
                    <button class="site-header__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </header>
            <main>
                <section class="hero">
                    <h1 class="hero__headline">{headline}</h1>
                </section>
                <HowItWorks/>
            </main>
        </div>
    }
}
