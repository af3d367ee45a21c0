//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::auth::AuthStore;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Restores the persisted session and provides it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthStore::restore(LocalStorage));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/dentmart.css"/>
        <Title text="DentMart"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
