//! "How it works" section driven by the bundled steps fixture.
//!
//! DESIGN
//! ======
//! Icon keys map to glyphs through a fixed table. Keys outside the table
//! render nothing, so a typo in the fixture degrades to a missing icon
//! rather than a broken page.

#[cfg(test)]
#[path = "how_it_works_test.rs"]
mod how_it_works_test;

use leptos::prelude::*;

use crate::content::{Step, how_it_works};

/// Glyph for a step icon key, or `None` for unrecognized keys.
pub fn step_icon(key: &str) -> Option<&'static str> {
    match key {
        "user-check" => Some("👤"),
        "search" => Some("🔍"),
        "shopping-cart" => Some("🛒"),
        "truck" => Some("🚚"),
        _ => None,
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let content = how_it_works();

    view! {
        <section class="how-it-works" id="how-it-works">
            <h2 class="how-it-works__title">{content.title.clone()}</h2>
            <p class="how-it-works__subtitle">{content.subtitle.clone()}</p>
            <ol class="how-it-works__steps">
                {content.steps.iter().cloned().map(|step| view! { <StepCard step=step/> }).collect_view()}
            </ol>
        </section>
    }
}

/// A single numbered step.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    let glyph = step_icon(&step.icon);

    view! {
        <li class="step-card">
            <span class="step-card__number">{step.step}</span>
            {glyph.map(|g| view! { <span class="step-card__icon" aria-hidden="true">{g}</span> })}
            <h3 class="step-card__title">{step.title}</h3>
            <p class="step-card__description">{step.description}</p>
        </li>
    }
}
