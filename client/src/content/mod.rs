//! Static marketing content bundled into the binary.
//!
//! Fixtures are parsed once on first access and shared for the lifetime of the
//! page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::OnceLock;

use serde::Deserialize;

const HOW_IT_WORKS_JSON: &str = include_str!("how_it_works.json");

/// One step of the "how it works" walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Step {
    pub step: u32,
    pub title: String,
    pub description: String,
    /// Icon key, e.g. `"truck"`. Unknown keys are kept and render no glyph.
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HowItWorksContent {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<Step>,
}

/// Parse a "how it works" fixture, ordering steps by step number.
///
/// # Errors
///
/// Returns the JSON error if `raw` does not match the fixture shape.
pub fn parse_how_it_works(raw: &str) -> Result<HowItWorksContent, serde_json::Error> {
    let mut content: HowItWorksContent = serde_json::from_str(raw)?;
    content.steps.sort_by_key(|s| s.step);
    Ok(content)
}

/// The bundled "how it works" content.
pub fn how_it_works() -> &'static HowItWorksContent {
    static CONTENT: OnceLock<HowItWorksContent> = OnceLock::new();
    CONTENT.get_or_init(|| parse_how_it_works(HOW_IT_WORKS_JSON).unwrap_or_default())
}
