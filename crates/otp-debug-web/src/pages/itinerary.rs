use leptos::prelude::*;

use crate::components::{ExternalLink, ItineraryLineLink, Section};
use crate::config::Settings;
use crate::explorer::ExplorerConfig;
use crate::model::Leg;

/// Itinerary list - one row per leg, transit legs link their line into GraphiQL
#[component]
pub fn ItineraryPage() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let explorer = settings.explorer;
    let legs = settings.itinerary.legs;
    let leg_count = legs.len();

    view! {
        <main style="max-width: 80ch; margin: 0 auto; padding: 2rem 1rem; font-family: monospace;">
            <header style="margin-bottom: 2rem;">
                <h1>"Itinerary"</h1>
                {explorer.is_configured().then(|| {
                    let href = explorer.base().to_string();
                    view! { <ExternalLink href=href label="GraphiQL" /> }
                })}
            </header>

            <Section id="legs" title=format!("Legs ({})", leg_count)>
                <ol style="list-style: none; padding: 0;">
                    {legs
                        .into_iter()
                        .map(|leg| view! { <LegRow leg=leg config=explorer.clone() /> })
                        .collect_view()}
                </ol>
            </Section>
        </main>
    }
}

#[component]
fn LegRow(leg: Leg, config: ExplorerConfig) -> impl IntoView {
    let mode = leg.mode.label();
    let destination = leg.front_text().map(|text| format!("\u{2192} {}", text));

    view! {
        <li style="display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.5rem;">
            <span style="min-width: 8ch;">{mode}</span>
            {if leg.line.is_some() {
                view! { <ItineraryLineLink leg=leg config=config /> }.into_any()
            } else {
                view! { <span>"\u{2014}"</span> }.into_any()
            }}
            {destination.map(|text| view! { <span>{text}</span> })}
        </li>
    }
}
