use leptos::prelude::*;

/// Outbound link button, opens in a new tab
#[component]
pub fn ExternalLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noreferrer"
            style="padding: 3px 8px; border: 1px dashed #999; text-decoration: none; display: inline-block;"
        >
            {label} " \u{2197}"
        </a>
    }
}
