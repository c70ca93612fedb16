use leptos::prelude::*;

/// Titled block of the page with an anchor link
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id style="margin-bottom: 2rem;">
            <h2 style="text-transform: uppercase; font-size: 1rem;">
                {title}
                <a href=anchor_href style="margin-left: 0.25rem; text-decoration: none;">" \u{00A7}"</a>
            </h2>
            <div style="padding-left: 1rem; border-left: 1px dashed #999;">
                {children()}
            </div>
        </section>
    }
}
