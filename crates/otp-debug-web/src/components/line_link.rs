use leptos::prelude::*;

use crate::color::{color_for_leg, generate_text_color};
use crate::explorer::{ExplorerConfig, build_line_url};
use crate::model::Leg;
use crate::query::line_query_as_string;

/// Shown in the tooltip for fields the leg doesn't have
const MISSING: &str = "undefined";

/// Everything the line link renders, derived from a leg
#[derive(Debug, Clone, PartialEq)]
pub struct LineLinkAttrs {
    pub href: String,
    pub title: String,
    pub label: String,
    pub style: String,
}

impl LineLinkAttrs {
    pub fn for_leg(leg: &Leg, config: &ExplorerConfig) -> Self {
        let href = build_line_url(config, line_query_as_string(), leg.line_id());

        let title = format!(
            "Line {} to {}",
            leg.public_code().unwrap_or(MISSING),
            leg.front_text().unwrap_or(MISSING)
        );

        let background = color_for_leg(leg);
        let foreground = generate_text_color(&background);

        // NOTE: `elipsis` is not a valid `overflow` value, browsers drop it and nothing
        // gets truncated. Kept as-is until someone confirms whether `text-overflow: ellipsis`
        // was meant.
        let style = format!(
            "background-color: {}; color: {}; border-radius: 7px; padding: 3px 6px; \
             text-decoration: none; max-width: 14pt; overflow: elipsis;",
            background, foreground
        );

        Self {
            href,
            title,
            label: leg.public_code().unwrap_or_default().to_string(),
            style,
        }
    }
}

/// Line badge that opens the line in GraphiQL
#[component]
pub fn ItineraryLineLink(leg: Leg, config: ExplorerConfig) -> impl IntoView {
    let LineLinkAttrs {
        href,
        title,
        label,
        style,
    } = LineLinkAttrs::for_leg(&leg, &config);

    view! {
        <a href=href target="_blank" rel="noreferrer" title=title style=style>
            {label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DestinationDisplay, EstimatedCall, Line, Mode};

    fn bergen_leg() -> Leg {
        Leg {
            mode: Mode::Bus,
            line: Some(Line {
                id: Some("RUT:Line:1".into()),
                public_code: Some("31".into()),
                presentation: None,
            }),
            to_estimated_call: Some(EstimatedCall {
                destination_display: Some(DestinationDisplay {
                    front_text: Some("Bergen".into()),
                }),
            }),
        }
    }

    fn config() -> ExplorerConfig {
        ExplorerConfig::new("http://localhost:8080/graphiql?flavor=transmodel")
    }

    #[test]
    fn line_to_bergen() {
        let attrs = LineLinkAttrs::for_leg(&bergen_leg(), &config());

        assert_eq!(attrs.label, "31");
        assert_eq!(attrs.title, "Line 31 to Bergen");
        assert!(attrs.href.starts_with("http://localhost:8080/graphiql?flavor=transmodel&query="));
        assert!(attrs.href.contains("variables=%7B%22id%22%3A%22RUT%3ALine%3A1%22%7D"));
    }

    #[test]
    fn leg_without_line() {
        let attrs = LineLinkAttrs::for_leg(&Leg::default(), &config());

        assert_eq!(attrs.label, "");
        assert_eq!(attrs.title, "Line undefined to undefined");
        assert!(attrs.href.ends_with("&variables=%7B%22id%22%3Anull%7D"));
    }

    #[test]
    fn line_without_destination() {
        let mut leg = bergen_leg();
        leg.to_estimated_call = Some(EstimatedCall {
            destination_display: None,
        });
        let attrs = LineLinkAttrs::for_leg(&leg, &config());
        assert_eq!(attrs.title, "Line 31 to undefined");
    }

    #[test]
    fn style_uses_leg_colors() {
        let attrs = LineLinkAttrs::for_leg(&bergen_leg(), &config());

        assert!(attrs.style.starts_with("background-color: #fe0000; color: #000000;"));
        assert!(attrs.style.contains("border-radius: 7px;"));
        assert!(attrs.style.contains("padding: 3px 6px;"));
        assert!(attrs.style.contains("text-decoration: none;"));
        assert!(attrs.style.contains("max-width: 14pt;"));
        assert!(attrs.style.ends_with("overflow: elipsis;"));
    }

    #[test]
    fn same_leg_same_attrs() {
        let leg = bergen_leg();
        assert_eq!(LineLinkAttrs::for_leg(&leg, &config()), LineLinkAttrs::for_leg(&leg, &config()));
    }
}
