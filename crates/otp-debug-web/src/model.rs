//! Itinerary data as returned by the journey planner GraphQL API.
//! Only the fields the itinerary list reads are modelled; everything nested is optional.

use serde::{Deserialize, Serialize};

/// Transport mode of a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Foot,
    Bicycle,
    Car,
    Scooter,
    Bus,
    Coach,
    Tram,
    Metro,
    Rail,
    Water,
    Air,
    Cableway,
    Funicular,
    Trolleybus,
    Monorail,
    Taxi,
    Lift,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Foot => "foot",
            Mode::Bicycle => "bicycle",
            Mode::Car => "car",
            Mode::Scooter => "scooter",
            Mode::Bus => "bus",
            Mode::Coach => "coach",
            Mode::Tram => "tram",
            Mode::Metro => "metro",
            Mode::Rail => "rail",
            Mode::Water => "water",
            Mode::Air => "air",
            Mode::Cableway => "cableway",
            Mode::Funicular => "funicular",
            Mode::Trolleybus => "trolleybus",
            Mode::Monorail => "monorail",
            Mode::Taxi => "taxi",
            Mode::Lift => "lift",
            Mode::Unknown => "unknown",
        }
    }
}

/// Line branding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Background color as hex without the leading `#`
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub text_colour: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub public_code: Option<String>,
    #[serde(default)]
    pub presentation: Option<Presentation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDisplay {
    #[serde(default)]
    pub front_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCall {
    #[serde(default)]
    pub destination_display: Option<DestinationDisplay>,
}

/// One segment of an itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub line: Option<Line>,
    #[serde(default)]
    pub to_estimated_call: Option<EstimatedCall>,
}

impl Leg {
    pub fn line_id(&self) -> Option<&str> {
        self.line.as_ref()?.id.as_deref()
    }

    pub fn public_code(&self) -> Option<&str> {
        self.line.as_ref()?.public_code.as_deref()
    }

    pub fn line_colour(&self) -> Option<&str> {
        self.line.as_ref()?.presentation.as_ref()?.colour.as_deref()
    }

    /// Destination sign text of the call where the leg ends
    pub fn front_text(&self) -> Option<&str> {
        self.to_estimated_call
            .as_ref()?
            .destination_display
            .as_ref()?
            .front_text
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Bundled itinerary shown when no itinerary file is configured
static SAMPLE_ITINERARY: &str = include_str!("sample_itinerary.json");

impl Itinerary {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Itinerary bundled with the binary
    pub fn sample() -> serde_json::Result<Self> {
        Self::from_json(SAMPLE_ITINERARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_graphql_shape() {
        let json = r#"{
            "mode": "bus",
            "line": {
                "id": "RUT:Line:1",
                "publicCode": "31",
                "presentation": { "colour": "E60000", "textColour": "FFFFFF" }
            },
            "toEstimatedCall": { "destinationDisplay": { "frontText": "Bergen" } }
        }"#;
        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.mode, Mode::Bus);
        assert_eq!(leg.line_id(), Some("RUT:Line:1"));
        assert_eq!(leg.public_code(), Some("31"));
        assert_eq!(leg.line_colour(), Some("E60000"));
        assert_eq!(leg.front_text(), Some("Bergen"));
    }

    #[test]
    fn missing_and_null_fields_are_none() {
        let leg: Leg = serde_json::from_str(r#"{"mode": "foot", "line": null}"#).unwrap();
        assert_eq!(leg.line_id(), None);
        assert_eq!(leg.public_code(), None);
        assert_eq!(leg.front_text(), None);

        let leg: Leg = serde_json::from_str(r#"{"toEstimatedCall": {}}"#).unwrap();
        assert_eq!(leg.mode, Mode::Unknown);
        assert_eq!(leg.front_text(), None);
    }

    #[test]
    fn unknown_mode_does_not_fail() {
        let leg: Leg = serde_json::from_str(r#"{"mode": "hovercraft"}"#).unwrap();
        assert_eq!(leg.mode, Mode::Unknown);
    }

    #[test]
    fn sample_itinerary_has_transit_and_walk_legs() {
        let itinerary = Itinerary::sample().unwrap();
        assert!(!itinerary.legs.is_empty());
        assert!(itinerary.legs.iter().any(|l| l.line.is_some()));
        assert!(itinerary.legs.iter().any(|l| l.line.is_none()));
    }
}
