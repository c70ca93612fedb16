//! Leg colors for the itinerary list.
//!
//! Background comes from the line branding when the feed has one, otherwise from
//! a fixed per-mode palette. Foreground is black or white, whichever reads better
//! against the background (WCAG 2.x contrast ratio).

use crate::model::{Leg, Mode};

pub const DEFAULT_COLOR: &str = "#aaaaaa";

const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

pub fn color_for_mode(mode: Mode) -> &'static str {
    match mode {
        Mode::Foot => "#444444",
        Mode::Bicycle => "#5076d9",
        Mode::Scooter => "#253664",
        Mode::Car => "#191616",
        Mode::Rail => "#86bf8b",
        Mode::Coach => "#25642a",
        Mode::Metro => "#d9b250",
        Mode::Bus => "#fe0000",
        Mode::Tram => "#d9b250",
        Mode::Trolleybus => "#25642a",
        Mode::Water | Mode::Air | Mode::Cableway | Mode::Funicular | Mode::Monorail | Mode::Lift => "#81304c",
        Mode::Taxi => "#ffcc00",
        Mode::Unknown => DEFAULT_COLOR,
    }
}

/// Background color for a leg. Never fails: invalid branding falls back to the mode color.
pub fn color_for_leg(leg: &Leg) -> String {
    match leg.line_colour() {
        Some(colour) if parse_hex(colour).is_some() => format!("#{}", colour.trim_start_matches('#')),
        _ => color_for_mode(leg.mode).to_string(),
    }
}

/// Text color with the higher contrast against `background`.
/// Anything that is not a hex color gets black.
pub fn generate_text_color(background: &str) -> &'static str {
    let Some(rgb) = parse_hex(background) else {
        return BLACK;
    };

    let bg = relative_luminance(rgb);
    let on_black = contrast_ratio(bg, 0.0);
    let on_white = contrast_ratio(bg, 1.0);

    if on_black >= on_white { BLACK } else { WHITE }
}

/// Parse `#rgb`, `#rrggbb` or the same without `#`
fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        6 => Some([
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ]),
        _ => None,
    }
}

fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    }
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (light, dark) = if a >= b { (a, b) } else { (b, a) };
    (light + 0.05) / (dark + 0.05)
}
