//! Band color assignment and theme presets

use std::collections::HashMap;

/// Lightness/saturation for generated band colors (hues are spread evenly)
const BAND_COLOR_LIGHTNESS: f64 = 0.6;
const BAND_COLOR_SATURATION: f64 = 0.65;

/// Named theme preset applied to the composite figure
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
}

pub const THEME_LIGHT: Theme = Theme {
    background: "#FFFFFF",
    text: "#5A5A5A",
    grid: "#DEE2E6",
};

pub const THEME_DARK: Theme = Theme {
    background: "#0A0A0C", // Near black
    text: "#FFFFFF",
    grid: "#505050",
};

impl Theme {
    pub fn preset(dark: bool) -> &'static Theme {
        if dark { &THEME_DARK } else { &THEME_LIGHT }
    }
}

/// Build the band_name -> hex color map.
///
/// Values are deduplicated in encounter order and each unique value gets a
/// hue from a uniform partition of the HLS wheel, so the assignment is
/// deterministic for a given ordering (and only for that ordering; the
/// source order must be preserved, not resorted).
pub fn colour_map<'a, I>(values: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut unique: Vec<&str> = Vec::new();
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }

    let n = unique.len();
    unique
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let hue = i as f64 / n as f64;
            let (r, g, b) = hls_to_rgb(hue, BAND_COLOR_LIGHTNESS, BAND_COLOR_SATURATION);
            (value.to_string(), format!("#{:02x}{:02x}{:02x}", r, g, b))
        })
        .collect()
}

/// HLS to RGB in [0,255], hue/lightness/saturation all in [0,1]
fn hls_to_rgb(h: f64, l: f64, s: f64) -> (u8, u8, u8) {
    let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let v = to_byte(l);
        return (v, v, v);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        to_byte(hue_component(m1, m2, h + 1.0 / 3.0)),
        to_byte(hue_component(m1, m2, h)),
        to_byte(hue_component(m1, m2, h - 1.0 / 3.0)),
    )
}

fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
