//! CSS color parsing and perceptual color math.
//!
//! Candidates arrive either as literal CSS text (`#ff6b35`,
//! `rgb(255, 107, 53)`, `hsl(16, 100%, 60%)`, named colors) or as symbolic
//! references recovered from utility class names when no literal value
//! exists in the markup.

use palette::{convert::FromColorUnclamped, Hsl, Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

/// A collected color candidate.
///
/// Symbolic references name a semantic color (`primary`, `danger`, ...)
/// without exposing a literal value; clustering never runs perceptual math
/// on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ColorValue {
    Literal(String),
    Symbolic(String),
}

impl ColorValue {
    /// CSS rendering of the candidate; symbolic references become custom
    /// property lookups.
    pub fn as_css(&self) -> String {
        match self {
            ColorValue::Literal(value) => value.clone(),
            ColorValue::Symbolic(name) => format!("var(--color-{name})"),
        }
    }
}

const EXCLUDED_KEYWORDS: [&str; 5] = ["transparent", "inherit", "initial", "currentcolor", "none"];

/// Keywords that never enter the color frequency map. Checked
/// case-insensitively.
pub fn is_excluded_keyword(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    EXCLUDED_KEYWORDS.contains(&lower.as_str())
}

/// Normalization applied before a value becomes a frequency-map key: trim,
/// lowercase, collapse whitespace runs.
pub fn normalize_css_value(value: &str) -> String {
    let lower = value.trim().to_ascii_lowercase();
    lower.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a CSS color literal into sRGB. Returns `None` for anything that is
/// not a recognizable color.
pub fn parse_css_color(value: &str) -> Option<Srgb<f32>> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return parse_rgb_function(&lower);
    }
    if lower.starts_with("hsl(") || lower.starts_with("hsla(") {
        return parse_hsl_function(&lower);
    }
    named_color(&lower)
}

fn parse_hex(hex: &str) -> Option<Srgb<f32>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        // short form: #rgb / #rgba, each digit doubled
        3 | 4 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some(Srgb::new(
                (r * 17) as f32 / 255.0,
                (g * 17) as f32 / 255.0,
                (b * 17) as f32 / 255.0,
            ))
        }
        // long form: #rrggbb / #rrggbbaa, alpha ignored
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Some(Srgb::new(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
            ))
        }
        _ => None,
    }
}

fn function_arguments(value: &str) -> Option<Vec<&str>> {
    let inner = value.split_once('(')?.1.strip_suffix(')')?;
    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        None
    } else {
        Some(parts)
    }
}

fn parse_rgb_function(value: &str) -> Option<Srgb<f32>> {
    let parts = function_arguments(value)?;
    let channel = |raw: &str| -> Option<f32> {
        if let Some(percent) = raw.strip_suffix('%') {
            percent
                .parse::<f32>()
                .ok()
                .map(|v| (v / 100.0).clamp(0.0, 1.0))
        } else {
            raw.parse::<f32>().ok().map(|v| (v / 255.0).clamp(0.0, 1.0))
        }
    };
    Some(Srgb::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

fn parse_hsl_function(value: &str) -> Option<Srgb<f32>> {
    let parts = function_arguments(value)?;
    let hue = parts[0].trim_end_matches("deg").parse::<f32>().ok()?;
    let percent = |raw: &str| -> Option<f32> {
        raw.strip_suffix('%')?
            .parse::<f32>()
            .ok()
            .map(|v| (v / 100.0).clamp(0.0, 1.0))
    };
    let hsl = Hsl::new(hue, percent(parts[1])?, percent(parts[2])?);
    Some(Srgb::from_color_unclamped(hsl))
}

fn named_color(name: &str) -> Option<Srgb<f32>> {
    let hex = match name {
        "black" => "000000",
        "white" => "ffffff",
        "red" => "ff0000",
        "green" => "008000",
        "blue" => "0000ff",
        "yellow" => "ffff00",
        "orange" => "ffa500",
        "purple" => "800080",
        "pink" => "ffc0cb",
        "gray" | "grey" => "808080",
        "silver" => "c0c0c0",
        "maroon" => "800000",
        "navy" => "000080",
        "teal" => "008080",
        "olive" => "808000",
        "lime" => "00ff00",
        "aqua" | "cyan" => "00ffff",
        "magenta" | "fuchsia" => "ff00ff",
        "brown" => "a52a2a",
        "gold" => "ffd700",
        "indigo" => "4b0082",
        "violet" => "ee82ee",
        "coral" => "ff7f50",
        "salmon" => "fa8072",
        "khaki" => "f0e68c",
        "crimson" => "dc143c",
        "beige" => "f5f5dc",
        "ivory" => "fffff0",
        "tan" => "d2b48c",
        "rebeccapurple" => "663399",
        _ => return None,
    };
    parse_hex(hex)
}

/// Euclidean distance in CIELAB on the 0-100 delta-E scale.
pub fn delta_e(a: Srgb<f32>, b: Srgb<f32>) -> f32 {
    let lab_a: Lab = Lab::from_color_unclamped(a);
    let lab_b: Lab = Lab::from_color_unclamped(b);
    let dl = lab_a.l - lab_b.l;
    let da = lab_a.a - lab_b.a;
    let db = lab_a.b - lab_b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// HSL saturation, the vividness measure for accent classification.
pub fn saturation(color: Srgb<f32>) -> f32 {
    let hsl: Hsl = Hsl::from_color_unclamped(color);
    hsl.saturation
}

/// WCAG-style relative luminance in 0.0..=1.0.
pub fn relative_luminance(color: Srgb<f32>) -> f32 {
    let linear = color.into_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// HSL lightness, the luminance measure for neutral classification: 0.5 for
/// mid-gray, so only genuine extremes clear the neutral bounds.
pub fn lightness(color: Srgb<f32>) -> f32 {
    let hsl: Hsl = Hsl::from_color_unclamped(color);
    hsl.lightness
}

pub fn to_hex(color: Srgb<f32>) -> String {
    let clamp = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        clamp(color.red),
        clamp(color.green),
        clamp(color.blue)
    )
}

/// Ramp steps `50`..`900`; the `500` slot keeps the base color's own
/// luminance.
const RAMP_STEPS: [(&str, f32); 10] = [
    ("50", 0.95),
    ("100", 0.9),
    ("200", 0.8),
    ("300", 0.7),
    ("400", 0.6),
    ("500", f32::NAN),
    ("600", 0.4),
    ("700", 0.3),
    ("800", 0.2),
    ("900", 0.1),
];

/// Luminance-sampled shades of a base color with hue and chroma held fixed.
/// Returns `(step name, hex)` pairs from lightest to darkest.
pub fn shade_ramp(base: Srgb<f32>) -> Vec<(String, String)> {
    let lab: Lab = Lab::from_color_unclamped(base);
    let lch: Lch = Lch::from_color_unclamped(lab);

    RAMP_STEPS
        .iter()
        .map(|(name, luminance)| {
            let l = if luminance.is_nan() {
                lch.l
            } else {
                luminance * 100.0
            };
            let shade = Lch::new(l, lch.chroma, lch.hue);
            let shade_lab: Lab = Lab::from_color_unclamped(shade);
            let srgb: Srgb = Srgb::from_color_unclamped(shade_lab);
            (name.to_string(), to_hex(srgb))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let long = parse_css_color("#ff0000").expect("long hex");
        let short = parse_css_color("#f00").expect("short hex");
        assert!(delta_e(long, short) < 0.01);

        let with_alpha = parse_css_color("#ff000080").expect("hex with alpha");
        assert!(delta_e(long, with_alpha) < 0.01, "alpha should be ignored");
    }

    #[test]
    fn parses_rgb_and_hsl_functions() {
        let rgb = parse_css_color("rgb(255, 0, 0)").expect("rgb()");
        let rgba = parse_css_color("rgba(255, 0, 0, 0.5)").expect("rgba()");
        let hsl = parse_css_color("hsl(0, 100%, 50%)").expect("hsl()");
        let reference = parse_css_color("#ff0000").expect("hex");

        assert!(delta_e(rgb, reference) < 0.01);
        assert!(delta_e(rgba, reference) < 0.01);
        assert!(delta_e(hsl, reference) < 1.0);
    }

    #[test]
    fn parses_named_colors() {
        let named = parse_css_color("RebeccaPurple").expect("named color");
        let hex = parse_css_color("#663399").expect("hex");
        assert!(delta_e(named, hex) < 0.01);
    }

    #[test]
    fn rejects_non_colors() {
        assert!(parse_css_color("url(#gradient)").is_none());
        assert!(parse_css_color("bold").is_none());
        assert!(parse_css_color("#12345").is_none());
        assert!(parse_css_color("rgb(a, b, c)").is_none());
        assert!(parse_css_color("").is_none());
    }

    #[test]
    fn excluded_keywords_are_case_insensitive() {
        for keyword in ["transparent", "Inherit", "INITIAL", "currentColor", "none"] {
            assert!(is_excluded_keyword(keyword), "{keyword} should be excluded");
        }
        assert!(!is_excluded_keyword("#fff"));
    }

    #[test]
    fn near_identical_reds_fall_under_dedup_threshold() {
        let a = parse_css_color("#ff0000").expect("a");
        let b = parse_css_color("#ff0101").expect("b");
        assert!(
            delta_e(a, b) < 15.0,
            "expected near-duplicate distance, got {}",
            delta_e(a, b)
        );
    }

    #[test]
    fn distinct_hues_clear_dedup_threshold() {
        let red = parse_css_color("#ff0000").expect("red");
        let blue = parse_css_color("#0000ff").expect("blue");
        assert!(delta_e(red, blue) > 15.0);
    }

    #[test]
    fn saturation_and_lightness_separate_vivid_from_neutral() {
        let vivid = parse_css_color("#ff0000").expect("vivid");
        let near_white = parse_css_color("#f8f8f8").expect("near white");
        let near_black = parse_css_color("#111111").expect("near black");
        let mid_gray = parse_css_color("#808080").expect("mid gray");

        assert!(saturation(vivid) > 0.5);
        assert!(saturation(near_white) < 0.15);
        assert!(lightness(near_white) > 0.7);
        assert!(lightness(near_black) < 0.3);
        // mid-gray sits between the extremes
        assert!(lightness(mid_gray) > 0.3 && lightness(mid_gray) < 0.7);
    }

    #[test]
    fn shade_ramp_has_ten_steps_light_to_dark() {
        let base = parse_css_color("#3b82f6").expect("base");
        let ramp = shade_ramp(base);

        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp[0].0, "50");
        assert_eq!(ramp[9].0, "900");

        let first = parse_css_color(&ramp[0].1).expect("ramp hex");
        let last = parse_css_color(&ramp[9].1).expect("ramp hex");
        assert!(
            relative_luminance(first) > relative_luminance(last),
            "ramp should run light to dark"
        );
    }

    #[test]
    fn symbolic_values_render_as_custom_properties() {
        let symbolic = ColorValue::Symbolic("primary".to_string());
        assert_eq!(symbolic.as_css(), "var(--color-primary)");

        let literal = ColorValue::Literal("#ff0000".to_string());
        assert_eq!(literal.as_css(), "#ff0000");
    }

    #[test]
    fn normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize_css_value("  #FF0000 "), "#ff0000");
        assert_eq!(normalize_css_value("RGB(255,  0, 0)"), "rgb(255, 0, 0)");
    }
}
