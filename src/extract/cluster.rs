//! Perceptual color clustering.
//!
//! The greedy accept-or-drop pass walks candidates in descending frequency
//! and drops anything within the delta-E threshold of an already-accepted
//! color, folding its count into that color. The pass is order-dependent:
//! a low-frequency color inside the threshold of a more frequent one is
//! suppressed in its favor. The accepted sequence is pairwise distinct to
//! the configured tolerance.

use palette::Srgb;

use crate::color::{delta_e, lightness, parse_css_color, saturation, ColorValue};
use crate::config::ColorThresholds;
use crate::types::{ColorCategorySet, RawToken};

use super::freq::FrequencyCounter;

struct AcceptedColor {
    value: ColorValue,
    count: u32,
    srgb: Option<Srgb<f32>>,
}

/// Deduplicate and categorize collected colors into a [`ColorCategorySet`].
pub fn cluster_colors(
    colors: &FrequencyCounter<ColorValue>,
    thresholds: &ColorThresholds,
) -> ColorCategorySet {
    let threshold = thresholds.dedup_threshold();
    let mut accepted: Vec<AcceptedColor> = Vec::new();

    for (value, count) in colors.ranked() {
        let srgb = match &value {
            ColorValue::Literal(text) => parse_css_color(text),
            // symbolic references never enter perceptual math
            ColorValue::Symbolic(_) => None,
        };

        match srgb {
            Some(srgb) => {
                let near = accepted.iter().position(|existing| {
                    existing
                        .srgb
                        .map(|e| delta_e(e, srgb) < threshold)
                        .unwrap_or(false)
                });
                match near {
                    Some(position) => accepted[position].count += count,
                    None => accepted.push(AcceptedColor {
                        value,
                        count,
                        srgb: Some(srgb),
                    }),
                }
            }
            None => accepted.push(AcceptedColor {
                value,
                count,
                srgb: None,
            }),
        }
    }

    categorize(&accepted, thresholds)
}

fn categorize(accepted: &[AcceptedColor], thresholds: &ColorThresholds) -> ColorCategorySet {
    let css: Vec<String> = accepted.iter().map(|c| c.value.as_css()).collect();

    let primary: Vec<String> = css.iter().take(3).cloned().collect();
    let secondary: Vec<String> = css.iter().skip(3).take(3).cloned().collect();

    let mut accent = Vec::new();
    for (color, rendered) in accepted.iter().zip(&css) {
        if accent.len() == 3 {
            break;
        }
        if primary.contains(rendered) || secondary.contains(rendered) {
            continue;
        }
        let Some(srgb) = color.srgb else {
            continue;
        };
        if saturation(srgb) > thresholds.accent_saturation {
            accent.push(rendered.clone());
        }
    }

    let mut neutral = Vec::new();
    for (color, rendered) in accepted.iter().zip(&css) {
        if neutral.len() == 4 {
            break;
        }
        let Some(srgb) = color.srgb else {
            continue;
        };
        let luminance = lightness(srgb);
        if saturation(srgb) < thresholds.neutral_saturation
            && (luminance > thresholds.neutral_luminance_high
                || luminance < thresholds.neutral_luminance_low)
        {
            neutral.push(rendered.clone());
        }
    }

    let all = accepted
        .iter()
        .zip(&css)
        .map(|(color, rendered)| RawToken::new(rendered.clone(), color.count))
        .collect();

    ColorCategorySet {
        primary,
        secondary,
        accent,
        neutral,
        all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(entries: &[(&str, u32)]) -> FrequencyCounter<ColorValue> {
        let mut counter = FrequencyCounter::new();
        for (value, count) in entries {
            counter.add_weighted(ColorValue::Literal(value.to_string()), *count);
        }
        counter
    }

    #[test]
    fn near_duplicate_folds_into_the_more_frequent_color() {
        let colors = counter(&[("#ff0000", 3), ("#ff0101", 1)]);
        let set = cluster_colors(&colors, &ColorThresholds::default());

        assert_eq!(set.all, vec![RawToken::new("#ff0000", 4)]);
    }

    #[test]
    fn accepted_sequence_is_pairwise_distinct() {
        let colors = counter(&[
            ("#ff0000", 9),
            ("#fe0202", 8),
            ("#0000ff", 7),
            ("#0101fe", 2),
            ("#00aa00", 5),
        ]);
        let set = cluster_colors(&colors, &ColorThresholds::default());

        let parsed: Vec<_> = set
            .all
            .iter()
            .filter_map(|t| parse_css_color(&t.value))
            .collect();
        for (i, a) in parsed.iter().enumerate() {
            for b in parsed.iter().skip(i + 1) {
                assert!(
                    delta_e(*a, *b) >= 15.0,
                    "accepted colors closer than the dedup threshold"
                );
            }
        }
        assert_eq!(set.all.len(), 3);
    }

    #[test]
    fn categories_are_pairwise_disjoint() {
        let colors = counter(&[
            ("#102030", 12),
            ("#ffffff", 11),
            ("#ff0000", 10),
            ("#00aa00", 6),
            ("#0000ff", 5),
            ("#888888", 4),
            ("#ff9900", 3),
            ("#cc00cc", 2),
        ]);
        let set = cluster_colors(&colors, &ColorThresholds::default());

        for color in &set.primary {
            assert!(!set.secondary.contains(color));
            assert!(!set.accent.contains(color));
        }
        for color in &set.secondary {
            assert!(!set.accent.contains(color));
        }
    }

    #[test]
    fn accent_takes_vivid_colors_beyond_the_first_six() {
        let colors = counter(&[
            ("#000000", 20),
            ("#333333", 18),
            ("#666666", 16),
            ("#999999", 14),
            ("#cccccc", 12),
            ("#ffffff", 10),
            ("#ff2200", 2),
        ]);
        let set = cluster_colors(&colors, &ColorThresholds::default());

        assert_eq!(set.accent, vec!["#ff2200".to_string()]);
    }

    #[test]
    fn neutral_requires_low_saturation_and_a_luminance_extreme() {
        let colors = counter(&[
            ("#f8f8f8", 5),
            ("#111111", 4),
            ("#808080", 3),
            ("#ff0000", 2),
        ]);
        let set = cluster_colors(&colors, &ColorThresholds::default());

        assert!(set.neutral.contains(&"#f8f8f8".to_string()));
        assert!(set.neutral.contains(&"#111111".to_string()));
        // mid-gray fails the luminance extreme, red fails saturation
        assert!(!set.neutral.contains(&"#808080".to_string()));
        assert!(!set.neutral.contains(&"#ff0000".to_string()));
    }

    #[test]
    fn symbolic_colors_skip_perceptual_categories_but_stay_in_all() {
        let mut colors = FrequencyCounter::new();
        colors.add_weighted(ColorValue::Symbolic("primary".to_string()), 6);
        colors.add_weighted(ColorValue::Literal("#ff0000".to_string()), 1);

        let set = cluster_colors(&colors, &ColorThresholds::default());

        assert_eq!(set.all.len(), 2);
        assert_eq!(set.all[0].value, "var(--color-primary)");
        // frequency-ranked categories still admit the symbolic entry
        assert_eq!(set.primary[0], "var(--color-primary)");
        // perceptual categories never do
        assert!(!set.accent.contains(&"var(--color-primary)".to_string()));
        assert!(!set.neutral.contains(&"var(--color-primary)".to_string()));
    }
}
