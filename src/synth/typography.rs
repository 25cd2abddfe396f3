//! Merged typography scale.
//!
//! Observed sizes and line-heights only replace the default scales once the
//! flattened pool clears a minimum sample size; below that the defaults are
//! used verbatim rather than inferring from insufficient data.

use crate::config::SampleGates;
use crate::extract::FrequencyCounter;
use crate::types::{RawToken, ScaleEntry, SiteAnalysis, TypographySystem};

const FONT_FAMILY_LIMIT: usize = 3;

const DEFAULT_FONT_SIZES: [(&str, &str); 8] = [
    ("xs", "12px"),
    ("sm", "14px"),
    ("base", "16px"),
    ("lg", "18px"),
    ("xl", "20px"),
    ("2xl", "24px"),
    ("3xl", "30px"),
    ("4xl", "36px"),
];

const SIZE_SCALE_NAMES: [&str; 8] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl"];

const DEFAULT_LINE_HEIGHTS: [(&str, &str); 3] =
    [("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")];

const LINE_HEIGHT_SCALE_NAMES: [&str; 3] = ["tight", "normal", "relaxed"];

const DEFAULT_FONT_WEIGHTS: [(&str, &str); 5] = [
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
];

pub(crate) fn merge_typography(
    analyses: &[SiteAnalysis],
    gates: &SampleGates,
) -> TypographySystem {
    let mut families = FrequencyCounter::new();
    for analysis in analyses {
        for token in &analysis.typography.font_families {
            families.add_weighted(token.value.clone(), token.occurrence_count);
        }
    }
    let font_families = families
        .ranked()
        .into_iter()
        .take(FONT_FAMILY_LIMIT)
        .map(|(value, _)| value)
        .collect();

    let size_pool: Vec<&RawToken> = analyses
        .iter()
        .flat_map(|a| a.typography.font_sizes.iter())
        .collect();
    let font_sizes = scale_from_observed(
        &size_pool,
        gates.min_font_size_samples,
        &SIZE_SCALE_NAMES,
        parse_px,
        |v| format_px(*v),
        &DEFAULT_FONT_SIZES,
    );

    let line_height_pool: Vec<&RawToken> = analyses
        .iter()
        .flat_map(|a| a.typography.line_heights.iter())
        .collect();
    let line_heights = scale_from_observed(
        &line_height_pool,
        gates.min_line_height_samples,
        &LINE_HEIGHT_SCALE_NAMES,
        parse_unitless,
        |v| trim_float(*v),
        &DEFAULT_LINE_HEIGHTS,
    );

    TypographySystem {
        font_families,
        font_sizes,
        line_heights,
        font_weights: DEFAULT_FONT_WEIGHTS
            .iter()
            .map(|(name, value)| ScaleEntry::new(*name, *value))
            .collect(),
    }
}

/// Build a named scale from observed tokens, or fall back to the default
/// scale when the pool is under the sample gate. The most frequent parseable
/// values are kept (at most one per scale slot), sorted ascending, and
/// assigned names from the small end of the scale.
fn scale_from_observed(
    pool: &[&RawToken],
    min_samples: u32,
    names: &[&str],
    parse: impl Fn(&str) -> Option<f32>,
    render: impl Fn(&f32) -> String,
    defaults: &[(&str, &str)],
) -> Vec<ScaleEntry> {
    let sample_count: u32 = pool.iter().map(|t| t.occurrence_count).sum();
    if sample_count < min_samples {
        return defaults
            .iter()
            .map(|(name, value)| ScaleEntry::new(*name, *value))
            .collect();
    }

    let mut ranked: Vec<(f32, u32)> = Vec::new();
    for token in pool {
        let Some(value) = parse(&token.value) else {
            continue;
        };
        match ranked.iter().position(|(v, _)| (*v - value).abs() < 0.001) {
            Some(position) => ranked[position].1 += token.occurrence_count,
            None => ranked.push((value, token.occurrence_count)),
        }
    }
    if ranked.is_empty() {
        return defaults
            .iter()
            .map(|(name, value)| ScaleEntry::new(*name, *value))
            .collect();
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(names.len());
    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .iter()
        .zip(names)
        .map(|((value, _), name)| ScaleEntry::new(*name, render(value)))
        .collect()
}

fn parse_px(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    if let Some(px) = trimmed.strip_suffix("px") {
        return px.trim().parse().ok();
    }
    // rem values are normalized against the 16px browser default
    if let Some(rem) = trimmed.strip_suffix("rem") {
        return rem.trim().parse::<f32>().ok().map(|v| v * 16.0);
    }
    None
}

fn parse_unitless(raw: &str) -> Option<f32> {
    raw.trim().parse().ok()
}

fn format_px(value: f32) -> String {
    if (value - value.round()).abs() < 0.001 {
        format!("{}px", value.round() as i64)
    } else {
        format!("{value}px")
    }
}

fn trim_float(value: f32) -> String {
    format!("{value}")
}
