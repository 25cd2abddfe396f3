//! Aggregation: merge one to five site analyses into a single style guide.
//!
//! Synthesis is pure computation over already-materialized analyses; any
//! color-space failure degrades to an empty or default sub-structure and
//! never aborts the whole guide.

mod components;
mod palette;
mod render;
mod typography;

use std::collections::HashMap;

use crate::config::Config;
use crate::error::{DtxError, Result};
use crate::extract::FRAMEWORK_CHECKLISTS;
use crate::types::{LayoutSystem, ScaleEntry, SiteAnalysis, StyleGuide, STYLE_GUIDE_VERSION};

use components::build_component_specs;
use palette::merge_colors;
use render::{css_variables, preview_html};
use typography::merge_typography;

const DEFAULT_SPACING: [(&str, &str); 7] = [
    ("xs", "4px"),
    ("sm", "8px"),
    ("md", "16px"),
    ("lg", "24px"),
    ("xl", "32px"),
    ("2xl", "48px"),
    ("3xl", "64px"),
];

/// Merge site analyses into a style guide with the default thresholds.
///
/// Fails fast with [`DtxError::EmptyBatch`] on an empty input batch; every
/// downstream field assumes at least one contributing source.
pub fn synthesize(analyses: &[SiteAnalysis]) -> Result<StyleGuide> {
    synthesize_with(analyses, &Config::default())
}

/// Merge site analyses into a style guide.
pub fn synthesize_with(analyses: &[SiteAnalysis], config: &Config) -> Result<StyleGuide> {
    if analyses.is_empty() {
        return Err(DtxError::EmptyBatch);
    }

    let colors = merge_colors(analyses);
    let typography = merge_typography(analyses, &config.sampling);
    let components = build_component_specs(analyses);
    let recommended_framework = recommend_framework(analyses);

    let spacing: Vec<ScaleEntry> = DEFAULT_SPACING
        .iter()
        .map(|(name, value)| ScaleEntry::new(*name, *value))
        .collect();
    let breakpoints = breakpoints_for(recommended_framework.as_deref());
    let layout = layout_defaults(recommended_framework.as_deref());

    let css = css_variables(&colors, &typography, &spacing, &breakpoints);
    let component_names: Vec<String> = components.values().map(|spec| spec.name.clone()).collect();
    let preview = preview_html(
        &colors,
        &typography,
        &component_names,
        recommended_framework.as_deref(),
    );

    Ok(StyleGuide {
        version: STYLE_GUIDE_VERSION.to_string(),
        sources: analyses.iter().map(|a| a.source_id.clone()).collect(),
        colors,
        typography,
        components,
        layout,
        spacing,
        breakpoints,
        recommended_framework,
        css_variables: css,
        preview_html: preview,
    })
}

/// Majority vote across analyses. Each analysis contributes one vote for
/// its highest-confidence framework (ties resolved by checklist order); an
/// analysis with no positive confidence abstains. The winner is the first
/// name to reach the maximum count during the tally scan, so it can never
/// be a framework with zero votes.
fn recommend_framework(analyses: &[SiteAnalysis]) -> Option<String> {
    let mut votes: Vec<&str> = Vec::new();
    for analysis in analyses {
        let mut best: Option<(&str, u8)> = None;
        for (name, _) in FRAMEWORK_CHECKLISTS {
            if let Some(detection) = analysis.layout.frameworks.get(name) {
                let beats = best
                    .map(|(_, confidence)| detection.confidence_percent > confidence)
                    .unwrap_or(true);
                if beats {
                    best = Some((name, detection.confidence_percent));
                }
            }
        }
        if let Some((name, confidence)) = best {
            if confidence > 0 {
                votes.push(name);
            }
        }
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut winner: Option<(&str, usize)> = None;
    for vote in votes {
        let count = counts.entry(vote).or_insert(0);
        *count += 1;
        let new_max = winner.map(|(_, max)| *count > max).unwrap_or(true);
        if new_max {
            winner = Some((vote, *count));
        }
    }
    winner.map(|(name, _)| name.to_string())
}

fn breakpoints_for(framework: Option<&str>) -> Vec<ScaleEntry> {
    let table: &[(&str, &str)] = match framework {
        Some("bootstrap") => &[
            ("sm", "576px"),
            ("md", "768px"),
            ("lg", "992px"),
            ("xl", "1200px"),
            ("xxl", "1400px"),
        ],
        _ => &[
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ],
    };
    table
        .iter()
        .map(|(name, value)| ScaleEntry::new(*name, *value))
        .collect()
}

fn layout_defaults(framework: Option<&str>) -> LayoutSystem {
    LayoutSystem {
        grid_columns: 12,
        gutter: "24px".to_string(),
        container_max_width: match framework {
            Some("bootstrap") => "1140px".to_string(),
            Some("tailwind") => "1280px".to_string(),
            _ => "1200px".to_string(),
        },
    }
}
