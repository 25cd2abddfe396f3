//! Merged color palette and derived shade ramps.

use std::collections::BTreeMap;

use crate::color::{parse_css_color, shade_ramp};
use crate::extract::FrequencyCounter;
use crate::types::{ColorSystem, ScaleEntry, SiteAnalysis};

/// Skip offsets into the fallback `all` pool, reducing overlap with the
/// primary selection when a category pool is empty everywhere.
const SECONDARY_FALLBACK_SKIP: usize = 3;
const ACCENT_FALLBACK_SKIP: usize = 6;

pub(crate) fn merge_colors(analyses: &[SiteAnalysis]) -> ColorSystem {
    let all_pool: Vec<String> = analyses
        .iter()
        .flat_map(|a| a.colors.all.iter().map(|token| token.value.clone()))
        .collect();

    let primary_pool = pool_or_fallback(flatten(analyses, |a| &a.colors.primary), &all_pool, 0);
    let secondary_pool = pool_or_fallback(
        flatten(analyses, |a| &a.colors.secondary),
        &all_pool,
        SECONDARY_FALLBACK_SKIP,
    );
    let accent_pool = pool_or_fallback(
        flatten(analyses, |a| &a.colors.accent),
        &all_pool,
        ACCENT_FALLBACK_SKIP,
    );
    let neutral_pool = pool_or_fallback(flatten(analyses, |a| &a.colors.neutral), &all_pool, 0);

    let primary = top_by_recount(&primary_pool, 3);
    let secondary = top_by_recount(&secondary_pool, 3);
    let accent = top_by_recount(&accent_pool, 2);
    let neutral = top_by_recount(&neutral_pool, 4);

    let mut ramps = BTreeMap::new();
    ramps.insert("primary".to_string(), ramp_for(primary.first()));
    ramps.insert("secondary".to_string(), ramp_for(secondary.first()));

    ColorSystem {
        primary,
        secondary,
        accent,
        neutral,
        ramps,
    }
}

fn flatten<'a>(
    analyses: &'a [SiteAnalysis],
    category: impl Fn(&'a SiteAnalysis) -> &'a Vec<String>,
) -> Vec<String> {
    analyses
        .iter()
        .flat_map(|a| category(a).iter().cloned())
        .collect()
}

fn pool_or_fallback(pool: Vec<String>, all_pool: &[String], skip: usize) -> Vec<String> {
    if pool.is_empty() {
        all_pool.iter().skip(skip).cloned().collect()
    } else {
        pool
    }
}

/// Global recount across a flattened pool: entries are re-counted from
/// scratch, ties broken by first appearance in the flattened order.
pub(crate) fn top_by_recount(pool: &[String], n: usize) -> Vec<String> {
    let mut counter = FrequencyCounter::new();
    for value in pool {
        counter.add(value.clone());
    }
    counter
        .ranked()
        .into_iter()
        .take(n)
        .map(|(value, _)| value)
        .collect()
}

/// Ten-step ramp for a base color; empty on any color-space failure
/// (symbolic references, unparseable text, or no base at all).
fn ramp_for(base: Option<&String>) -> Vec<ScaleEntry> {
    base.and_then(|css| parse_css_color(css))
        .map(|srgb| {
            shade_ramp(srgb)
                .into_iter()
                .map(|(name, hex)| ScaleEntry::new(name, hex))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorCategorySet, LayoutAnalysis, RawToken, TypographySet};
    use std::collections::BTreeMap;

    fn analysis_with_colors(colors: ColorCategorySet) -> SiteAnalysis {
        SiteAnalysis {
            source_id: "test".to_string(),
            colors,
            typography: TypographySet::default(),
            components: BTreeMap::new(),
            layout: LayoutAnalysis::default(),
        }
    }

    fn colors(primary: &[&str], all: &[&str]) -> ColorCategorySet {
        ColorCategorySet {
            primary: primary.iter().map(|s| s.to_string()).collect(),
            secondary: Vec::new(),
            accent: Vec::new(),
            neutral: Vec::new(),
            all: all.iter().map(|s| RawToken::new(*s, 1)).collect(),
        }
    }

    #[test]
    fn recount_ranks_by_flattened_frequency() {
        // Scenario E: [A,A,B] + [A,C] recounts A=3 above B=1 and C=1
        let a = analysis_with_colors(colors(&["#aa0000", "#aa0000", "#bb0000"], &[]));
        let b = analysis_with_colors(colors(&["#aa0000", "#cc0000"], &[]));

        let system = merge_colors(&[a, b]);

        assert_eq!(system.primary[0], "#aa0000");
        assert_eq!(system.primary.len(), 3);
        assert!(system.primary.contains(&"#bb0000".to_string()));
        assert!(system.primary.contains(&"#cc0000".to_string()));
    }

    #[test]
    fn empty_category_pools_fall_back_to_all_with_skips() {
        let a = analysis_with_colors(colors(
            &[],
            &[
                "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777",
                "#888888",
            ],
        ));

        let system = merge_colors(&[a]);

        // primary draws from the head of `all`
        assert_eq!(
            system.primary,
            vec!["#111111".to_string(), "#222222".to_string(), "#333333".to_string()]
        );
        // secondary skips the first three, accent the first six
        assert_eq!(
            system.secondary,
            vec!["#444444".to_string(), "#555555".to_string(), "#666666".to_string()]
        );
        assert_eq!(
            system.accent,
            vec!["#777777".to_string(), "#888888".to_string()]
        );
    }

    #[test]
    fn ramps_cover_primary_and_secondary_bases() {
        let mut set = colors(&["#3b82f6"], &[]);
        set.secondary = vec!["#ef4444".to_string()];
        let system = merge_colors(&[analysis_with_colors(set)]);

        let primary_ramp = system.ramps.get("primary").expect("primary ramp");
        assert_eq!(primary_ramp.len(), 10);
        assert_eq!(primary_ramp[0].name, "50");
        assert_eq!(primary_ramp[9].name, "900");

        let secondary_ramp = system.ramps.get("secondary").expect("secondary ramp");
        assert_eq!(secondary_ramp.len(), 10);
    }

    #[test]
    fn symbolic_base_color_degrades_to_an_empty_ramp() {
        let set = colors(&["var(--color-primary)"], &[]);
        let system = merge_colors(&[analysis_with_colors(set)]);

        assert!(system.ramps.get("primary").expect("entry").is_empty());
    }

    #[test]
    fn no_colors_anywhere_yields_empty_selections_and_ramps() {
        let system = merge_colors(&[analysis_with_colors(ColorCategorySet::default())]);

        assert!(system.primary.is_empty());
        assert!(system.secondary.is_empty());
        assert!(system.ramps.get("primary").expect("entry").is_empty());
    }
}
