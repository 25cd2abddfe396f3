//! Typography normalization and ranking.

use crate::types::TypographySet;

use super::collect::CollectedTokens;
use super::freq::FrequencyCounter;

/// Ordered first-match-wins rules mapping a lowercased family substring to
/// its canonical stack. Order is load-bearing: specific families come
/// before the generic fallbacks, and `sans-serif` must be tested before
/// `serif` because the latter is a substring of the former. Keep this a
/// list, never a keyed map.
const FAMILY_RULES: [(&str, &str); 31] = [
    ("helvetica neue", "Helvetica Neue, Helvetica, Arial, sans-serif"),
    ("helvetica", "Helvetica, Arial, sans-serif"),
    ("arial", "Arial, sans-serif"),
    ("inter", "Inter, sans-serif"),
    ("roboto condensed", "Roboto Condensed, sans-serif"),
    ("roboto slab", "Roboto Slab, serif"),
    ("roboto mono", "Roboto Mono, monospace"),
    ("roboto", "Roboto, sans-serif"),
    ("open sans", "Open Sans, sans-serif"),
    ("lato", "Lato, sans-serif"),
    ("montserrat", "Montserrat, sans-serif"),
    ("poppins", "Poppins, sans-serif"),
    ("nunito", "Nunito, sans-serif"),
    ("raleway", "Raleway, sans-serif"),
    ("source sans", "Source Sans Pro, sans-serif"),
    ("playfair", "Playfair Display, serif"),
    ("merriweather", "Merriweather, serif"),
    ("georgia", "Georgia, serif"),
    ("garamond", "Garamond, serif"),
    ("times", "Times New Roman, serif"),
    ("courier", "Courier New, monospace"),
    ("consolas", "Consolas, monospace"),
    ("menlo", "Menlo, monospace"),
    ("monaco", "Monaco, monospace"),
    ("fira code", "Fira Code, monospace"),
    ("segoe", "Segoe UI, sans-serif"),
    ("verdana", "Verdana, sans-serif"),
    ("tahoma", "Tahoma, sans-serif"),
    ("monospace", "Courier New, monospace"),
    ("sans-serif", "Arial, sans-serif"),
    ("serif", "Georgia, serif"),
];

/// Canonicalize a raw font-family string. Quotes and surrounding whitespace
/// are stripped before matching; non-matching strings pass through
/// unchanged apart from that cleanup.
pub fn normalize_family(raw: &str) -> String {
    let cleaned: String = raw.trim().chars().filter(|c| *c != '"' && *c != '\'').collect();
    let cleaned = cleaned.trim().to_string();
    let lower = cleaned.to_ascii_lowercase();

    for (pattern, canonical) in FAMILY_RULES {
        if lower.contains(pattern) {
            return canonical.to_string();
        }
    }
    cleaned
}

/// Rank the collected typography tokens into a [`TypographySet`].
///
/// Families are re-keyed through [`normalize_family`] before ranking, so
/// `"Roboto"` and `'Roboto', sans-serif` accumulate into one entry. Every
/// other category ranks its literal values untouched.
pub fn build_typography_set(collected: &CollectedTokens) -> TypographySet {
    let mut families = FrequencyCounter::new();
    for (raw, count) in collected.font_families.ranked() {
        families.add_weighted(normalize_family(&raw), count);
    }

    TypographySet {
        font_families: families.ranked_tokens(),
        font_sizes: collected.font_sizes.ranked_tokens(),
        font_weights: collected.font_weights.ranked_tokens(),
        line_heights: collected.line_heights.ranked_tokens(),
        letter_spacings: collected.letter_spacings.ranked_tokens(),
        text_transforms: collected.text_transforms.ranked_tokens(),
        text_decorations: collected.text_decorations.ranked_tokens(),
        headings: collected.headings.clone(),
    }
}
