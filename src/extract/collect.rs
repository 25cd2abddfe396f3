//! Token collectors: a pure scan of a document snapshot into raw frequency
//! maps, one per token category.
//!
//! Sources, in scan order per node:
//! - inline `style` declarations, matched by property name
//! - SVG presentation attributes (`fill`, `stroke`)
//! - utility class names (symbolic colors, `fw-*`/`fs-*`, text transforms)
//! - computed font family/size on heading elements
//! - font families named in web-font-service stylesheet links (10x weight)

use std::collections::BTreeMap;

use url::Url;

use crate::color::{is_excluded_keyword, normalize_css_value, parse_css_color, ColorValue};
use crate::config::Config;
use crate::types::{DocumentNode, DocumentSnapshot};

use super::freq::FrequencyCounter;

/// Class prefixes that may carry a semantic color suffix.
const COLOR_CLASS_PREFIXES: [&str; 8] = [
    "bg-", "text-", "border-", "btn-", "alert-", "badge-", "table-", "nav-",
];

/// Semantic color names recognized after a prefix, optionally followed by a
/// shade suffix ("red-500").
const SEMANTIC_COLOR_NAMES: [&str; 25] = [
    "primary", "secondary", "success", "danger", "warning", "info", "light", "dark", "muted",
    "accent", "error", "white", "black", "red", "orange", "yellow", "green", "teal", "cyan",
    "blue", "indigo", "purple", "pink", "gray", "grey",
];

/// Hosts whose stylesheet URLs name font families in a `family=` query
/// parameter.
const FONT_SERVICE_HOSTS: [&str; 2] = ["fonts.googleapis.com", "fonts.bunny.net"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Raw candidate values accumulated from one document.
#[derive(Debug, Clone, Default)]
pub struct CollectedTokens {
    pub colors: FrequencyCounter<ColorValue>,
    pub font_families: FrequencyCounter<String>,
    pub font_sizes: FrequencyCounter<String>,
    pub font_weights: FrequencyCounter<String>,
    pub line_heights: FrequencyCounter<String>,
    pub letter_spacings: FrequencyCounter<String>,
    pub text_transforms: FrequencyCounter<String>,
    pub text_decorations: FrequencyCounter<String>,
    pub headings: BTreeMap<String, u32>,
}

impl CollectedTokens {
    fn add_color_literal(&mut self, raw: &str) {
        if is_excluded_keyword(raw) {
            return;
        }
        let normalized = normalize_css_value(raw);
        // values that fail color syntax never enter the frequency map
        if parse_css_color(&normalized).is_none() {
            return;
        }
        self.colors.add(ColorValue::Literal(normalized));
    }
}

/// Scan a document tree into per-category frequency maps. Pure read; the
/// snapshot is never modified.
pub fn collect_tokens(doc: &DocumentSnapshot, config: &Config) -> CollectedTokens {
    let mut tokens = CollectedTokens::default();

    for node in &doc.nodes {
        scan_inline_style(node, &mut tokens);
        scan_svg_attributes(node, &mut tokens);
        scan_class_tokens(node, &mut tokens);
        scan_heading(node, &mut tokens);
    }

    scan_font_service_links(doc, config, &mut tokens);
    tokens
}

fn scan_inline_style(node: &DocumentNode, tokens: &mut CollectedTokens) {
    for (property, value) in node.style_declarations() {
        if property == "color" || property.ends_with("-color") {
            tokens.add_color_literal(&value);
            continue;
        }
        match property.as_str() {
            "fill" | "stroke" => tokens.add_color_literal(&value),
            "font-family" => tokens.font_families.add(value),
            "font-size" => tokens.font_sizes.add(normalize_css_value(&value)),
            "font-weight" => tokens.font_weights.add(normalize_css_value(&value)),
            "line-height" => tokens.line_heights.add(normalize_css_value(&value)),
            "letter-spacing" => tokens.letter_spacings.add(normalize_css_value(&value)),
            "text-transform" => tokens.text_transforms.add(normalize_css_value(&value)),
            "text-decoration" => tokens.text_decorations.add(normalize_css_value(&value)),
            _ => {}
        }
    }
}

fn scan_svg_attributes(node: &DocumentNode, tokens: &mut CollectedTokens) {
    for attribute in ["fill", "stroke"] {
        if let Some(value) = node.attr(attribute) {
            tokens.add_color_literal(value);
        }
    }
}

fn scan_class_tokens(node: &DocumentNode, tokens: &mut CollectedTokens) {
    for class in node.classes() {
        if let Some(name) = symbolic_color_name(class) {
            tokens.colors.add(ColorValue::Symbolic(name.to_string()));
        }

        if let Some(weight) = class.strip_prefix("fw-") {
            if let Some(literal) = font_weight_literal(weight) {
                tokens.font_weights.add(literal.to_string());
            }
        } else if let Some(step) = class.strip_prefix("fs-") {
            // fs-1..fs-6 name a scale step, not a length; keep it symbolic
            if step.len() == 1 && step.chars().all(|c| c.is_ascii_digit()) {
                tokens.font_sizes.add(format!("var(--fs-{step})"));
            }
        } else if let Some(transform) = class.strip_prefix("text-") {
            match transform {
                "uppercase" | "lowercase" | "capitalize" => {
                    tokens.text_transforms.add(transform.to_string());
                }
                _ => {}
            }
        }

        if let Some(decoration) = class.strip_prefix("text-decoration-") {
            match decoration {
                "underline" | "line-through" | "none" => {
                    tokens.text_decorations.add(decoration.to_string());
                }
                _ => {}
            }
        }
    }
}

/// `bg-primary` -> `primary`, `text-red-500` -> `red-500`; anything whose
/// base segment is not a known semantic color name is ignored.
fn symbolic_color_name(class: &str) -> Option<&str> {
    for prefix in COLOR_CLASS_PREFIXES {
        if let Some(rest) = class.strip_prefix(prefix) {
            let base = rest.split('-').next().unwrap_or(rest);
            if SEMANTIC_COLOR_NAMES.contains(&base) {
                return Some(rest);
            }
        }
    }
    None
}

fn font_weight_literal(suffix: &str) -> Option<&'static str> {
    match suffix {
        "light" => Some("300"),
        "normal" => Some("400"),
        "medium" => Some("500"),
        "semibold" => Some("600"),
        "bold" => Some("700"),
        "bolder" => Some("bolder"),
        "lighter" => Some("lighter"),
        _ => None,
    }
}

fn scan_heading(node: &DocumentNode, tokens: &mut CollectedTokens) {
    let tag = node.tag.to_ascii_lowercase();
    if !HEADING_TAGS.contains(&tag.as_str()) {
        return;
    }
    *tokens.headings.entry(tag).or_insert(0) += 1;

    if let Some(style) = &node.computed_style {
        if let Some(family) = &style.font_family {
            tokens.font_families.add(family.clone());
        }
        if let Some(size) = style.font_size {
            tokens.font_sizes.add(format_px(size));
        }
    }
}

fn scan_font_service_links(doc: &DocumentSnapshot, config: &Config, tokens: &mut CollectedTokens) {
    let weight = config.detection.font_service_weight;
    for link in &doc.stylesheets {
        let Ok(url) = Url::parse(&link.href) else {
            continue;
        };
        let Some(host) = url.host_str() else {
            continue;
        };
        if !FONT_SERVICE_HOSTS.contains(&host) {
            continue;
        }
        for (key, value) in url.query_pairs() {
            if key != "family" {
                continue;
            }
            // "Roboto:wght@400;700|Open Sans" -> one family per segment,
            // axis lists stripped
            for segment in value.split('|') {
                let family = segment.split(':').next().unwrap_or(segment).trim();
                if !family.is_empty() {
                    tokens.font_families.add_weighted(family.to_string(), weight);
                }
            }
        }
    }
}

fn format_px(size: f32) -> String {
    if (size - size.round()).abs() < 0.001 {
        format!("{}px", size.round() as i64)
    } else {
        format!("{size}px")
    }
}
