//! Per-document extraction results.
//!
//! A [`SiteAnalysis`] is the complete, immutable extraction output for one
//! document; the aggregator merges one to five of them into a style guide.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::document::DocumentNode;

/// A single extracted raw value and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToken {
    pub value: String,
    pub occurrence_count: u32,
}

impl RawToken {
    pub fn new(value: impl Into<String>, occurrence_count: u32) -> Self {
        Self {
            value: value.into(),
            occurrence_count,
        }
    }
}

/// Deduplicated, categorized colors for one document.
///
/// `primary`/`secondary`/`accent` are pairwise disjoint; `neutral` may
/// overlap with any of them. `all` is the full accepted sequence with
/// merged occurrence counts (a suppressed near-duplicate's count folds into
/// the accepted color).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCategorySet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub accent: Vec<String>,
    pub neutral: Vec<String>,
    pub all: Vec<RawToken>,
}

/// Ranked typography tokens for one document, descending by occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySet {
    pub font_families: Vec<RawToken>,
    pub font_sizes: Vec<RawToken>,
    pub font_weights: Vec<RawToken>,
    pub line_heights: Vec<RawToken>,
    pub letter_spacings: Vec<RawToken>,
    pub text_transforms: Vec<RawToken>,
    pub text_decorations: Vec<RawToken>,
    /// Presence counts for h1-h6.
    pub headings: BTreeMap<String, u32>,
}

/// A compact sample of a matched element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSample {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub child_count: usize,
}

impl ElementSample {
    pub fn from_node(node: &DocumentNode) -> Self {
        Self {
            tag: node.tag.clone(),
            class_list: node.classes().map(str::to_string).collect(),
            id: node.attr("id").map(str::to_string),
            child_count: node.children.len(),
        }
    }
}

/// One named layout pattern group's matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    pub name: String,
    pub matched_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ElementSample>,
}

/// Checklist-based CSS framework detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkDetection {
    pub name: String,
    pub confidence_percent: u8,
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Coarse page landmarks, independent of pattern/framework logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStructure {
    pub has_header: bool,
    pub has_footer: bool,
    pub has_navigation: bool,
    pub has_sidebar: bool,
    pub has_main: bool,
    pub sections: usize,
}

/// Layout patterns, framework detections, and page landmarks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAnalysis {
    pub patterns: BTreeMap<String, LayoutPattern>,
    pub frameworks: BTreeMap<String, FrameworkDetection>,
    pub page_structure: PageStructure,
}

/// Per-component-type usage found in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUsage {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ElementSample>,
}

/// The complete extraction result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAnalysis {
    pub source_id: String,
    pub colors: ColorCategorySet,
    pub typography: TypographySet,
    pub components: BTreeMap<String, ComponentUsage>,
    pub layout: LayoutAnalysis,
}
