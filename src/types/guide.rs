//! The synthesized style guide.
//!
//! Created exactly once per aggregation call and never mutated after
//! return; downstream documentation and CMS adapters traverse it read-only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::analysis::ElementSample;
use crate::error::Result;

/// Schema version for the style guide payload.
pub const STYLE_GUIDE_VERSION: &str = "0.1.0";

/// A named entry in an ordered scale (spacing, breakpoints, font sizes,
/// shade ramps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEntry {
    pub name: String,
    pub value: String,
}

impl ScaleEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Merged color palette plus derived shade ramps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSystem {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub accent: Vec<String>,
    pub neutral: Vec<String>,
    /// Ten-step ramps (`50`..`900`) keyed by role; empty when the base
    /// color could not be taken through the color space.
    pub ramps: BTreeMap<String, Vec<ScaleEntry>>,
}

/// Merged typography scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySystem {
    pub font_families: Vec<String>,
    pub font_sizes: Vec<ScaleEntry>,
    pub line_heights: Vec<ScaleEntry>,
    pub font_weights: Vec<ScaleEntry>,
}

/// Fixed structural contract generated per component type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContract {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}

/// Synthesized specification for one component type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Capitalized display name ("Buttons").
    pub name: String,
    /// Canonical selector for generated markup.
    pub selector: String,
    /// Total matches across all contributing analyses.
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ElementSample>,
    pub contract: ComponentContract,
}

/// Grid and container defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSystem {
    pub grid_columns: u32,
    pub gutter: String,
    pub container_max_width: String,
}

/// The canonical design-token output merged across one or more site
/// analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGuide {
    pub version: String,
    /// Source identifiers of the contributing analyses, in input order.
    pub sources: Vec<String>,
    pub colors: ColorSystem,
    pub typography: TypographySystem,
    pub components: BTreeMap<String, ComponentSpec>,
    pub layout: LayoutSystem,
    pub spacing: Vec<ScaleEntry>,
    pub breakpoints: Vec<ScaleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_framework: Option<String>,
    /// Deterministic `:root { ... }` custom-property rendering.
    pub css_variables: String,
    /// Static HTML preview of the guide.
    pub preview_html: String,
}

impl StyleGuide {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
