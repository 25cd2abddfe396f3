//! Document snapshot types consumed by the extraction engine.
//!
//! A snapshot is produced by an external fetch/render step (a headless
//! browser or equivalent) and handed to the engine fully materialized:
//! flattened nodes in traversal order, stylesheet links, and comment text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A rendered page's structure, ready for token extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    /// The URL of the captured page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Flattened list of element nodes in traversal order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<DocumentNode>,
    /// `<link rel="stylesheet">`-equivalent resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<StylesheetLink>,
    /// Comment node text, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl DocumentSnapshot {
    /// Stable identifier for this document in merged output: the URL when
    /// present, otherwise the title.
    pub fn source_label(&self) -> String {
        self.url
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| "untitled".to_string())
    }
}

/// A single element with its attributes and best-effort computed style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    /// Unique identifier for this node within the snapshot
    pub id: String,
    /// Lowercase tag name (e.g. "div", "button")
    pub tag: String,
    /// IDs of child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// ID of parent node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// HTML attributes (id, class, style, data-*, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Computed styles, when the render step captured them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_style: Option<ComputedStyle>,
}

impl DocumentNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Class attribute split into tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Inline `style` declarations as `(property, value)` pairs; property
    /// names are lowercased, values trimmed.
    pub fn style_declarations(&self) -> Vec<(String, String)> {
        let Some(style) = self.attr("style") else {
            return Vec::new();
        };
        style
            .split(';')
            .filter_map(|declaration| {
                let (property, value) = declaration.split_once(':')?;
                let property = property.trim().to_ascii_lowercase();
                let value = value.trim().to_string();
                if property.is_empty() || value.is_empty() {
                    None
                } else {
                    Some((property, value))
                }
            })
            .collect()
    }
}

/// Computed CSS styles for an element. Only the typography and color
/// subset the engine reads is carried.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

/// A linked stylesheet resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetLink {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}
