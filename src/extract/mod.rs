//! Per-document extraction: token collection, color clustering, typography
//! normalization, and layout/framework/component detection.
//!
//! Everything here is a pure read of one [`DocumentSnapshot`]; independent
//! documents can be analyzed in parallel via [`analyze_batch`].

mod cluster;
mod collect;
mod components;
mod freq;
mod layout;
mod typography;

pub use cluster::cluster_colors;
pub use collect::{collect_tokens, CollectedTokens};
pub use components::detect_components;
pub use freq::FrequencyCounter;
pub use layout::{detect_frameworks, detect_patterns, page_structure};
pub use typography::{build_typography_set, normalize_family};

pub(crate) use layout::FRAMEWORK_CHECKLISTS;

use futures::future::join_all;

use crate::config::Config;
use crate::error::{DtxError, Result};
use crate::types::{DocumentSnapshot, LayoutAnalysis, SiteAnalysis};

/// Extract a complete [`SiteAnalysis`] from one document with the default
/// thresholds.
pub fn analyze(doc: &DocumentSnapshot) -> SiteAnalysis {
    analyze_with(doc, &Config::default())
}

/// Extract a complete [`SiteAnalysis`] from one document.
pub fn analyze_with(doc: &DocumentSnapshot, config: &Config) -> SiteAnalysis {
    let collected = collect_tokens(doc, config);

    SiteAnalysis {
        source_id: doc.source_label(),
        colors: cluster_colors(&collected.colors, &config.colors),
        typography: build_typography_set(&collected),
        components: detect_components(doc),
        layout: LayoutAnalysis {
            patterns: detect_patterns(doc),
            frameworks: detect_frameworks(doc, &config.detection),
            page_structure: page_structure(doc),
        },
    }
}

/// Analyze several documents concurrently, one blocking task per document,
/// and join before returning. Results keep the input order.
pub async fn analyze_batch(
    docs: Vec<DocumentSnapshot>,
    config: &Config,
) -> Result<Vec<SiteAnalysis>> {
    let tasks: Vec<_> = docs
        .into_iter()
        .map(|doc| {
            let config = config.clone();
            tokio::task::spawn_blocking(move || analyze_with(&doc, &config))
        })
        .collect();

    join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.map_err(|e| DtxError::Unknown(format!("analysis task failed: {e}"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentNode, StylesheetLink};
    use std::collections::HashMap;

    fn sample_doc(url: &str) -> DocumentSnapshot {
        DocumentSnapshot {
            url: Some(url.to_string()),
            title: None,
            nodes: vec![DocumentNode {
                id: "n1".to_string(),
                tag: "div".to_string(),
                children: Vec::new(),
                parent: None,
                attributes: [
                    ("class".to_string(), "container".to_string()),
                    ("style".to_string(), "color: #ff0000".to_string()),
                ]
                .into_iter()
                .collect::<HashMap<_, _>>(),
                text: None,
                computed_style: None,
            }],
            stylesheets: vec![StylesheetLink {
                href: "https://fonts.googleapis.com/css2?family=Roboto&display=swap".to_string(),
                media: None,
            }],
            comments: Vec::new(),
        }
    }

    #[test]
    fn analyze_is_deterministic_for_an_unchanged_document() {
        let doc = sample_doc("https://example.com");

        let first = serde_json::to_string(&analyze(&doc)).expect("serialize");
        let second = serde_json::to_string(&analyze(&doc)).expect("serialize");

        assert_eq!(first, second, "repeated analysis must be byte-identical");
    }

    #[test]
    fn analyze_wires_all_sections_together() {
        let analysis = analyze(&sample_doc("https://example.com"));

        assert_eq!(analysis.source_id, "https://example.com");
        assert_eq!(analysis.colors.all.len(), 1);
        assert_eq!(
            analysis.typography.font_families[0].value,
            "Roboto, sans-serif"
        );
        assert_eq!(analysis.typography.font_families[0].occurrence_count, 10);
        assert!(analysis.layout.patterns.contains_key("containers"));
        assert!(analysis.layout.frameworks.contains_key("bootstrap"));
        assert!(analysis.components.contains_key("buttons"));
    }

    #[tokio::test]
    async fn analyze_batch_keeps_input_order() {
        let docs = vec![
            sample_doc("https://a.example.com"),
            sample_doc("https://b.example.com"),
            sample_doc("https://c.example.com"),
        ];

        let analyses = analyze_batch(docs, &Config::default())
            .await
            .expect("batch should succeed");

        let ids: Vec<_> = analyses.iter().map(|a| a.source_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "https://a.example.com",
                "https://b.example.com",
                "https://c.example.com"
            ]
        );
    }
}
