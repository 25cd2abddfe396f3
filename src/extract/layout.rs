//! Layout pattern detection, CSS framework scoring, and page structure.
//!
//! Pattern groups union their matches by element identity, so an element
//! matching several selectors in one group is counted once. Framework
//! confidence is the fraction of a fixed selector checklist with at least
//! one match in the document.

use std::collections::BTreeMap;

use regex::Regex;

use crate::config::DetectionThresholds;
use crate::selector::{compile_group, match_group, Selector};
use crate::types::{
    DocumentNode, DocumentSnapshot, ElementSample, FrameworkDetection, LayoutPattern,
    PageStructure, StylesheetLink,
};

const MAX_EXAMPLES: usize = 3;

const LAYOUT_PATTERNS: [(&str, &[&str]); 6] = [
    (
        "containers",
        &[
            ".container",
            ".container-fluid",
            ".wrapper",
            "[class*=\"container\"]",
            "[role=\"main\"]",
        ],
    ),
    (
        "grid",
        &[
            "[style*=\"display: grid\"]",
            "[style*=\"display:grid\"]",
            "[class*=\"grid\"]",
            ".row",
            "[class*=\"col-\"]",
        ],
    ),
    (
        "flexbox",
        &[
            "[style*=\"display: flex\"]",
            "[style*=\"display:flex\"]",
            "[class*=\"flex\"]",
            ".d-flex",
        ],
    ),
    (
        "responsive",
        &[
            "[class*=\"sm:\"]",
            "[class*=\"md:\"]",
            "[class*=\"lg:\"]",
            "[class*=\"-sm-\"]",
            "[class*=\"-md-\"]",
            "[class*=\"-lg-\"]",
        ],
    ),
    (
        "positioning",
        &[
            "[style*=\"position: absolute\"]",
            "[style*=\"position:absolute\"]",
            "[style*=\"position: fixed\"]",
            "[style*=\"position:fixed\"]",
            ".position-absolute",
            ".position-fixed",
        ],
    ),
    (
        "z-index",
        &["[style*=\"z-index\"]", "[class*=\"z-\"]"],
    ),
];

/// Framework checklists, in fixed iteration order. The order also resolves
/// per-analysis confidence ties during framework recommendation.
pub(crate) const FRAMEWORK_CHECKLISTS: [(&str, &[&str]); 4] = [
    (
        "bootstrap",
        &[
            ".container",
            ".row",
            "[class*=\"col-\"]",
            ".btn",
            ".navbar",
            ".card",
            ".badge",
            ".alert",
        ],
    ),
    (
        "tailwind",
        &[
            "[class*=\"bg-\"]",
            "[class*=\"text-\"]",
            "[class*=\"p-\"]",
            "[class*=\"m-\"]",
            "[class*=\"flex\"]",
            "[class*=\"grid\"]",
            "[class*=\"rounded\"]",
            "[class*=\"shadow\"]",
        ],
    ),
    (
        "bulma",
        &[
            ".columns",
            ".column",
            ".button",
            ".hero",
            ".navbar-burger",
            ".is-primary",
        ],
    ),
    (
        "foundation",
        &[".grid-x", ".cell", ".top-bar", ".callout", ".button"],
    ),
];

/// Evaluate every layout pattern group against the document.
pub fn detect_patterns(doc: &DocumentSnapshot) -> BTreeMap<String, LayoutPattern> {
    let mut patterns = BTreeMap::new();
    for (name, selectors) in LAYOUT_PATTERNS {
        let compiled = compile_group(selectors);
        let matched = match_group(doc, &compiled);
        patterns.insert(
            name.to_string(),
            LayoutPattern {
                name: name.to_string(),
                matched_count: matched.len(),
                examples: matched
                    .iter()
                    .take(MAX_EXAMPLES)
                    .map(|node| ElementSample::from_node(node))
                    .collect(),
            },
        );
    }
    patterns
}

/// Score every known framework checklist against the document.
pub fn detect_frameworks(
    doc: &DocumentSnapshot,
    thresholds: &DetectionThresholds,
) -> BTreeMap<String, FrameworkDetection> {
    let mut frameworks = BTreeMap::new();
    for (name, checklist) in FRAMEWORK_CHECKLISTS {
        let total = checklist.len();
        let mut matched = 0usize;
        for selector in checklist {
            let Ok(parsed) = Selector::parse(selector) else {
                continue;
            };
            if doc.nodes.iter().any(|node| parsed.matches(node)) {
                matched += 1;
            }
        }

        let confidence = ((matched as f32 / total as f32) * 100.0).round() as u8;
        frameworks.insert(
            name.to_string(),
            FrameworkDetection {
                name: name.to_string(),
                confidence_percent: confidence,
                detected: confidence > thresholds.framework_confidence_cutoff,
                version: detect_version(name, &doc.comments, &doc.stylesheets),
            },
        );
    }
    frameworks
}

/// Version detection: comments carry `<name> ... v<major>.<minor>`,
/// stylesheet URLs carry `<name> ... <major>.<minor>[.<patch>]`. The URL
/// source overwrites the comment source when both are present.
fn detect_version(
    name: &str,
    comments: &[String],
    stylesheets: &[StylesheetLink],
) -> Option<String> {
    let from_comments = Regex::new(&format!(r"(?i){}[^0-9]*v(\d+\.\d+)", regex::escape(name)))
        .ok()
        .and_then(|re| {
            comments
                .iter()
                .find_map(|comment| re.captures(comment).map(|caps| caps[1].to_string()))
        });

    let from_urls = Regex::new(&format!(
        r"(?i){}[^0-9]*?(\d+\.\d+(?:\.\d+)?)",
        regex::escape(name)
    ))
    .ok()
    .and_then(|re| {
        stylesheets
            .iter()
            .find_map(|link| re.captures(&link.href).map(|caps| caps[1].to_string()))
    });

    from_urls.or(from_comments)
}

/// Tag/class-substring presence checks, independent of pattern and
/// framework logic.
pub fn page_structure(doc: &DocumentSnapshot) -> PageStructure {
    let class_contains = |node: &DocumentNode, needle: &str| {
        node.attr("class").map(|c| c.contains(needle)).unwrap_or(false)
    };

    PageStructure {
        has_header: doc
            .nodes
            .iter()
            .any(|n| n.is_tag("header") || class_contains(n, "header")),
        has_footer: doc
            .nodes
            .iter()
            .any(|n| n.is_tag("footer") || class_contains(n, "footer")),
        has_navigation: doc
            .nodes
            .iter()
            .any(|n| n.is_tag("nav") || class_contains(n, "nav")),
        has_sidebar: doc
            .nodes
            .iter()
            .any(|n| n.is_tag("aside") || class_contains(n, "sidebar")),
        has_main: doc
            .nodes
            .iter()
            .any(|n| n.is_tag("main") || n.attr("role") == Some("main")),
        sections: doc.nodes.iter().filter(|n| n.is_tag("section")).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentNode;
    use std::collections::HashMap;

    fn node(id: &str, tag: &str, attrs: &[(&str, &str)]) -> DocumentNode {
        DocumentNode {
            id: id.to_string(),
            tag: tag.to_string(),
            children: Vec::new(),
            parent: None,
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            text: None,
            computed_style: None,
        }
    }

    fn snapshot(nodes: Vec<DocumentNode>) -> DocumentSnapshot {
        DocumentSnapshot {
            url: None,
            title: Some("test".to_string()),
            nodes,
            stylesheets: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn pattern_matches_are_unioned_by_element_identity() {
        // one element matches two flexbox selectors; count it once
        let doc = snapshot(vec![
            node("n1", "div", &[("class", "d-flex"), ("style", "display: flex")]),
            node("n2", "div", &[("class", "flex-row")]),
        ]);

        let patterns = detect_patterns(&doc);
        let flexbox = patterns.get("flexbox").expect("flexbox pattern");

        assert_eq!(flexbox.matched_count, 2);
        assert_eq!(flexbox.examples.len(), 2);
    }

    #[test]
    fn examples_are_capped_at_three_in_traversal_order() {
        let nodes = (0..5)
            .map(|i| {
                node(
                    &format!("n{i}"),
                    "div",
                    &[("class", "container"), ("data-idx", &i.to_string())],
                )
            })
            .collect();
        let doc = snapshot(nodes);

        let patterns = detect_patterns(&doc);
        let containers = patterns.get("containers").expect("containers pattern");

        assert_eq!(containers.matched_count, 5);
        assert_eq!(containers.examples.len(), 3);
    }

    #[test]
    fn four_of_eight_bootstrap_selectors_score_fifty_percent_detected() {
        let doc = snapshot(vec![
            node("n1", "div", &[("class", "container")]),
            node("n2", "div", &[("class", "row")]),
            node("n3", "div", &[("class", "col-md-6")]),
            node("n4", "a", &[("class", "btn")]),
        ]);

        let frameworks = detect_frameworks(&doc, &DetectionThresholds::default());
        let bootstrap = frameworks.get("bootstrap").expect("bootstrap entry");

        assert_eq!(bootstrap.confidence_percent, 50);
        assert!(bootstrap.detected);
    }

    #[test]
    fn confidence_is_bounded_and_cutoff_is_strict() {
        let empty = snapshot(Vec::new());
        let frameworks = detect_frameworks(&empty, &DetectionThresholds::default());

        for detection in frameworks.values() {
            assert!(detection.confidence_percent <= 100);
            assert_eq!(
                detection.detected,
                detection.confidence_percent > 30,
                "detected must mirror the 30 percent cutoff"
            );
            assert_eq!(detection.confidence_percent, 0);
        }
    }

    #[test]
    fn version_from_stylesheet_url_overwrites_comment_version() {
        let mut doc = snapshot(vec![node("n1", "div", &[("class", "container")])]);
        doc.comments = vec!["Bootstrap v4.6 | MIT License".to_string()];
        doc.stylesheets = vec![StylesheetLink {
            href: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css"
                .to_string(),
            media: None,
        }];

        let frameworks = detect_frameworks(&doc, &DetectionThresholds::default());
        let bootstrap = frameworks.get("bootstrap").expect("bootstrap entry");

        assert_eq!(bootstrap.version.as_deref(), Some("5.3.2"));
    }

    #[test]
    fn version_falls_back_to_comments_and_is_absent_without_a_match() {
        let mut doc = snapshot(Vec::new());
        doc.comments = vec!["built with Bootstrap v4.6".to_string()];

        let frameworks = detect_frameworks(&doc, &DetectionThresholds::default());
        assert_eq!(
            frameworks.get("bootstrap").and_then(|f| f.version.as_deref()),
            Some("4.6")
        );
        assert_eq!(
            frameworks.get("tailwind").and_then(|f| f.version.as_deref()),
            None
        );
    }

    #[test]
    fn page_structure_flags_and_section_count() {
        let doc = snapshot(vec![
            node("n1", "header", &[]),
            node("n2", "div", &[("class", "site-footer")]),
            node("n3", "nav", &[]),
            node("n4", "aside", &[]),
            node("n5", "div", &[("role", "main")]),
            node("n6", "section", &[]),
            node("n7", "section", &[]),
        ]);

        let structure = page_structure(&doc);

        assert!(structure.has_header);
        assert!(structure.has_footer);
        assert!(structure.has_navigation);
        assert!(structure.has_sidebar);
        assert!(structure.has_main);
        assert_eq!(structure.sections, 2);
    }
}
