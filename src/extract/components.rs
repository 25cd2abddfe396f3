//! Component usage detection.

use std::collections::BTreeMap;

use crate::selector::{compile_group, match_group};
use crate::types::{ComponentUsage, DocumentSnapshot, ElementSample};

const MAX_EXAMPLES: usize = 3;

/// The fixed component-type vocabulary, in checklist order.
pub(crate) const COMPONENT_SELECTORS: [(&str, &[&str]); 8] = [
    (
        "buttons",
        &[
            "button",
            "input[type=\"submit\"]",
            "input[type=\"button\"]",
            ".btn",
            "[class*=\"button\"]",
            "[role=\"button\"]",
        ],
    ),
    ("forms", &["form"]),
    ("inputs", &["input", "textarea", "select"]),
    (
        "navigation",
        &["nav", ".navbar", ".nav", "[role=\"navigation\"]"],
    ),
    ("cards", &[".card", "[class*=\"card\"]"]),
    (
        "modals",
        &["dialog", ".modal", "[class*=\"modal\"]", "[role=\"dialog\"]"],
    ),
    ("tables", &["table"]),
    ("lists", &["ul", "ol", "dl"]),
];

/// Count component usage per type, unioned by element identity, with up to
/// three samples in traversal order.
pub fn detect_components(doc: &DocumentSnapshot) -> BTreeMap<String, ComponentUsage> {
    let mut components = BTreeMap::new();
    for (component_type, selectors) in COMPONENT_SELECTORS {
        let compiled = compile_group(selectors);
        let matched = match_group(doc, &compiled);
        components.insert(
            component_type.to_string(),
            ComponentUsage {
                count: matched.len(),
                examples: matched
                    .iter()
                    .take(MAX_EXAMPLES)
                    .map(|node| ElementSample::from_node(node))
                    .collect(),
            },
        );
    }
    components
}
