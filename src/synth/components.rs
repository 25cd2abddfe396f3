//! Component specification synthesis.
//!
//! Counts and examples come from the contributing analyses; the structural
//! contract per type is generated from the fixed vocabulary alone and never
//! looks at the observed markup.

use std::collections::BTreeMap;

use crate::types::{ComponentContract, ComponentSpec, SiteAnalysis};

const MAX_EXAMPLES: usize = 3;

const COMPONENT_TYPES: [&str; 8] = [
    "buttons",
    "forms",
    "inputs",
    "navigation",
    "cards",
    "modals",
    "tables",
    "lists",
];

pub(crate) fn build_component_specs(
    analyses: &[SiteAnalysis],
) -> BTreeMap<String, ComponentSpec> {
    let mut specs = BTreeMap::new();

    for component_type in COMPONENT_TYPES {
        let mut count = 0;
        let mut examples = Vec::new();
        for analysis in analyses {
            if let Some(usage) = analysis.components.get(component_type) {
                count += usage.count;
                examples.extend(usage.examples.iter().cloned());
            }
        }
        examples.truncate(MAX_EXAMPLES);

        specs.insert(
            component_type.to_string(),
            ComponentSpec {
                name: capitalize(component_type),
                selector: selector_for(component_type),
                count,
                examples,
                contract: contract_for(component_type),
            },
        );
    }

    specs
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn selector_for(component_type: &str) -> String {
    // singular class selector: "buttons" -> ".button"
    let singular = component_type.strip_suffix('s').unwrap_or(component_type);
    format!(".{singular}")
}

fn contract_for(component_type: &str) -> ComponentContract {
    let (inputs, outputs): (&[&str], &[&str]) = match component_type {
        "buttons" => (&["label", "variant", "size", "disabled"], &["click"]),
        "forms" => (&["fields", "action"], &["submit"]),
        "inputs" => (
            &["value", "placeholder", "type", "disabled"],
            &["change", "focus", "blur"],
        ),
        "navigation" => (&["items", "activeItem"], &["navigate"]),
        "cards" => (&["title", "body", "media"], &[]),
        "modals" => (&["title", "open", "dismissible"], &["open", "close"]),
        "tables" => (&["columns", "rows"], &["sort"]),
        "lists" => (&["items", "ordered"], &[]),
        _ => (&[], &[]),
    };
    ComponentContract {
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ColorCategorySet, ComponentUsage, ElementSample, LayoutAnalysis, TypographySet,
    };

    fn analysis_with_components(
        entries: &[(&str, usize, usize)],
    ) -> SiteAnalysis {
        let components = entries
            .iter()
            .map(|(component_type, count, example_count)| {
                let examples = (0..*example_count)
                    .map(|i| ElementSample {
                        tag: format!("tag{i}"),
                        class_list: Vec::new(),
                        id: None,
                        child_count: 0,
                    })
                    .collect();
                (
                    component_type.to_string(),
                    ComponentUsage {
                        count: *count,
                        examples,
                    },
                )
            })
            .collect();

        SiteAnalysis {
            source_id: "test".to_string(),
            colors: ColorCategorySet::default(),
            typography: TypographySet::default(),
            components,
            layout: LayoutAnalysis::default(),
        }
    }

    #[test]
    fn counts_sum_and_examples_truncate_to_three() {
        let a = analysis_with_components(&[("buttons", 4, 2)]);
        let b = analysis_with_components(&[("buttons", 3, 2)]);

        let specs = build_component_specs(&[a, b]);
        let buttons = specs.get("buttons").expect("buttons spec");

        assert_eq!(buttons.count, 7);
        assert_eq!(buttons.examples.len(), 3);
    }

    #[test]
    fn every_type_gets_a_deterministic_record() {
        let specs = build_component_specs(&[analysis_with_components(&[])]);

        assert_eq!(specs.len(), COMPONENT_TYPES.len());

        let buttons = specs.get("buttons").expect("buttons spec");
        assert_eq!(buttons.name, "Buttons");
        assert_eq!(buttons.selector, ".button");
        assert_eq!(buttons.count, 0);
        assert!(buttons.contract.inputs.contains(&"variant".to_string()));
        assert_eq!(buttons.contract.outputs, vec!["click".to_string()]);

        let cards = specs.get("cards").expect("cards spec");
        assert_eq!(cards.selector, ".card");
        assert!(cards.contract.outputs.is_empty());
    }
}
