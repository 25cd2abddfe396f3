//! Minimal structural selector matching over document snapshots.
//!
//! The pattern, framework, and component checklists only need a small
//! selector subset: tag names, `.class`, `#id`, attribute tests (`[attr]`,
//! `[attr="v"]`, `[attr*="v"]`, `[attr^="v"]`, `[attr$="v"]`), and compounds
//! of those (`input[type="submit"]`). Combinators and pseudo-classes are
//! rejected at parse time.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{DtxError, Result};
use crate::types::{DocumentNode, DocumentSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals,
    Contains,
    StartsWith,
    EndsWith,
}

#[derive(Debug, Clone)]
struct AttrTest {
    name: String,
    op: AttrOp,
    value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut selector = Selector::default();
        let mut chars = trimmed.chars().peekable();

        let tag = read_ident(&mut chars);
        if !tag.is_empty() {
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    let name = read_ident(&mut chars);
                    if name.is_empty() {
                        return Err(DtxError::Selector(input.to_string()));
                    }
                    selector.classes.push(name);
                }
                '#' => {
                    let name = read_ident(&mut chars);
                    if name.is_empty() {
                        return Err(DtxError::Selector(input.to_string()));
                    }
                    selector.id = Some(name);
                }
                '[' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        if inner == ']' {
                            closed = true;
                            break;
                        }
                        body.push(inner);
                    }
                    if !closed {
                        return Err(DtxError::Selector(input.to_string()));
                    }
                    selector.attrs.push(parse_attr_test(&body, input)?);
                }
                _ => return Err(DtxError::Selector(input.to_string())),
            }
        }

        if selector.tag.is_none()
            && selector.id.is_none()
            && selector.classes.is_empty()
            && selector.attrs.is_empty()
        {
            return Err(DtxError::Selector(input.to_string()));
        }
        Ok(selector)
    }

    pub fn matches(&self, node: &DocumentNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            if !node.classes().any(|c| c == class) {
                return false;
            }
        }
        for test in &self.attrs {
            let value = node.attr(&test.name);
            let ok = match test.op {
                AttrOp::Exists => value.is_some(),
                AttrOp::Equals => value == Some(test.value.as_str()),
                AttrOp::Contains => value.map(|v| v.contains(&test.value)).unwrap_or(false),
                AttrOp::StartsWith => value.map(|v| v.starts_with(&test.value)).unwrap_or(false),
                AttrOp::EndsWith => value.map(|v| v.ends_with(&test.value)).unwrap_or(false),
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

fn read_ident(chars: &mut Peekable<Chars>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn parse_attr_test(body: &str, original: &str) -> Result<AttrTest> {
    for (token, op) in [
        ("*=", AttrOp::Contains),
        ("^=", AttrOp::StartsWith),
        ("$=", AttrOp::EndsWith),
        ("=", AttrOp::Equals),
    ] {
        if let Some((name, value)) = body.split_once(token) {
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                return Err(DtxError::Selector(original.to_string()));
            }
            let value = value
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string();
            return Ok(AttrTest { name, op, value });
        }
    }

    let name = body.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err(DtxError::Selector(original.to_string()));
    }
    Ok(AttrTest {
        name,
        op: AttrOp::Exists,
        value: String::new(),
    })
}

/// Compile a fixed in-crate selector list; entries that fail to parse are
/// skipped.
pub(crate) fn compile_group(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
}

/// All nodes matching any selector in the group, unioned by element
/// identity in traversal order. An element matching several selectors is
/// counted once.
pub(crate) fn match_group<'a>(
    doc: &'a DocumentSnapshot,
    selectors: &[Selector],
) -> Vec<&'a DocumentNode> {
    doc.nodes
        .iter()
        .filter(|node| selectors.iter().any(|s| s.matches(node)))
        .collect()
}
