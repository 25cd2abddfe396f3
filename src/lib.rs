//! Design Token Extractor (DTX) Library
//!
//! A library for extracting a normalized design-token model (colors,
//! typography, layout and component patterns) from rendered documents and
//! synthesizing one internally-consistent style guide across them.
//!
//! # Module Overview
//!
//! - [`extract`] - Per-document extraction: token collection, color
//!   clustering, typography normalization, layout/framework detection
//! - [`synth`] - Aggregation of 1-5 analyses into a style guide
//! - [`selector`] - Structural selector matching for the fixed checklists
//! - [`color`] - CSS color parsing and perceptual color math
//! - [`config`] - Threshold configuration
//! - [`types`] - Core data types and structures
//!
//! The document snapshot is supplied by an external fetch/render step; the
//! engine itself is pure, deterministic computation.
//!
//! # Example
//!
//! ```
//! use dtx::types::DocumentSnapshot;
//! use dtx::{analyze, synthesize};
//!
//! let doc = DocumentSnapshot {
//!     url: Some("https://example.com".to_string()),
//!     title: None,
//!     nodes: Vec::new(),
//!     stylesheets: Vec::new(),
//!     comments: Vec::new(),
//! };
//!
//! let analysis = analyze(&doc);
//! let guide = synthesize(&[analysis])?;
//! assert_eq!(guide.sources, vec!["https://example.com".to_string()]);
//! # Ok::<(), dtx::DtxError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod selector;
pub mod synth;
pub mod types;

pub use color::{
    delta_e, is_excluded_keyword, lightness, parse_css_color, relative_luminance, saturation,
    shade_ramp, to_hex, ColorValue,
};
pub use config::{ColorThresholds, Config, DetectionThresholds, SampleGates};
pub use error::{DtxError, Result};
// Extraction re-exports
pub use extract::{
    analyze, analyze_batch, analyze_with, build_typography_set, cluster_colors, collect_tokens,
    detect_components, detect_frameworks, detect_patterns, normalize_family, page_structure,
    CollectedTokens, FrequencyCounter,
};
pub use selector::Selector;
pub use synth::{synthesize, synthesize_with};
pub use types::{
    ColorCategorySet, ColorSystem, ComponentContract, ComponentSpec, ComponentUsage, ComputedStyle,
    DocumentNode, DocumentSnapshot, ElementSample, FrameworkDetection, LayoutAnalysis,
    LayoutPattern, LayoutSystem, PageStructure, RawToken, ScaleEntry, SiteAnalysis, StyleGuide,
    StylesheetLink, TypographySet, TypographySystem, STYLE_GUIDE_VERSION,
};
