//! Core data types: the document snapshot consumed by the engine, the
//! per-document [`SiteAnalysis`], and the synthesized [`StyleGuide`].

mod analysis;
mod document;
mod guide;

pub use analysis::{
    ColorCategorySet, ComponentUsage, ElementSample, FrameworkDetection, LayoutAnalysis,
    LayoutPattern, PageStructure, RawToken, SiteAnalysis, TypographySet,
};
pub use document::{ComputedStyle, DocumentNode, DocumentSnapshot, StylesheetLink};
pub use guide::{
    ColorSystem, ComponentContract, ComponentSpec, LayoutSystem, ScaleEntry, StyleGuide,
    TypographySystem, STYLE_GUIDE_VERSION,
};
