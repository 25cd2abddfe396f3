//! Deterministic renderings of the synthesized guide: CSS custom-property
//! text and a static HTML preview. Pure string building over already-merged
//! data, no heuristics.

use crate::types::{ColorSystem, ScaleEntry, TypographySystem};

pub(crate) fn css_variables(
    colors: &ColorSystem,
    typography: &TypographySystem,
    spacing: &[ScaleEntry],
    breakpoints: &[ScaleEntry],
) -> String {
    let mut css = String::from(":root {\n");

    push_indexed(&mut css, "color-primary", &colors.primary);
    push_indexed(&mut css, "color-secondary", &colors.secondary);
    push_indexed(&mut css, "color-accent", &colors.accent);
    push_indexed(&mut css, "color-neutral", &colors.neutral);

    for (role, ramp) in &colors.ramps {
        for entry in ramp {
            css.push_str(&format!("  --{}-{}: {};\n", role, entry.name, entry.value));
        }
    }

    push_indexed(&mut css, "font-family", &typography.font_families);
    push_scale(&mut css, "font-size", &typography.font_sizes);
    push_scale(&mut css, "line-height", &typography.line_heights);
    push_scale(&mut css, "font-weight", &typography.font_weights);
    push_scale(&mut css, "spacing", spacing);
    push_scale(&mut css, "breakpoint", breakpoints);

    css.push_str("}\n");
    css
}

fn push_indexed(css: &mut String, prefix: &str, values: &[String]) {
    for (index, value) in values.iter().enumerate() {
        css.push_str(&format!("  --{}-{}: {};\n", prefix, index + 1, value));
    }
}

fn push_scale(css: &mut String, prefix: &str, entries: &[ScaleEntry]) {
    for entry in entries {
        css.push_str(&format!("  --{}-{}: {};\n", prefix, entry.name, entry.value));
    }
}

pub(crate) fn preview_html(
    colors: &ColorSystem,
    typography: &TypographySystem,
    component_names: &[String],
    recommended_framework: Option<&str>,
) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Style Guide Preview</title>\n</head>\n<body>\n",
    );

    html.push_str("<h1>Style Guide</h1>\n");
    if let Some(framework) = recommended_framework {
        html.push_str(&format!("<p>Recommended framework: {framework}</p>\n"));
    }

    html.push_str("<section>\n<h2>Colors</h2>\n");
    for (label, values) in [
        ("Primary", &colors.primary),
        ("Secondary", &colors.secondary),
        ("Accent", &colors.accent),
        ("Neutral", &colors.neutral),
    ] {
        if values.is_empty() {
            continue;
        }
        html.push_str(&format!("<h3>{label}</h3>\n<div>\n"));
        for value in values {
            html.push_str(&format!(
                "  <span style=\"display:inline-block;width:48px;height:48px;background:{value}\" \
                 title=\"{value}\"></span>\n"
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section>\n<h2>Typography</h2>\n<ul>\n");
    for family in &typography.font_families {
        html.push_str(&format!(
            "  <li style=\"font-family:{family}\">{family}</li>\n"
        ));
    }
    html.push_str("</ul>\n");
    for entry in &typography.font_sizes {
        html.push_str(&format!(
            "<p style=\"font-size:{}\">{} sample text</p>\n",
            entry.value, entry.name
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section>\n<h2>Components</h2>\n<ul>\n");
    for name in component_names {
        html.push_str(&format!("  <li>{name}</li>\n"));
    }
    html.push_str("</ul>\n</section>\n</body>\n</html>\n");

    html
}
