//! Heuristic style extraction from converted document markup.
//!
//! The extractor looks only at inline `style` attributes, in document order.
//! First-seen order matters: the first brand color becomes `primary`, the
//! first font becomes the heading font.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use crate::color;
use crate::error::MarkupError;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z!/]").expect("valid tag regex"));

static STYLE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<[a-z][a-z0-9]*\b(?:"[^"]*"|'[^']*'|[^'">])*?\sstyle\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .expect("valid style attribute regex")
});

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[;\s])(?:background-)?color\s*:\s*(#[0-9a-f]{6}\b|#[0-9a-f]{3}\b|rgb\([^)]*\))",
    )
    .expect("valid color regex")
});

static FONT_FAMILY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])font-family\s*:\s*([^;]+)").expect("valid font-family regex")
});

static FONT_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])font-size\s*:\s*(\d+(?:\.\d+)?)(px|pt|rem|em)\b")
        .expect("valid font-size regex")
});

const BLACK: &str = "#000000";
const WHITE: &str = "#FFFFFF";

/// Colors guessed from a document. `background` is never filled by the
/// extractor but is kept so the shape mirrors the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
}

impl ExtractedColors {
    pub fn present_count(&self) -> usize {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.text,
            &self.background,
        ]
        .iter()
        .filter(|c| c.is_some())
        .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedHeadingSizes {
    pub h1: Option<u32>,
    pub h2: Option<u32>,
    pub h3: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedTypography {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub heading_sizes: ExtractedHeadingSizes,
    pub body_size: Option<u32>,
}

/// Result of one import. Created per document, consumed by the applier and
/// the summary, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStyle {
    pub colors: ExtractedColors,
    pub typography: ExtractedTypography,
    #[serde(skip_serializing)]
    pub raw_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Insertion-ordered set; later duplicates are dropped.
#[derive(Debug)]
struct FirstSeen<T> {
    items: Vec<T>,
}

impl<T: PartialEq> FirstSeen<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn insert(&mut self, value: T) {
        if !self.items.contains(&value) {
            self.items.push(value);
        }
    }

    fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// Extracts colors, fonts and sizes from `html`.
///
/// Markup with no styled elements is not an error: every field is `None`.
///
/// # Errors
///
/// Returns [`MarkupError::NotMarkup`] if `html` is non-blank text containing
/// no element tags.
pub fn extract(html: &str) -> Result<ExtractedStyle, MarkupError> {
    if !html.trim().is_empty() && !TAG_RE.is_match(html) {
        return Err(MarkupError::NotMarkup);
    }

    let styles = inline_styles(html);

    let mut colors = FirstSeen::new();
    let mut fonts = FirstSeen::new();
    let mut sizes = FirstSeen::new();

    for style in &styles {
        for caps in COLOR_RE.captures_iter(style) {
            if let Some(hex) = color::normalize(&caps[1]) {
                colors.insert(hex);
            }
        }

        if let Some(font) = first_font_family(style) {
            fonts.insert(font);
        }

        if let Some(size) = first_font_size_pt(style) {
            sizes.insert(size);
        }
    }

    let colors = colors.into_vec();
    let fonts = fonts.into_vec();
    let mut sizes = sizes.into_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    debug!(
        styled_elements = styles.len(),
        colors = colors.len(),
        fonts = fonts.len(),
        sizes = sizes.len(),
        "scanned inline styles"
    );

    Ok(ExtractedStyle {
        colors: assign_colors(&colors),
        typography: assign_typography(&fonts, &sizes),
        raw_html: html.to_string(),
        raw_text: None,
    })
}

/// Decoded `style` attribute values of every element, in document order.
fn inline_styles(html: &str) -> Vec<String> {
    STYLE_ATTR_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| decode_attr(m.as_str()))
        .collect()
}

fn decode_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn first_font_family(style: &str) -> Option<String> {
    let caps = FONT_FAMILY_RE.captures(style)?;
    let first = caps[1].split(',').next()?;
    let name = first.replace(['"', '\''], "");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Font size converted to whole points: px × 0.75, em/rem × 12.
fn first_font_size_pt(style: &str) -> Option<u32> {
    let caps = FONT_SIZE_RE.captures(style)?;
    let value: f64 = caps[1].parse().ok()?;
    let points = match caps[2].to_ascii_lowercase().as_str() {
        "px" => value * 0.75,
        "em" | "rem" => value * 12.0,
        _ => value,
    };
    let rounded = points.round();
    (rounded >= 1.0 && rounded <= f64::from(u32::MAX)).then_some(rounded as u32)
}

fn assign_colors(unique: &[String]) -> ExtractedColors {
    let mut candidates = unique
        .iter()
        .filter(|c| c.as_str() != BLACK && c.as_str() != WHITE)
        .cloned();

    let primary = candidates.next();
    let secondary = candidates.next();
    let accent = candidates.next();

    // Picked from the unfiltered set; may repeat a brand color.
    let text = unique.iter().find(|c| color::is_dark(c)).cloned();

    ExtractedColors {
        primary,
        secondary,
        accent,
        text,
        background: None,
    }
}

fn assign_typography(fonts: &[String], sizes_desc: &[u32]) -> ExtractedTypography {
    let heading_font = fonts.first().cloned();
    let body_font = fonts.get(1).or(fonts.first()).cloned();

    let body_size = if sizes_desc.len() > 3 {
        sizes_desc.last().copied()
    } else {
        None
    };

    ExtractedTypography {
        heading_font,
        body_font,
        heading_sizes: ExtractedHeadingSizes {
            h1: sizes_desc.first().copied(),
            h2: sizes_desc.get(1).copied(),
            h3: sizes_desc.get(2).copied(),
        },
        body_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(style: &str) -> String {
        format!(r#"<span style="{style}">x</span>"#)
    }

    #[test]
    fn assigns_brand_colors_in_document_order() {
        let html: String = ["#000000", "#1A73E8", "#34A853", "#EA4335", "#202124"]
            .iter()
            .map(|c| span(&format!("color: {c}")))
            .collect();
        let style = extract(&html).unwrap();

        assert_eq!(style.colors.primary.as_deref(), Some("#1A73E8"));
        assert_eq!(style.colors.secondary.as_deref(), Some("#34A853"));
        assert_eq!(style.colors.accent.as_deref(), Some("#EA4335"));
        // Black is excluded from brand roles but still counts as dark text.
        assert_eq!(style.colors.text.as_deref(), Some("#000000"));
        assert_eq!(style.colors.background, None);
    }

    #[test]
    fn text_color_may_repeat_primary() {
        let html = span("color: #1a73e8") + &span("color: #202124");
        let style = extract(&html).unwrap();
        assert_eq!(style.colors.primary.as_deref(), Some("#1A73E8"));
        assert_eq!(style.colors.text.as_deref(), Some("#1A73E8"));
    }

    #[test]
    fn text_color_skips_light_colors() {
        let html = span("background-color: #ffffff") + &span("color: #f4b400; background-color: #202124");
        let style = extract(&html).unwrap();
        assert_eq!(style.colors.primary.as_deref(), Some("#F4B400"));
        assert_eq!(style.colors.secondary.as_deref(), Some("#202124"));
        assert_eq!(style.colors.text.as_deref(), Some("#202124"));
    }

    #[test]
    fn black_and_white_never_become_brand_colors() {
        let html = span("color: #000; background-color: rgb(255, 255, 255)");
        let style = extract(&html).unwrap();
        assert_eq!(style.colors.primary, None);
        assert_eq!(style.colors.secondary, None);
        assert_eq!(style.colors.accent, None);
        assert_eq!(style.colors.text.as_deref(), Some("#000000"));
    }

    #[test]
    fn duplicate_colors_collapse_across_notations() {
        let html = span("color: #1a73e8") + &span("color: rgb(26,115,232)") + &span("color: #34a853");
        let style = extract(&html).unwrap();
        assert_eq!(style.colors.primary.as_deref(), Some("#1A73E8"));
        assert_eq!(style.colors.secondary.as_deref(), Some("#34A853"));
        assert_eq!(style.colors.accent, None);
    }

    #[test]
    fn ignores_unsupported_color_syntax_and_other_properties() {
        let html = span("color: red; border-color: #123456; background-color: hsl(0, 50%, 50%)");
        let style = extract(&html).unwrap();
        assert_eq!(style.colors, ExtractedColors::default());
    }

    #[test]
    fn sizes_rank_descending_and_body_is_smallest() {
        let html = [
            "font-size: 32pt",
            "font-size: 32px",
            "font-size: 2em",
            "font-size: 18pt",
            "font-size: 14pt",
            "font-size: 1.5rem",
            "font-size: 16px",
        ]
        .iter()
        .map(|s| span(s))
        .collect::<String>();
        let style = extract(&html).unwrap();
        let t = &style.typography;

        assert_eq!(t.heading_sizes.h1, Some(32));
        assert_eq!(t.heading_sizes.h2, Some(24));
        assert_eq!(t.heading_sizes.h3, Some(18));
        assert_eq!(t.body_size, Some(12));
    }

    #[test]
    fn body_size_needs_four_distinct_sizes() {
        let html = span("font-size: 24pt") + &span("font-size: 18pt") + &span("font-size: 12pt");
        let style = extract(&html).unwrap();
        assert_eq!(style.typography.heading_sizes.h3, Some(12));
        assert_eq!(style.typography.body_size, None);
    }

    #[test]
    fn first_font_is_heading_second_is_body() {
        let html = span("font-family: 'Montserrat', sans-serif")
            + &span("font-family: &quot;Lora&quot;, serif")
            + &span("font-family: Montserrat");
        let style = extract(&html).unwrap();
        assert_eq!(style.typography.heading_font.as_deref(), Some("Montserrat"));
        assert_eq!(style.typography.body_font.as_deref(), Some("Lora"));
    }

    #[test]
    fn single_font_fills_both_roles() {
        let html = r#"<p style="font-family: &quot;Inter&quot;, Arial">hello</p>"#;
        let style = extract(html).unwrap();
        assert_eq!(style.typography.heading_font.as_deref(), Some("Inter"));
        assert_eq!(style.typography.body_font.as_deref(), Some("Inter"));
    }

    #[test]
    fn fonts_and_sizes_are_independent() {
        let style = extract(&span("font-family: Roboto")).unwrap();
        assert!(style.typography.heading_font.is_some());
        assert_eq!(style.typography.heading_sizes, ExtractedHeadingSizes::default());
    }

    #[test]
    fn unstyled_markup_yields_empty_style() {
        let html = "<html><body><h1>Title</h1><p>Body text</p></body></html>";
        let style = extract(html).unwrap();
        assert_eq!(style.colors, ExtractedColors::default());
        assert_eq!(style.typography, ExtractedTypography::default());
        assert_eq!(style.raw_html, html);
    }

    #[test]
    fn empty_input_is_empty_style() {
        let style = extract("").unwrap();
        assert_eq!(style.colors.present_count(), 0);
    }

    #[test]
    fn plain_text_is_not_markup() {
        assert_eq!(extract("just words, no tags"), Err(MarkupError::NotMarkup));
    }

    #[test]
    fn single_quoted_style_attributes_are_scanned() {
        let html = "<div class='a' style='color:#ea4335;font-size:20px'>x</div>";
        let style = extract(html).unwrap();
        assert_eq!(style.colors.primary.as_deref(), Some("#EA4335"));
        assert_eq!(style.typography.heading_sizes.h1, Some(15));
    }

    #[test]
    fn style_text_inside_other_attribute_values_is_ignored() {
        let html = r#"<p title="see style='color:#123456'">x</p>"#;
        let style = extract(html).unwrap();
        assert_eq!(style.colors.primary, None);
        assert_eq!(style.colors.present_count(), 0);

        let html = r#"<p data-note='a > b' title="x" style="color:#654321">x</p>"#;
        let style = extract(html).unwrap();
        assert_eq!(style.colors.primary.as_deref(), Some("#654321"));
    }
}
