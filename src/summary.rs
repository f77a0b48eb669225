use crate::extract::ExtractedStyle;

pub const NOTHING_EXTRACTED: &str = "No styles could be extracted";

/// Short status lines describing an extraction: colors, fonts, then sizes.
pub fn summarize(extracted: &ExtractedStyle) -> Vec<String> {
    let mut summary = Vec::new();

    let color_count = extracted.colors.present_count();
    if color_count > 0 {
        summary.push(format!("{color_count} color(s) detected"));
    }

    let typography = &extracted.typography;
    let fonts: Vec<&str> = [&typography.heading_font, &typography.body_font]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    if !fonts.is_empty() {
        summary.push(format!("Font(s): {}", fonts.join(", ")));
    }

    let sizes = &typography.heading_sizes;
    let size_count = [sizes.h1, sizes.h2, sizes.h3, typography.body_size]
        .iter()
        .filter(|s| s.is_some())
        .count();
    if size_count > 0 {
        summary.push(format!("{size_count} font size(s) detected"));
    }

    if summary.is_empty() {
        summary.push(NOTHING_EXTRACTED.to_string());
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extraction_returns_fallback_only() {
        assert_eq!(summarize(&ExtractedStyle::default()), vec![NOTHING_EXTRACTED]);
    }

    #[test]
    fn reports_colors_fonts_and_sizes_in_order() {
        let mut style = ExtractedStyle::default();
        style.colors.primary = Some("#1A73E8".to_string());
        style.colors.text = Some("#202124".to_string());
        style.typography.heading_font = Some("Inter".to_string());
        style.typography.body_font = Some("Inter".to_string());
        style.typography.heading_sizes.h1 = Some(32);
        style.typography.heading_sizes.h2 = Some(24);
        style.typography.body_size = Some(12);

        assert_eq!(
            summarize(&style),
            vec![
                "2 color(s) detected",
                "Font(s): Inter, Inter",
                "3 font size(s) detected",
            ]
        );
    }

    #[test]
    fn body_size_alone_counts_as_a_size() {
        let mut style = ExtractedStyle::default();
        style.typography.body_size = Some(10);
        assert_eq!(summarize(&style), vec!["1 font size(s) detected"]);
    }

    #[test]
    fn omits_sections_with_nothing_found() {
        let mut style = ExtractedStyle::default();
        style.typography.body_font = Some("Lora".to_string());
        assert_eq!(summarize(&style), vec!["Font(s): Lora"]);
    }
}
