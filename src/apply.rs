use crate::extract::{ExtractedColors, ExtractedHeadingSizes, ExtractedStyle, ExtractedTypography};
use crate::profile::{BrandProfile, Colors, HeadingSizes, Typography};

/// Returns a copy of `profile` with every present extracted value written
/// over the matching leaf. Absent values leave the profile untouched.
///
/// Values are trusted as-is; color normalization already happened during
/// extraction.
pub fn apply(profile: &BrandProfile, extracted: &ExtractedStyle) -> BrandProfile {
    BrandProfile {
        colors: merge_colors(&profile.colors, &extracted.colors),
        typography: merge_typography(&profile.typography, &extracted.typography),
        ..profile.clone()
    }
}

fn merge_colors(current: &Colors, found: &ExtractedColors) -> Colors {
    let pick = |found: &Option<String>, current: &String| {
        found.clone().unwrap_or_else(|| current.clone())
    };

    Colors {
        primary: pick(&found.primary, &current.primary),
        secondary: pick(&found.secondary, &current.secondary),
        accent: pick(&found.accent, &current.accent),
        text: pick(&found.text, &current.text),
        background: pick(&found.background, &current.background),
    }
}

/// Fonts and sizes are overwritten one by one. Weights, line height and
/// letter spacing are never extracted and always carried over.
fn merge_typography(current: &Typography, found: &ExtractedTypography) -> Typography {
    Typography {
        heading_font: found
            .heading_font
            .clone()
            .unwrap_or_else(|| current.heading_font.clone()),
        body_font: found
            .body_font
            .clone()
            .unwrap_or_else(|| current.body_font.clone()),
        heading_sizes: merge_heading_sizes(current.heading_sizes, found.heading_sizes),
        body_size: found.body_size.unwrap_or(current.body_size),
        ..current.clone()
    }
}

fn merge_heading_sizes(current: HeadingSizes, found: ExtractedHeadingSizes) -> HeadingSizes {
    HeadingSizes {
        h1: found.h1.unwrap_or(current.h1),
        h2: found.h2.unwrap_or(current.h2),
        h3: found.h3.unwrap_or(current.h3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::FontWeight;

    #[test]
    fn overwrites_only_present_heading_sizes() {
        let profile = BrandProfile::new("Acme");
        let mut extracted = ExtractedStyle::default();
        extracted.typography.heading_sizes.h1 = Some(40);

        let updated = apply(&profile, &extracted);

        assert_eq!(updated.typography.heading_sizes.h1, 40);
        assert_eq!(updated.typography.heading_sizes.h2, 24);
        assert_eq!(updated.typography.heading_sizes.h3, 18);
        assert_eq!(profile.typography.heading_sizes.h1, 32, "input is not mutated");
    }

    #[test]
    fn empty_extraction_leaves_profile_unchanged() {
        let profile = BrandProfile::new("Acme");
        let updated = apply(&profile, &ExtractedStyle::default());
        assert_eq!(updated, profile);
    }

    #[test]
    fn overwrites_colors_key_by_key() {
        let profile = BrandProfile::new("Acme");
        let mut extracted = ExtractedStyle::default();
        extracted.colors.secondary = Some("#112233".to_string());
        extracted.colors.text = Some("#000000".to_string());

        let updated = apply(&profile, &extracted);

        assert_eq!(updated.colors.primary, profile.colors.primary);
        assert_eq!(updated.colors.secondary, "#112233");
        assert_eq!(updated.colors.accent, profile.colors.accent);
        assert_eq!(updated.colors.text, "#000000");
        assert_eq!(updated.colors.background, profile.colors.background);
    }

    #[test]
    fn overwrites_fonts_and_body_size_individually() {
        let mut profile = BrandProfile::new("Acme");
        profile.typography.heading_weight = FontWeight::SemiBold;
        let mut extracted = ExtractedStyle::default();
        extracted.typography.body_font = Some("Lora".to_string());
        extracted.typography.body_size = Some(11);

        let updated = apply(&profile, &extracted);

        assert_eq!(updated.typography.heading_font, "Playfair Display");
        assert_eq!(updated.typography.body_font, "Lora");
        assert_eq!(updated.typography.body_size, 11);
        assert_eq!(updated.typography.heading_weight, FontWeight::SemiBold);
        assert_eq!(updated.typography.line_height, profile.typography.line_height);
    }

    #[test]
    fn keeps_identity_and_unrelated_sections() {
        let mut profile = BrandProfile::new("Acme");
        profile.header_footer.company_name = "Acme Corp".to_string();
        profile.watermark.enabled = true;
        let mut extracted = ExtractedStyle::default();
        extracted.colors.primary = Some("#ABCDEF".to_string());

        let updated = apply(&profile, &extracted);

        assert_eq!(updated.id, profile.id);
        assert_eq!(updated.created_at, profile.created_at);
        assert_eq!(updated.header_footer, profile.header_footer);
        assert_eq!(updated.watermark, profile.watermark);
        assert_eq!(updated.layout, profile.layout);
    }
}
