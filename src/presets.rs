use tracing::info;

use crate::profile::{
    BrandProfile, Colors, FontWeight, HeaderFooter, HeadingSizes, Layout, Logo, LogoPosition,
    LogoSize, Margins, Spacing, Typography, Watermark, WatermarkPosition,
};

/// A starting point for a new profile.
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: Colors,
    pub typography: Typography,
    pub logo: Logo,
    pub header_footer: HeaderFooter,
    pub watermark: Watermark,
    pub layout: Layout,
}

pub const PRESET_KEYS: [&str; 4] = ["corporate", "creative", "minimal", "academic"];

pub fn all() -> Vec<Preset> {
    PRESET_KEYS.iter().filter_map(|key| preset(key)).collect()
}

pub fn preset(key: &str) -> Option<Preset> {
    match key {
        "corporate" => Some(Preset {
            key: "corporate",
            name: "Corporate",
            description: "Professional blues, serif headings, clean layout",
            colors: colors("#1e3a5f", "#3d5a80", "#ee6c4d", "#293241", "#ffffff"),
            typography: typography(
                "Merriweather",
                "Source Sans Pro",
                (36, 28, 20),
                14,
                FontWeight::Bold,
                1.6,
                0.0,
            ),
            logo: logo(LogoPosition::HeaderLeft, LogoSize::Medium),
            header_footer: header_footer(
                "Your Company Name",
                "Excellence in Everything We Do",
                "contact@company.com | (555) 123-4567",
                "Confidential - For Internal Use Only",
            ),
            watermark: Watermark::default(),
            layout: layout(Margins::uniform(1.0), Spacing::Normal),
        }),
        "creative" => Some(Preset {
            key: "creative",
            name: "Creative",
            description: "Bold colors, modern fonts, dynamic spacing",
            colors: colors("#6366f1", "#8b5cf6", "#f59e0b", "#1f2937", "#fafafa"),
            typography: typography(
                "Poppins",
                "Inter",
                (40, 30, 22),
                15,
                FontWeight::SemiBold,
                1.7,
                0.5,
            ),
            logo: logo(LogoPosition::HeaderCenter, LogoSize::Large),
            header_footer: header_footer(
                "Creative Studio",
                "Where Ideas Come to Life",
                "hello@creativestudio.com",
                "",
            ),
            watermark: Watermark::default(),
            layout: layout(Margins::uniform(1.25), Spacing::Relaxed),
        }),
        "minimal" => Some(Preset {
            key: "minimal",
            name: "Minimal",
            description: "Monochrome, simple typography, generous whitespace",
            colors: colors("#171717", "#404040", "#737373", "#262626", "#ffffff"),
            typography: typography(
                "DM Sans",
                "DM Sans",
                (32, 24, 18),
                14,
                FontWeight::Medium,
                1.8,
                0.0,
            ),
            logo: logo(LogoPosition::HeaderLeft, LogoSize::Small),
            header_footer: HeaderFooter::default(),
            watermark: Watermark::default(),
            layout: layout(Margins::uniform(1.5), Spacing::Relaxed),
        }),
        "academic" => Some(Preset {
            key: "academic",
            name: "Academic",
            description: "Traditional fonts, formal structure, citation-friendly",
            colors: colors("#1e40af", "#1e3a8a", "#dc2626", "#1f2937", "#ffffff"),
            typography: typography(
                "Libre Baskerville",
                "Libre Baskerville",
                (28, 22, 18),
                12,
                FontWeight::Bold,
                2.0,
                0.0,
            ),
            logo: logo(LogoPosition::HeaderCenter, LogoSize::Medium),
            header_footer: header_footer(
                "University Name",
                "Department of Studies",
                "",
                "Page {page} of {pages}",
            ),
            watermark: Watermark {
                content: "DRAFT".to_string(),
                opacity: 0.05,
                position: WatermarkPosition::Diagonal,
                ..Watermark::default()
            },
            layout: layout(
                Margins {
                    left: 1.5,
                    ..Margins::uniform(1.0)
                },
                Spacing::Normal,
            ),
        }),
        _ => None,
    }
}

impl BrandProfile {
    /// New profile carrying a preset's styling. Returns `None` for an
    /// unknown key.
    pub fn from_preset(key: &str, name: Option<&str>) -> Option<Self> {
        let preset = preset(key)?;
        let mut profile = BrandProfile::new(name.unwrap_or(preset.name));
        profile.colors = preset.colors;
        profile.typography = preset.typography;
        profile.logo = preset.logo;
        profile.header_footer = preset.header_footer;
        profile.watermark = preset.watermark;
        profile.layout = preset.layout;
        info!(preset = key, id = %profile.id, "created profile from preset");
        Some(profile)
    }
}

fn colors(primary: &str, secondary: &str, accent: &str, text: &str, background: &str) -> Colors {
    Colors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        text: text.to_string(),
        background: background.to_string(),
    }
}

fn typography(
    heading_font: &str,
    body_font: &str,
    (h1, h2, h3): (u32, u32, u32),
    body_size: u32,
    heading_weight: FontWeight,
    line_height: f64,
    letter_spacing: f64,
) -> Typography {
    Typography {
        heading_font: heading_font.to_string(),
        body_font: body_font.to_string(),
        heading_sizes: HeadingSizes { h1, h2, h3 },
        body_size,
        heading_weight,
        body_weight: FontWeight::Regular,
        line_height,
        letter_spacing,
    }
}

fn logo(position: LogoPosition, size: LogoSize) -> Logo {
    Logo {
        data: None,
        filename: None,
        position,
        size,
    }
}

fn header_footer(company_name: &str, tagline: &str, contact_info: &str, footer_text: &str) -> HeaderFooter {
    HeaderFooter {
        company_name: company_name.to_string(),
        tagline: tagline.to_string(),
        contact_info: contact_info.to_string(),
        footer_text: footer_text.to_string(),
    }
}

fn layout(margins: Margins, spacing: Spacing) -> Layout {
    Layout { margins, spacing }
}
