use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color;
use crate::error::ProfileError;

/// A persisted brand identity: colors, typography, logo, header/footer,
/// watermark and page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub logo: Logo,
    #[serde(default)]
    pub header_footer: HeaderFooter,
    #[serde(default)]
    pub watermark: Watermark,
    #[serde(default)]
    pub layout: Layout,
}

/// The five semantic color roles, each a `#`-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#1a73e8".to_string(),
            secondary: "#34a853".to_string(),
            accent: "#ea4335".to_string(),
            text: "#202124".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl Colors {
    /// Role name paired with its value, in display order.
    pub fn roles(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("text", &self.text),
            ("background", &self.background),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSizes {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
}

impl Default for HeadingSizes {
    fn default() -> Self {
        Self {
            h1: 32,
            h2: 24,
            h3: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub heading_sizes: HeadingSizes,
    pub body_size: u32,
    pub heading_weight: FontWeight,
    pub body_weight: FontWeight,
    pub line_height: f64,
    /// Pixels.
    pub letter_spacing: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading_font: "Playfair Display".to_string(),
            body_font: "Open Sans".to_string(),
            heading_sizes: HeadingSizes::default(),
            body_size: 14,
            heading_weight: FontWeight::Bold,
            body_weight: FontWeight::Regular,
            line_height: 1.6,
            letter_spacing: 0.0,
        }
    }
}

/// Font weights offered by the editor. Serialized as the CSS numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 6] = [
        Self::Light,
        Self::Regular,
        Self::Medium,
        Self::SemiBold,
        Self::Bold,
        Self::ExtraBold,
    ];

    pub fn value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::SemiBold => "Semi-Bold",
            Self::Bold => "Bold",
            Self::ExtraBold => "Extra-Bold",
        }
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            300 => Ok(Self::Light),
            400 => Ok(Self::Regular),
            500 => Ok(Self::Medium),
            600 => Ok(Self::SemiBold),
            700 => Ok(Self::Bold),
            800 => Ok(Self::ExtraBold),
            other => Err(format!("unsupported font weight {other}")),
        }
    }
}

/// Accepts the numeric weight or its label, e.g. `700`, `bold`, `semi-bold`.
impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u16>() {
            return Self::try_from(value);
        }
        let wanted = s.replace(['-', ' '], "");
        Self::ALL
            .into_iter()
            .find(|w| w.label().replace('-', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown font weight {s:?}"))
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    #[default]
    HeaderLeft,
    HeaderCenter,
    HeaderRight,
}

impl fmt::Display for LogoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeaderLeft => "Header Left",
            Self::HeaderCenter => "Header Center",
            Self::HeaderRight => "Header Right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for LogoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    /// Embedded image as a data URI.
    pub data: Option<String>,
    pub filename: Option<String>,
    pub position: LogoPosition,
    pub size: LogoSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderFooter {
    pub company_name: String,
    pub tagline: String,
    pub contact_info: String,
    /// May contain the `{page}` and `{pages}` placeholders.
    pub footer_text: String,
}

impl HeaderFooter {
    pub fn has_content(&self) -> bool {
        [
            &self.company_name,
            &self.tagline,
            &self.contact_info,
            &self.footer_text,
        ]
        .iter()
        .any(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkKind {
    #[default]
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkPosition {
    #[default]
    Center,
    Diagonal,
    Tiled,
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "Center",
            Self::Diagonal => "Diagonal",
            Self::Tiled => "Tiled",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Watermark {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: WatermarkKind,
    pub content: String,
    pub image_data: Option<String>,
    pub opacity: f64,
    pub position: WatermarkPosition,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: WatermarkKind::Text,
            content: String::new(),
            image_data: None,
            opacity: 0.1,
            position: WatermarkPosition::Center,
        }
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Margins {
    pub fn uniform(inches: f64) -> Self {
        Self {
            top: inches,
            right: inches,
            bottom: inches,
            left: inches,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

impl Spacing {
    pub fn description(self) -> &'static str {
        match self {
            Self::Compact => "Compact (6pt after paragraphs)",
            Self::Normal => "Normal (12pt after paragraphs)",
            Self::Relaxed => "Relaxed (18pt after paragraphs)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub margins: Margins,
    pub spacing: Spacing,
}

impl BrandProfile {
    /// A fresh profile with default styling and a newly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            colors: Colors::default(),
            typography: Typography::default(),
            logo: Logo::default(),
            header_footer: HeaderFooter::default(),
            watermark: Watermark::default(),
            layout: Layout::default(),
        }
    }

    /// Checks the value invariants the editor relies on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        for (role, value) in self.colors.roles() {
            if !color::is_hex(value) {
                return Err(ProfileError::InvalidColor {
                    role,
                    value: value.to_string(),
                });
            }
        }

        let sizes = &self.typography.heading_sizes;
        if sizes.h1 == 0 || sizes.h2 == 0 || sizes.h3 == 0 || self.typography.body_size == 0 {
            return Err(ProfileError::ZeroFontSize);
        }

        if !(0.0..=1.0).contains(&self.watermark.opacity) {
            return Err(ProfileError::OpacityOutOfRange(self.watermark.opacity));
        }

        let m = &self.layout.margins;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ProfileError::NegativeMargin);
        }

        Ok(())
    }
}

pub fn generate_id() -> String {
    format!("profile_{}", uuid::Uuid::new_v4().simple())
}
