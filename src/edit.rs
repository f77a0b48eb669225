//! Field edits for a saved profile: the `set` and `logo` commands.
//!
//! Edits only mutate the in-memory profile. Callers save it through the
//! store, which validates before anything is written.

use base64::Engine;
use clap::{Subcommand, ValueEnum};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::LogoError;
use crate::profile::{
    BrandProfile, Colors, FontWeight, Logo, Spacing, WatermarkKind, WatermarkPosition,
};

/// Largest logo file that will be embedded.
pub const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Text,
    Background,
}

impl ColorRole {
    fn slot(self, colors: &mut Colors) -> &mut String {
        match self {
            Self::Primary => &mut colors.primary,
            Self::Secondary => &mut colors.secondary,
            Self::Accent => &mut colors.accent,
            Self::Text => &mut colors.text,
            Self::Background => &mut colors.background,
        }
    }
}

/// Sub-commands available under `set`.
#[derive(Debug, Subcommand)]
pub enum SetCommand {
    /// Rename the profile
    Name { name: String },

    /// Set one color role to a hex value such as #1a73e8
    Color { role: ColorRole, value: String },

    /// Fonts, sizes (pt), weights and spacing
    Typography {
        #[arg(long)]
        heading_font: Option<String>,
        #[arg(long)]
        body_font: Option<String>,
        #[arg(long)]
        h1: Option<u32>,
        #[arg(long)]
        h2: Option<u32>,
        #[arg(long)]
        h3: Option<u32>,
        #[arg(long)]
        body_size: Option<u32>,
        /// 300-800 or a name such as bold, semi-bold
        #[arg(long)]
        heading_weight: Option<FontWeight>,
        #[arg(long)]
        body_weight: Option<FontWeight>,
        #[arg(long)]
        line_height: Option<f64>,
        /// Pixels
        #[arg(long, allow_negative_numbers = true)]
        letter_spacing: Option<f64>,
    },

    /// Header and footer text. Footer text may use {page} and {pages}.
    HeaderFooter {
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        tagline: Option<String>,
        #[arg(long)]
        contact_info: Option<String>,
        #[arg(long)]
        footer_text: Option<String>,
    },

    /// Watermark toggle, content and placement
    Watermark {
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        #[arg(long)]
        disable: bool,
        #[arg(long = "type", value_enum)]
        kind: Option<WatermarkKind>,
        #[arg(long)]
        content: Option<String>,
        /// 0.0 to 1.0
        #[arg(long)]
        opacity: Option<f64>,
        #[arg(long, value_enum)]
        position: Option<WatermarkPosition>,
    },

    /// Page margins (inches) and paragraph spacing
    Layout {
        /// All four margins at once; per-side flags win
        #[arg(long)]
        margin: Option<f64>,
        #[arg(long)]
        top: Option<f64>,
        #[arg(long)]
        right: Option<f64>,
        #[arg(long)]
        bottom: Option<f64>,
        #[arg(long)]
        left: Option<f64>,
        #[arg(long, value_enum)]
        spacing: Option<Spacing>,
    },
}

fn assign<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

/// Applies one `set` edit to `profile`. Values are not checked here.
pub fn apply_edit(profile: &mut BrandProfile, edit: &SetCommand) {
    match edit {
        SetCommand::Name { name } => profile.name = name.clone(),
        SetCommand::Color { role, value } => *role.slot(&mut profile.colors) = value.clone(),
        SetCommand::Typography {
            heading_font,
            body_font,
            h1,
            h2,
            h3,
            body_size,
            heading_weight,
            body_weight,
            line_height,
            letter_spacing,
        } => {
            let t = &mut profile.typography;
            assign(&mut t.heading_font, heading_font);
            assign(&mut t.body_font, body_font);
            assign(&mut t.heading_sizes.h1, h1);
            assign(&mut t.heading_sizes.h2, h2);
            assign(&mut t.heading_sizes.h3, h3);
            assign(&mut t.body_size, body_size);
            assign(&mut t.heading_weight, heading_weight);
            assign(&mut t.body_weight, body_weight);
            assign(&mut t.line_height, line_height);
            assign(&mut t.letter_spacing, letter_spacing);
        }
        SetCommand::HeaderFooter {
            company_name,
            tagline,
            contact_info,
            footer_text,
        } => {
            let hf = &mut profile.header_footer;
            assign(&mut hf.company_name, company_name);
            assign(&mut hf.tagline, tagline);
            assign(&mut hf.contact_info, contact_info);
            assign(&mut hf.footer_text, footer_text);
        }
        SetCommand::Watermark {
            enable,
            disable,
            kind,
            content,
            opacity,
            position,
        } => {
            let wm = &mut profile.watermark;
            if *enable {
                wm.enabled = true;
            }
            if *disable {
                wm.enabled = false;
            }
            assign(&mut wm.kind, kind);
            assign(&mut wm.content, content);
            assign(&mut wm.opacity, opacity);
            assign(&mut wm.position, position);
        }
        SetCommand::Layout {
            margin,
            top,
            right,
            bottom,
            left,
            spacing,
        } => {
            let m = &mut profile.layout.margins;
            if let Some(all) = margin {
                m.top = *all;
                m.right = *all;
                m.bottom = *all;
                m.left = *all;
            }
            assign(&mut m.top, top);
            assign(&mut m.right, right);
            assign(&mut m.bottom, bottom);
            assign(&mut m.left, left);
            assign(&mut profile.layout.spacing, spacing);
        }
    }
}

/// Reads a PNG or JPEG file into a base64 data URI.
pub fn logo_data_uri(path: &Path) -> Result<String, LogoError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mime = match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => return Err(LogoError::UnsupportedType { name }),
    };

    let read_err = |source: std::io::Error| LogoError::Read {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_LOGO_BYTES {
        return Err(LogoError::TooLarge { name, size });
    }

    let bytes = fs::read(path).map_err(read_err)?;
    debug!(file = %name, bytes = bytes.len(), "embedding logo");
    Ok(format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

/// Embeds the image at `path` as the logo, keeping position and size.
pub fn attach_logo(logo: &mut Logo, path: &Path) -> Result<(), LogoError> {
    logo.data = Some(logo_data_uri(path)?);
    logo.filename = path.file_name().map(|n| n.to_string_lossy().into_owned());
    Ok(())
}

pub fn remove_logo(logo: &mut Logo) {
    logo.data = None;
    logo.filename = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use crate::profile::Margins;

    fn typography_edit() -> SetCommand {
        SetCommand::Typography {
            heading_font: Some("Lora".to_string()),
            body_font: None,
            h1: Some(40),
            h2: None,
            h3: None,
            body_size: None,
            heading_weight: Some(FontWeight::ExtraBold),
            body_weight: None,
            line_height: Some(1.4),
            letter_spacing: Some(-0.5),
        }
    }

    #[test]
    fn color_edit_targets_one_role() {
        let mut profile = BrandProfile::new("Acme");
        let before = profile.colors.clone();
        apply_edit(
            &mut profile,
            &SetCommand::Color {
                role: ColorRole::Accent,
                value: "#FF6600".to_string(),
            },
        );
        assert_eq!(profile.colors.accent, "#FF6600");
        assert_eq!(profile.colors.primary, before.primary);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn invalid_color_is_caught_by_validation() {
        let mut profile = BrandProfile::new("Acme");
        apply_edit(
            &mut profile,
            &SetCommand::Color {
                role: ColorRole::Primary,
                value: "blue".to_string(),
            },
        );
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::InvalidColor { role: "primary", .. })
        ));
    }

    #[test]
    fn typography_edit_leaves_unset_fields_alone() {
        let mut profile = BrandProfile::new("Acme");
        apply_edit(&mut profile, &typography_edit());

        let t = &profile.typography;
        assert_eq!(t.heading_font, "Lora");
        assert_eq!(t.body_font, "Open Sans");
        assert_eq!(t.heading_sizes.h1, 40);
        assert_eq!(t.heading_sizes.h2, 24);
        assert_eq!(t.heading_weight, FontWeight::ExtraBold);
        assert_eq!(t.line_height, 1.4);
        assert_eq!(t.letter_spacing, -0.5);
    }

    #[test]
    fn watermark_toggle_and_fields() {
        let mut profile = BrandProfile::new("Acme");
        apply_edit(
            &mut profile,
            &SetCommand::Watermark {
                enable: true,
                disable: false,
                kind: None,
                content: Some("CONFIDENTIAL".to_string()),
                opacity: Some(0.25),
                position: Some(WatermarkPosition::Diagonal),
            },
        );
        assert!(profile.watermark.enabled);
        assert_eq!(profile.watermark.content, "CONFIDENTIAL");
        assert_eq!(profile.watermark.position, WatermarkPosition::Diagonal);

        apply_edit(
            &mut profile,
            &SetCommand::Watermark {
                enable: false,
                disable: true,
                kind: None,
                content: None,
                opacity: None,
                position: None,
            },
        );
        assert!(!profile.watermark.enabled);
        assert_eq!(profile.watermark.content, "CONFIDENTIAL");
    }

    #[test]
    fn per_side_margins_override_uniform_margin() {
        let mut profile = BrandProfile::new("Acme");
        apply_edit(
            &mut profile,
            &SetCommand::Layout {
                margin: Some(0.75),
                top: Some(1.25),
                right: None,
                bottom: None,
                left: None,
                spacing: Some(Spacing::Relaxed),
            },
        );
        assert_eq!(
            profile.layout.margins,
            Margins {
                top: 1.25,
                ..Margins::uniform(0.75)
            }
        );
        assert_eq!(profile.layout.spacing, Spacing::Relaxed);
    }

    #[test]
    fn header_footer_edit() {
        let mut profile = BrandProfile::new("Acme");
        apply_edit(
            &mut profile,
            &SetCommand::HeaderFooter {
                company_name: Some("Acme Corp".to_string()),
                tagline: None,
                contact_info: None,
                footer_text: Some("Page {page} of {pages}".to_string()),
            },
        );
        assert!(profile.header_footer.has_content());
        assert_eq!(profile.header_footer.footer_text, "Page {page} of {pages}");
        assert_eq!(profile.header_footer.tagline, "");
    }

    #[test]
    fn png_logo_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Logo.PNG");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut logo = Logo::default();
        attach_logo(&mut logo, &path).unwrap();

        assert_eq!(logo.data.as_deref(), Some("data:image/png;base64,iVBORw=="));
        assert_eq!(logo.filename.as_deref(), Some("Logo.PNG"));

        remove_logo(&mut logo);
        assert_eq!(logo, Logo::default());
    }

    #[test]
    fn logo_rejects_other_types_and_large_files() {
        let dir = tempfile::tempdir().unwrap();

        let svg = dir.path().join("logo.svg");
        fs::write(&svg, "<svg/>").unwrap();
        assert!(matches!(
            logo_data_uri(&svg),
            Err(LogoError::UnsupportedType { .. })
        ));

        let big = dir.path().join("logo.jpg");
        fs::write(&big, vec![0u8; MAX_LOGO_BYTES as usize + 1]).unwrap();
        assert!(matches!(logo_data_uri(&big), Err(LogoError::TooLarge { .. })));

        let missing = dir.path().join("missing.png");
        assert!(matches!(logo_data_uri(&missing), Err(LogoError::Read { .. })));
    }
}
