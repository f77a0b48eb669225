//! Renders a brand profile into a document-design skill: markdown
//! instructions for an agent that produces branded files.

use clap::ValueEnum;

use crate::profile::{BrandProfile, WatermarkKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentType {
    Word,
    GoogleDocs,
    Powerpoint,
    GoogleSlides,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        Self::Word,
        Self::GoogleDocs,
        Self::Powerpoint,
        Self::GoogleSlides,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Word => "Microsoft Word",
            Self::GoogleDocs => "Google Docs",
            Self::Powerpoint => "PowerPoint",
            Self::GoogleSlides => "Google Slides",
        }
    }

    /// Identifier used in generated file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::GoogleDocs => "googleDocs",
            Self::Powerpoint => "powerpoint",
            Self::GoogleSlides => "googleSlides",
        }
    }

    pub fn is_presentation(self) -> bool {
        matches!(self, Self::Powerpoint | Self::GoogleSlides)
    }
}

/// Words that change between document and presentation output.
struct Vocabulary {
    outputs: &'static str,
    files: &'static str,
    surface: &'static str,
    surface_title: &'static str,
}

impl Vocabulary {
    fn for_type(doc_type: DocumentType) -> Self {
        if doc_type.is_presentation() {
            Self {
                outputs: "presentations",
                files: "slides",
                surface: "slide",
                surface_title: "Slide",
            }
        } else {
            Self {
                outputs: "documents",
                files: "files",
                surface: "page",
                surface_title: "Page",
            }
        }
    }
}

pub fn generate_skill(profile: &BrandProfile, doc_type: DocumentType) -> String {
    let words = Vocabulary::for_type(doc_type);
    let c = &profile.colors;
    let t = &profile.typography;
    let mut out = String::new();

    out.push_str(&format!(
        "# Document Design Skill: {name}\n\n\
         ## Purpose\n\
         Apply consistent {name} branding to all {outputs} created in this project. \
         This skill ensures visual consistency and professional appearance across all {app} {files}.\n\n\
         ---\n\n",
        name = profile.name,
        outputs = words.outputs,
        app = doc_type.display_name(),
        files = words.files,
    ));

    out.push_str("## Brand Colors\n\n");
    out.push_str("| Color | Hex Code | Usage |\n");
    out.push_str("|-------|----------|-------|\n");
    out.push_str(&format!("| **Primary** | `{}` | Headings, key elements, primary buttons |\n", c.primary));
    out.push_str(&format!("| **Secondary** | `{}` | Subheadings, secondary elements, accents |\n", c.secondary));
    out.push_str(&format!("| **Accent** | `{}` | Highlights, call-to-actions, important callouts |\n", c.accent));
    out.push_str(&format!("| **Text** | `{}` | Body text, paragraphs, general content |\n", c.text));
    out.push_str(&format!(
        "| **Background** | `{}` | {} background color |\n",
        c.background, words.surface_title
    ));
    out.push_str("\n---\n\n");

    out.push_str("## Typography\n\n### Heading Font\n");
    out.push_str(&format!("- **Family**: {}\n", t.heading_font));
    out.push_str(&format!("- **Weight**: {}\n", t.heading_weight.label()));
    out.push_str("\n### Heading Sizes\n");
    out.push_str(&format!("- **H1 / Title**: {}pt\n", t.heading_sizes.h1));
    out.push_str(&format!("- **H2 / Section**: {}pt\n", t.heading_sizes.h2));
    out.push_str(&format!("- **H3 / Subsection**: {}pt\n", t.heading_sizes.h3));
    out.push_str("\n### Body Text\n");
    out.push_str(&format!("- **Family**: {}\n", t.body_font));
    out.push_str(&format!("- **Size**: {}pt\n", t.body_size));
    out.push_str(&format!("- **Weight**: {}\n", t.body_weight.label()));
    out.push_str(&format!("- **Line Height**: {}\n", t.line_height));
    if t.letter_spacing != 0.0 {
        out.push_str(&format!("- **Letter Spacing**: {}px\n", t.letter_spacing));
    }
    out.push_str("\n---\n");

    if profile.logo.data.is_some() {
        push_logo_section(&mut out, profile, &words);
    }
    if profile.header_footer.has_content() {
        push_header_footer_section(&mut out, profile, doc_type);
    }
    if profile.watermark.enabled {
        push_watermark_section(&mut out, profile, doc_type);
    }
    push_layout_section(&mut out, profile);
    push_application_instructions(&mut out, profile, doc_type, &words);

    out
}

/// One skill per supported document type, in display order.
pub fn generate_all(profile: &BrandProfile) -> Vec<(DocumentType, String)> {
    DocumentType::ALL
        .iter()
        .map(|&doc_type| (doc_type, generate_skill(profile, doc_type)))
        .collect()
}

/// Lowercased profile name with each run of non `[a-z0-9]` characters
/// replaced by one dash, e.g. `Acme Corp` → `acme-corp-word-skill.md`.
pub fn skill_filename(profile_name: &str, doc_type: DocumentType) -> String {
    let mut safe = String::new();
    let mut pending_dash = false;
    for ch in profile_name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash {
                safe.push('-');
                pending_dash = false;
            }
            safe.push(ch);
        } else {
            pending_dash = true;
        }
    }
    if pending_dash {
        safe.push('-');
    }
    format!("{}-{}-skill.md", safe, doc_type.slug())
}

fn push_logo_section(out: &mut String, profile: &BrandProfile, words: &Vocabulary) {
    let position = profile.logo.position.to_string();
    out.push_str(&format!(
        "\n## Logo\n\n\
         - **Position**: {position}\n\
         - **Size**: {size}\n\n\
         When placing the logo:\n\
         1. Insert the logo image in the {lower}\n\
         2. Ensure proper spacing from {surface} edges (at least 0.5 inches)\n\
         3. Maintain aspect ratio when resizing\n\n\
         ---\n",
        size = profile.logo.size,
        lower = position.to_lowercase(),
        surface = words.surface,
    ));
}

fn push_header_footer_section(out: &mut String, profile: &BrandProfile, doc_type: DocumentType) {
    let hf = &profile.header_footer;
    out.push_str("\n## Header & Footer\n\n");
    for (label, value) in [
        ("Company Name", &hf.company_name),
        ("Tagline", &hf.tagline),
        ("Contact Info", &hf.contact_info),
        ("Footer Text", &hf.footer_text),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("- **{label}**: {value}\n"));
        }
    }

    let target = if doc_type.is_presentation() {
        "slide master/template"
    } else {
        "document header and footer"
    };
    let header_size = profile.typography.body_size.saturating_sub(4).max(8);
    out.push_str(&format!(
        "\nApply these in the {target}. Use the secondary color for header text \
         and a smaller font size ({header_size}pt).\n\n---\n"
    ));
}

fn push_watermark_section(out: &mut String, profile: &BrandProfile, doc_type: DocumentType) {
    let wm = &profile.watermark;
    let (kind, content) = match wm.kind {
        WatermarkKind::Text => ("Text", format!("\"{}\"", wm.content)),
        WatermarkKind::Image => ("Image", "Image watermark".to_string()),
    };
    let target = if doc_type.is_presentation() {
        "slide background element"
    } else {
        "page watermark"
    };
    out.push_str(&format!(
        "\n## Watermark\n\n\
         - **Type**: {kind}\n\
         - **Content**: {content}\n\
         - **Opacity**: {opacity}%\n\
         - **Position**: {position}\n\n\
         Apply as a {target} with the specified opacity level.\n\n---\n",
        opacity = (wm.opacity * 100.0).round(),
        position = wm.position,
    ));
}

fn push_layout_section(out: &mut String, profile: &BrandProfile) {
    let m = &profile.layout.margins;
    out.push_str(&format!(
        "\n## Layout\n\n### Margins\n\
         - **Top**: {} inch\n\
         - **Right**: {} inch\n\
         - **Bottom**: {} inch\n\
         - **Left**: {} inch\n\n\
         ### Spacing\n\
         - **Paragraph Spacing**: {}\n\n---\n",
        m.top,
        m.right,
        m.bottom,
        m.left,
        profile.layout.spacing.description(),
    ));
}

fn push_application_instructions(
    out: &mut String,
    profile: &BrandProfile,
    doc_type: DocumentType,
    words: &Vocabulary,
) {
    let c = &profile.colors;
    let t = &profile.typography;

    out.push_str(&format!(
        "\n## Application Instructions\n\n\
         When creating {app} {outputs}:\n\n\
         ### Colors\n\
         1. Apply **Primary** color (`{primary}`) to all main headings (H1)\n\
         2. Apply **Secondary** color (`{secondary}`) to subheadings (H2, H3)\n\
         3. Use **Text** color (`{text}`) for all body paragraphs\n\
         4. Set {surface} background to **Background** color (`{background}`)\n\
         5. Use **Accent** color (`{accent}`) sparingly for emphasis and call-outs\n\n\
         ### Typography\n\
         1. Set heading font to **{heading_font}** with **{weight}** weight\n\
         2. Set body text font to **{body_font}** at **{body_size}pt**\n\
         3. Apply the following heading sizes:\n   \
            - H1: {h1}pt\n   \
            - H2: {h2}pt\n   \
            - H3: {h3}pt\n\
         4. Set line height to {line_height} for body text\n\n\
         ### Structure\n",
        app = doc_type.display_name(),
        outputs = words.outputs,
        primary = c.primary,
        secondary = c.secondary,
        text = c.text,
        surface = words.surface,
        background = c.background,
        accent = c.accent,
        heading_font = t.heading_font,
        weight = t.heading_weight.label().to_lowercase(),
        body_font = t.body_font,
        body_size = t.body_size,
        h1 = t.heading_sizes.h1,
        h2 = t.heading_sizes.h2,
        h3 = t.heading_sizes.h3,
        line_height = t.line_height,
    ));

    if doc_type.is_presentation() {
        out.push_str(&format!(
            "1. **Title Slide**: Use H1 styling for the main title, centered\n\
             2. **Section Slides**: Use H2 for section headers\n\
             3. **Content Slides**: Use H3 for slide titles, body text for bullet points\n\
             4. Maintain consistent margins of {}\" on all sides\n\
             5. Align content to a consistent grid\n\n\
             ### Slide Elements\n\
             - Use Primary color for key data points and important numbers\n\
             - Apply Accent color to highlight boxes or callout sections\n\
             - Keep backgrounds clean using the Background color\n\
             - Use Secondary color for supporting text and labels\n",
            profile.layout.margins.left
        ));
    } else {
        out.push_str(
            "1. **Title Page**: Center the document title using H1 styling\n\
             2. **Sections**: Begin each major section with H2 heading\n\
             3. **Subsections**: Use H3 for subsection headers\n\
             4. **Body**: Apply consistent body text styling throughout\n\
             5. Maintain margins as specified in the Layout section\n\n\
             ### Document Elements\n\
             - **Lists**: Indent by 0.5\" with body text styling\n\
             - **Tables**: Use Primary color for headers, alternating light backgrounds for rows\n\
             - **Quotes**: Indent and use Secondary color for blockquotes\n\
             - **Links**: Apply Accent color to hyperlinks\n\
             - **Code/Technical**: Use a monospace font at body size\n",
        );
    }

    out.push_str(&format!(
        "\n---\n\n## Quick Reference\n\n```\n\
         Brand: {}\n\
         Primary: {}\n\
         Secondary: {}\n\
         Accent: {}\n\
         Text: {}\n\
         Background: {}\n\
         Heading Font: {}\n\
         Body Font: {}\n\
         ```\n",
        profile.name, c.primary, c.secondary, c.accent, c.text, c.background, t.heading_font, t.body_font,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{LogoPosition, WatermarkPosition};

    #[test]
    fn document_skill_lists_colors_and_fonts() {
        let profile = BrandProfile::new("Acme");
        let skill = generate_skill(&profile, DocumentType::Word);

        assert!(skill.starts_with("# Document Design Skill: Acme\n"));
        assert!(skill.contains("| **Primary** | `#1a73e8` |"));
        assert!(skill.contains("- **Weight**: Bold"));
        assert!(skill.contains("all Microsoft Word files"));
        assert!(skill.contains("Page background color"));
        assert!(skill.contains("### Document Elements"));
        assert!(skill.contains("with **bold** weight"));
        assert!(skill.contains("Heading Font: Playfair Display\nBody Font: Open Sans\n```"));
    }

    #[test]
    fn every_table_and_list_line_is_terminated() {
        let profile = BrandProfile::new("Acme");
        let skill = generate_skill(&profile, DocumentType::Word);

        assert!(skill.contains(
            "| **Text** | `#202124` | Body text, paragraphs, general content |\n\
             | **Background** | `#ffffff` | Page background color |\n\n---\n"
        ));
        assert!(skill.contains("- **H3 / Subsection**: 18pt\n\n### Body Text\n"));
        assert!(skill.contains("- **Line Height**: 1.6\n\n---\n"));
        assert!(skill.ends_with("```\n"));
    }

    #[test]
    fn presentation_skill_uses_slide_wording() {
        let profile = BrandProfile::new("Acme");
        let skill = generate_skill(&profile, DocumentType::GoogleSlides);

        assert!(skill.contains("all Google Slides slides"));
        assert!(skill.contains("Slide background color"));
        assert!(skill.contains("### Slide Elements"));
        assert!(skill.contains("margins of 1\" on all sides"));
    }

    #[test]
    fn optional_sections_follow_profile_content() {
        let mut profile = BrandProfile::new("Acme");
        let plain = generate_skill(&profile, DocumentType::Word);
        assert!(!plain.contains("## Logo"));
        assert!(!plain.contains("## Header & Footer"));
        assert!(!plain.contains("## Watermark"));
        assert!(!plain.contains("Letter Spacing"));

        profile.logo.data = Some("data:image/png;base64,AAAA".to_string());
        profile.logo.position = LogoPosition::HeaderRight;
        profile.header_footer.footer_text = "Page {page} of {pages}".to_string();
        profile.typography.body_size = 10;
        profile.watermark.enabled = true;
        profile.watermark.content = "DRAFT".to_string();
        profile.watermark.opacity = 0.05;
        profile.watermark.position = WatermarkPosition::Diagonal;
        profile.typography.letter_spacing = 0.5;

        let full = generate_skill(&profile, DocumentType::Word);
        assert!(full.contains("- **Position**: Header Right"));
        assert!(full.contains("in the header right\n"));
        assert!(full.contains("- **Footer Text**: Page {page} of {pages}"));
        assert!(!full.contains("- **Tagline**"));
        assert!(full.contains("smaller font size (8pt)"));
        assert!(full.contains("- **Content**: \"DRAFT\""));
        assert!(full.contains("- **Opacity**: 5%"));
        assert!(full.contains("- **Position**: Diagonal"));
        assert!(full.contains("- **Letter Spacing**: 0.5px"));
    }

    #[test]
    fn generates_every_document_type() {
        let profile = BrandProfile::new("Acme");
        let all = generate_all(&profile);
        assert_eq!(all.len(), 4);
        assert_eq!(all[2].0, DocumentType::Powerpoint);
        assert!(all[2].1.contains("PowerPoint presentations"));
    }

    #[test]
    fn filenames_are_slugged() {
        assert_eq!(skill_filename("Acme Corp", DocumentType::Word), "acme-corp-word-skill.md");
        assert_eq!(
            skill_filename("R&D  Labs!", DocumentType::GoogleDocs),
            "r-d-labs--googleDocs-skill.md"
        );
    }
}
