//! Word template import: validate, convert, extract, apply, summarize.

use std::path::Path;
use tracing::{info, warn};

use crate::apply;
use crate::docx_reader::DocxData;
use crate::error::ImportError;
use crate::extract::{self, ExtractedStyle};
use crate::profile::BrandProfile;
use crate::reader::DocumentConverter;
use crate::summary;

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";

/// Outcome of a successful import. The input profile is never modified;
/// `profile` is the merged copy.
pub struct TemplateImport {
    pub profile: BrandProfile,
    pub extracted: ExtractedStyle,
    pub summary: Vec<String>,
}

/// Accepts Word MIME types, falling back to a `.docx`/`.doc` extension check.
pub fn validate_document(name: &str, mime: Option<&str>) -> Result<(), ImportError> {
    if matches!(mime, Some(DOCX_MIME) | Some(DOC_MIME)) {
        return Ok(());
    }

    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("docx") | Some("doc") => Ok(()),
        _ => Err(ImportError::UnsupportedFile {
            name: name.to_string(),
        }),
    }
}

/// MIME type implied by a file name's extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match ext.as_str() {
        "docx" => Some(DOCX_MIME),
        "doc" => Some(DOC_MIME),
        _ => None,
    }
}

/// Extract styles from an already converted document.
pub fn extract_from(converter: &dyn DocumentConverter) -> Result<ExtractedStyle, ImportError> {
    let converted = converter.convert()?;
    let mut extracted = extract::extract(&converted.html)?;
    extracted.raw_text = Some(converted.text);
    Ok(extracted)
}

/// Validate and convert the file at `path`, then extract its styles.
pub fn extract_document(path: &Path) -> Result<ExtractedStyle, ImportError> {
    let name = path.display().to_string();
    validate_document(&name, mime_for_path(path))?;

    let docx = DocxData::open(path)?;
    extract_from(&docx).inspect_err(|e| warn!(file = %name, error = %e, "template import failed"))
}

/// Run the whole import against `profile`. Any failure happens before the
/// merge, so the caller's profile is left as it was.
pub fn import_template(path: &Path, profile: &BrandProfile) -> Result<TemplateImport, ImportError> {
    let extracted = extract_document(path)?;
    Ok(merge(profile, extracted))
}

fn merge(profile: &BrandProfile, extracted: ExtractedStyle) -> TemplateImport {
    let updated = apply::apply(profile, &extracted);
    let summary = summary::summarize(&extracted);
    info!(profile = %profile.id, summary = %summary.join(", "), "applied template styles");
    TemplateImport {
        profile: updated,
        extracted,
        summary,
    }
}
