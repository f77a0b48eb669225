use crate::error::ImportError;

/// Markup and plain text produced from an uploaded document.
pub struct ConvertedDocument {
    pub html: String,
    pub text: String,
}

/// Converts a document format to inline-styled HTML.
pub trait DocumentConverter {
    fn to_html(&self) -> Result<String, ImportError>;

    /// HTML plus its plain-text rendering.
    fn convert(&self) -> Result<ConvertedDocument, ImportError> {
        let html = self.to_html()?;
        let text = crate::markdown::html_to_text(&html);
        Ok(ConvertedDocument { html, text })
    }
}
