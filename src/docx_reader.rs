use docx_rust::DocxFile;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::docx_html;
use crate::error::ImportError;
use crate::reader::DocumentConverter;

pub struct DocxData {
    /// DocxFile owns the raw data; Docx borrows from it.
    /// We store the file so it lives long enough, then parse on demand.
    file: DocxFile,
}

impl DocxData {
    pub fn open(path: &Path) -> Result<Self, ImportError> {
        // Surface unreadable files as read errors before the zip layer sees them.
        File::open(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file = DocxFile::from_file(path).map_err(|e| {
            ImportError::Conversion(format!("failed to open {}: {}", path.display(), e))
        })?;
        Ok(Self { file })
    }

    fn parse(&self) -> Result<docx_rust::Docx<'_>, ImportError> {
        self.file
            .parse()
            .map_err(|e| ImportError::Conversion(format!("failed to parse DOCX content: {}", e)))
    }
}

impl DocumentConverter for DocxData {
    fn to_html(&self) -> Result<String, ImportError> {
        let docx = self.parse()?;
        let html = docx_html::docx_to_html(&docx);
        debug!(bytes = html.len(), "converted DOCX body to HTML");
        Ok(html)
    }
}
