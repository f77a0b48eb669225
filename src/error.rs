use std::path::PathBuf;
use thiserror::Error;

/// The extractor's only hard failure: input that is not markup at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("input contains no markup elements")]
    NotMarkup,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{name} is not a Word document (.docx or .doc)")]
    UnsupportedFile { name: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to convert document: {0}")]
    Conversion(String),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

/// A profile value that breaks an editor invariant.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("{role} color {value:?} is not a hex color")]
    InvalidColor { role: &'static str, value: String },

    #[error("font sizes must be positive")]
    ZeroFontSize,

    #[error("watermark opacity {0} is outside 0..1")]
    OpacityOutOfRange(f64),

    #[error("margins must be non-negative")]
    NegativeMargin,

    #[error("profile name must not be empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile not found: {id}")]
    NotFound { id: String },

    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    #[error("cannot import profile: {0}")]
    MalformedImport(String),
}

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("{name} is not a PNG or JPEG image")]
    UnsupportedType { name: String },

    #[error("{name} is {size} bytes; logos must be 2 MB or smaller")]
    TooLarge { name: String, size: u64 },

    #[error("failed to read logo {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
