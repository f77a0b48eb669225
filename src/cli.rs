use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::edit::SetCommand;
use crate::profile::{LogoPosition, LogoSize};
use crate::skill::DocumentType;

/// Manage brand profiles, import styles from Word templates and generate
/// document-design skills
#[derive(Parser, Debug)]
#[command(name = "brandkit", version, about)]
pub struct Cli {
    /// Profile store file. Overrides BRANDKIT_STORE_PATH.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a profile and make it active
    New {
        /// Display name (defaults to the preset name or "New Brand")
        #[arg(short, long)]
        name: Option<String>,

        /// Start from a preset: corporate, creative, minimal, academic
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// List saved profiles
    List,

    /// Print a profile as JSON (defaults to the active profile)
    Show { id: Option<String> },

    /// Make a profile the active one
    Use { id: String },

    /// Delete a profile
    Delete { id: String },

    /// Copy a profile under a new id
    Duplicate { id: String },

    /// Write a profile's JSON to a file or stdout
    Export {
        id: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Edit a profile's colors, typography, header/footer, watermark or layout
    Set {
        /// Target profile (defaults to the active profile)
        #[arg(short, long)]
        profile: Option<String>,

        #[command(subcommand)]
        field: SetCommand,
    },

    /// Embed a PNG or JPEG logo, or change its placement
    Logo {
        /// Image file, at most 2 MB
        file: Option<PathBuf>,

        /// Target profile (defaults to the active profile)
        #[arg(short, long)]
        profile: Option<String>,

        #[arg(long, value_enum)]
        position: Option<LogoPosition>,

        #[arg(long, value_enum)]
        size: Option<LogoSize>,

        /// Drop the embedded logo
        #[arg(long, default_value_t = false, conflicts_with = "file")]
        remove: bool,
    },

    /// Add a profile from an exported JSON file
    Import { file: PathBuf },

    /// List built-in presets
    Presets,

    /// Show the styles a Word document would contribute, without saving
    Extract {
        /// Path to a .docx file
        document: PathBuf,

        /// Print the extracted values as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also print the converted HTML the styles were read from
        #[arg(long, default_value_t = false)]
        html: bool,
    },

    /// Import a Word document's styles into a profile and save it
    ApplyTemplate {
        /// Path to a .docx file
        document: PathBuf,

        /// Target profile (defaults to the active profile)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Generate skill markdown for a profile
    Skill {
        /// Source profile (defaults to the active profile)
        #[arg(short, long)]
        profile: Option<String>,

        #[arg(short, long, value_enum, default_value_t = DocumentType::Word, conflicts_with = "all")]
        doc_type: DocumentType,

        /// Generate one file per document type
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Output directory (defaults to BRANDKIT_SKILLS_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
