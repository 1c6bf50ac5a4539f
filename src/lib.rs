//! Media DB - media records and note generation for a note-taking media database
//!
//! This library turns a media record into the text of a note: YAML front
//! matter describing the record followed by a user template whose
//! `{{ tag }}` markers are filled in from the record.
//!
//! # Example
//!
//! ```rust
//! use media_db::{create_note, MusicRelease, NoteConfig};
//!
//! let release = MusicRelease::new("Blue")
//!     .with_sub_type("album")
//!     .with_year("1971")
//!     .with_artists(["Joni Mitchell"]);
//!
//! let config = NoteConfig::new().with_template("# {{ title }}");
//! let note = create_note(&release, &config).unwrap();
//!
//! assert_eq!(note.file_name, "Blue (Joni Mitchell - 1971 - album)");
//! assert!(note.content.ends_with("---\n# Blue"));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod model;
pub mod template;
pub mod util;

pub use config::{CreateNoteOptions, Settings, SettingsError};
pub use error::{FlowError, MetadataError, PropertyMappingError, TagError, UtilError};
pub use format::{markdown_table, replace_illegal_file_name_characters};
pub use icons::ICON_LIST;
pub use model::{
    AttributeBag, MediaType, MediaTypeModel, MusicRelease, PropertyMapping,
    PropertyMappingModel, Value, MEDIA_DB_TAG,
};
pub use template::replace_tags;
pub use util::wrap_around;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

pub const PLUGIN_NAME: &str = "obsidian-media-db-plugin";
pub const CONTACT_EMAIL: &str = "m.projects.code@gmail.com";
pub const MEDIA_DB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can occur while creating a note
#[derive(Debug, Error)]
pub enum NoteError {
    /// Front matter could not be produced
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

/// Configuration for note creation
#[derive(Debug, Clone)]
pub struct NoteConfig {
    /// Template appended below the front matter
    pub template: Option<String>,
    /// Property export rules
    pub property_mappings: PropertyMappingModel,
    /// Options passed through to the host
    pub options: CreateNoteOptions,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            template: None,
            property_mappings: PropertyMappingModel::new(MediaType::MusicRelease),
            options: CreateNoteOptions::default(),
        }
    }
}

impl NoteConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template and attach it to created notes
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self.options.attach_template = true;
        self
    }

    pub fn with_property_mappings(mut self, mappings: PropertyMappingModel) -> Self {
        self.property_mappings = mappings;
        self
    }

    /// Set the host options; keeps `attach_template` on if a template is set
    pub fn with_options(mut self, options: CreateNoteOptions) -> Self {
        let attach = self.options.attach_template;
        self.options = options;
        self.options.attach_template |= attach;
        self
    }
}

/// A generated note, ready for the host to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// File name without extension, safe for the file system
    pub file_name: String,
    /// Front matter and body
    pub content: String,
    pub folder: Option<PathBuf>,
    pub open_note: bool,
    /// File the host should attach to the note
    pub attach_file: Option<PathBuf>,
}

/// Create the note for a record
///
/// The content is the record's front matter between `---` fences, followed
/// by the resolved template when one is attached. Broken template tags do
/// not fail note creation; invalid property mappings do.
pub fn create_note<M: MediaTypeModel>(record: &M, config: &NoteConfig) -> Result<Note, NoteError> {
    let metadata = record.to_metadata_with(&config.property_mappings)?;
    let mut content = format!("---\n{}---\n", metadata);

    if config.options.attach_template {
        if let Some(template) = &config.template {
            content.push_str(&replace_tags(template, record));
        } else {
            debug!("attach_template set without a template");
        }
    }

    let file_name = replace_illegal_file_name_characters(&record.file_name());
    info!(media_type = %record.media_type(), file_name = %file_name, "created note");

    Ok(Note {
        file_name,
        content,
        folder: config.options.folder.clone(),
        open_note: config.options.open_note,
        attach_file: config.options.attach_file.clone(),
    })
}
