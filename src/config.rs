//! Settings for note generation
//!
//! Settings are read from a TOML file. Every key is optional: missing keys
//! take their default value and unknown keys are ignored, so settings files
//! written by older versions keep loading.
//!
//! ```toml
//! [note]
//! folder = "Media DB/music"
//! open_note = true
//!
//! [music_release]
//! template_file = "templates/music.md"
//!
//! [[music_release.properties]]
//! property = "englishTitle"
//! mapping = "remove"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{MediaType, PropertyMapping, PropertyMappingModel};
use crate::NoteConfig;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to read template file {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Options handed to the host when it creates the note file
///
/// This crate only produces the note text; the host decides what to do
/// with these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNoteOptions {
    /// Whether to append the resolved template to the note
    pub attach_template: bool,
    /// A file to attach to the note
    pub attach_file: Option<PathBuf>,
    /// Whether to open the note after creation
    pub open_note: bool,
    /// Folder to create the note in
    pub folder: Option<PathBuf>,
}

impl CreateNoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attach_template(mut self, attach: bool) -> Self {
        self.attach_template = attach;
        self
    }

    pub fn with_attach_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.attach_file = Some(file.into());
        self
    }

    pub fn with_open_note(mut self, open: bool) -> Self {
        self.open_note = open;
        self
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// Loaded settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Folder new notes are created in
    pub folder: Option<PathBuf>,
    pub open_note: bool,
    /// Inline template for music release notes
    pub template: Option<String>,
    /// Template file, used when no inline template is set
    pub template_file: Option<PathBuf>,
    pub property_mappings: PropertyMappingModel,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlSettings {
    note: TomlNote,
    music_release: TomlMediaType,
}

#[derive(Deserialize)]
#[serde(default)]
struct TomlNote {
    folder: Option<PathBuf>,
    open_note: bool,
}

impl Default for TomlNote {
    fn default() -> Self {
        Self {
            folder: Some(PathBuf::from("Media DB")),
            open_note: false,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlMediaType {
    template: Option<String>,
    template_file: Option<PathBuf>,
    properties: Vec<PropertyMapping>,
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// A relative `template_file` is resolved against the settings file's directory.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Self::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        settings.template_file = settings.template_file.take().map(|file| {
            if file.is_relative() {
                base.join(file)
            } else {
                file
            }
        });
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        Ok(Settings {
            folder: parsed.note.folder,
            open_note: parsed.note.open_note,
            template: parsed.music_release.template,
            template_file: parsed.music_release.template_file,
            property_mappings: PropertyMappingModel {
                media_type: MediaType::MusicRelease,
                properties: parsed.music_release.properties,
            },
        })
    }

    /// The template text: the inline template, else the template file's content
    pub fn load_template(&self) -> Result<Option<String>, SettingsError> {
        if let Some(template) = &self.template {
            return Ok(Some(template.clone()));
        }
        match &self.template_file {
            Some(path) => std::fs::read_to_string(path)
                .map(Some)
                .map_err(|source| SettingsError::TemplateRead {
                    path: path.clone(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Build the note configuration these settings describe
    pub fn note_config(&self) -> Result<NoteConfig, SettingsError> {
        let mut options = CreateNoteOptions::new().with_open_note(self.open_note);
        if let Some(folder) = &self.folder {
            options = options.with_folder(folder);
        }

        let mut config = NoteConfig::new()
            .with_options(options)
            .with_property_mappings(self.property_mappings.clone());
        if let Some(template) = self.load_template()? {
            config = config.with_template(template);
        }
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let note = TomlNote::default();
        Settings {
            folder: note.folder,
            open_note: note.open_note,
            template: None,
            template_file: None,
            property_mappings: PropertyMappingModel::new(MediaType::MusicRelease),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyMappingOption;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.folder, Some(PathBuf::from("Media DB")));
        assert!(!settings.open_note);
        assert!(settings.template.is_none());
        assert!(settings.property_mappings.properties.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_str("").expect("Should parse");
        assert_eq!(settings.folder, Some(PathBuf::from("Media DB")));
        assert!(!settings.open_note);
    }

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r##"
[note]
folder = "Music"
open_note = true

[music_release]
template = "# {{ title }}"

[[music_release.properties]]
property = "englishTitle"
mapping = "remove"

[[music_release.properties]]
property = "year"
new_property = "released"
mapping = "remap"
"##;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert_eq!(settings.folder, Some(PathBuf::from("Music")));
        assert!(settings.open_note);
        assert_eq!(settings.template.as_deref(), Some("# {{ title }}"));

        let properties = &settings.property_mappings.properties;
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].mapping, PropertyMappingOption::Remove);
        assert_eq!(properties[1].new_property, "released");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let toml_str = r#"
[note]
open_note = true
legacy_option = "whatever"

[movie]
template = "unused"
"#;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert!(settings.open_note);
        assert_eq!(settings.folder, Some(PathBuf::from("Media DB")));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Settings::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_inline_template_wins() {
        let settings = Settings {
            template: Some("inline".to_string()),
            template_file: Some(PathBuf::from("does/not/exist.md")),
            ..Settings::default()
        };
        assert_eq!(
            settings.load_template().expect("Should not read file"),
            Some("inline".to_string())
        );
    }

    #[test]
    fn test_missing_template_file() {
        let settings = Settings {
            template_file: Some(PathBuf::from("does/not/exist.md")),
            ..Settings::default()
        };
        assert!(matches!(
            settings.load_template(),
            Err(SettingsError::TemplateRead { .. })
        ));
    }

    #[test]
    fn test_options_builder() {
        let options = CreateNoteOptions::new()
            .with_attach_template(true)
            .with_attach_file("cover.jpg")
            .with_open_note(true)
            .with_folder("Music");
        assert!(options.attach_template);
        assert_eq!(options.attach_file, Some(PathBuf::from("cover.jpg")));
        assert!(options.open_note);
        assert_eq!(options.folder, Some(PathBuf::from("Music")));
    }
}
