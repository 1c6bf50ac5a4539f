//! Media records and their metadata export
//!
//! Every media kind implements [`MediaTypeModel`]: it exposes its fields as
//! ordered [`Attributes`] for templates and front matter, and derives a
//! display file name and a tag list from them.

pub mod mapping;
mod music_release;
mod value;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MetadataError;

pub use mapping::{PropertyMapping, PropertyMappingModel, PropertyMappingOption};
pub use music_release::MusicRelease;
pub use value::{lookup, AttributeBag, Attributes, Value};

use value::OrderedAttributes;

/// Root tag under which every generated note is filed
pub const MEDIA_DB_TAG: &str = "mediaDB";

/// Front matter key holding the record's tag
pub(crate) const TAGS_PROPERTY: &str = "tags";

/// Kind of media a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    MusicRelease,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::MusicRelease => "musicRelease",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every media record
pub trait MediaTypeModel: AttributeBag {
    fn media_type(&self) -> MediaType;

    /// All exported fields in output order, unset optional fields omitted
    fn attributes(&self) -> Attributes;

    /// Unsanitized display name of the note for this record
    fn file_name(&self) -> String;

    /// Tag path segments, outermost first
    fn tags(&self) -> Vec<String>;

    /// The tag list as a single `#a/b/c` tag
    fn tag_string(&self) -> String {
        format!("#{}", self.tags().join("/"))
    }

    /// YAML front matter for the record with every property exported as is
    fn to_metadata(&self) -> Result<String, MetadataError> {
        self.to_metadata_with(&PropertyMappingModel::new(self.media_type()))
    }

    /// YAML front matter after applying `mappings` to the attributes
    fn to_metadata_with(&self, mappings: &PropertyMappingModel) -> Result<String, MetadataError> {
        let attributes = self.attributes();
        mappings.validate_for(self.media_type(), &attributes)?;
        let mut attributes = mappings.apply(attributes);
        attributes.push((TAGS_PROPERTY.to_string(), Value::String(self.tag_string())));
        Ok(serde_yaml::to_string(&OrderedAttributes(&attributes))?)
    }
}
