//! Property mappings: rename or drop metadata properties on export

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PropertyMappingError;
use crate::format::contains_only_letters_and_underscores;

use super::value::Attributes;
use super::{MediaType, TAGS_PROPERTY};

/// What happens to a property when metadata is exported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyMappingOption {
    /// Export under the original name
    #[default]
    Default,
    /// Export under `new_property`
    Remap,
    /// Do not export
    Remove,
}

/// Export rule for a single property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMapping {
    pub property: String,
    #[serde(default)]
    pub new_property: String,
    #[serde(default)]
    pub mapping: PropertyMappingOption,
    /// Locked properties are always exported unchanged
    #[serde(default)]
    pub locked: bool,
}

impl PropertyMapping {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            new_property: String::new(),
            mapping: PropertyMappingOption::Default,
            locked: false,
        }
    }

    pub fn remap(property: impl Into<String>, new_property: impl Into<String>) -> Self {
        Self {
            new_property: new_property.into(),
            mapping: PropertyMappingOption::Remap,
            ..Self::new(property)
        }
    }

    pub fn remove(property: impl Into<String>) -> Self {
        Self {
            mapping: PropertyMappingOption::Remove,
            ..Self::new(property)
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Name the property is exported under, or `None` when it is dropped
    pub fn output_name(&self) -> Option<&str> {
        match self.mapping {
            PropertyMappingOption::Default => Some(self.property.as_str()),
            PropertyMappingOption::Remap => Some(self.new_property.as_str()),
            PropertyMappingOption::Remove => None,
        }
    }

    pub fn validate(&self) -> Result<(), PropertyMappingError> {
        if self.locked && self.mapping != PropertyMappingOption::Default {
            return Err(PropertyMappingError::validation(
                &self.property,
                "property is locked and can not be remapped or removed",
            ));
        }

        if self.mapping == PropertyMappingOption::Remap {
            if self.new_property.is_empty() {
                return Err(PropertyMappingError::validation(
                    &self.property,
                    "new property name must not be empty",
                ));
            }
            if !contains_only_letters_and_underscores(&self.new_property) {
                return Err(PropertyMappingError::validation(
                    &self.property,
                    format!(
                        "new property name '{}' may only contain letters and underscores",
                        self.new_property
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Export rules for every property of one media type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMappingModel {
    pub media_type: MediaType,
    #[serde(default)]
    pub properties: Vec<PropertyMapping>,
}

impl PropertyMappingModel {
    /// A model that exports every property unchanged
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            properties: Vec::new(),
        }
    }

    pub fn with_mapping(mut self, mapping: PropertyMapping) -> Self {
        self.properties.push(mapping);
        self
    }

    pub fn get(&self, property: &str) -> Option<&PropertyMapping> {
        self.properties.iter().find(|m| m.property == property)
    }

    /// Check every mapping, then make sure no two properties share an output name
    pub fn validate(&self) -> Result<(), PropertyMappingError> {
        for mapping in &self.properties {
            mapping.validate()?;
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for mapping in &self.properties {
            let Some(name) = mapping.output_name() else {
                continue;
            };
            if let Some(first) = seen.insert(name, &mapping.property) {
                return Err(PropertyMappingError::NameConflict {
                    name: name.to_string(),
                    first: first.to_string(),
                    second: mapping.property.clone(),
                });
            }
        }

        Ok(())
    }

    /// Check the mappings against the attributes of one record
    ///
    /// Runs [`validate`](Self::validate), then makes sure the exported names
    /// are unique across every attribute of the record, mapped or not, and
    /// that nothing is exported under the reserved `tags` key.
    pub fn validate_for(
        &self,
        media_type: MediaType,
        attributes: &Attributes,
    ) -> Result<(), PropertyMappingError> {
        if self.media_type != media_type {
            return Err(PropertyMappingError::validation(
                self.media_type.as_str(),
                format!("mappings can not be applied to a {} record", media_type),
            ));
        }
        self.validate()?;

        let mut seen: HashMap<&str, &str> = HashMap::new();
        seen.insert(TAGS_PROPERTY, TAGS_PROPERTY);
        for (key, _) in attributes {
            let name = match self.get(key) {
                Some(mapping) => mapping.output_name(),
                None => Some(key.as_str()),
            };
            let Some(name) = name else {
                continue;
            };
            if let Some(first) = seen.insert(name, key) {
                return Err(PropertyMappingError::NameConflict {
                    name: name.to_string(),
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
        }

        Ok(())
    }

    /// Rename and filter attributes; properties without a mapping pass through
    pub fn apply(&self, attributes: Attributes) -> Attributes {
        attributes
            .into_iter()
            .filter_map(|(key, value)| match self.get(&key) {
                None => Some((key, value)),
                Some(mapping) => mapping
                    .output_name()
                    .map(|name| (name.to_string(), value)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn attrs() -> Attributes {
        vec![
            ("title".to_string(), Value::from("Blue")),
            ("englishTitle".to_string(), Value::from("Blue")),
            ("year".to_string(), Value::from("1971")),
        ]
    }

    #[test]
    fn test_apply_remap_and_remove() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remap("year", "released"))
            .with_mapping(PropertyMapping::remove("englishTitle"));

        let out = model.apply(attrs());
        let keys: Vec<&str> = out.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "released"]);
    }

    #[test]
    fn test_invalid_new_name() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remap("year", "release-year"));
        assert!(matches!(
            model.validate(),
            Err(PropertyMappingError::Validation { .. })
        ));
    }

    #[test]
    fn test_empty_new_name() {
        let mapping = PropertyMapping::remap("year", "");
        assert!(matches!(
            mapping.validate(),
            Err(PropertyMappingError::Validation { .. })
        ));
    }

    #[test]
    fn test_locked_property_cannot_be_removed() {
        let mapping = PropertyMapping::remove("type").locked();
        assert!(mapping.validate().is_err());
        assert!(PropertyMapping::new("type").locked().validate().is_ok());
    }

    #[test]
    fn test_name_conflict() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::new("title"))
            .with_mapping(PropertyMapping::remap("englishTitle", "title"));

        let err = model.validate().expect_err("Should conflict");
        assert_eq!(
            err,
            PropertyMappingError::NameConflict {
                name: "title".to_string(),
                first: "title".to_string(),
                second: "englishTitle".to_string(),
            }
        );
    }

    #[test]
    fn test_remap_onto_unmapped_attribute_conflicts() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remap("englishTitle", "title"));
        assert!(model.validate().is_ok());

        let err = model
            .validate_for(MediaType::MusicRelease, &attrs())
            .expect_err("Should conflict");
        assert_eq!(
            err,
            PropertyMappingError::NameConflict {
                name: "title".to_string(),
                first: "title".to_string(),
                second: "englishTitle".to_string(),
            }
        );
    }

    #[test]
    fn test_remap_onto_tags_conflicts() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remap("title", "tags"));

        let err = model
            .validate_for(MediaType::MusicRelease, &attrs())
            .expect_err("Should conflict");
        assert_eq!(
            err,
            PropertyMappingError::NameConflict {
                name: "tags".to_string(),
                first: "tags".to_string(),
                second: "title".to_string(),
            }
        );
    }

    #[test]
    fn test_swapping_names_is_allowed() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remap("title", "englishTitle"))
            .with_mapping(PropertyMapping::remap("englishTitle", "title"));
        assert!(model
            .validate_for(MediaType::MusicRelease, &attrs())
            .is_ok());
    }

    #[test]
    fn test_removing_the_clashing_attribute_resolves_conflict() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remove("title"))
            .with_mapping(PropertyMapping::remap("englishTitle", "title"));
        assert!(model
            .validate_for(MediaType::MusicRelease, &attrs())
            .is_ok());
    }

    #[test]
    fn test_removed_properties_never_conflict() {
        let model = PropertyMappingModel::new(MediaType::MusicRelease)
            .with_mapping(PropertyMapping::remove("title"))
            .with_mapping(PropertyMapping::remove("englishTitle"));
        assert!(model.validate().is_ok());
    }
}
