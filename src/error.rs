//! Error types shared across the crate

use thiserror::Error;

use crate::template::Operator;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Reasons a template tag cannot be resolved.
///
/// These never abort a render: the resolver substitutes [`TagError::marker`]
/// in place of the tag so the problem stays visible in the generated note.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The dotted path does not lead to a value
    #[error("object undefined")]
    ObjectUndefined,

    /// A list operator was applied to something that is not a list
    #[error("operator {0} is only applicable on an array")]
    NotAnArray(Operator),

    #[error("unknown operator {0}")]
    UnknownOperator(String),

    /// The tag body has more than one `:` separator
    #[error("malformed tag")]
    Malformed,
}

impl TagError {
    /// The inline text that replaces a tag which failed with this error
    pub fn marker(&self) -> String {
        match self {
            TagError::Malformed => "{{ INVALID TEMPLATE TAG }}".to_string(),
            other => format!("{{{{ INVALID TEMPLATE TAG - {} }}}}", other),
        }
    }
}

/// Contract violations in the numeric helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Legacy signals for abandoned interactive flows.
///
/// Nothing in this crate recovers from these; callers treat them as plain
/// named failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("cancelled by user: {0}")]
    UserCancel(String),

    #[error("skipped by user: {0}")]
    UserSkip(String),
}

/// Errors raised while validating property mappings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyMappingError {
    /// A single mapping is not acceptable on its own
    #[error("invalid property mapping for '{property}': {reason}")]
    Validation { property: String, reason: String },

    /// Two properties would be exported under the same name
    #[error("property name conflict: '{first}' and '{second}' both map to '{name}'")]
    NameConflict {
        name: String,
        first: String,
        second: String,
    },
}

impl PropertyMappingError {
    pub fn validation(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Errors produced when exporting a record's metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to serialize metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Mapping(#[from] PropertyMappingError),
}
