//! Tag resolution - replaces tag markers with values from a record

use regex::Captures;
use tracing::{debug, warn};

use crate::error::TagError;
use crate::model::{lookup, AttributeBag, Value};

use super::tag::{tag_regex, TagBody, TagMarker};
use super::Operator;

/// Replace every tag marker in `template` with its value from `bag`
///
/// Tags that cannot be resolved are replaced with an inline
/// `{{ INVALID TEMPLATE TAG ... }}` marker; this function never fails.
/// Replacement text is not scanned again.
///
/// # Example
///
/// ```rust
/// use media_db::{replace_tags, MusicRelease};
///
/// let release = MusicRelease::new("Blue").with_genres(["Folk", "Pop"]);
/// let text = replace_tags("# {{ title }}\n{{ ENUM:genres }}", &release);
/// assert_eq!(text, "# Blue\nFolk, Pop");
/// ```
pub fn replace_tags<B: AttributeBag + ?Sized>(template: &str, bag: &B) -> String {
    tag_regex()
        .replace_all(template, |caps: &Captures| match caps.get(0) {
            Some(m) => replace_tag(&TagMarker::from_match(m), bag),
            None => String::new(),
        })
        .into_owned()
}

fn replace_tag<B: AttributeBag + ?Sized>(marker: &TagMarker<'_>, bag: &B) -> String {
    match resolve_tag(marker, bag) {
        Ok(text) => {
            debug!(tag = marker.body(), "resolved template tag");
            text
        }
        Err(err) => {
            warn!(tag = marker.body(), error = %err, "invalid template tag");
            err.marker()
        }
    }
}

/// Resolve a single marker to its replacement text
pub fn resolve_tag<B: AttributeBag + ?Sized>(
    marker: &TagMarker<'_>,
    bag: &B,
) -> Result<String, TagError> {
    let body = marker.parse()?;
    let value = lookup(bag, body.path()).ok_or(TagError::ObjectUndefined)?;
    match body {
        TagBody::Plain { .. } => Ok(value.to_string()),
        TagBody::Operator { operator, .. } => {
            let operator = Operator::from_name(operator)
                .ok_or_else(|| TagError::UnknownOperator(operator.to_string()))?;
            apply_operator(operator, &value)
        }
    }
}

fn apply_operator(operator: Operator, value: &Value) -> Result<String, TagError> {
    let items = value.as_list().ok_or(TagError::NotAnArray(operator))?;
    let rendered = items.iter().map(|item| match operator {
        Operator::List => format!("- {}", item),
        Operator::Enum => item.to_string(),
    });
    Ok(match operator {
        Operator::List => rendered.collect::<Vec<_>>().join("\n"),
        Operator::Enum => rendered.collect::<Vec<_>>().join(", "),
    })
}
