//! Static checks for note templates.
//!
//! Finds tag markers that would render as an `INVALID TEMPLATE TAG` marker.
//! Without a record only structural problems are visible: malformed bodies
//! and unknown operators. With a record every resolution failure is reported,
//! exactly as [`replace_tags`](super::replace_tags) would hit it.

use std::fmt;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::{Span, TagError};
use crate::model::AttributeBag;

use super::resolver::resolve_tag;
use super::tag::{scan, TagBody};
use super::Operator;

/// A tag marker that will not resolve cleanly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDiagnostic {
    /// Byte range of the whole marker in the template
    pub span: Span,
    /// Trimmed tag body
    pub tag: String,
    pub error: TagError,
}

impl fmt::Display for TagDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag '{}' at {:?}: {}", self.tag, self.span, self.error)
    }
}

impl TagDiagnostic {
    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str, color: bool) -> String {
        let mut buf = Vec::new();
        let result = Report::build(ReportKind::Error, filename, self.span.start)
            .with_config(Config::default().with_color(color))
            .with_message(format!("invalid template tag: {}", self.error))
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(format!("renders as {}", self.error.marker()))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to write diagnostic report");
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Check every tag marker in `template`
pub fn check(template: &str, record: Option<&dyn AttributeBag>) -> Vec<TagDiagnostic> {
    let mut diagnostics = Vec::new();

    for marker in scan(template) {
        let outcome = match record {
            Some(bag) => resolve_tag(&marker, bag).map(|_| ()),
            None => check_structure(marker.parse()),
        };

        if let Err(error) = outcome {
            diagnostics.push(TagDiagnostic {
                span: marker.span.clone(),
                tag: marker.body().to_string(),
                error,
            });
        }
    }

    diagnostics
}

fn check_structure(body: Result<TagBody<'_>, TagError>) -> Result<(), TagError> {
    match body? {
        TagBody::Plain { .. } => Ok(()),
        TagBody::Operator { operator, .. } => match Operator::from_name(operator) {
            Some(_) => Ok(()),
            None => Err(TagError::UnknownOperator(operator.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MusicRelease;

    #[test]
    fn test_structural_check_without_record() {
        let template = "{{ title }}\n{{ SORT:genres }}\n{{ a:b:c }}\n{{ LIST:genres }}";
        let diagnostics = check(template, None);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].error,
            TagError::UnknownOperator("SORT".to_string())
        );
        assert_eq!(diagnostics[1].error, TagError::Malformed);
        assert_eq!(&template[diagnostics[1].span.clone()], "{{ a:b:c }}");
    }

    #[test]
    fn test_check_against_record() {
        let release = MusicRelease::new("Blue").with_genres(["Folk"]);
        let template = "{{ title }} {{ ENUM:title }} {{ url }}";
        let diagnostics = check(template, Some(&release as &dyn AttributeBag));
        let errors: Vec<&TagError> = diagnostics.iter().map(|d| &d.error).collect();
        assert_eq!(
            errors,
            vec![
                &TagError::NotAnArray(Operator::Enum),
                &TagError::ObjectUndefined
            ]
        );
    }

    #[test]
    fn test_clean_template() {
        assert!(check("no tags here", None).is_empty());
    }

    #[test]
    fn test_format_report() {
        let template = "# {{ LIST:a:b }}";
        let diagnostics = check(template, None);
        let report = diagnostics[0].format(template, "music.md", false);
        assert!(report.contains("invalid template tag: malformed tag"));
        assert!(report.contains("music.md"));
    }
}
