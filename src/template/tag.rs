//! Tag markers and their bodies

use std::fmt;
use std::sync::OnceLock;

use regex::{Match, Regex};

use crate::error::{Span, TagError};

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{{ ... }}` on a single line, closing at the first `}}`
///
/// Any line terminator ends the search, including a lone `\r` and the
/// Unicode line and paragraph separators.
pub(crate) fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"\{\{[^\r\n\x{2028}\x{2029}]*?\}\}").expect("invalid regex pattern")
    })
}

/// Rendering applied to a list value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Markdown bullet list, one element per line
    List,
    /// Comma separated inline list
    Enum,
}

impl Operator {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LIST" => Some(Operator::List),
            "ENUM" => Some(Operator::Enum),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::List => "LIST",
            Operator::Enum => "ENUM",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed body of a tag marker
///
/// Neither the operator nor the path segments are trimmed: `{{ LIST : a }}`
/// names the operator `LIST ` and the attribute ` a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagBody<'a> {
    /// `{{ a.b.c }}`
    Plain { path: Vec<&'a str> },
    /// `{{ OPERATOR:a.b.c }}`, operator kept verbatim so unknown names can be reported
    Operator { operator: &'a str, path: Vec<&'a str> },
}

impl<'a> TagBody<'a> {
    /// Parse a trimmed tag body
    pub fn parse(body: &'a str) -> Result<Self, TagError> {
        let parts: Vec<&str> = body.split(':').collect();
        match parts[..] {
            [path] => Ok(TagBody::Plain {
                path: path.split('.').collect(),
            }),
            [operator, path] => Ok(TagBody::Operator {
                operator,
                path: path.split('.').collect(),
            }),
            _ => Err(TagError::Malformed),
        }
    }

    pub fn path(&self) -> &[&'a str] {
        match self {
            TagBody::Plain { path } | TagBody::Operator { path, .. } => path,
        }
    }
}

/// One `{{ ... }}` occurrence in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMarker<'a> {
    /// Full marker text including the braces
    pub text: &'a str,
    /// Byte range of the marker in the template
    pub span: Span,
}

impl<'a> TagMarker<'a> {
    pub(crate) fn from_match(m: Match<'a>) -> Self {
        Self {
            text: m.as_str(),
            span: m.range(),
        }
    }

    /// Text between the braces, trimmed
    pub fn body(&self) -> &'a str {
        let text: &'a str = self.text;
        text[2..text.len() - 2].trim()
    }

    pub fn parse(&self) -> Result<TagBody<'a>, TagError> {
        TagBody::parse(self.body())
    }
}

/// All tag markers in `template`, in order of appearance
pub fn scan(template: &str) -> Vec<TagMarker<'_>> {
    tag_regex()
        .find_iter(template)
        .map(TagMarker::from_match)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(
            TagBody::parse("a.b.c"),
            Ok(TagBody::Plain {
                path: vec!["a", "b", "c"]
            })
        );
    }

    #[test]
    fn test_parse_operator() {
        assert_eq!(
            TagBody::parse("LIST:genres"),
            Ok(TagBody::Operator {
                operator: "LIST",
                path: vec!["genres"]
            })
        );
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        assert_eq!(
            TagBody::parse("LIST : genres"),
            Ok(TagBody::Operator {
                operator: "LIST ",
                path: vec![" genres"]
            })
        );
    }

    #[test]
    fn test_parse_three_parts_is_malformed() {
        assert_eq!(TagBody::parse("LIST:ENUM:genres"), Err(TagError::Malformed));
        assert_eq!(TagBody::parse("::"), Err(TagError::Malformed));
    }

    #[test]
    fn test_scan_is_non_greedy() {
        let markers = scan("{{ title }} and {{ year }}");
        let bodies: Vec<&str> = markers.iter().map(|m| m.body()).collect();
        assert_eq!(bodies, vec!["title", "year"]);
        assert_eq!(markers[1].span, 16..26);
    }

    #[test]
    fn test_scan_does_not_cross_lines() {
        assert!(scan("{{ title\n}}").is_empty());
    }

    #[test]
    fn test_scan_stops_at_carriage_return() {
        assert!(scan("{{ title\r}}").is_empty());
        assert!(scan("{{ title\u{2028}}}").is_empty());
        let markers = scan("{{ title }}\r\n{{ year }}");
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_scan_empty_marker() {
        let markers = scan("{{}}");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].body(), "");
    }
}
