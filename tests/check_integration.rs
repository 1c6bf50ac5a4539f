//! Integration tests for template checking

use media_db::template::{check, Operator};
use media_db::{AttributeBag, MusicRelease, TagError};

const BROKEN: &str = include_str!("fixtures/broken.md");

fn hejira() -> MusicRelease {
    serde_yaml::from_str(include_str!("fixtures/release.yaml")).expect("Should parse record")
}

#[test]
fn test_structural_problems_without_record() {
    let diagnostics = check(BROKEN, None);
    let tags: Vec<&str> = diagnostics.iter().map(|d| d.tag.as_str()).collect();
    assert_eq!(tags, vec!["SORT:genres", "LIST:genres:extra"]);
    assert_eq!(
        diagnostics[0].error,
        TagError::UnknownOperator("SORT".to_string())
    );
    assert_eq!(diagnostics[1].error, TagError::Malformed);
}

#[test]
fn test_all_problems_with_record() {
    let release = hejira();
    let diagnostics = check(BROKEN, Some(&release as &dyn AttributeBag));
    let errors: Vec<&TagError> = diagnostics.iter().map(|d| &d.error).collect();
    assert_eq!(
        errors,
        vec![
            &TagError::UnknownOperator("SORT".to_string()),
            &TagError::Malformed,
            &TagError::NotAnArray(Operator::Enum),
            &TagError::ObjectUndefined,
        ]
    );

    for diagnostic in &diagnostics {
        let text = &BROKEN[diagnostic.span.clone()];
        assert!(text.starts_with("{{") && text.ends_with("}}"));
    }
}

#[test]
fn test_clean_template_has_no_diagnostics() {
    let release = hejira();
    let template = include_str!("fixtures/music.md");
    assert!(check(template, None).is_empty());
    assert!(check(template, Some(&release as &dyn AttributeBag)).is_empty());
}

#[test]
fn test_report_names_the_marker() {
    let diagnostics = check(BROKEN, None);
    let report = diagnostics[0].format(BROKEN, "broken.md", false);
    assert!(report.contains("broken.md"));
    assert!(report.contains("unknown operator SORT"));
    assert!(report.contains("{{ INVALID TEMPLATE TAG - unknown operator SORT }}"));
}
