//! File name sanitizing and case helpers

use std::sync::OnceLock;

use regex::Regex;

static ILLEGAL_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();
static COLON_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
static LOWER_UPPER_REGEX: OnceLock<Regex> = OnceLock::new();
static UPPER_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid regex pattern"))
}

/// Strip characters that are not allowed in note file names
///
/// Removes `\ , # % & { } / * < > $ " @ . ?` and turns every run of colons
/// into ` -`, so `Title: Subtitle` becomes `Title - Subtitle`.
pub fn replace_illegal_file_name_characters(name: &str) -> String {
    let stripped = regex(&ILLEGAL_CHARS_REGEX, r#"[\\,#%&\{\}/*<>$"@.?]+"#).replace_all(name, "");
    regex(&COLON_RUN_REGEX, ":+")
        .replace_all(&stripped, " -")
        .into_owned()
}

/// Turn a camelCase identifier into words: `personalRating` -> `Personal Rating`
pub fn un_camel_case(s: &str) -> String {
    let spaced = regex(&LOWER_UPPER_REGEX, "([a-z])([A-Z])").replace_all(s, "${1} ${2}");
    // only the first acronym boundary is split
    let spaced =
        regex(&UPPER_RUN_REGEX, r"\b([A-Z]+)([A-Z])([a-z])").replace(&spaced, "${1} ${2}${3}");
    capitalize_first_letter(&spaced)
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True for non-empty strings made only of ASCII letters and `_`
pub fn contains_only_letters_and_underscores(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}
