//! Text helpers for generated notes
//!
//! Markdown tables, file name sanitizing, case conversion and date stamps.

mod datetime;
mod naming;
mod table;

pub use datetime::{date_time_to_string, date_to_string, time_to_string};
pub use naming::{
    capitalize_first_letter, contains_only_letters_and_underscores,
    replace_illegal_file_name_characters, un_camel_case,
};
pub use table::markdown_table;
