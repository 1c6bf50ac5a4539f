//! Template tags for generated notes
//!
//! A template is free-form text containing tag markers. Each marker is
//! replaced with a value read from a record:
//!
//! ```text
//! # {{ title }}
//!
//! Released {{ year }} by {{ ENUM:artists }}
//!
//! ## Genres
//! {{ LIST:genres }}
//! ```
//!
//! A plain tag names a dotted attribute path. An operator tag prefixes the
//! path with `LIST:` (markdown bullet list) or `ENUM:` (comma separated) and
//! only applies to list values. Broken tags are rendered as an inline
//! `{{ INVALID TEMPLATE TAG ... }}` marker instead of failing the render.

pub mod lint;
mod resolver;
mod tag;

pub use lint::{check, TagDiagnostic};
pub use resolver::{replace_tags, resolve_tag};
pub use tag::{scan, Operator, TagBody, TagMarker};
