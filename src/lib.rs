//! nestml-lang: editor language support for NESTML.
//!
//! NESTML model files use YAML's block structure. This crate parses them
//! with tree-sitter and answers the structural questions an editor asks
//! while the user types: how far to indent a new line, what to highlight,
//! what can fold, which keywords complete. Documents that open with a
//! `---`-delimited NESTML front section followed by a body in another
//! language are split and parsed region by region.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod grammars;
pub mod indent;
pub mod kind;
pub mod language;
pub mod mixed;
pub mod tree;

pub use language::{FrontmatterSupport, LanguageSupport};
