#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod item;
pub mod items;
pub mod options;
pub mod section;
pub mod sections;

#[cfg(feature = "serde")]
pub mod ser;

pub use crate::decode::parser::{parse, parse_strict, parse_with};
pub use crate::error::{Error, Field, Result, Scope, SyntaxKind, Violation};
pub use crate::item::{Item, validate_item_name, validate_item_value, validate_section_name};
pub use crate::items::ItemCollection;
pub use crate::options::{LineEnding, ParseOptions, WriteOptions};
pub use crate::section::Section;
pub use crate::sections::SectionCollection;
