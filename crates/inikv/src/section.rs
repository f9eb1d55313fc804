use core::fmt;

use crate::encode::writer::LineWriter;
use crate::error::Result;
use crate::item::validate_section_name;
use crate::items::ItemCollection;
use crate::options::WriteOptions;

/// A named group of items, written as a `[name]` header followed by its
/// item lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    items: ItemCollection,
}

impl Section {
    pub fn new(name: &str) -> Result<Self> {
        Self::with_items(name, ItemCollection::new())
    }

    /// Takes ownership of `items`.
    pub fn with_items(name: &str, items: ItemCollection) -> Result<Self> {
        let name = validate_section_name(name)?;
        Ok(Self {
            name: name.to_string(),
            items,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemCollection {
        &mut self.items
    }

    pub fn into_items(self) -> ItemCollection {
        self.items
    }

    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let mut w = LineWriter::new(options.line_ending);
        self.write_to(&mut w);
        w.into_string()
    }

    pub(crate) fn write_to(&self, w: &mut LineWriter) {
        w.header(&self.name);
        w.separator();
        self.items.write_to(w);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&WriteOptions::default()))
    }
}
