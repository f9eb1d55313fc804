//! `serde::Serialize` for the document model.
//!
//! Collections serialize as maps in document order, so a document becomes
//! `{ "section": { "name": "value", .. }, .. }`.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::item::Item;
use crate::items::ItemCollection;
use crate::section::Section;
use crate::sections::SectionCollection;

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Item", 2)?;
        st.serialize_field("name", self.name())?;
        st.serialize_field("value", self.value())?;
        st.end()
    }
}

impl Serialize for ItemCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for item in self {
            map.serialize_entry(item.name(), item.value())?;
        }
        map.end()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Section", 2)?;
        st.serialize_field("name", self.name())?;
        st.serialize_field("items", self.items())?;
        st.end()
    }
}

impl Serialize for SectionCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for section in self {
            map.serialize_entry(section.name(), section.items())?;
        }
        map.end()
    }
}
