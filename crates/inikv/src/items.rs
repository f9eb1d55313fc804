use core::fmt;
use core::ops::Index;

use crate::encode::writer::LineWriter;
use crate::error::{Error, Result, Scope};
use crate::item::{Item, validate_item_name};
use crate::options::WriteOptions;

/// The ordered, duplicate-free items of one section.
///
/// Names are compared exactly (case-sensitive) after normalization. Lookups
/// are linear; sections are expected to hold tens of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Item names are immutable, so mutable iteration cannot break uniqueness.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Item> {
        self.items.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::name)
    }

    /// Position of the item called `name`. The name is normalized first.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.items.iter().position(|item| item.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_item(name).map(Item::value)
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.index_of(name).map(|i| &self.items[i])
    }

    pub fn get_item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.index_of(name).map(move |i| &mut self.items[i])
    }

    /// Appends a new item.
    pub fn add(&mut self, name: &str, value: &str) -> Result<&mut Item> {
        let index = self.items.len();
        self.insert(index, name, value)?;
        Ok(&mut self.items[index])
    }

    pub fn add_item(&mut self, item: Item) -> Result<()> {
        self.insert_item(self.items.len(), item)
    }

    /// Inserts a new item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, name: &str, value: &str) -> Result<()> {
        let item = Item::new(name, value)?;
        self.insert_item(index, item)
    }

    pub fn insert_item(&mut self, index: usize, item: Item) -> Result<()> {
        self.ensure_unique(item.name(), None)?;
        self.items.insert(index, item);
        Ok(())
    }

    /// Overwrites the slot at `index`, returning the previous item.
    ///
    /// The new name may equal the one being replaced but no other.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_at(&mut self, index: usize, item: Item) -> Result<Item> {
        assert!(index < self.items.len(), "index {index} out of bounds");
        self.ensure_unique(item.name(), Some(index))?;
        Ok(core::mem::replace(&mut self.items[index], item))
    }

    /// Returns the item called `name`, appending an empty one if absent.
    pub fn get_or_insert(&mut self, name: &str) -> Result<&mut Item> {
        let name = validate_item_name(name)?;
        match self.index_of(name) {
            Some(i) => Ok(&mut self.items[i]),
            None => self.add(name, ""),
        }
    }

    /// Updates the value of `name`, appending a new item if absent.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match self.index_of(name) {
            Some(i) => self.items[i].set_value(value),
            None => self.add(name, value).map(|_| ()),
        }
    }

    /// Returns whether an item was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let mut w = LineWriter::new(options.line_ending);
        self.write_to(&mut w);
        w.into_string()
    }

    pub(crate) fn write_to(&self, w: &mut LineWriter) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                w.separator();
            }
            item.write_to(w);
        }
    }

    fn ensure_unique(&self, name: &str, skip: Option<usize>) -> Result<()> {
        let clash = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| Some(i) != skip && item.name() == name);
        if clash {
            return Err(Error::duplicate(Scope::Item, name));
        }
        Ok(())
    }
}

impl fmt::Display for ItemCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&WriteOptions::default()))
    }
}

impl Index<usize> for ItemCollection {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl TryFrom<Vec<Item>> for ItemCollection {
    type Error = Error;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        let mut out = ItemCollection::new();
        for item in items {
            out.add_item(item)?;
        }
        Ok(out)
    }
}

impl IntoIterator for ItemCollection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut ItemCollection {
    type Item = &'a mut Item;
    type IntoIter = core::slice::IterMut<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
