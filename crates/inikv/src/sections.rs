use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use crate::encode::writer::LineWriter;
use crate::error::{Error, Result, Scope};
use crate::item::validate_section_name;
use crate::items::ItemCollection;
use crate::options::{LineEnding, WriteOptions};
use crate::section::Section;

/// A whole document: ordered sections with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCollection {
    sections: Vec<Section>,
}

impl SectionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Section> {
        self.sections.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.sections.iter().position(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.index_of(name).map(|i| &self.sections[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.index_of(name).map(move |i| &mut self.sections[i])
    }

    /// Value of `item` in `section`, without creating either.
    pub fn value(&self, section: &str, item: &str) -> Option<&str> {
        self.get(section)?.items().get(item)
    }

    /// Appends an empty section.
    pub fn add(&mut self, name: &str) -> Result<&mut Section> {
        let index = self.sections.len();
        self.insert(index, name)?;
        Ok(&mut self.sections[index])
    }

    pub fn add_section(&mut self, section: Section) -> Result<()> {
        self.insert_section(self.sections.len(), section)
    }

    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, name: &str) -> Result<()> {
        let section = Section::new(name)?;
        self.insert_section(index, section)
    }

    pub fn insert_section(&mut self, index: usize, section: Section) -> Result<()> {
        self.ensure_unique(section.name(), None)?;
        self.sections.insert(index, section);
        Ok(())
    }

    /// Overwrites the slot at `index`, returning the previous section.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set_at(&mut self, index: usize, section: Section) -> Result<Section> {
        assert!(index < self.sections.len(), "index {index} out of bounds");
        self.ensure_unique(section.name(), Some(index))?;
        Ok(core::mem::replace(&mut self.sections[index], section))
    }

    /// Items of the section called `name`, appending an empty section if
    /// absent.
    pub fn get_or_insert(&mut self, name: &str) -> Result<&mut ItemCollection> {
        let name = validate_section_name(name)?;
        let index = match self.index_of(name) {
            Some(i) => i,
            None => {
                self.add(name)?;
                self.sections.len() - 1
            }
        };
        Ok(self.sections[index].items_mut())
    }

    /// Sets `item` in `section`, creating both as needed.
    pub fn set_value(&mut self, section: &str, item: &str, value: &str) -> Result<()> {
        self.get_or_insert(section)?.set(item, value)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.sections.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Section> {
        (index < self.sections.len()).then(|| self.sections.remove(index))
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// The section items are currently appended to while parsing.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }

    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        crate::encode::to_string_with(self, options)
    }

    pub(crate) fn write_to(&self, w: &mut LineWriter) {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                w.separator();
            }
            section.write_to(w);
        }
    }

    fn ensure_unique(&self, name: &str, skip: Option<usize>) -> Result<()> {
        let clash = self
            .sections
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != skip && s.name() == name);
        if clash {
            return Err(Error::duplicate(Scope::Section, name));
        }
        Ok(())
    }
}

impl fmt::Display for SectionCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = LineWriter::new(LineEnding::Native);
        self.write_to(&mut w);
        f.write_str(w.as_str())
    }
}

/// Lenient parse; never fails.
impl FromStr for SectionCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(crate::parse(s))
    }
}

impl Index<usize> for SectionCollection {
    type Output = Section;

    fn index(&self, index: usize) -> &Section {
        &self.sections[index]
    }
}

impl TryFrom<Vec<Section>> for SectionCollection {
    type Error = Error;

    fn try_from(sections: Vec<Section>) -> Result<Self> {
        let mut out = SectionCollection::new();
        for section in sections {
            out.add_section(section)?;
        }
        Ok(out)
    }
}

impl IntoIterator for SectionCollection {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a SectionCollection {
    type Item = &'a Section;
    type IntoIter = core::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
