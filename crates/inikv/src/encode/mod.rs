//! Serialization of the document model to text

pub mod writer;

use crate::options::WriteOptions;
use crate::sections::SectionCollection;

pub fn to_string_with(doc: &SectionCollection, options: &WriteOptions) -> String {
    let mut w = writer::LineWriter::new(options.line_ending);
    doc.write_to(&mut w);
    w.into_string()
}
