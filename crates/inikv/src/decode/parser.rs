use crate::decode::scanner::{LineIter, LineKind, ParsedLine, iter};
use crate::error::{Error, Field, Result, SyntaxKind};
use crate::item::Item;
use crate::options::ParseOptions;
use crate::section::Section;
use crate::sections::SectionCollection;

/// Builds a fresh document from text, one physical line at a time.
///
/// Items attach to the section added most recently. In lenient mode a line
/// that cannot be applied is dropped and parsing continues; in strict mode
/// the first such line ends the parse with a line-numbered error.
pub struct Parser<'a> {
    lines: LineIter<'a>,
    strict: bool,
    doc: SectionCollection,
}

impl<'a> Parser<'a> {
    pub fn from_input(input: &'a str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            lines: iter(input),
            strict: options.strict,
            doc: SectionCollection::new(),
        }
    }

    pub fn parse_document(mut self) -> Result<SectionCollection> {
        while let Some(line) = self.lines.next() {
            let number = line.number;
            if let Err(err) = self.apply(line) {
                if self.strict {
                    return Err(err);
                }
                tracing::debug!(line = number, reason = %err, "skipping line");
            }
        }
        Ok(self.doc)
    }

    fn apply(&mut self, line: ParsedLine<'a>) -> Result<()> {
        let number = line.number;
        match line.kind {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Section { name } => {
                let section = Section::new(name).map_err(|e| {
                    Error::syntax(number, SyntaxKind::MalformedSection, Some(e))
                })?;
                self.doc.add_section(section).map_err(|e| {
                    Error::syntax(number, SyntaxKind::DuplicateSection, Some(e))
                })
            }
            LineKind::UnclosedSection => {
                Err(Error::syntax(number, SyntaxKind::MalformedSection, None))
            }
            LineKind::Malformed => Err(Error::syntax(number, SyntaxKind::MalformedItem, None)),
            LineKind::Item { name, value } => {
                let Some(section) = self.doc.last_mut() else {
                    return Err(Error::syntax(number, SyntaxKind::ItemBeforeSection, None));
                };
                let item = Item::new(name, value).map_err(|e| {
                    let kind = match e {
                        Error::InvalidFormat {
                            field: Field::ItemValue,
                            ..
                        } => SyntaxKind::MalformedItemValue,
                        _ => SyntaxKind::MalformedItemName,
                    };
                    Error::syntax(number, kind, Some(e))
                })?;
                section
                    .items_mut()
                    .add_item(item)
                    .map_err(|e| Error::syntax(number, SyntaxKind::DuplicateItem, Some(e)))
            }
        }
    }
}

/// Lenient parse: lines that cannot be interpreted are skipped.
pub fn parse(input: &str) -> SectionCollection {
    // Lenient parsing never surfaces an error.
    parse_with(input, &ParseOptions::lenient()).unwrap_or_default()
}

pub fn parse_strict(input: &str) -> Result<SectionCollection> {
    parse_with(input, &ParseOptions::strict())
}

pub fn parse_with(input: &str, options: &ParseOptions) -> Result<SectionCollection> {
    tracing::trace!(len = input.len(), strict = options.strict, "parsing document");
    Parser::with_options(input, options).parse_document()
}
