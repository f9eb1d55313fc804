/// One physical line of input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 1-based, counting blank and comment lines.
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// `[...]`; `name` is the raw text between the brackets.
    Section { name: &'a str },
    /// Starts with `[` but has no closing `]`.
    UnclosedSection,
    /// Split at the first `=` of the untrimmed line.
    Item { name: &'a str, value: &'a str },
    /// Neither a header nor an assignment.
    Malformed,
}

pub fn scan(input: &str) -> Vec<ParsedLine<'_>> {
    iter(input).collect()
}

/// Splits on `\r\n`, `\n` or a lone `\r`. A terminator at the very end does
/// not start another line.
pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
}

pub fn iter(input: &str) -> LineIter<'_> {
    LineIter {
        rest: input,
        number: 0,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ParsedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;
        let b = self.rest.as_bytes();
        let line = match b.iter().position(|&c| c == b'\r' || c == b'\n') {
            Some(pos) => {
                let skip = if b[pos] == b'\r' && b.get(pos + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                let (line, remaining) = (&self.rest[..pos], &self.rest[pos + skip..]);
                self.rest = remaining;
                line
            }
            None => core::mem::take(&mut self.rest),
        };
        Some(ParsedLine {
            number: self.number,
            kind: classify(line),
        })
    }
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(';') {
        return LineKind::Comment;
    }
    if let Some(rest) = trimmed.strip_prefix('[') {
        return match rest.strip_suffix(']') {
            Some(name) => LineKind::Section { name },
            None => LineKind::UnclosedSection,
        };
    }
    match line.find('=') {
        Some(idx) => LineKind::Item {
            name: &line[..idx],
            value: &line[idx + 1..],
        },
        None => LineKind::Malformed,
    }
}
