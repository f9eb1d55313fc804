use crate::options::LineEnding;

/// Accumulates serialized document text.
///
/// Lines are joined, not terminated: callers emit `separator()` between
/// lines, so the output never ends with a trailing line ending of its own.
pub struct LineWriter {
    out: String,
    sep: &'static str,
}

impl LineWriter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            out: String::new(),
            sep: line_ending.as_str(),
        }
    }

    pub fn separator(&mut self) {
        self.out.push_str(self.sep);
    }

    pub fn header(&mut self, name: &str) {
        self.out.push('[');
        self.out.push_str(name);
        self.out.push(']');
    }

    pub fn entry(&mut self, name: &str, value: &str) {
        self.out.push_str(name);
        self.out.push('=');
        self.out.push_str(value);
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
