use core::fmt;

use thiserror::Error;

/// Which piece of text failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ItemName,
    ItemValue,
    SectionName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ItemName => f.write_str("item name"),
            Field::ItemValue => f.write_str("item value"),
            Field::SectionName => f.write_str("section name"),
        }
    }
}

/// The rule a name or value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Nothing left after trimming.
    Empty,
    ForbiddenChar(char),
    LeadingBracket,
    LeadingSemicolon,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => f.write_str("must not be empty"),
            Violation::ForbiddenChar(c) => write!(f, "must not contain {:?}", c),
            Violation::LeadingBracket => f.write_str("must not start with '['"),
            Violation::LeadingSemicolon => f.write_str("must not start with ';'"),
        }
    }
}

/// Level of the document a duplicate was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Item,
    Section,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Item => f.write_str("item"),
            Scope::Section => f.write_str("section"),
        }
    }
}

/// Strict-mode parse diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    MalformedSection,
    MalformedItem,
    ItemBeforeSection,
    MalformedItemName,
    MalformedItemValue,
    DuplicateItem,
    DuplicateSection,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SyntaxKind::MalformedSection => "malformed section header",
            SyntaxKind::MalformedItem => "malformed item, expected 'name=value'",
            SyntaxKind::ItemBeforeSection => "item appears before any section header",
            SyntaxKind::MalformedItemName => "malformed item name",
            SyntaxKind::MalformedItemValue => "malformed item value",
            SyntaxKind::DuplicateItem => "duplicate item in section",
            SyntaxKind::DuplicateSection => "duplicate section",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid {field}: {violation}")]
    InvalidFormat { field: Field, violation: Violation },

    #[error("duplicate {scope} name {name:?}")]
    DuplicateName { scope: Scope, name: String },

    #[error("syntax at line {line}: {kind}")]
    Syntax {
        line: usize,
        kind: SyntaxKind,
        #[source]
        source: Option<Box<Error>>,
    },
}

impl Error {
    pub(crate) fn invalid(field: Field, violation: Violation) -> Self {
        Error::InvalidFormat { field, violation }
    }

    pub(crate) fn duplicate(scope: Scope, name: &str) -> Self {
        Error::DuplicateName {
            scope,
            name: name.to_string(),
        }
    }

    pub(crate) fn syntax(line: usize, kind: SyntaxKind, cause: Option<Error>) -> Self {
        Error::Syntax {
            line,
            kind,
            source: cause.map(Box::new),
        }
    }

    /// 1-based source line, for parser diagnostics.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn syntax_kind(&self) -> Option<SyntaxKind> {
        match self {
            Error::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The wrapped construction or collection error of a parser diagnostic.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Error::Syntax { source, .. } => source.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
