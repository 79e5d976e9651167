use std::fmt;

/// Which match to take from the selector result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    First,
    /// Zero-based position in document order.
    Nth(usize),
}

impl Pick {
    pub fn index(&self) -> usize {
        match self {
            Pick::First => 0,
            Pick::Nth(i) => *i,
        }
    }
}

/// What to read off the picked element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Attr(String),
    Text,
    Html,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Attr(name) => write!(f, "@{}", name),
            Field::Text => write!(f, "text"),
            Field::Html => write!(f, "html"),
        }
    }
}
