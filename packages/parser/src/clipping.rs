use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of clipping, as named on the metadata line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClippingKind {
    Highlight,
    Bookmark,
    Note,
}

impl ClippingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClippingKind::Highlight => "highlight",
            ClippingKind::Bookmark => "bookmark",
            ClippingKind::Note => "note",
        }
    }
}

impl fmt::Display for ClippingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClippingKind {
    type Err = String;

    /// Case-insensitive: `Highlight`, `HIGHLIGHT` and `highlight` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("highlight") {
            Ok(ClippingKind::Highlight)
        } else if s.eq_ignore_ascii_case("bookmark") {
            Ok(ClippingKind::Bookmark)
        } else if s.eq_ignore_ascii_case("note") {
            Ok(ClippingKind::Note)
        } else {
            Err(format!("unknown clipping kind: {}", s))
        }
    }
}

/// A single highlight, bookmark or note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clipping {
    pub title: String,
    pub attribution: String,
    pub kind: ClippingKind,
    pub timestamp: NaiveDateTime,
    pub body: String,
}

impl Clipping {
    /// Rebuild the header line this clipping was read from.
    pub fn header(&self) -> String {
        format!("{} ({})", self.title, self.attribution)
    }
}
