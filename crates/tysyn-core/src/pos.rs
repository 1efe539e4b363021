//! Source positions.
//!
//! A position either points at a byte range of a source or is unknown.
//! Compiler-synthesized nodes carry the unknown position.

use std::fmt;

use rowan::{TextRange, TextSize};

/// Lightweight handle to a source in a compilation session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SourceId(u32);

impl SourceId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Span {
    source: SourceId,
    range: TextRange,
}

/// Where a node was written.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pos(Option<Span>);

impl Pos {
    /// Position of nodes that have no source text.
    pub const UNKNOWN: Pos = Pos(None);

    pub fn new(source: SourceId, range: TextRange) -> Self {
        Self(Some(Span { source, range }))
    }

    /// Shorthand for a byte range in `source`.
    pub fn at(source: SourceId, start: u32, end: u32) -> Self {
        Self::new(source, TextRange::new(TextSize::from(start), TextSize::from(end)))
    }

    #[inline]
    pub fn is_known(self) -> bool {
        self.0.is_some()
    }

    pub fn source(self) -> Option<SourceId> {
        self.0.map(|span| span.source)
    }

    pub fn range(self) -> Option<TextRange> {
        self.0.map(|span| span.range)
    }

    /// `self` if known, else `original`.
    ///
    /// Copies made with a known override position take it; copies made
    /// with an unknown one keep each piece's own position.
    #[inline]
    pub fn or(self, original: Pos) -> Pos {
        if self.is_known() { self } else { original }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("<unknown>"),
            Some(Span { source, range }) => write!(
                f,
                "#{}:{}..{}",
                source.0,
                u32::from(range.start()),
                u32::from(range.end())
            ),
        }
    }
}
