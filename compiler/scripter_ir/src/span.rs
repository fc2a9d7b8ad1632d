//! Byte ranges into a single source text.
//!
//! Scripter sources are addressed with `u32` offsets; `Span` is 8 bytes and
//! `Copy`. Spans carry no file id: a span is only meaningful against the
//! source it was lexed from.

use std::fmt;
use std::ops::Range;

/// A source offset did not fit in `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanError {
    pub offset: usize,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source offset {} does not fit in a span (max {})",
            self.offset,
            u32::MAX
        )
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for host-created errors and values with no source.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset` (end of input, missing tokens).
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert a lexer range, failing for sources over 4 GiB.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let narrow = |offset: usize| u32::try_from(offset).map_err(|_| SpanError { offset });
        Ok(Span {
            start: narrow(range.start)?,
            end: narrow(range.end)?,
        })
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both, e.g. a statement from its keyword to
    /// its semicolon.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Whether this span lies inside a source of `len` bytes.
    ///
    /// False for a runtime error raised in another module's code and
    /// reported against the main program's text.
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end as usize <= len
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests;
