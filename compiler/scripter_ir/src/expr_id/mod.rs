//! Index and range types for the flat AST.
//!
//! - `ExprId(u32)` instead of `Box<Expr>`
//! - `ExprRange` for argument and element lists
//! - `StmtId`/`StmtRange` for statements and statement sequences
//! - `NameRange` for parameter and import lists
//! - `FunctionId` for function definitions
//! - `StaticSlot` for `static var` storage

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new id from an arena index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Get the number of elements.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Slice bounds into the backing storage.
            #[inline]
            pub const fn bounds(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + self.len
                )
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);

define_id!(
    /// Index into the statement arena.
    StmtId
);

define_id!(
    /// Index into the function definition table.
    FunctionId
);

define_id!(
    /// Storage slot of a `static var`, owned by the compiled program.
    StaticSlot
);

define_range!(
    /// Range of expressions in the flattened expression list storage.
    ExprRange
);

define_range!(
    /// Range of statements in the flattened statement list storage.
    StmtRange
);

define_range!(
    /// Range of names (parameters, imported names).
    NameRange
);

#[cfg(test)]
mod tests;
