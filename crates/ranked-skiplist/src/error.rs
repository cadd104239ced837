use thiserror::Error;


/// The ways in which an operation on a [`RankedSkiplist`] can be misused.
///
/// Absent keys are not errors; searches report them with the end [`Cursor`], `None`, or `false`.
/// A `SkiplistError` always means that the caller broke a precondition, and the list was left
/// untouched.
///
/// [`RankedSkiplist`]: crate::RankedSkiplist
/// [`Cursor`]: crate::Cursor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkiplistError {
    /// A positional lookup was given an index that is not less than the length of the list.
    #[error("index {index} is out of bounds for a skiplist of length {len}")]
    IndexOutOfBounds {
        index: usize,
        len:   usize,
    },
    /// The cursor is past the last entry, so there is nothing to read, advance to, or remove.
    #[error("the cursor is at the end of the skiplist and does not refer to an entry")]
    CursorAtEnd,
    /// The entry the cursor referred to has already been removed from the list.
    ///
    /// This is what a second removal through the same cursor reports.
    #[error("the cursor refers to an entry which was removed from the skiplist")]
    StaleCursor,
}
