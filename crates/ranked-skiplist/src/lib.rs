#![cfg_attr(test, allow(unused_crate_dependencies, reason = "`proptest` is only used by integration tests"))]

//! A sorted [skiplist] augmented with order statistics.
//!
//! Besides the usual sorted-multiset operations (insert, find, remove), every node records the
//! number of entries each of its forward links skips over. That lets the list answer rank
//! queries in expected `O(log n)` time: [`RankedSkiplist::at`] returns the entry at a 0-based
//! position, and [`RankedSkiplist::index_of`] returns the position of an entry.
//!
//! | Operation                                         | Expected time |
//! |---------------------------------------------------|---------------|
//! | `insert`, `remove`, `remove_at`                   | `O(log n)`    |
//! | `find`, `find_first_greater`, `find_last_less`    | `O(log n)`    |
//! | `at`, `index_of`                                  | `O(log n)`    |
//! | `len`, `is_empty`, `begin`, `end`, `advance`      | `O(1)`        |
//!
//! The list is single-threaded. Every mutating operation takes `&mut self`, so sharing a list
//! across threads requires external synchronization (for instance, a `Mutex`).
//!
//! [skiplist]: https://en.wikipedia.org/wiki/Skip_list

mod default_comparator;
mod error;
mod interface;
mod node_heights;

mod cursor;
mod list;
mod node;


pub use self::{
    cursor::{Cursor, Iter},
    default_comparator::DefaultComparator,
    error::SkiplistError,
    interface::Comparator,
    list::RankedSkiplist,
    node_heights::MAX_HEIGHT,
};
