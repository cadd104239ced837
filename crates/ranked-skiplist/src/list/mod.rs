mod descent;
mod rank;


use std::fmt::{Debug, Formatter, Result as FmtResult};

use oorandom::Rand32;
use tracing::Level as LogLevel;

use crate::{
    cursor::{Cursor, Iter},
    default_comparator::DefaultComparator,
    error::SkiplistError,
    interface::Comparator,
    node::{Node, NodeArena, NodeId, Skip},
    node_heights::{MAX_HEIGHT, random_node_height},
};
use self::descent::{Frontier, Position};


/// The seed used by [`RankedSkiplist::new`].
const DEFAULT_SEED: u64 = 0x0123_4567_89ab_cdef;


/// A sorted skiplist of `T` entries, ordered by `Cmp`, which supports rank queries.
///
/// Entries which compare as equal may be inserted any number of times; all of them are kept.
/// A new entry is placed before every entry that compares greater than or equal to it, so among
/// equal entries, the most recently inserted one comes first.
///
/// Positions in the list are referred to with [`Cursor`]s. A cursor does not borrow the list;
/// it stays usable across insertions and removals of other entries, and is rejected with
/// [`SkiplistError::StaleCursor`] once its own entry has been removed.
///
/// # Threading
/// The list has no internal synchronization. Exclusive access for mutation is enforced by
/// `&mut self`; callers which share a list between threads must wrap it in a lock.
pub struct RankedSkiplist<T, Cmp = DefaultComparator> {
    cmp:   Cmp,
    prng:  Rand32,
    /// The head sentinel's skips. The head is as tall as the tallest possible node.
    head:  [Skip; MAX_HEIGHT],
    arena: NodeArena<T>,
    /// Invariant: equals the number of nodes reachable on level 0, and `arena.len()`.
    len:   usize,
}

impl<T, Cmp> RankedSkiplist<T, Cmp> {
    /// Create an empty list, which seeds its PRNG with a fixed default seed.
    #[inline]
    #[must_use]
    pub fn new(cmp: Cmp) -> Self {
        Self::new_seeded(cmp, DEFAULT_SEED)
    }

    /// Create an empty list, which draws node heights from a PRNG with the given seed.
    ///
    /// Lists built with the same seed and the same sequence of operations have the same shape.
    #[inline]
    #[must_use]
    pub fn new_seeded(cmp: Cmp, seed: u64) -> Self {
        Self::with_prng(cmp, Rand32::new(seed))
    }

    /// Create an empty list which draws node heights from the provided PRNG.
    #[inline]
    #[must_use]
    pub fn with_prng(cmp: Cmp, prng: Rand32) -> Self {
        Self {
            cmp,
            prng,
            head:  [Skip::EMPTY; MAX_HEIGHT],
            arena: NodeArena::new(),
            len:   0,
        }
    }

    /// The number of entries in the list, counting duplicates.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &Cmp {
        &self.cmp
    }

    /// A cursor at the first entry, or the end cursor if the list is empty.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::from_link(self.next_after(Position::Head))
    }

    /// The cursor one position past the last entry.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Iterate over the entries in sorted order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, Cmp> {
        Iter::new(self, self.next_after(Position::Head), None, self.len)
    }

    /// Get the entry at `cursor`.
    pub fn current(&self, cursor: Cursor) -> Result<&T, SkiplistError> {
        let node_id = self.live_node(cursor)?;
        Ok(self.entry_of(node_id))
    }

    /// Move `cursor` to the next entry, or to the end cursor if it was at the last entry.
    ///
    /// The end cursor cannot be advanced, and neither can a cursor whose entry was removed.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<(), SkiplistError> {
        let node_id = self.live_node(*cursor)?;
        *cursor = Cursor::from_link(self.arena.node(node_id).next());
        Ok(())
    }

    /// Iterate over the entries from `cursor` (inclusive) to the end of the list.
    ///
    /// The end cursor produces an empty iterator.
    pub fn iter_from(&self, cursor: Cursor) -> Result<Iter<'_, T, Cmp>, SkiplistError> {
        self.range_between(cursor, Cursor::END)
    }

    /// Iterate over the entries from `start` (inclusive) up to `end` (exclusive).
    ///
    /// If `end` does not come after `start`, iteration continues to the end of the list.
    pub fn range_between(
        &self,
        start: Cursor,
        end:   Cursor,
    ) -> Result<Iter<'_, T, Cmp>, SkiplistError> {
        let first = match start.link() {
            Some(node_id) if !self.arena.contains(node_id) => {
                return Err(SkiplistError::StaleCursor);
            }
            link => link,
        };
        if end.link().is_some_and(|node_id| !self.arena.contains(node_id)) {
            return Err(SkiplistError::StaleCursor);
        }

        Ok(Iter::new(self, first, end.link(), self.len))
    }

    /// Get a node which is linked into this list.
    #[inline]
    #[must_use]
    pub(crate) fn node(&self, node_id: NodeId) -> &Node<T> {
        self.arena.node(node_id)
    }

    /// Resolve `cursor` to a node which is still in the list.
    fn live_node(&self, cursor: Cursor) -> Result<NodeId, SkiplistError> {
        let node_id = cursor.link().ok_or(SkiplistError::CursorAtEnd)?;
        if self.arena.contains(node_id) {
            Ok(node_id)
        } else {
            Err(SkiplistError::StaleCursor)
        }
    }
}

impl<T, Cmp: Comparator<T>> RankedSkiplist<T, Cmp> {
    /// Insert `entry` before the first entry which compares greater than or equal to it.
    ///
    /// Inserting always succeeds, even if an equal entry is already present.
    pub fn insert(&mut self, entry: T) {
        let frontier = self.find_frontier::<false>(&entry);
        let height = random_node_height(&mut self.prng);
        let node_id = self.arena.alloc(Node::new(entry, height));

        // The new node goes right after `frontier.prev[0]`, at rank `insert_rank + 1`.
        let (_, insert_rank) = frontier.bottom();

        for (level, (prev, prev_rank)) in frontier.prev.into_iter().zip(frontier.rank).enumerate() {
            let Some(prev_skip) = self.skip_at_mut(prev, level) else {
                continue;
            };

            if level < height {
                // Split the skip of `prev` in two, around the new node.
                let consumed = insert_rank - prev_rank;
                let old_skip = *prev_skip;
                *prev_skip = Skip {
                    next: Some(node_id),
                    span: consumed + 1,
                };

                if let Some(new_skip) = self.arena.node_mut(node_id).skip_mut(level) {
                    *new_skip = Skip {
                        next: old_skip.next,
                        span: old_skip.span - consumed,
                    };
                }
            } else {
                // The new node is inside this skip, which now covers one more entry.
                prev_skip.span += 1;
            }
        }

        self.len += 1;
        debug_assert_eq!(self.len, self.arena.len(), "skiplist length out of sync with its nodes");
    }

    /// Insert a clone of `entry`.
    #[inline]
    pub fn insert_copy(&mut self, entry: &T)
    where
        T: Clone,
    {
        self.insert(entry.clone());
    }

    /// Find the first entry which compares equal to `key`, or return the end cursor.
    #[must_use]
    pub fn find(&self, key: &T) -> Cursor {
        let (bottom, _) = self.find_frontier::<false>(key).bottom();
        match self.next_after(bottom) {
            Some(node_id) if self.node_equals(node_id, key) => Cursor::from_node(node_id),
            _                                               => Cursor::END,
        }
    }

    /// Find the first entry which compares strictly greater than `key`, or return the end cursor.
    #[must_use]
    pub fn find_first_greater(&self, key: &T) -> Cursor {
        let (bottom, _) = self.find_frontier::<true>(key).bottom();
        Cursor::from_link(self.next_after(bottom))
    }

    /// Find the last entry which compares strictly less than `key`, or return the end cursor if
    /// there is no such entry.
    #[must_use]
    pub fn find_last_less(&self, key: &T) -> Cursor {
        match self.find_frontier::<false>(key).bottom() {
            (Position::Node(node_id), _) => Cursor::from_node(node_id),
            (Position::Head, _)          => Cursor::END,
        }
    }

    /// Check whether the list contains an entry which compares equal to `key`.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        !self.find(key).is_end()
    }

    /// Remove the first entry which compares equal to `key`, returning whether one was found.
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Remove and return the first entry which compares equal to `key`.
    pub fn take(&mut self, key: &T) -> Option<T> {
        let frontier = self.find_frontier::<false>(key);
        let (bottom, _) = frontier.bottom();

        let node_id = self.next_after(bottom).filter(|&node_id| self.node_equals(node_id, key))?;
        self.unlink(&frontier, node_id)
    }

    /// Remove the entry `cursor` refers to, and move `cursor` to the entry after it (or to the end
    /// cursor).
    ///
    /// The entry is located by identity, so among several equal entries, exactly the one under
    /// the cursor is removed.
    ///
    /// # Errors
    /// Fails with [`SkiplistError::CursorAtEnd`] for the end cursor and with
    /// [`SkiplistError::StaleCursor`] if the entry was already removed (for instance, by an
    /// earlier call to `remove_at` through a copy of the same cursor). On failure, neither the
    /// list nor `cursor` is changed.
    pub fn remove_at(&mut self, cursor: &mut Cursor) -> Result<T, SkiplistError> {
        let target = match self.live_node(*cursor) {
            Ok(target) => target,
            Err(err) => {
                tracing::event!(LogLevel::DEBUG, "rejected removal through a cursor: {err}");
                return Err(err);
            }
        };

        let key = self.entry_of(target);
        let mut frontier = self.find_frontier::<false>(key);

        // The frontier ends just before the first entry equal to `key`, which need not be
        // `target`. Walk past equal entries until reaching `target` itself.
        let (mut current, mut rank) = frontier.bottom();
        loop {
            match self.next_after(current) {
                Some(next) if next == target => break,
                Some(next) if self.node_equals(next, key) => {
                    rank += 1;
                    frontier.advance_to(next, self.arena.node(next).height(), rank);
                    current = Position::Node(next);
                }
                _ => {
                    // Only reachable if the comparator is inconsistent with the order in which
                    // the entries were inserted.
                    tracing::event!(
                        LogLevel::DEBUG,
                        "could not locate a cursor's entry among the entries equal to it",
                    );
                    return Err(SkiplistError::StaleCursor);
                }
            }
        }

        let successor = self.arena.node(target).next();
        let entry = self.unlink(&frontier, target).ok_or(SkiplistError::StaleCursor)?;
        *cursor = Cursor::from_link(successor);
        Ok(entry)
    }

    /// Unlink `node_id` from every level and free it. Every position in `frontier` must be the
    /// node's predecessor on its level (or, above the node's height, a position whose skip
    /// jumps over the node).
    fn unlink(&mut self, frontier: &Frontier, node_id: NodeId) -> Option<T> {
        let node = self.arena.free(node_id)?;

        for (level, prev) in frontier.prev.into_iter().enumerate() {
            let Some(prev_skip) = self.skip_at_mut(prev, level) else {
                continue;
            };

            if let Some(removed_skip) = node.skip(level) {
                debug_assert_eq!(prev_skip.next, Some(node_id), "frontier was not the predecessor");
                // Absorb the removed node's skip.
                prev_skip.next = removed_skip.next;
                prev_skip.span += removed_skip.span - 1;
            } else {
                prev_skip.span -= 1;
            }
        }

        self.len -= 1;
        debug_assert_eq!(self.len, self.arena.len(), "skiplist length out of sync with its nodes");
        Some(node.into_entry())
    }
}

impl<T, Cmp: Default> Default for RankedSkiplist<T, Cmp> {
    #[inline]
    fn default() -> Self {
        Self::new(Cmp::default())
    }
}

impl<T: Debug, Cmp> Debug for RankedSkiplist<T, Cmp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, Cmp> IntoIterator for &'a RankedSkiplist<T, Cmp> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T, Cmp>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, Cmp: Comparator<T>> Extend<T> for RankedSkiplist<T, Cmp> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, entries: I) {
        for entry in entries {
            self.insert(entry);
        }
    }
}

impl<T, Cmp: Comparator<T> + Default> FromIterator<T> for RankedSkiplist<T, Cmp> {
    fn from_iter<I: IntoIterator<Item = T>>(entries: I) -> Self {
        let mut list = Self::default();
        list.extend(entries);
        list
    }
}
