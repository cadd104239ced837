use crate::{
    interface::Comparator,
    node::{Link, NodeId, Skip},
    node_heights::MAX_HEIGHT,
};
use super::RankedSkiplist;


/// A place a descent can stop at: the head sentinel, or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Position {
    Head,
    Node(NodeId),
}

/// For every level, the rightmost position on that level which a descent stopped at, and its
/// rank (the 1-based index of the position among all entries, with the head at rank `0`).
///
/// A frontier is a transient per-call buffer; any mutation of the list invalidates it.
#[derive(Debug, Clone, Copy)]
pub(super) struct Frontier {
    pub(super) prev: [Position; MAX_HEIGHT],
    pub(super) rank: [usize; MAX_HEIGHT],
}

impl Frontier {
    /// The position (and its rank) on level 0, which every other level's position precedes or
    /// equals.
    #[inline]
    #[must_use]
    pub(super) const fn bottom(&self) -> (Position, usize) {
        (self.prev[0], self.rank[0])
    }

    /// Move the frontier forward to `node`, on every level that `node` is tall enough to reach.
    pub(super) fn advance_to(&mut self, node: NodeId, height: usize, rank: usize) {
        for level in 0..height.min(MAX_HEIGHT) {
            #[expect(clippy::indexing_slicing, reason = "level < MAX_HEIGHT")]
            #[expect(clippy::semicolon_outside_block, reason = "block needed for lint scope")]
            {
                self.prev[level] = Position::Node(node);
                self.rank[level] = rank;
            }
        }
    }
}

// Short utility functions
impl<T, Cmp> RankedSkiplist<T, Cmp> {
    /// Get the skip of `position` on `level`. Nodes which are not tall enough to have a skip on
    /// `level` return `None`.
    pub(super) fn skip_at(&self, position: Position, level: usize) -> Option<Skip> {
        match position {
            Position::Head          => self.head.get(level).copied(),
            Position::Node(node_id) => self.arena.node(node_id).skip(level),
        }
    }

    pub(super) fn skip_at_mut(&mut self, position: Position, level: usize) -> Option<&mut Skip> {
        match position {
            Position::Head          => self.head.get_mut(level),
            Position::Node(node_id) => self.arena.node_mut(node_id).skip_mut(level),
        }
    }

    /// The node after `position` on level 0.
    pub(super) fn next_after(&self, position: Position) -> Link {
        self.skip_at(position, 0).and_then(|skip| skip.next)
    }

    #[inline]
    pub(super) fn entry_of(&self, node_id: NodeId) -> &T {
        self.arena.node(node_id).entry()
    }
}

// Longer utility functions, related to searching through the skiplist.
impl<T, Cmp> RankedSkiplist<T, Cmp> {
    /// Walk from the head down to level 0. On each level, move forward for as long as
    /// `should_advance(rank_after_step, next_entry)` returns `true`, then drop down a level.
    ///
    /// Returns the position reached on every level, together with the rank of that position.
    pub(super) fn descend<F>(&self, mut should_advance: F) -> Frontier
    where
        F: FnMut(usize, &T) -> bool,
    {
        let mut frontier = Frontier {
            prev: [Position::Head; MAX_HEIGHT],
            rank: [0; MAX_HEIGHT],
        };

        let mut current = Position::Head;
        let mut rank = 0;

        for level in (0..MAX_HEIGHT).rev() {
            while let Some(Skip { next: Some(next), span }) = self.skip_at(current, level) {
                if should_advance(rank + span, self.entry_of(next)) {
                    // `next` is still too small; keep going on this level.
                    current = Position::Node(next);
                    rank += span;
                } else {
                    // This level might have looked too far ahead. Drop down a level.
                    break;
                }
            }

            #[expect(clippy::indexing_slicing, reason = "level < MAX_HEIGHT")]
            #[expect(clippy::semicolon_outside_block, reason = "block needed for lint scope")]
            {
                frontier.prev[level] = current;
                frontier.rank[level] = rank;
            }
        }

        frontier
    }

    /// Descend to the node of the given 1-based rank, which must be at most `self.len`.
    /// The bottom of the returned frontier is that node.
    pub(super) fn descend_by_rank(&self, target_rank: usize) -> Frontier {
        self.descend(|rank_after_step, _| rank_after_step <= target_rank)
    }
}

impl<T, Cmp: Comparator<T>> RankedSkiplist<T, Cmp> {
    /// Descend towards `key`.
    ///
    /// If `INCLUSIVE` is `false`, each level's position is the last one whose entry is strictly
    /// less than `key`, so the node after the bottom of the frontier is the first entry greater
    /// than or equal to `key`. If `INCLUSIVE` is `true`, each level's position is the last one
    /// whose entry is less than or equal to `key`, and the next node is the first entry strictly
    /// greater than `key`.
    pub(super) fn find_frontier<const INCLUSIVE: bool>(&self, key: &T) -> Frontier {
        self.descend(|_, entry| {
            let ordering = self.cmp.cmp(entry, key);
            if INCLUSIVE { ordering.is_le() } else { ordering.is_lt() }
        })
    }

    /// Determines whether the entry of `node_id` compares equal to `key`.
    #[inline]
    pub(super) fn node_equals(&self, node_id: NodeId, key: &T) -> bool {
        self.cmp.cmp(self.entry_of(node_id), key).is_eq()
    }
}
