mod arena;


use crate::node_heights::MAX_HEIGHT;

pub(crate) use self::arena::NodeArena;


/// A link to the next node on some level; `None` is the end of the list.
pub(crate) type Link = Option<NodeId>;


/// Identifies a node in a [`NodeArena`].
///
/// The `generation` distinguishes successive occupants of the same arena slot, so an id
/// obtained before a node was freed never resolves to whatever node later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    slot:       usize,
    generation: u32,
}

/// One forward link of a node, together with the number of level-0 positions it covers.
///
/// `span` is `1` plus the number of entries jumped over. A `None` link covers the distance to
/// one position past the last entry of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Skip {
    pub(crate) next: Link,
    pub(crate) span: usize,
}

impl Skip {
    /// The skip of an empty list's head on every level.
    pub(crate) const EMPTY: Self = Self { next: None, span: 1 };
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// The length of `skips` is the height of the node; it is fixed when the node is created.
    skips: Box<[Skip]>,
    entry: T,
}

#[expect(unreachable_pub, reason = "control Node's visibility from one site, its definition")]
impl<T> Node<T> {
    /// Create an unlinked node of the given height.
    #[must_use]
    pub fn new(entry: T, height: usize) -> Self {
        debug_assert!(
            (1..=MAX_HEIGHT).contains(&height),
            "this crate should never attempt to create a node with an invalid height",
        );

        Self {
            skips: vec![Skip::EMPTY; height].into_boxed_slice(),
            entry,
        }
    }

    #[inline]
    #[must_use]
    pub const fn entry(&self) -> &T {
        &self.entry
    }

    #[inline]
    #[must_use]
    pub fn into_entry(self) -> T {
        self.entry
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.skips.len()
    }

    /// Returns `None` if the node has no skip at `level`.
    #[inline]
    #[must_use]
    pub fn skip(&self, level: usize) -> Option<Skip> {
        self.skips.get(level).copied()
    }

    /// Returns `None` if the node has no skip at `level`.
    #[inline]
    #[must_use]
    pub fn skip_mut(&mut self, level: usize) -> Option<&mut Skip> {
        self.skips.get_mut(level)
    }

    /// The next node on level 0.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Link {
        self.skip(0).and_then(|skip| skip.next)
    }
}
