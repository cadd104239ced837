use super::{Node, NodeId};


#[derive(Debug)]
struct Slot<T> {
    /// Incremented every time the slot's node is freed.
    generation: u32,
    node:       Option<Node<T>>,
}

/// Owns every node of a skiplist.
///
/// Freed slots are recycled by later allocations. A [`NodeId`] only resolves while the node it
/// was created for is still allocated; afterwards, lookups through it return `None` even if the
/// slot has been reused.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    /// Indices of slots in `slots` whose `node` is `None`.
    free:  Vec<usize>,
}

#[expect(unreachable_pub, reason = "control NodeArena's visibility from one site, its definition")]
impl<T> NodeArena<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free:  Vec::new(),
        }
    }

    /// The number of nodes currently allocated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        if let Some(slot_idx) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(slot_idx) {
                debug_assert!(slot.node.is_none(), "a slot on the free list was occupied");
                slot.node = Some(node);
                return NodeId {
                    slot:       slot_idx,
                    generation: slot.generation,
                };
            }
        }

        let slot_idx = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node:       Some(node),
        });

        NodeId {
            slot:       slot_idx,
            generation: 0,
        }
    }

    /// Remove the node referred to by `id` and return it, or return `None` if it was already
    /// freed.
    pub fn free(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.slot)?;
        if slot.generation != id.generation {
            return None;
        }

        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.slot);
        Some(node)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get a node which is known to be allocated.
    ///
    /// # Panics
    /// Panics if `id` was freed. Links stored inside a skiplist never refer to freed nodes.
    #[expect(clippy::expect_used, reason = "links in a skiplist only refer to live nodes")]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("skiplist link referred to a freed node")
    }

    /// Get a node which is known to be allocated.
    ///
    /// # Panics
    /// Panics if `id` was freed. Links stored inside a skiplist never refer to freed nodes.
    #[expect(clippy::expect_used, reason = "links in a skiplist only refer to live nodes")]
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("skiplist link referred to a freed node")
    }
}

impl<T> Default for NodeArena<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
