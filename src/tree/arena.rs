use super::node::Node;

/// An optional arena slot.
pub type OptNode<T> = Option<Node<T>>;

/// A free-list arena allocator. Indices are stable for the lifetime of the
/// node they name: removal tombstones the slot (`None`) rather than
/// shifting later elements, so no other node's `left`/`right`/`parent`
/// index is ever invalidated by someone else's removal.
pub struct NodeArena<T> {
    arena: Vec<OptNode<T>>,
    free_list: Vec<usize>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            arena: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Add a node to the arena, reusing a freed slot if one exists, and
    /// return its index.
    pub fn add(&mut self, node: Node<T>) -> usize {
        match self.free_list.pop() {
            Some(free_idx) => {
                debug_assert!(
                    self.arena[free_idx].is_none(),
                    "Internal invariant failed: overwrite of allocated node!"
                );
                self.arena[free_idx] = Some(node);
                free_idx
            }
            None => {
                self.arena.push(Some(node));
                self.arena.len() - 1
            }
        }
    }

    /// Remove the node at `idx`, tombstoning the slot for reuse.
    pub fn remove(&mut self, idx: usize) -> OptNode<T> {
        debug_assert!(
            idx < self.arena.len(),
            "API misuse: requested removal past last index!"
        );
        let removed = self.arena.get_mut(idx).and_then(|slot| slot.take());
        if removed.is_some() {
            self.free_list.push(idx);
        }
        removed
    }

    /// Remove a node at a known-good index. Panics if the index is invalid.
    pub fn hard_remove(&mut self, idx: usize) -> Node<T> {
        match self.remove(idx) {
            Some(node) => node,
            None => panic!("Internal invariant failed: attempted removal of node from invalid index."),
        }
    }

    pub fn get(&self, idx: usize) -> Option<&Node<T>> {
        match self.arena.get(idx) {
            Some(Some(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        match self.arena.get_mut(idx) {
            Some(Some(node)) => Some(node),
            _ => None,
        }
    }

    /// Get a reference to a node at a known-good index. Panics if invalid.
    pub fn hard_get(&self, idx: usize) -> &Node<T> {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("Internal invariant failed: attempted retrieval of node from invalid index."),
        }
    }

    /// Get a mutable reference to a node at a known-good index. Panics if invalid.
    pub fn hard_get_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("Internal invariant failed: attempted mutable retrieval of node from invalid index."),
        }
    }

    /// Number of arena slots, including tombstoned ones.
    pub fn len(&self) -> usize {
        self.arena.len()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut arena = NodeArena::new();
        let i1 = arena.add(Node::new(1));
        let i2 = arena.add(Node::new(2));
        let i3 = arena.add(Node::new(3));
        assert_eq!((i1, i2, i3), (0, 1, 2));

        let removed = arena.remove(i2).unwrap();
        assert_eq!(removed.payload, 2);
        assert!(arena.get(i2).is_none());

        // Freed slot is reused.
        let i4 = arena.add(Node::new(4));
        assert_eq!(i4, 1);

        // Other indices are untouched by the removal.
        assert_eq!(arena.hard_get(i1).payload, 1);
        assert_eq!(arena.hard_get(i3).payload, 3);
    }

    #[test]
    #[should_panic]
    fn test_hard_get_oob_panics() {
        let mut arena: NodeArena<i32> = NodeArena::new();
        arena.add(Node::new(1));
        arena.hard_get(5);
    }
}
