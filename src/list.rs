//! Intrusive circular doubly linked list over a per-run arena.
//!
//! All nodes of a run live in one `Vec`; links are indices into it, and
//! index 0 is the sentinel, which holds no key. Keeping the links as plain
//! indices lets a sort routine relink nodes freely without touching
//! ownership, and the whole arena is dropped at once when the run ends.

/// Key attached to a node; defines sort order, duplicates allowed.
pub type Key = i64;

#[derive(Debug, Clone, Copy)]
struct Node {
    key: Key,
    prev: usize,
    next: usize,
}

/// Circular doubly linked list with a sentinel head.
///
/// Invariant: traversing forward from the sentinel visits every real node
/// exactly once and returns to the sentinel; the empty list is the sentinel
/// linked to itself. `set_next`/`set_prev` let a sort routine break the
/// invariant mid-flight, and the routine owes a list that satisfies it
/// again on return.
#[derive(Debug, Clone)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    /// Id of the sentinel; also the terminator seen when walking `next`
    /// links from the head.
    pub const SENTINEL: usize = 0;

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut nodes = Vec::with_capacity(n + 1);
        nodes.push(Node {
            key: 0,
            prev: Self::SENTINEL,
            next: Self::SENTINEL,
        });
        Self { nodes }
    }

    /// Assembles `keys` into a list in the given order, the first key
    /// immediately after the sentinel. O(n), no key comparisons.
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut list = Self::with_capacity(keys.len());
        for &key in keys {
            list.push_back(key);
        }
        list
    }

    /// Number of real nodes; the sentinel is not counted.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a node holding `key` at the tail in O(1) and returns its id.
    pub fn push_back(&mut self, key: Key) -> usize {
        let id = self.nodes.len();
        let tail = self.nodes[Self::SENTINEL].prev;
        self.nodes.push(Node {
            key,
            prev: tail,
            next: Self::SENTINEL,
        });
        self.nodes[tail].next = id;
        self.nodes[Self::SENTINEL].prev = id;
        id
    }

    /// First real node, or [`Self::SENTINEL`] when the list is empty.
    pub fn head(&self) -> usize {
        self.nodes[Self::SENTINEL].next
    }

    pub fn next(&self, id: usize) -> usize {
        self.nodes[id].next
    }

    pub fn prev(&self, id: usize) -> usize {
        self.nodes[id].prev
    }

    /// Key of a real node; the sentinel holds no key.
    pub fn key(&self, id: usize) -> Key {
        debug_assert_ne!(id, Self::SENTINEL);
        self.nodes[id].key
    }

    pub fn set_next(&mut self, id: usize, next: usize) {
        self.nodes[id].next = next;
    }

    pub fn set_prev(&mut self, id: usize, prev: usize) {
        self.nodes[id].prev = prev;
    }

    /// Node ids in forward order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        let mut at = self.head();
        std::iter::from_fn(move || {
            if at == Self::SENTINEL {
                None
            } else {
                let id = at;
                at = self.next(at);
                Some(id)
            }
        })
    }

    /// Keys in forward order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.ids().map(|id| self.key(id))
    }

    /// Post-sort verification: true when keys are non-decreasing front to
    /// back. Empty and single-node lists are trivially sorted. Stops at the
    /// first inversion; never mutates.
    pub fn is_sorted(&self) -> bool {
        let mut prev: Option<Key> = None;
        for key in self.keys() {
            if let Some(p) = prev {
                if key < p {
                    return false;
                }
            }
            prev = Some(key);
        }
        true
    }

    /// Structural check: exactly one forward cycle through the sentinel
    /// covering every node, with `next.prev == self` at each hop.
    pub fn is_well_formed(&self) -> bool {
        let mut visited = 0;
        let mut at = Self::SENTINEL;
        loop {
            let next = self.nodes[at].next;
            if next >= self.nodes.len() || self.nodes[next].prev != at {
                return false;
            }
            if next == Self::SENTINEL {
                break;
            }
            visited += 1;
            if visited > self.len() {
                return false;
            }
            at = next;
        }
        visited == self.len()
    }
}

impl Default for NodeList {
    fn default() -> Self {
        Self::new()
    }
}
