//!An indexed binary min heap supporting extraction of the lowest-priority element and in-place
//!priority decreases.
//!
//!All state lives in two plain collections owned by the heap, and nothing in here locks. When the
//!heap has to be shared between threads, put it behind whatever mutex the caller already uses.
//!
//!## Why is this necessary?
//!The binary heap provided by the standard library (`std::collections::BinaryHeap`) offers no way
//!to reach an element once it has been pushed. Graph searches such as Dijkstra's algorithm need to
//!lower the priority of an element already in the queue when a shorter path turns up, without
//!pushing a duplicate.
//!
//!## How does it work?
//!Every insert hands back a `minheap::NodeId`. The heap keeps a dense `Vec` of nodes laid out as
//!a complete binary tree (1-based positions: children of `i` at `2i` and `2i + 1`, parent at
//!`i / 2`) and a `HashMap<NodeId, usize>` that records where each node currently sits.
//!Every relocation goes through a single swap routine which updates both together, so the
//!index never drifts from the tree.
//!
//!`decrease_priority()` looks the node up through that index in O(1), lowers its priority and
//!sifts it up. Equal priorities are served in insertion order.
//!
//!## Limitations
//!Only decreases are supported; raising a priority or removing an arbitrary node is not. Ids are
//!`u64` and never reused, so a single heap can issue at most `2^64 - 1` of them.

use std::{cmp::Ordering, collections::HashMap};

use log::{debug, trace};

mod config;
mod dump;
mod error;
mod node;

pub use config::HeapConfig;
pub use dump::HeapDump;
pub use error::{HeapError, Result};
pub use node::{HeapNode, NodeId};

/// Position of the root node.
const ROOT: usize = 1;

/// A binary min heap whose nodes can be addressed by the `NodeId` handed
/// out at insertion.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P, V> {
    /// in-memory storage for nodes, position `p` lives at `nodes[p - 1]`
    nodes: Vec<HeapNode<P, V>>,

    /// mapping from ids of held nodes to their positions in the heap
    index: HashMap<NodeId, usize>,

    /// number of node slots before the next growth
    capacity: usize,

    next_id: u64,

    config: HeapConfig,
}

impl<P, V> IndexedMinHeap<P, V>
where
    P: Ord,
{
    /// Creates an empty heap using the default [`HeapConfig`].
    pub fn new() -> Self {
        Self::build(HeapConfig::default())
    }

    /// Creates an empty heap with room for `capacity` nodes before it
    /// has to grow. Fails with `InvalidArgument` for a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::from_config(HeapConfig::default().with_initial_capacity(capacity))
    }

    pub fn from_config(config: HeapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: HeapConfig) -> Self {
        let capacity = config.initial_capacity;
        debug!("Creating indexed min heap with capacity {}", capacity);

        IndexedMinHeap {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            capacity,
            next_id: 1,
            config,
        }
    }

    /// Creates a heap holding the given `(priority, value)` pairs. Ids are
    /// assigned in iteration order, then the whole buffer is arranged with
    /// a single `build_heap()` pass instead of sifting each node up.
    pub fn from_entries<I>(capacity: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, V)>,
    {
        let mut heap = Self::with_capacity(capacity)?;

        for (priority, value) in entries {
            heap.append(priority, value);
        }

        heap.build_heap();
        debug!(
            "Built indexed min heap with {} nodes, capacity {}",
            heap.len(),
            heap.capacity
        );

        Ok(heap)
    }

    #[inline]
    fn node(&self, pos: usize) -> &HeapNode<P, V> {
        &self.nodes[pos - 1]
    }

    /// Convenience method for comparing nodes at the given positions.
    /// Priorities decide; equal priorities fall back to the id, so the
    /// node inserted first wins.
    #[inline]
    fn cmp(&self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.node(i), self.node(j));

        a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id))
    }

    /// Swaps the nodes at the given positions and records both new
    /// positions in the index. This is the only place a node already in
    /// the heap changes position.
    #[inline]
    fn swap_positions(&mut self, i: usize, j: usize) {
        self.nodes.swap(i - 1, j - 1);

        let (id_i, id_j) = (self.node(i).id, self.node(j).id);
        self.index.insert(id_i, i);
        self.index.insert(id_j, j);
    }

    /// Restores heap property by moving the node at the given position
    /// upwards along its parents to the root, until it has no parent or
    /// it is >= to its parent. Returns the final position.
    /// ```text
    /// sift_up(heap, i) {
    ///     while i > 1 {
    ///         let parent = i / 2;
    ///         if heap[i] < heap[parent] {
    ///             swap(heap, i, parent); i = parent;
    ///         } else { break; }
    ///     }
    /// }
    /// ```
    fn sift_up(&mut self, pos: usize) -> usize {
        let mut i = pos;

        while i > ROOT {
            let parent = i / 2;

            if let Ordering::Less = self.cmp(i, parent) {
                self.swap_positions(i, parent);
                i = parent;
            } else {
                break;
            }
        }

        i
    }

    /// Restores heap property by moving the node at the given position
    /// downwards along its smaller child, towards the leaves, until it has
    /// no children or it is <= to both of them. Returns the final position.
    /// ```text
    /// sift_down(heap, i) {
    ///     while 2i <= len(heap) {
    ///         let min = 2i;
    ///         if 2i + 1 <= len(heap) && heap[2i + 1] < heap[min] { min = 2i + 1; }
    ///
    ///         if heap[min] < heap[i] { swap(heap, i, min); i = min; }
    ///         else { break; }
    ///     }
    /// }
    /// ```
    fn sift_down(&mut self, pos: usize) -> usize {
        let mut i = pos;

        loop {
            let (lc, rc) = (2 * i, 2 * i + 1);

            if lc > self.len() {
                break;
            }

            let min = if rc <= self.len() && self.cmp(rc, lc) == Ordering::Less {
                rc
            } else {
                lc
            };

            if let Ordering::Less = self.cmp(min, i) {
                self.swap_positions(i, min);
                i = min;
            } else {
                break;
            }
        }

        i
    }

    /// Arranges an unordered buffer into a heap, bottom-up.
    fn build_heap(&mut self) {
        for i in (ROOT..=(self.len() / 2)).rev() {
            self.sift_down(i);
        }
    }

    /// Grows the node storage by the configured factor and reserves room in
    /// the index to match. Existing nodes keep their positions.
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        self.capacity = self.config.grown(old_capacity);

        self.nodes.reserve_exact(self.capacity - self.nodes.len());
        self.index.reserve(self.capacity - self.index.len());

        debug!(
            "Grew indexed min heap capacity from {} to {}",
            old_capacity, self.capacity
        );
    }

    /// Places a new node at the end of the buffer without restoring the
    /// heap property. Returns its id and position.
    fn append(&mut self, priority: P, value: V) -> (NodeId, usize) {
        if self.len() == self.capacity {
            self.grow();
        }

        let id = NodeId(self.next_id);
        self.next_id += 1;

        self.nodes.push(HeapNode {
            id,
            priority,
            value,
        });

        let pos = self.len();
        self.index.insert(id, pos);

        (id, pos)
    }

    /// Inserts a new node and returns the id under which it can later be
    /// addressed.
    pub fn insert(&mut self, priority: P, value: V) -> NodeId {
        let (id, pos) = self.append(priority, value);
        self.sift_up(pos);

        id
    }

    /// Peeks at the node with the lowest priority.
    pub fn peek_min(&self) -> Result<&HeapNode<P, V>> {
        self.nodes.first().ok_or(HeapError::EmptyHeap)
    }

    /// Removes the node with the lowest priority. Its id is retired.
    pub fn extract_min(&mut self) -> Result<HeapNode<P, V>> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last = self.len();
        self.swap_positions(ROOT, last);

        let node = self.nodes.pop().ok_or(HeapError::EmptyHeap)?;
        self.index.remove(&node.id);

        if !self.is_empty() {
            self.sift_down(ROOT);
        }

        trace!("Extracted node {}, {} remaining", node.id, self.len());

        Ok(node)
    }

    /// Lowers the priority of the node with the given id and moves it
    /// towards the root as needed.
    ///
    /// Returns `false` without touching the heap if the id is not in the
    /// heap, or if `new_priority` is not strictly lower than the current
    /// one.
    pub fn decrease_priority(&mut self, id: NodeId, new_priority: P) -> bool {
        let pos = match self.position_of(id) {
            Some(pos) => pos,
            None => {
                trace!("Ignoring priority decrease for unknown node {}", id);
                return false;
            }
        };

        if new_priority >= self.node(pos).priority {
            trace!("Ignoring non-decreasing priority update for node {}", id);
            return false;
        }

        self.nodes[pos - 1].priority = new_priority;
        self.sift_up(pos);

        true
    }

    /// Removes every node, keeping the allocated capacity. Ids handed out
    /// so far stay retired.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
    }

    /// Consumes the heap, returning its nodes in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<HeapNode<P, V>> {
        let mut sorted = Vec::with_capacity(self.len());

        while let Ok(node) = self.extract_min() {
            sorted.push(node);
        }

        sorted
    }
}

impl<P, V> IndexedMinHeap<P, V> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the heap can hold before it grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the position of the node with the given id, if present.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the node with the given id, if present.
    pub fn get(&self, id: NodeId) -> Option<&HeapNode<P, V>> {
        self.position_of(id).map(|pos| &self.nodes[pos - 1])
    }

    /// Iterates over the nodes in position order, root first.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode<P, V>> {
        self.nodes.iter()
    }

    /// Ids of the held nodes with their positions, ordered by id.
    pub(crate) fn index_entries(&self) -> Vec<(NodeId, usize)> {
        let mut entries: Vec<_> = self.index.iter().map(|(&id, &pos)| (id, pos)).collect();
        entries.sort_unstable();

        entries
    }

    /// Returns a read-only, human-readable rendering of the heap's
    /// internals for debugging.
    pub fn dump(&self) -> HeapDump<'_, P, V> {
        HeapDump::new(self)
    }
}

impl<P, V> Default for IndexedMinHeap<P, V>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> Extend<(P, V)> for IndexedMinHeap<P, V>
where
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.insert(priority, value);
        }
    }
}
