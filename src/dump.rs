use std::fmt;

use crate::IndexedMinHeap;

/// Borrowed view over a heap's internals, rendered through `Display`.
///
/// Lists the size and capacity, every occupied position with its node's
/// priority and id, and the id-to-position index of the held nodes in id
/// order. The layout is meant for people reading logs and test failures,
/// not for parsing.
pub struct HeapDump<'a, P, V> {
    heap: &'a IndexedMinHeap<P, V>,
}

impl<'a, P, V> HeapDump<'a, P, V> {
    pub(crate) fn new(heap: &'a IndexedMinHeap<P, V>) -> Self {
        HeapDump { heap }
    }
}

impl<P, V> fmt::Display for HeapDump<'_, P, V>
where
    P: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IndexedMinHeap with size: {}", self.heap.len())?;
        writeln!(f, "\tcapacity: {}", self.heap.capacity())?;
        writeln!(f)?;

        writeln!(f, "position: priority [id]")?;
        for (i, node) in self.heap.iter().enumerate() {
            writeln!(f, "{}: {} [{}]", i + 1, node.priority(), node.id())?;
        }
        writeln!(f)?;

        writeln!(f, "id: position")?;
        for (id, pos) in self.heap.index_entries() {
            writeln!(f, "{}: {}", id, pos)?;
        }

        Ok(())
    }
}
