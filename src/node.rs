use std::fmt;

/// Stable handle for a node, assigned by the heap on insertion.
///
/// Ids start at 1 and are handed out sequentially. A heap never issues the
/// same id twice, so an id left over from an extracted node simply stops
/// matching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An element stored in the heap: its handle, its current priority and the
/// caller's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapNode<P, V> {
    pub(crate) id: NodeId,
    pub(crate) priority: P,
    pub(crate) value: V,
}

impl<P, V> HeapNode<P, V> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn priority(&self) -> &P {
        &self.priority
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Splits the node into `(id, priority, value)`.
    pub fn into_parts(self) -> (NodeId, P, V) {
        (self.id, self.priority, self.value)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}
