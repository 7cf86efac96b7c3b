use thiserror::Error;

/// Errors reported by [`IndexedMinHeap`](crate::IndexedMinHeap) operations.
///
/// Every error is raised before the heap is touched, so a failed call
/// leaves the heap exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Heap is empty")]
    EmptyHeap,
}

pub type Result<T, E = HeapError> = std::result::Result<T, E>;
