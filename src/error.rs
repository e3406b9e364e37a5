use thiserror::Error;

/// Returned when removing from a heap that holds no elements.
///
/// The heap is left untouched and can be refilled and reused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot remove from an empty heap")]
pub struct EmptyHeapError;
