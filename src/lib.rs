//! A generic binary max-heap.
//!
//! [`MaxHeap`] keeps elements of any `Ord` type as a complete binary tree in
//! a `Vec`, giving O(log n) insertion and extraction of the greatest element.
//! [`SyncMaxHeap`] wraps it in a mutex for shared use across threads.
//!
//! ```rust
//! use max_heap::{EmptyHeapError, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.remove(), Ok(9));
//! assert_eq!(heap.remove(), Ok(8));
//!
//! let mut empty: MaxHeap<i32> = MaxHeap::new();
//! assert_eq!(empty.remove(), Err(EmptyHeapError));
//! ```

pub mod error;
pub mod heap;
pub mod sync;

pub use error::EmptyHeapError;
pub use heap::{MaxHeap, MinHeap};
pub use sync::SyncMaxHeap;
