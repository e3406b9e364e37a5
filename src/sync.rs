use parking_lot::{Mutex, MutexGuard};

use crate::{error::EmptyHeapError, heap::MaxHeap};

/// A [`MaxHeap`] behind a mutex, shareable across threads via `Arc`.
///
/// Every method takes the lock for its whole duration, so each call is
/// atomic. Use [`lock`](Self::lock) when several operations must happen
/// without interleaving, e.g. peek-then-remove.
pub struct SyncMaxHeap<T: Ord> {
    heap: Mutex<MaxHeap<T>>,
}

impl<T> SyncMaxHeap<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self {
            heap: Mutex::new(MaxHeap::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Mutex::new(MaxHeap::with_capacity(capacity)),
        }
    }

    /// See [`MaxHeap::insert`].
    pub fn insert(&self, element: T) -> bool {
        self.heap.lock().insert(element)
    }

    /// See [`MaxHeap::remove`].
    pub fn remove(&self) -> Result<T, EmptyHeapError> {
        self.heap.lock().remove()
    }

    pub fn pop(&self) -> Option<T> {
        self.heap.lock().pop()
    }

    pub fn peek_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.heap.lock().peek().cloned()
    }

    pub fn len(&self) -> usize {
        self.heap.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.lock().is_empty()
    }

    pub fn clear(&self) {
        self.heap.lock().clear();
    }

    pub fn lock(&self) -> MutexGuard<'_, MaxHeap<T>> {
        self.heap.lock()
    }

    pub fn into_inner(self) -> MaxHeap<T> {
        self.heap.into_inner()
    }
}

impl<T: Ord> Default for SyncMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<MaxHeap<T>> for SyncMaxHeap<T> {
    fn from(heap: MaxHeap<T>) -> Self {
        Self {
            heap: Mutex::new(heap),
        }
    }
}

impl<T> std::fmt::Debug for SyncMaxHeap<T>
where
    T: Ord + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", *self.heap.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::SyncMaxHeap;
    use crate::{EmptyHeapError, MaxHeap};
    use rand::prelude::*;
    use std::{sync::Arc, thread};

    #[test]
    fn test_single_thread() {
        let heap = SyncMaxHeap::new();
        assert!(heap.insert(5));
        assert!(!heap.insert(3));
        assert!(heap.insert(8));
        assert_eq!(heap.peek_cloned(), Some(8));
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.remove(), Ok(8));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.remove(), Ok(3));
        assert_eq!(heap.remove(), Err(EmptyHeapError));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_lock_compound() {
        let heap = SyncMaxHeap::from(MaxHeap::from(vec![1, 9, 4]));
        {
            let mut guard = heap.lock();
            if guard.peek() == Some(&9) {
                assert_eq!(guard.remove(), Ok(9));
            }
            guard.insert(2);
        }
        assert_eq!(heap.into_inner().into_sorted_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn test_concurrent_insert() {
        let heap = Arc::new(SyncMaxHeap::with_capacity(4 * 1000));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    for _ in 0..1000 {
                        let n: u32 = rng.gen_range(0..100);
                        heap.insert(t * 100 + n);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(heap.len(), 4 * 1000);
        let mut last = u32::MAX;
        while let Ok(x) = heap.remove() {
            assert!(x <= last);
            last = x;
        }
    }

    #[test]
    fn test_concurrent_producers_consumers() {
        let heap = Arc::new(SyncMaxHeap::new());
        let producers: Vec<_> = (0..2)
            .map(|_| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    for i in 0..500 {
                        heap.insert(i);
                    }
                })
            })
            .collect();
        let consumers: Vec<_> = (0..2)
            .map(|_| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    let mut taken = 0;
                    for _ in 0..500 {
                        if heap.pop().is_some() {
                            taken += 1;
                        }
                    }
                    taken
                })
            })
            .collect();

        for p in producers {
            p.join().unwrap();
        }
        let taken: usize = consumers.into_iter().map(|c| c.join().unwrap()).sum();
        assert_eq!(heap.len() + taken, 1000);
    }
}
