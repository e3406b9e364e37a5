use std::{cmp::Reverse, fmt, mem, slice};

use crate::error::EmptyHeapError;

/// A binary max-heap kept as a complete binary tree in a `Vec`.
///
/// The root lives at index 0 and the children of `i` at `2i + 1` and
/// `2i + 2`, so every slot in `data` holds a real element.
///
/// `MaxHeap` does no locking of its own; share it across threads through
/// [`SyncMaxHeap`](crate::SyncMaxHeap) or another lock.
#[derive(Clone, Debug)]
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
}

pub type MinHeap<T> = MaxHeap<Reverse<T>>;

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

#[inline]
fn left_child(pos: usize) -> usize {
    2 * pos + 1
}

#[inline]
fn right_child(pos: usize) -> usize {
    2 * pos + 2
}

impl<T> MaxHeap<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The greatest element, or `None` when empty. O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The backing storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates the elements in heap order, which is not sorted.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Inserts `element` and returns whether it became the new root. O(log n)
    ///
    /// The element only climbs past parents it is strictly greater than, so
    /// inserting a value equal to the current maximum returns `false`.
    pub fn insert(&mut self, element: T) -> bool {
        self.data.push(element);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last) == 0
    }

    /// Removes and returns the greatest element. O(log n)
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeapError`] if the heap has no elements; the heap is
    /// left unchanged.
    pub fn remove(&mut self) -> Result<T, EmptyHeapError> {
        let last = self.data.pop().ok_or(EmptyHeapError)?;
        let top = match self.data.first_mut() {
            Some(root) => mem::replace(root, last),
            None => return Ok(last),
        };

        let end = self.data.len();
        Self::sift_down(&mut self.data, 0, end);
        Ok(top)
    }

    /// Like [`remove`](Self::remove), but `None` on an empty heap.
    pub fn pop(&mut self) -> Option<T> {
        self.remove().ok()
    }

    /// Consumes the heap and returns its elements in ascending order. O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            Self::sift_down(&mut self.data, 0, end);
        }
        self.data
    }

    /// Writes the tree rendering of [`Display`](fmt::Display) to stdout.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self);
    }

    /// Moves `data[pos]` up while it is strictly greater than its parent and
    /// returns where it stopped.
    fn sift_up(data: &mut [T], mut pos: usize) -> usize {
        while pos > 0 {
            let up = parent(pos);
            if data[pos] > data[up] {
                data.swap(pos, up);
                pos = up;
            } else {
                break;
            }
        }
        pos
    }

    #[inline]
    fn is_leaf(pos: usize, end: usize) -> bool {
        left_child(pos) >= end
    }

    /// Moves `data[pos]` down within `data[..end]` until it is no smaller
    /// than its children.
    fn sift_down(data: &mut [T], mut pos: usize, end: usize) {
        while !Self::is_leaf(pos, end) {
            let left = left_child(pos);
            let right = right_child(pos);

            // equal children: take the right one
            let larger = if right < end && data[left] <= data[right] {
                right
            } else {
                left
            };

            if data[pos] < data[larger] {
                data.swap(pos, larger);
                pos = larger;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    /// Builds the heap bottom-up in O(n).
    fn from(mut data: Vec<T>) -> Self {
        let end = data.len();
        for i in (0..end / 2).rev() {
            Self::sift_down(&mut data, i, end);
        }
        Self { data }
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

/// One line per internal node: the node, its left child and, if present, its
/// right child. For eyeballing only.
impl<T> fmt::Display for MaxHeap<T>
where
    T: Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.data.len() / 2 {
            write!(
                f,
                "PARENT : {} LEFT CHILD : {}",
                self.data[i],
                self.data[left_child(i)]
            )?;
            if let Some(right) = self.data.get(right_child(i)) {
                write!(f, " RIGHT CHILD : {}", right)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
