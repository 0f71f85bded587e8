//! Array-backed binary min-heap.
//!
//! Items are kept in a `Vec` laid out as an implicit binary tree: the
//! children of slot `i` live at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. The smallest item according to `Ord` is always at slot 0.

use std::cmp::Ordering;

/// A value paired with a floating-point priority.
///
/// Ordered by `priority` (via [`f64::total_cmp`]) and then by `item`, so
/// entries with equal priority still compare deterministically.
#[derive(Clone, Copy, Debug)]
pub struct Prioritized<T> {
    pub priority: f64,
    pub item: T,
}

impl<T> Prioritized<T> {
    /// Pair `item` with `priority`.
    #[inline]
    pub fn new(priority: f64, item: T) -> Self {
        Self { priority, item }
    }
}

impl<T: Ord> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Prioritized<T> {}

impl<T: Ord> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Prioritized<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.item.cmp(&other.item))
    }
}

/// A min-priority queue.
///
/// [`dequeue`](Self::dequeue) always yields the smallest remaining item.
/// Equal items come out in an unspecified order, which is why search
/// frontiers use [`Prioritized`] payloads that never compare equal.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// The smallest item, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert an item.
    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest item, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let item = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        item
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] >= self.heap[parent] {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}
