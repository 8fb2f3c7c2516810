use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A wrapper around BinaryHeap for priority queue operations in shortest path
/// algorithms.
///
/// Entries are ordered by priority alone, smallest priority first, so the
/// value type only needs to be movable: it is never compared.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Entry<V, P>>,
}

#[derive(Debug)]
struct Entry<V, P> {
    value: V,
    priority: P,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest priority
        other.priority.cmp(&self.priority)
    }
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Entry { value, priority });
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|entry| (entry.value, entry.priority))
    }

    /// Returns the smallest priority in the queue without removing it
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        MinPriorityQueue::new()
    }
}
