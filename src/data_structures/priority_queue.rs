use std::collections::HashMap;
use std::fmt::Debug;

use log::trace;

use crate::graph::VertexKey;
use crate::{Error, Result};

/// A fixed-capacity binary min-heap of `(vertex, priority)` pairs with decrease-key.
///
/// The queue never grows past the capacity given at construction, and holds at most
/// one entry per vertex. A position index maps every queued vertex to its slot in the
/// heap array so that `decrease_key` does not need to scan.
#[derive(Debug)]
pub struct PriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries: `heap[i].1 <= heap[2i+1].1` and `heap[i].1 <= heap[2i+2].1`
    heap: Vec<(VertexKey, P)>,

    /// vertex -> index in `heap`
    positions: HashMap<VertexKey, usize>,

    capacity: usize,
}

impl<P> PriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty queue able to hold exactly `capacity` elements
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let mut heap = Vec::new();
        heap.try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;
        let mut positions = HashMap::new();
        positions
            .try_reserve(capacity)
            .map_err(|_| Error::OutOfMemory)?;

        Ok(PriorityQueue {
            heap,
            positions,
            capacity,
        })
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the fixed capacity given at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if `vertex` is currently queued
    pub fn contains(&self, vertex: VertexKey) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<(VertexKey, P)> {
        self.heap.first().copied()
    }

    /// Returns the queued priority of `vertex`
    pub fn priority(&self, vertex: VertexKey) -> Option<P> {
        self.positions.get(&vertex).map(|&idx| self.heap[idx].1)
    }

    /// Inserts `vertex` with the given priority
    pub fn insert(&mut self, vertex: VertexKey, priority: P) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(Error::QueueFull);
        }
        if self.contains(vertex) {
            return Err(Error::DuplicateElement(vertex));
        }

        let idx = self.heap.len();
        self.heap.push((vertex, priority));
        self.positions.insert(vertex, idx);
        self.sift_up(idx);

        trace!("queued vertex {} with priority {:?}", vertex, priority);
        Ok(())
    }

    /// Removes and returns the element with the smallest priority
    pub fn delete_min(&mut self) -> Result<(VertexKey, P)> {
        if self.heap.is_empty() {
            return Err(Error::QueueEmpty);
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let (vertex, priority) = self.heap.pop().ok_or(Error::QueueEmpty)?;
        self.positions.remove(&vertex);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((vertex, priority))
    }

    /// Lowers the priority of a queued vertex and restores heap order.
    ///
    /// A priority that is not lower than the current one is stored as given; the
    /// entry is then only moved upwards, so callers are expected to pass smaller
    /// values.
    pub fn decrease_key(&mut self, vertex: VertexKey, priority: P) -> Result<()> {
        if self.heap.is_empty() {
            return Err(Error::QueueEmpty);
        }
        let idx = *self
            .positions
            .get(&vertex)
            .ok_or(Error::ElementNotFound(vertex))?;

        self.heap[idx].1 = priority;
        self.sift_up(idx);

        trace!("decreased vertex {} to priority {:?}", vertex, priority);
        Ok(())
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx].1 < self.heap[parent].1 {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }

    /// Swap two entries and keep the position index in sync
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].0, a);
        self.positions.insert(self.heap[b].0, b);
    }
}
