use std::cmp::Ordering;
use std::fmt;
use std::mem;

use thiserror::Error;

use crate::order::{Natural, Reversed, TotalOrder};

/// Returned by [`Heap::peek`] and [`Heap::pop`] on a heap of size 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("method invoked by an empty heap")]
pub struct EmptyHeapError;

/// A binary heap over a [`TotalOrder`], greatest element first.
///
/// The complete tree is stored in a dense array: the children of index `i`
/// sit at `2i+1` and `2i+2`, its parent at `(i-1)/2`. Whether the heap acts
/// as a max- or min-priority queue is entirely a property of the supplied
/// ordering.
///
/// It is a logic error to mutate a stored element so that its ordering
/// relative to the other stored elements changes; the heap property is
/// silently lost.
pub struct Heap<O: TotalOrder> {
    order: O,
    tree: Vec<O::Elem>,
}

pub type MaxHeap<T> = Heap<Natural<T>>;
pub type MinHeap<T> = Heap<Reversed<Natural<T>>>;

impl<T: Ord> Heap<Natural<T>> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::with_order(Natural::new())
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, Natural::new())
    }
}

impl<T: Ord> Heap<Reversed<Natural<T>>> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::with_order(Reversed(Natural::new()))
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, Reversed(Natural::new()))
    }
}

impl<O: TotalOrder> Heap<O> {
    /// O(1)
    #[inline]
    pub fn with_order(order: O) -> Self {
        Self {
            order,
            tree: Vec::new(),
        }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            order,
            tree: Vec::with_capacity(capacity),
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// O(1)
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Result<&O::Elem, EmptyHeapError> {
        self.tree.first().ok_or(EmptyHeapError)
    }

    /// The storage in array order, root first. Heap-ordered, not sorted.
    #[inline]
    pub fn as_slice(&self) -> &[O::Elem] {
        &self.tree
    }

    /// O(log n)
    pub fn push(&mut self, value: O::Elem) {
        self.tree.push(value);
        self.sift_up(self.tree.len() - 1);
    }

    /// O(log n)
    pub fn pop(&mut self) -> Result<O::Elem, EmptyHeapError> {
        let mut res = self.tree.pop().ok_or(EmptyHeapError)?;
        if let Some(root) = self.tree.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(0);
        }
        Ok(res)
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        // Runs down to node 1 inclusive, so a pushed element can take the
        // root slot.
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.order.cmp(&self.tree[node], &self.tree[parent]) == Ordering::Greater {
                self.tree.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            if left >= self.tree.len() {
                break;
            }

            let mut child = left;
            if right < self.tree.len()
                && self.order.cmp(&self.tree[right], &self.tree[left]) == Ordering::Greater
            {
                child = right;
            }

            if self.order.cmp(&self.tree[node], &self.tree[child]) == Ordering::Less {
                self.tree.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }
}

impl<O: TotalOrder + Clone> Clone for Heap<O>
where
    O::Elem: Clone,
{
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            tree: self.tree.clone(),
        }
    }
}

impl<O: TotalOrder + Default> Default for Heap<O> {
    #[inline]
    fn default() -> Self {
        Self::with_order(O::default())
    }
}

impl<O: TotalOrder> fmt::Debug for Heap<O>
where
    O::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.tree.iter()).finish()
    }
}
