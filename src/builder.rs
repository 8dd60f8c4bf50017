use std::marker::PhantomData;

use log::debug;

use crate::errors::HeapError;
use crate::heap::IndexedHeap;
use crate::order::Order;
use crate::reporting::{HeapIndexed, IndexReporting, SelfReported, Silent};

/// Chained configuration for an [`IndexedHeap`].
///
/// Problems are collected while setting parameters and reported once, by
/// [`build`](HeapBuilder::build).
///
/// ```
/// use indexed_heap::{HeapError, IndexedHeap, MinOrder};
///
/// let mut heap = IndexedHeap::builder()
///     .order(MinOrder)
///     .capacity(64)
///     .build()?;
///
/// heap.push(3);
/// heap.push(1);
/// assert_eq!(heap.pop()?, 1);
/// # Ok::<(), HeapError>(())
/// ```
pub struct HeapBuilder<T, O, R = Silent> {
    order: Option<O>,
    capacity: Option<usize>,
    duplicate: Option<&'static str>,
    _marker: PhantomData<fn(T) -> R>,
}

impl<T, O> HeapBuilder<T, O, Silent> {
    pub fn new() -> Self {
        HeapBuilder {
            order: None,
            capacity: None,
            duplicate: None,
            _marker: PhantomData,
        }
    }
}

impl<T, O> Default for HeapBuilder<T, O, Silent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HeapIndexed, O> HeapBuilder<T, O, Silent> {
    /// Have the heap report positions back to its elements.
    pub fn self_reporting(self) -> HeapBuilder<T, O, SelfReported> {
        HeapBuilder {
            order: self.order,
            capacity: self.capacity,
            duplicate: self.duplicate,
            _marker: PhantomData,
        }
    }
}

impl<T, O, R> HeapBuilder<T, O, R> {
    /// Set the ordering policy. Required.
    pub fn order(mut self, order: O) -> Self {
        if self.order.is_some() {
            self.duplicate.get_or_insert("order");
        }
        self.order = Some(order);
        self
    }

    /// Preallocate room for this many elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        if self.capacity.is_some() {
            self.duplicate.get_or_insert("capacity");
        }
        self.capacity = Some(capacity);
        self
    }
}

impl<T, O: Order<T>, R: IndexReporting<T>> HeapBuilder<T, O, R> {
    pub fn build(self) -> Result<IndexedHeap<T, O, R>, HeapError> {
        if let Some(parameter) = self.duplicate {
            return Err(HeapError::DuplicateParameter { parameter });
        }
        let order = self
            .order
            .ok_or(HeapError::MissingParameter { parameter: "order" })?;
        let capacity = self.capacity.unwrap_or(0);
        debug!("building heap with capacity {}", capacity);
        Ok(IndexedHeap::from_parts(order, capacity))
    }
}
