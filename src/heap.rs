use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::builder::HeapBuilder;
use crate::errors::HeapError;
use crate::order::Order;
use crate::position::PositionMap;
use crate::reporting::{HeapIndexed, IndexReporting, SelfReported, Silent};
use crate::slots::{ElemId, Slots};

/// A priority queue backed by a binary heap that can remove any element it
/// holds, not just the top one.
///
/// Elements are stored in slots and the heap array holds slot indices, so a
/// sift moves an index rather than the element. Every element has an
/// [`ElemId`] and a position index entry; both are kept in step with the
/// array on every swap, insert and removal.
///
/// `O` decides which element is on top. `R` decides whether elements are
/// told their position (see [`SelfReported`]).
pub struct IndexedHeap<T, O, R = Silent> {
    data: Vec<usize>,
    slots: Slots<T>,
    pos: PositionMap,
    order: O,
    _reporting: PhantomData<fn() -> R>,
}

impl<T, O: Order<T>> IndexedHeap<T, O, Silent> {
    pub fn new(order: O) -> Self {
        Self::from_parts(order, 0)
    }

    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self::from_parts(order, capacity)
    }

    /// Start configuring a heap; see [`HeapBuilder`].
    pub fn builder() -> HeapBuilder<T, O> {
        HeapBuilder::new()
    }
}

impl<T: HeapIndexed, O: Order<T>> IndexedHeap<T, O, SelfReported> {
    /// A heap that writes each element's position back into the element.
    pub fn with_self_reporting(order: O) -> Self {
        Self::from_parts(order, 0)
    }
}

impl<T, O: Order<T>, R: IndexReporting<T>> IndexedHeap<T, O, R> {
    pub(crate) fn from_parts(order: O, capacity: usize) -> Self {
        IndexedHeap {
            data: Vec::with_capacity(capacity),
            slots: Slots::with_capacity(capacity),
            pos: PositionMap::with_capacity(capacity),
            order,
            _reporting: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.slots.reserve(additional);
    }

    /// The ordering policy this heap was built with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Insert an element and return its identity.
    pub fn push(&mut self, value: T) -> ElemId {
        let id = self.slots.insert(value);
        let idx = self.data.len();
        self.data.push(id.slot());
        self.place(idx);
        self.sift_up(idx);
        trace!("push {:?} -> position {:?}", id, self.pos.get(id.slot()));
        id
    }

    /// Insert many elements at once.
    ///
    /// An empty heap is rebuilt bottom-up in O(n); otherwise each element is
    /// sifted up on its own. Ids are returned in input order.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> Vec<ElemId> {
        if !self.is_empty() {
            return values.into_iter().map(|v| self.push(v)).collect();
        }

        let ids: Vec<ElemId> = values
            .into_iter()
            .map(|v| {
                let id = self.slots.insert(v);
                let idx = self.data.len();
                self.data.push(id.slot());
                self.place(idx);
                id
            })
            .collect();
        self.rebuild();
        trace!("heapified {} elements", ids.len());
        ids
    }

    /// The element on top of the heap.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data
            .first()
            .map(|&slot| self.slots.at(slot))
            .ok_or(HeapError::Empty)
    }

    /// Identity of the element on top of the heap.
    pub fn peek_id(&self) -> Result<ElemId, HeapError> {
        self.data
            .first()
            .map(|&slot| self.slots.id_of(slot))
            .ok_or(HeapError::Empty)
    }

    /// Remove and return the element on top of the heap.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.remove_index(0))
    }

    /// Remove the element at array position `position`.
    ///
    /// Returns `None` if the position is past the end of the heap.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.data.len() {
            return None;
        }
        Some(self.remove_index(position))
    }

    /// Remove the element with identity `id`.
    ///
    /// Returns `false` if it was already removed or never belonged to this
    /// heap.
    pub fn remove(&mut self, id: ElemId) -> bool {
        self.take(id).is_some()
    }

    /// Remove the element with identity `id` and hand it back.
    pub fn take(&mut self, id: ElemId) -> Option<T> {
        let idx = self.position(id)?;
        Some(self.remove_index(idx))
    }

    pub fn contains(&self, id: ElemId) -> bool {
        self.position(id).is_some()
    }

    /// Current array position of `id`, `None` if it is not resident.
    pub fn position(&self, id: ElemId) -> Option<usize> {
        if !self.slots.is_live(id) {
            return None;
        }
        self.pos.get(id.slot())
    }

    pub fn get(&self, id: ElemId) -> Option<&T> {
        self.position(id)?;
        self.slots.get(id)
    }

    /// Change an element in place and move it to where it now belongs.
    ///
    /// This is decrease-key and increase-key in one. Returns `false` if `id`
    /// is not resident.
    pub fn update<F: FnOnce(&mut T)>(&mut self, id: ElemId, f: F) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        f(self.slots.at_mut(id.slot()));
        // the closure may have touched the element's cached index
        self.place(idx);
        self.restore(idx);
        true
    }

    /// Remove every element.
    ///
    /// Ids handed out before the call no longer resolve afterwards.
    pub fn clear(&mut self) {
        for slot in self.data.drain(..) {
            self.pos.remove(slot);
            let mut value = self.slots.vacate(slot);
            R::report(&mut value, None);
        }
        self.pos.clear();
    }

    /// Iterator that pops elements in extraction order.
    ///
    /// Whatever is left when the iterator is dropped is removed as well.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O, R> {
        DrainSorted { heap: self }
    }

    /// Consume the heap and return its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.drain_sorted());
        out
    }

    fn remove_index(&mut self, idx: usize) -> T {
        let slot = self.data.swap_remove(idx);
        // retire the element before the comparator runs again
        self.pos.remove(slot);
        let id = self.slots.id_of(slot);
        let mut value = self.slots.vacate(slot);
        R::report(&mut value, None);
        if idx < self.data.len() {
            self.place(idx);
            self.restore(idx);
        }
        trace!("remove {:?} from position {}", id, idx);
        value
    }

    /// Re-establish order around `idx` after its occupant changed.
    fn restore(&mut self, idx: usize) {
        if !self.sift_down(idx) {
            self.sift_up(idx);
        }
    }

    fn rebuild(&mut self) {
        let len = self.data.len();
        for idx in (0..len / 2).rev() {
            self.sift_down(idx);
        }
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.order
            .precedes(self.slots.at(self.data[a]), self.slots.at(self.data[b]))
    }

    /// Move `idx` toward the root while it precedes its parent.
    fn sift_up(&mut self, mut idx: usize) -> bool {
        let start = idx;
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.precedes(idx, parent) {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
        idx != start
    }

    /// Move `idx` toward the leaves while a child precedes it.
    fn sift_down(&mut self, mut idx: usize) -> bool {
        let start = idx;
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut top = idx;

            if left < len && self.precedes(left, top) {
                top = left;
            }
            if right < len && self.precedes(right, top) {
                top = right;
            }

            if top != idx {
                self.swap_entries(idx, top);
                idx = top;
            } else {
                break;
            }
        }
        idx != start
    }

    /// Swap two entries in the heap and update the position map.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.place(a);
        self.place(b);
    }

    /// Record that the occupant of `idx` lives there.
    fn place(&mut self, idx: usize) {
        let slot = self.data[idx];
        self.pos.set(slot, idx);
        R::report(self.slots.at_mut(slot), Some(idx));
    }
}

impl<T, O: Order<T>, R: IndexReporting<T>> Extend<T> for IndexedHeap<T, O, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T, O, R> fmt::Debug for IndexedHeap<T, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("len", &self.data.len())
            .field("slots", &self.slots.slot_count())
            .finish()
    }
}

/// Draining iterator returned by [`IndexedHeap::drain_sorted`].
pub struct DrainSorted<'a, T, O: Order<T>, R: IndexReporting<T>> {
    heap: &'a mut IndexedHeap<T, O, R>,
}

impl<T, O: Order<T>, R: IndexReporting<T>> Iterator for DrainSorted<'_, T, O, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, O: Order<T>, R: IndexReporting<T>> ExactSizeIterator for DrainSorted<'_, T, O, R> {}

impl<T, O: Order<T>, R: IndexReporting<T>> Drop for DrainSorted<'_, T, O, R> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
