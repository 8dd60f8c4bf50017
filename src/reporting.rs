//! Optional self-reporting of heap positions.
//!
//! An element type that implements [`HeapIndexed`] can be told its current
//! array position every time the heap moves it, and `None` when it leaves.
//! Whether a heap does this is fixed by its `R` type parameter at
//! construction: [`Silent`] skips the callback, [`SelfReported`] performs it.
//! The heap's own position index stays the authority either way.

/// Capability of an element to cache its own heap position.
pub trait HeapIndexed {
    /// Last position the owning heap reported, `None` when not resident.
    fn heap_index(&self) -> Option<usize>;

    fn set_heap_index(&mut self, index: Option<usize>);
}

/// Embeddable position field.
///
/// ```
/// use indexed_heap::{HeapIndex, HeapIndexed};
///
/// struct Job {
///     deadline: u64,
///     index: HeapIndex,
/// }
///
/// impl HeapIndexed for Job {
///     fn heap_index(&self) -> Option<usize> {
///         self.index.heap_index()
///     }
///
///     fn set_heap_index(&mut self, index: Option<usize>) {
///         self.index.set_heap_index(index)
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapIndex {
    index: Option<usize>,
}

impl HeapIndexed for HeapIndex {
    fn heap_index(&self) -> Option<usize> {
        self.index
    }

    fn set_heap_index(&mut self, index: Option<usize>) {
        self.index = index;
    }
}

/// How a heap passes position changes on to its elements.
pub trait IndexReporting<T> {
    fn report(element: &mut T, index: Option<usize>);
}

/// Elements are not told where they live.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> IndexReporting<T> for Silent {
    #[inline]
    fn report(_element: &mut T, _index: Option<usize>) {}
}

/// Elements receive every position change through [`HeapIndexed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfReported;

impl<T: HeapIndexed> IndexReporting<T> for SelfReported {
    #[inline]
    fn report(element: &mut T, index: Option<usize>) {
        element.set_heap_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_reported_writes_through() {
        let mut idx = HeapIndex::default();
        assert_eq!(idx.heap_index(), None);
        <SelfReported as IndexReporting<HeapIndex>>::report(&mut idx, Some(3));
        assert_eq!(idx.heap_index(), Some(3));
        <SelfReported as IndexReporting<HeapIndex>>::report(&mut idx, None);
        assert_eq!(idx.heap_index(), None);
    }

    #[test]
    fn test_silent_leaves_element_alone() {
        let mut idx = HeapIndex::default();
        idx.set_heap_index(Some(1));
        <Silent as IndexReporting<HeapIndex>>::report(&mut idx, Some(5));
        assert_eq!(idx.heap_index(), Some(1));
    }
}
