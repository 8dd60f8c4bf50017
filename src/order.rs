use std::marker::PhantomData;

/// The ordering policy of a heap: decides which of two elements sits closer
/// to the root.
///
/// `precedes(a, b)` must be irreflexive and give the same answer for the same
/// pair for as long as both are in the heap. A policy that breaks this leaves
/// the heap in an unspecified order but never corrupts its bookkeeping.
pub trait Order<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Largest element on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: Ord> Order<T> for MaxOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

impl<T: Ord> Order<T> for MinOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders elements by a key extracted from each one.
///
/// Handy for records whose identity fields should not take part in the
/// comparison, e.g. a task ordered by its deadline only.
pub struct ByKey<T, K, F> {
    key: F,
    max_first: bool,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K: Ord, F: Fn(&T) -> K> ByKey<T, K, F> {
    /// Element with the largest key on top.
    pub fn max(key: F) -> Self {
        ByKey {
            key,
            max_first: true,
            _marker: PhantomData,
        }
    }

    /// Element with the smallest key on top.
    pub fn min(key: F) -> Self {
        ByKey {
            key,
            max_first: false,
            _marker: PhantomData,
        }
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> Order<T> for ByKey<T, K, F> {
    fn precedes(&self, a: &T, b: &T) -> bool {
        let (ka, kb) = ((self.key)(a), (self.key)(b));
        if self.max_first {
            ka > kb
        } else {
            ka < kb
        }
    }
}
