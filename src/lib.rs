//! # indexed-heap
//!
//! A binary heap priority queue that, besides push / peek / pop, removes any
//! element it holds in O(log n).
//!
//! Every pushed element gets an [`ElemId`]. The heap keeps a position index
//! from id to array slot and updates it on every swap, so finding an element
//! again costs O(1) and removing it costs one sift.
//!
//! ```
//! use indexed_heap::{HeapError, IndexedHeap, MaxOrder};
//!
//! let mut heap = IndexedHeap::new(MaxOrder);
//! let ids: Vec<_> = [5, 1, 9, 3, 7].into_iter().map(|v| heap.push(v)).collect();
//!
//! assert!(heap.remove(ids[3]));
//! assert!(!heap.remove(ids[3]));
//!
//! assert_eq!(heap.pop()?, 9);
//! assert_eq!(heap.pop()?, 7);
//! assert_eq!(heap.pop()?, 5);
//! assert_eq!(heap.pop()?, 1);
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! # Ok::<(), HeapError>(())
//! ```
//!
//! ## Ordering
//!
//! Any `Fn(&T, &T) -> bool` is an ordering policy: it answers "does `a` sit
//! above `b`". [`MaxOrder`], [`MinOrder`] and [`ByKey`] cover the usual cases.
//! The element type is fixed by the heap's type, so pushing anything else is
//! rejected by the compiler:
//!
//! ```compile_fail
//! use indexed_heap::{IndexedHeap, MaxOrder};
//!
//! let mut heap = IndexedHeap::new(MaxOrder);
//! heap.push(1u32);
//! heap.push("one");
//! ```
//!
//! ## Self-reporting elements
//!
//! Element types implementing [`HeapIndexed`] can have the heap write their
//! current position into them on every move:
//!
//! ```
//! use indexed_heap::{HeapIndex, HeapIndexed, IndexedHeap};
//!
//! struct Timer {
//!     deadline: u64,
//!     index: HeapIndex,
//! }
//!
//! impl HeapIndexed for Timer {
//!     fn heap_index(&self) -> Option<usize> {
//!         self.index.heap_index()
//!     }
//!
//!     fn set_heap_index(&mut self, index: Option<usize>) {
//!         self.index.set_heap_index(index)
//!     }
//! }
//!
//! let mut timers =
//!     IndexedHeap::with_self_reporting(|a: &Timer, b: &Timer| a.deadline < b.deadline);
//! let late = timers.push(Timer { deadline: 50, index: HeapIndex::default() });
//! let soon = timers.push(Timer { deadline: 10, index: HeapIndex::default() });
//!
//! assert_eq!(timers.get(soon).and_then(|t| t.heap_index()), Some(0));
//! assert_eq!(timers.get(late).and_then(|t| t.heap_index()), Some(1));
//! ```
//!
//! ## Concurrency
//!
//! The heap does no locking. Share it between threads behind a `Mutex` (or
//! keep it on one thread) like any other `&mut`-driven collection.
//!
//! ## Logging
//!
//! Structural changes are emitted at `trace` level through the [`log`]
//! facade. Install any `log` backend to see them.

mod builder;
mod errors;
mod heap;
mod order;
mod position;
mod reporting;
mod slots;

pub use builder::HeapBuilder;
pub use errors::HeapError;
pub use heap::{DrainSorted, IndexedHeap};
pub use order::{ByKey, MaxOrder, MinOrder, Order};
pub use reporting::{HeapIndex, HeapIndexed, IndexReporting, SelfReported, Silent};
pub use slots::ElemId;
