use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Identity of an element resident in an [`IndexedHeap`](crate::IndexedHeap).
///
/// Handed out by `push` and stable for as long as the element stays in the
/// heap, no matter how often it is moved. The generation makes a handle go
/// stale once its element leaves, even if the slot is later reused. The
/// owner tag keeps a handle from one heap from resolving in another. Both
/// counters are 64-bit and wrap only after 2^64 heaps or 2^64 reuses of one
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElemId {
    owner: u64,
    slot: usize,
    generation: u64,
}

impl ElemId {
    pub(crate) fn slot(&self) -> usize {
        self.slot
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    value: Option<T>,
}

/// Slot storage for heap elements.
///
/// Elements never move once stored; the heap shuffles slot indices instead.
/// Free slots are tracked in a free list so indices get reused after removal.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    owner: u64,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Slots {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots ever allocated, occupied or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.free.len()));
    }

    /// Store a value (reuse a free slot or grow) and return its id.
    pub fn insert(&mut self, value: T) -> ElemId {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.value = Some(value);
            ElemId {
                owner: self.owner,
                slot,
                generation: entry.generation,
            }
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            ElemId {
                owner: self.owner,
                slot,
                generation: 0,
            }
        }
    }

    /// True if `id` refers to an element that is still stored.
    pub fn is_live(&self, id: ElemId) -> bool {
        id.owner == self.owner
            && self
                .slots
                .get(id.slot)
                .is_some_and(|s| s.generation == id.generation && s.value.is_some())
    }

    pub fn get(&self, id: ElemId) -> Option<&T> {
        if self.is_live(id) {
            self.slots[id.slot].value.as_ref()
        } else {
            None
        }
    }

    /// Access by raw slot index; the caller guarantees the slot is occupied.
    pub fn at(&self, slot: usize) -> &T {
        match &self.slots[slot].value {
            Some(value) => value,
            None => unreachable!("slot {slot} is vacant"),
        }
    }

    pub fn at_mut(&mut self, slot: usize) -> &mut T {
        match &mut self.slots[slot].value {
            Some(value) => value,
            None => unreachable!("slot {slot} is vacant"),
        }
    }

    /// Id of the element currently stored in `slot`.
    pub fn id_of(&self, slot: usize) -> ElemId {
        ElemId {
            owner: self.owner,
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Take the value out of `slot` and put the slot on the free list.
    pub fn vacate(&mut self, slot: usize) -> T {
        let entry = &mut self.slots[slot];
        let value = match entry.value.take() {
            Some(value) => value,
            None => unreachable!("slot {slot} is already vacant"),
        };
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        self.len -= 1;
        value
    }
}
