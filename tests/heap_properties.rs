use std::collections::HashMap;

use indexed_heap::{
    ElemId, HeapError, HeapIndex, HeapIndexed, IndexReporting, IndexedHeap, MaxOrder, MinOrder,
    Order,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
struct Task {
    priority: i64,
    index: HeapIndex,
}

impl Task {
    fn new(priority: i64) -> Self {
        Task {
            priority,
            index: HeapIndex::default(),
        }
    }
}

impl HeapIndexed for Task {
    fn heap_index(&self) -> Option<usize> {
        self.index.heap_index()
    }

    fn set_heap_index(&mut self, index: Option<usize>) {
        self.index.set_heap_index(index)
    }
}

fn by_priority(a: &Task, b: &Task) -> bool {
    a.priority > b.priority
}

/// Check heap order and the position index using only the public API.
fn check_heap<T, O, R>(heap: &IndexedHeap<T, O, R>, live: &[ElemId])
where
    O: Order<T>,
    R: IndexReporting<T>,
{
    assert_eq!(heap.len(), live.len());

    let mut at: HashMap<usize, ElemId> = HashMap::new();
    for &id in live {
        let pos = heap.position(id).expect("resident element has a position");
        assert!(pos < heap.len());
        assert!(at.insert(pos, id).is_none(), "two elements share position {pos}");
    }

    for (&pos, &id) in &at {
        if pos == 0 {
            continue;
        }
        let parent = at[&((pos - 1) / 2)];
        let child = heap.get(id).unwrap();
        let parent = heap.get(parent).unwrap();
        assert!(
            !heap.order().precedes(child, parent),
            "element at {pos} precedes its parent"
        );
    }
}

fn check_self_reports<O: Order<Task>>(
    heap: &IndexedHeap<Task, O, indexed_heap::SelfReported>,
    live: &[ElemId],
) {
    for &id in live {
        let task = heap.get(id).unwrap();
        assert_eq!(task.heap_index(), heap.position(id));
    }
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap = IndexedHeap::with_self_reporting(by_priority);
    let mut live: Vec<ElemId> = Vec::new();
    let mut dead: Vec<ElemId> = Vec::new();

    for _ in 0..2000 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let id = heap.push(Task::new(rng.gen_range(-50..50)));
                live.push(id);
            }
            5 | 6 if !live.is_empty() => {
                let id = live.swap_remove(rng.gen_range(0..live.len()));
                let task = heap.take(id).unwrap();
                assert_eq!(task.heap_index(), None);
                dead.push(id);
            }
            7 if !live.is_empty() => {
                let top = heap.peek().unwrap().priority;
                assert!(live
                    .iter()
                    .all(|&id| heap.get(id).unwrap().priority <= top));
                let top_id = heap.peek_id().unwrap();
                let task = heap.pop().unwrap();
                assert_eq!(task.priority, top);
                live.retain(|&id| id != top_id);
                dead.push(top_id);
            }
            8 if !live.is_empty() => {
                let id = live[rng.gen_range(0..live.len())];
                let priority = rng.gen_range(-50..50);
                assert!(heap.update(id, |t| t.priority = priority));
            }
            _ => {
                if let Some(&id) = dead.last() {
                    assert!(!heap.remove(id));
                }
            }
        }
        check_heap(&heap, &live);
        check_self_reports(&heap, &live);
    }
}

#[test]
fn test_push_then_pop_is_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<u32> = (0..500).map(|_| rng.gen_range(0..100)).collect();

    let mut heap = IndexedHeap::new(MinOrder);
    for &v in &values {
        heap.push(v);
    }
    let mut out = Vec::new();
    while let Ok(v) = heap.pop() {
        out.push(v);
    }

    let mut expected = values.clone();
    expected.sort();
    assert_eq!(out, expected);
    assert!(heap.is_empty());
}

#[test]
fn test_arbitrary_removal_scenario() {
    let mut heap = IndexedHeap::new(MaxOrder);
    let ids: Vec<ElemId> = [5, 1, 9, 3, 7].iter().map(|&v| heap.push(v)).collect();

    assert!(heap.remove(ids[3]));
    let live: Vec<ElemId> = ids.iter().copied().filter(|&id| id != ids[3]).collect();
    check_heap(&heap, &live);

    let drained: Vec<i32> = heap.drain_sorted().collect();
    assert_eq!(drained, vec![9, 7, 5, 1]);
}

#[test]
fn test_not_found_idempotence() {
    let mut heap = IndexedHeap::new(MaxOrder);
    let id = heap.push(10);
    let mut other = IndexedHeap::new(MaxOrder);
    let never_inserted = other.push(10);

    assert!(heap.remove(id));
    assert!(!heap.remove(id));
    assert!(!heap.remove(never_inserted));
    assert_eq!(heap.take(id), None);
}

#[test]
fn test_fresh_heap_is_empty() {
    let mut heap: IndexedHeap<String, _> = IndexedHeap::new(|a: &String, b: &String| a < b);
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(HeapError::Empty));
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn test_heapify_then_remove_everything_by_id() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = IndexedHeap::new(MaxOrder);
    let mut live = heap.push_all((0..300).map(|_| rng.gen_range(0..1000)));
    check_heap(&heap, &live);

    while !live.is_empty() {
        let id = live.swap_remove(rng.gen_range(0..live.len()));
        assert!(heap.remove(id));
        check_heap(&heap, &live);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_heapify_reports_positions_to_elements() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut heap = IndexedHeap::with_self_reporting(by_priority);
    let mut live = heap.push_all((0..200).map(|_| Task::new(rng.gen_range(-100..100))));
    check_heap(&heap, &live);
    check_self_reports(&heap, &live);

    heap.extend((0..50).map(|_| Task::new(rng.gen_range(-100..100))));
    assert_eq!(heap.len(), 250);
    check_self_reports(&heap, &live);

    while live.len() > 100 {
        let id = live.swap_remove(rng.gen_range(0..live.len()));
        assert!(heap.remove(id));
        check_self_reports(&heap, &live);
    }
}
