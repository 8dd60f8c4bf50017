/// Positional map: tracks where each element lives in the heap array so
/// it can be found in O(1) for removal or re-sifting.
///
/// Keyed by slot index, which is the element's identity inside the heap.
#[derive(Debug, Default)]
pub(crate) struct PositionMap {
    positions: Vec<Option<usize>>,
}

impl PositionMap {
    pub fn with_capacity(capacity: usize) -> Self {
        PositionMap {
            positions: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.positions.get(slot).copied().flatten()
    }

    pub fn set(&mut self, slot: usize, pos: usize) {
        if slot >= self.positions.len() {
            self.positions.resize(slot + 1, None);
        }
        self.positions[slot] = Some(pos);
    }

    pub fn remove(&mut self, slot: usize) {
        if let Some(entry) = self.positions.get_mut(slot) {
            *entry = None;
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_grows_on_demand() {
        let mut pos = PositionMap::with_capacity(0);
        pos.set(4, 2);
        assert_eq!(pos.get(4), Some(2));
        assert_eq!(pos.get(3), None);
        assert_eq!(pos.get(100), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut pos = PositionMap::default();
        pos.set(0, 0);
        pos.set(1, 1);
        pos.remove(1);
        assert_eq!(pos.get(1), None);
        assert_eq!(pos.get(0), Some(0));
        // absent keys are a normal outcome
        pos.remove(42);

        pos.clear();
        assert_eq!(pos.get(0), None);
    }
}
