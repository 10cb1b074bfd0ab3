use crate::{Cost, SlotMap, TileIndex};

/// A Tile queued in the open set, with the costs it was queued at.
///
/// The ordering key `f_cost` is recomputed from `g_cost + h_cost` at every comparison
/// and never stored, so an entry can not desynchronize from its own fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEntry {
    /// Identity of the queued Tile.
    pub index: TileIndex,
    /// Cost from the start Tile at the time of queueing.
    pub g_cost: Cost,
    /// Heuristic estimate to the target.
    pub h_cost: Cost,
}

impl OpenEntry {
    /// The heap ordering key: `g_cost + h_cost`.
    pub fn f_cost(&self) -> Cost {
        self.g_cost + self.h_cost
    }
}

/// A binary min-heap over [`OpenEntry`]s, ordered by [`f_cost`](OpenEntry::f_cost),
/// with an internal reverse index from Tile identity to heap slot.
///
/// The reverse index makes [`contains`](SearchHeap::contains) `O(1)` and
/// [`decrease_key`](SearchHeap::decrease_key) `O(log n)`, and is updated on every
/// swap, insertion and removal. It is maintained exclusively inside this type; no
/// caller ever sees or touches a heap slot.
///
/// Capacity is fixed at construction to `width * height` of the grid being searched,
/// the theoretical worst case of every Tile entering the open set. Exceeding it, or
/// updating an absent Tile, is a programmer error and panics.
#[derive(Clone, Debug)]
pub struct SearchHeap {
    heap: Vec<OpenEntry>,
    slots: SlotMap,
    capacity: usize,
}

impl SearchHeap {
    /// Creates an empty heap that can hold at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> SearchHeap {
        SearchHeap {
            heap: Vec::with_capacity(capacity),
            slots: SlotMap::with_capacity(capacity),
            capacity,
        }
    }

    /// The number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` if the Tile with `index` is currently queued.
    pub fn contains(&self, index: TileIndex) -> bool {
        self.slots.contains_key(&index)
    }

    /// The entry with the smallest `f_cost`, without removing it.
    pub fn peek(&self) -> Option<&OpenEntry> {
        self.heap.first()
    }

    /// Queues a new entry and sifts it up while its `f_cost` is strictly less than
    /// its parent's.
    ///
    /// Panics if the heap is at capacity, which means the size invariant
    /// `capacity = width * height` was violated by the caller.
    pub fn insert(&mut self, entry: OpenEntry) {
        assert!(
            self.heap.len() < self.capacity,
            "open set exceeded its capacity of {}",
            self.capacity
        );
        let slot = self.heap.len();
        self.slots.insert(entry.index, slot);
        self.heap.push(entry);
        self.sift_up(slot);
    }

    /// Removes and returns the entry with the smallest `f_cost`, or `None` if the
    /// heap is empty.
    pub fn pop(&mut self) -> Option<OpenEntry> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        self.slots.remove(&min.index);
        if !self.heap.is_empty() {
            self.slots.insert(self.heap[0].index, 0);
            self.sift_down(0);
        }
        Some(min)
    }

    /// Overwrites the queued entry for `entry.index` with the new costs and sifts
    /// it up.
    ///
    /// Precondition: the new `f_cost` must not be greater than the old one. The
    /// search engine only ever calls this after finding a strictly cheaper Path,
    /// so only a sift-up is performed; a cost *increase* would leave the heap
    /// inconsistent. This is not checked at runtime.
    ///
    /// Panics if the Tile is not queued.
    pub fn decrease_key(&mut self, entry: OpenEntry) {
        let slot = match self.slots.get(&entry.index) {
            Some(&slot) => slot,
            None => panic!("decrease_key for Tile {} not in the open set", entry.index),
        };
        self.heap[slot] = entry;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].f_cost() < self.heap[parent].f_cost() {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            // equal children prefer the left child, matching array order
            let mut child = left;
            if right < self.heap.len() && self.heap[right].f_cost() < self.heap[left].f_cost() {
                child = right;
            }
            if self.heap[slot].f_cost() <= self.heap[child].f_cost() {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].index, a);
        self.slots.insert(self.heap[b].index, b);
    }
}
