//! Ordered collection primitive backing every level of the hierarchy.
//!
//! Occupied slots of an arena are threaded into a circular doubly-linked
//! ring through a sentinel slot (index 0), so appends and removals are O(1)
//! and forward traversal yields entries in insertion order. Handles carry a
//! generation counter; removing an entry bumps its slot's generation, which
//! permanently invalidates every copy of the handle even after the slot is
//! recycled.

const SENTINEL: usize = 0;

/// Stable handle to an entry in an [`OrderedList`].
///
/// Handles are cheap to copy and remain valid until the entry they point at
/// is removed. A stale handle is never confused with a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    prev: usize,
    next: usize,
    value: Option<T>,
}

/// Insertion-ordered collection with O(1) tail append and O(1) removal by
/// handle.
#[derive(Debug)]
pub struct OrderedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    /// Creates an empty list: the sentinel ring pointing at itself.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                prev: SENTINEL,
                next: SENTINEL,
                value: None,
            }],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Appends `value` at the logical tail and returns its handle.
    ///
    /// The sentinel's `prev` link is the tail, so the splice is O(1).
    pub fn push_back(&mut self, value: T) -> EntryId {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].value = Some(value);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    prev: SENTINEL,
                    next: SENTINEL,
                    value: Some(value),
                });
                self.slots.len() - 1
            }
        };

        let tail = self.slots[SENTINEL].prev;
        self.slots[index].prev = tail;
        self.slots[index].next = SENTINEL;
        self.slots[tail].next = index;
        self.slots[SENTINEL].prev = index;
        self.len += 1;

        EntryId {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Unlinks the entry behind `id` and returns its value, or `None` if the
    /// handle is stale or foreign. The slot's generation is bumped so `id`
    /// (and any copy of it) can never resolve again.
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        self.check(id)?;

        let (prev, next) = (self.slots[id.index].prev, self.slots[id.index].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;

        let slot = &mut self.slots[id.index];
        slot.generation = slot.generation.wrapping_add(1);
        slot.prev = id.index;
        slot.next = id.index;
        let value = slot.value.take();

        self.free.push(id.index);
        self.len -= 1;
        value
    }

    /// Returns the entry behind `id`, or `None` if the handle is stale.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.check(id)?;
        self.slots[id.index].value.as_ref()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.check(id)?;
        self.slots[id.index].value.as_mut()
    }

    /// Forward traversal in insertion order, yielding each live entry with
    /// its handle.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.slots[SENTINEL].next,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check(&self, id: EntryId) -> Option<()> {
        let slot = self.slots.get(id.index)?;
        if id.index == SENTINEL || slot.generation != id.generation || slot.value.is_none() {
            return None;
        }
        Some(())
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over an [`OrderedList`], following the ring from the sentinel.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (EntryId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == SENTINEL {
            return None;
        }
        let slot = &self.list.slots[self.cursor];
        let id = EntryId {
            index: self.cursor,
            generation: slot.generation,
        };
        self.cursor = slot.next;
        slot.value.as_ref().map(|value| (id, value))
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = (EntryId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<'a>(list: &'a OrderedList<&'a str>) -> Vec<&'a str> {
        list.iter().map(|(_, v)| *v).collect()
    }

    #[test]
    fn test_empty_list() {
        let list: OrderedList<&str> = OrderedList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = OrderedList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");
        assert_eq!(contents(&list), ["a", "b", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut list = OrderedList::new();
        let _a = list.push_back("a");
        let b = list.push_back("b");
        let _c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(contents(&list), ["a", "c"]);

        list.push_back("d");
        assert_eq!(contents(&list), ["a", "c", "d"]);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list = OrderedList::new();
        let a = list.push_back("a");
        let _b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(contents(&list), ["b"]);
    }

    #[test]
    fn test_stale_handle_after_removal() {
        let mut list = OrderedList::new();
        let a = list.push_back("a");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert!(list.get(a).is_none());

        // The recycled slot gets a fresh generation; the old handle stays dead.
        let b = list.push_back("b");
        assert!(list.get(a).is_none());
        assert_eq!(list.get(b), Some(&"b"));
    }

    #[test]
    fn test_churn_keeps_ring_consistent() {
        let mut list = OrderedList::new();
        let mut live = Vec::new();
        for round in 0..50usize {
            live.push((round, list.push_back(round)));
            if round % 3 == 0 {
                let (_, id) = live.remove(live.len() / 2);
                assert!(list.remove(id).is_some());
            }
        }
        let expected: Vec<usize> = live.iter().map(|(v, _)| *v).collect();
        let actual: Vec<usize> = list.iter().map(|(_, v)| *v).collect();
        assert_eq!(actual, expected);
        assert_eq!(list.len(), expected.len());
    }

    #[test]
    fn test_drop_releases_every_element_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut list = OrderedList::new();
        let mut ids = Vec::new();
        for _ in 0..6 {
            ids.push(list.push_back(Counted(Rc::clone(&drops))));
        }

        drop(list.remove(ids[2]).unwrap());
        assert_eq!(drops.get(), 1);

        drop(list);
        assert_eq!(drops.get(), 6);
    }
}
