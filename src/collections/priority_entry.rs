//! Heap slot pairing an item with its insertion sequence.

use core::cmp::Ordering;

/// Orders by item first and by insertion sequence second, so equal items
/// leave the heap in the order they arrived.
pub(crate) struct PriorityEntry<T> {
  item:     T,
  sequence: u64,
}

impl<T> PriorityEntry<T> {
  pub(crate) const fn new(item: T, sequence: u64) -> Self {
    Self { item, sequence }
  }

  pub(crate) const fn item(&self) -> &T {
    &self.item
  }

  pub(crate) fn into_item(self) -> T {
    self.item
  }
}

impl<T: Ord> PartialEq for PriorityEntry<T> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<T: Ord> Eq for PriorityEntry<T> {}

impl<T: Ord> PartialOrd for PriorityEntry<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for PriorityEntry<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.item.cmp(&other.item).then_with(|| self.sequence.cmp(&other.sequence))
  }
}
