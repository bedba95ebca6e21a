use std::cmp::Ordering;

/// Min-heap entry keyed by weight, ties broken by insertion sequence
///
/// Wrap in [`std::cmp::Reverse`] before pushing onto a
/// [`BinaryHeap`](std::collections::BinaryHeap). Keys compare with
/// `f64::total_cmp`, so NaN weights sort last instead of poisoning the heap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightedEntry<T> {
    pub key: f64,
    pub seq: usize,
    pub item: T,
}

impl<T> WeightedEntry<T> {
    pub fn new(key: f64, seq: usize, item: T) -> Self {
        Self { key, seq, item }
    }
}

impl<T> PartialEq for WeightedEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for WeightedEntry<T> {}

impl<T> PartialOrd for WeightedEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for WeightedEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_entry_ordering() {
        let near = WeightedEntry::new(1.0, 5, 'a');
        let far = WeightedEntry::new(2.0, 0, 'b');
        let near_later = WeightedEntry::new(1.0, 6, 'c');

        assert!(near < far);
        assert!(near < near_later);
    }

    #[test]
    fn test_min_heap_pops_lightest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(WeightedEntry::new(3.0, 0, "heavy")));
        heap.push(Reverse(WeightedEntry::new(1.0, 1, "light")));
        heap.push(Reverse(WeightedEntry::new(1.0, 2, "light-later")));

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.item)).collect();
        assert_eq!(order, vec!["light", "light-later", "heavy"]);
    }
}
