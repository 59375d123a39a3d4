use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Ordering shared by every "top X" metric: higher count first, then the key
/// seen earliest in chronological input order.
pub fn rank_order(a: (u64, usize), b: (u64, usize)) -> Ordering {
    b.0.cmp(&a.0).then(a.1.cmp(&b.1))
}

/// Occurrence counter that remembers first-seen order.
///
/// Keys are stored in the order they were first added, which makes every tie
/// resolve to the earliest key when the input is chronological.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    slots: FxHashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K: Hash + Eq + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: K, n: u64) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    pub fn count(&self, key: &K) -> u64 {
        self.slots
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    pub fn top(&self) -> Option<(&K, u64)> {
        self.first_by(rank_order)
    }

    /// Fewest occurrences; ties still go to the earliest key.
    pub fn bottom(&self) -> Option<(&K, u64)> {
        self.first_by(|a, b| rank_order((b.0, a.1), (a.0, b.1)))
    }

    /// Up to `limit` entries ordered by [`rank_order`].
    pub fn ranked(&self, limit: usize) -> Vec<(&K, u64)> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| rank_order((self.entries[a].1, a), (self.entries[b].1, b)));
        order
            .into_iter()
            .take(limit)
            .map(|i| (&self.entries[i].0, self.entries[i].1))
            .collect()
    }

    fn first_by(
        &self,
        order: impl Fn((u64, usize), (u64, usize)) -> Ordering,
    ) -> Option<(&K, u64)> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(i, a), (j, b)| order((a.1, *i), (b.1, *j)))
            .map(|(_, (key, count))| (key, *count))
    }
}

impl<K: Hash + Eq + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
