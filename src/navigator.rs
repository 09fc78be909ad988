//! Article navigation and the progression it earns.

use crate::progression::progression_for;
use crate::settings::{Setting, SettingsStore};

/// Tracks the current article and the furthest one reached.
///
/// Any move that changes `current` bumps `highest` and writes the full
/// progression map into the settings store.
pub struct Navigator {
    store: SettingsStore,
    count: usize,
    current: usize,
    highest: usize,
}

impl Navigator {
    /// `count` is clamped to at least one article.
    pub fn new(store: SettingsStore, count: usize) -> Self {
        Self {
            store,
            count: count.max(1),
            current: 0,
            highest: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn highest(&self) -> usize {
        self.highest
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Returns true if the current article changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.move_to(self.current + 1)
    }

    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.move_to(self.current - 1)
    }

    /// Jump to `index`, clamped into the article range.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.move_to(index.min(self.count - 1))
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        self.current = index;
        log::info!("article {}/{}", self.current + 1, self.count);

        self.highest = self.highest.max(self.current);
        let before = self.store.with(|s| s.progress);
        let progress = progression_for(self.highest);
        for point in progress.newly_unlocked(&before) {
            log::info!("unlocked {}", point.name());
        }
        self.store.set(Setting::Progress(progress));
        true
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::progression::ProgressionPoint;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Next,
        Back,
        GoTo(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Back),
            (0usize..12).prop_map(Op::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn prop_bounds_and_monotonic_flags(
            count in 1usize..8,
            ops in proptest::collection::vec(arb_op(), 0..60),
        ) {
            let store = SettingsStore::default();
            let mut n = Navigator::new(store.clone(), count);
            let mut prev_highest = 0;
            let mut prev_progress = store.get().progress;

            for op in ops {
                match op {
                    Op::Next => { n.next(); }
                    Op::Back => { n.back(); }
                    Op::GoTo(i) => { n.go_to(i); }
                }
                prop_assert!(n.current() < count);
                prop_assert!(n.highest() < count);
                prop_assert!(n.highest() >= prev_highest);
                prev_highest = n.highest();

                let progress = store.get().progress;
                for point in ProgressionPoint::ALL {
                    prop_assert!(!prev_progress.is_unlocked(point) || progress.is_unlocked(point));
                }
                prev_progress = progress;
            }
        }
    }
}
