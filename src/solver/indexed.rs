//! Fenwick-tree circle with order-statistic lookup.
//!
//! The tree stores a 1 for every participant still present. Finding the
//! r-th remaining participant is a binary-lifting descent, and removal is a
//! point update, both O(log n). The cursor is tracked as a rank among the
//! remaining participants rather than as a slot.

use super::circle::Circle;
use crate::core::ParticipantId;

/// Order-statistic circle backed by a binary indexed tree.
#[derive(Clone, Debug)]
pub struct IndexedCircle {
    /// 1-based Fenwick array; `tree[0]` is unused.
    tree: Vec<u32>,

    /// Largest power of two not exceeding the participant count.
    top_step: usize,

    /// Rank of the cursor among remaining participants.
    cursor: u32,

    remaining: u32,
}

impl IndexedCircle {
    /// Slot of the participant with 0-based rank `rank`.
    fn find(&self, rank: u32) -> usize {
        let len = self.tree.len() - 1;
        let mut pos = 0;
        let mut left = rank + 1;
        let mut step = self.top_step;

        while step > 0 {
            let next = pos + step;
            if next <= len && self.tree[next] < left {
                pos = next;
                left -= self.tree[next];
            }
            step >>= 1;
        }

        // `pos` is the last 1-based index whose prefix is below rank + 1,
        // which is exactly the 0-based slot of the target.
        pos
    }

    /// Clear the presence bit of `slot`.
    fn remove(&mut self, slot: usize) {
        let len = self.tree.len() - 1;
        let mut i = slot + 1;
        while i <= len {
            self.tree[i] -= 1;
            i += i & i.wrapping_neg();
        }
    }
}

impl Circle for IndexedCircle {
    fn with_participants(n: u32) -> Self {
        let len = n as usize;

        // With every bit set, node i covers exactly lowbit(i) participants.
        let tree = (0..=len).map(|i| (i & i.wrapping_neg()) as u32).collect();

        let mut top_step = 1;
        while top_step * 2 <= len {
            top_step *= 2;
        }

        Self {
            tree,
            top_step,
            cursor: 0,
            remaining: n,
        }
    }

    #[inline]
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn eliminate(&mut self, skip: u32) -> ParticipantId {
        debug_assert!(skip < self.remaining);
        let rank = (self.cursor + skip) % self.remaining;
        let slot = self.find(rank);

        self.remove(slot);
        self.remaining -= 1;

        // The clockwise neighbour inherits the removed participant's rank.
        self.cursor = if self.remaining == 0 { 0 } else { rank % self.remaining };

        ParticipantId::from_slot(slot)
    }

    fn current(&self) -> ParticipantId {
        ParticipantId::from_slot(self.find(self.cursor))
    }
}
