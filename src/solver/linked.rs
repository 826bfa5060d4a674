//! Index-linked circular list.
//!
//! Participants live in a flat arena addressed by slot (`id - 1`). The
//! `next` and `prev` vectors hold slot indices, so removal is a splice of
//! two entries and nothing is ever reallocated or individually freed.

use super::circle::Circle;
use crate::core::ParticipantId;

/// Circular doubly-linked list over participant slots.
#[derive(Clone, Debug)]
pub struct LinkedCircle {
    /// Clockwise neighbour of each slot.
    next: Vec<u32>,

    /// Counter-clockwise neighbour of each slot.
    prev: Vec<u32>,

    /// Slot under the cursor.
    cursor: u32,

    remaining: u32,
}

impl LinkedCircle {
    /// Move the cursor `skip` participants clockwise.
    ///
    /// Walks counter-clockwise instead when that is shorter, so a round
    /// never touches more than half the circle.
    fn advance(&mut self, skip: u32) {
        let back = self.remaining - skip;
        if skip <= back {
            for _ in 0..skip {
                self.cursor = self.next[self.cursor as usize];
            }
        } else {
            for _ in 0..back {
                self.cursor = self.prev[self.cursor as usize];
            }
        }
    }

    /// Unlink the cursor slot and move the cursor clockwise.
    fn unlink_cursor(&mut self) -> u32 {
        let out = self.cursor as usize;
        let (before, after) = (self.prev[out], self.next[out]);
        self.next[before as usize] = after;
        self.prev[after as usize] = before;
        self.cursor = after;
        self.remaining -= 1;
        out as u32
    }
}

impl Circle for LinkedCircle {
    fn with_participants(n: u32) -> Self {
        Self {
            next: (0..n).map(|slot| (slot + 1) % n).collect(),
            prev: (0..n).map(|slot| (slot + n - 1) % n).collect(),
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
        self.advance(skip);
        ParticipantId::from_slot(self.unlink_cursor() as usize)
    }

    #[inline]
    fn current(&self) -> ParticipantId {
        ParticipantId::from_slot(self.cursor as usize)
    }
}
