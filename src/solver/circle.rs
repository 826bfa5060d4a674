//! Circle trait and the shared elimination loop.
//!
//! A circle only has to answer two questions: how many participants are
//! left, and who leaves after skipping `skip` of them. The loop in
//! [`run`] owns the `(k - 1) mod remaining` computation, so no circle
//! implementation can get the wraparound wrong on its own.

use crate::core::{ParticipantId, Solution};

/// Circle of remaining participants with a cursor.
///
/// The cursor starts at participant 1. After each elimination it rests on
/// the participant immediately clockwise of the one removed.
pub trait Circle {
    /// Build a full circle of participants `1..=n` (`n >= 1`).
    fn with_participants(n: u32) -> Self
    where
        Self: Sized;

    /// Participants still in the circle.
    fn remaining(&self) -> u32;

    /// Skip `skip` remaining participants clockwise from the cursor, remove
    /// the one landed on, and return it.
    ///
    /// Callers guarantee `skip < remaining()` and `remaining() > 1`.
    fn eliminate(&mut self, skip: u32) -> ParticipantId;

    /// Participant under the cursor.
    fn current(&self) -> ParticipantId;
}

/// Play a full game on circle type `C`.
///
/// `n` and `k` must already be validated (both at least 1).
pub fn run<C: Circle>(n: u32, k: u32) -> Solution {
    debug_assert!(n >= 1 && k >= 1);

    if n == 1 {
        return Solution::lone();
    }

    let mut circle = C::with_participants(n);
    let mut order = Vec::with_capacity(n as usize - 1);

    while circle.remaining() > 1 {
        let skip = (k - 1) % circle.remaining();
        order.push(circle.eliminate(skip));
    }

    Solution {
        survivor: circle.current(),
        order,
    }
}
