//! Participant identification.
//!
//! Participants are numbered `1..=n` by their initial clockwise position in
//! the circle. The number is the only identity a participant has: once the
//! circle starts shrinking, original positions carry no further meaning.
//!
//! ## Usage
//!
//! ```
//! use children_game::core::ParticipantId;
//!
//! let first = ParticipantId::new(1);
//! assert_eq!(first.raw(), 1);
//! assert_eq!(first.slot(), 0);
//! assert_eq!(ParticipantId::from_slot(0), first);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a participant in the circle (1-based).
///
/// Serializes as a bare integer so it matches the wire format of
/// `last_child` and `order_of_elimination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a participant ID from its 1-based number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Participant occupying the given 0-based arena slot.
    #[inline]
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }

    /// 0-based arena slot of this participant.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_mapping() {
        for slot in 0..10 {
            let id = ParticipantId::from_slot(slot);
            assert_eq!(id.raw() as usize, slot + 1);
            assert_eq!(id.slot(), slot);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ParticipantId::new(7)), "#7");
    }

    #[test]
    fn test_ordering() {
        assert!(ParticipantId::new(2) < ParticipantId::new(10));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ParticipantId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
