//! Collision detection against the already-allocated address inventory.
//!
//! The caller flattens every placed address in the system (all categories'
//! example and extra objects plus the manually defined fixed addresses) into
//! one inventory slice and asks whether a candidate is already taken. The
//! check is advisory: colliding addresses can still be stored; blocking the
//! save is the caller's job.
//!
//! The inventory must be rebuilt before each check so that the address
//! currently being edited is excluded and does not collide with itself.

use core::fmt;

use crate::addressing::GroupAddress;
use crate::plan_log;

/// Device categories, in the fixed inventory traversal order.
///
/// Inventories are assembled category by category in this order (then groups
/// in array order, then fixed main → middle → sub addresses), so the first
/// match reported by [`find_collision`] is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Switch actuators
    Switching,
    /// Dimming actuators
    Dimming,
    /// Blinds and shading
    Shading,
    /// HVAC zones
    Hvac,
}

impl Category {
    /// All categories in inventory traversal order.
    pub const ALL: [Self; 4] = [Self::Switching, Self::Dimming, Self::Shading, Self::Hvac];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switching => write!(f, "switching"),
            Self::Dimming => write!(f, "dimming"),
            Self::Shading => write!(f, "shading"),
            Self::Hvac => write!(f, "hvac"),
        }
    }
}

/// One already-placed address and who owns it.
///
/// The owner label is whatever the caller wants reported back on a hit,
/// typically "category - group - object" or the fixed-address group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEntry<'a> {
    /// The occupied address
    pub address: GroupAddress,
    /// Human-readable owner description
    pub owner: &'a str,
}

impl<'a> CollisionEntry<'a> {
    /// Create an inventory entry.
    pub const fn new(address: GroupAddress, owner: &'a str) -> Self {
        Self { address, owner }
    }
}

/// Check a candidate address against the inventory.
///
/// Returns the first entry occupying the candidate's address, or `None`.
/// The all-zero address `0/0/0` means "not yet filled in" and never
/// collides, regardless of inventory contents.
///
/// ```
/// use knx_planner::{find_collision, ga, CollisionEntry};
///
/// let inventory = [CollisionEntry::new(ga!(1/2/3), "switching - on/off")];
/// assert!(find_collision(ga!(1/2/3), &inventory).is_some());
/// assert!(find_collision(ga!(1/2/4), &inventory).is_none());
/// assert!(find_collision(ga!(0/0/0), &inventory).is_none());
/// ```
pub fn find_collision<'a>(
    candidate: GroupAddress,
    inventory: &'a [CollisionEntry<'a>],
) -> Option<&'a CollisionEntry<'a>> {
    if candidate.is_unassigned() {
        // Zero addresses are allowed (not filled in yet)
        return None;
    }

    let hit = inventory.iter().find(|entry| entry.address == candidate);
    if hit.is_some() {
        plan_log!(
            debug,
            "collision: {}/{}/{} already taken",
            candidate.main(),
            candidate.middle(),
            candidate.sub()
        );
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga;

    #[test]
    fn test_empty_inventory_never_collides() {
        assert!(find_collision(ga!(1 / 2 / 3), &[]).is_none());
    }

    #[test]
    fn test_exact_match_is_reported() {
        let inventory = [
            CollisionEntry::new(ga!(1 / 1 / 1), "switching - on/off"),
            CollisionEntry::new(ga!(2 / 3 / 5), "hvac - setpoint"),
        ];
        let hit = find_collision(ga!(2 / 3 / 5), &inventory).unwrap();
        assert_eq!(hit.owner, "hvac - setpoint");
    }

    #[test]
    fn test_near_miss_does_not_collide() {
        let inventory = [CollisionEntry::new(ga!(1 / 1 / 1), "switching")];
        assert!(find_collision(ga!(1 / 1 / 2), &inventory).is_none());
        assert!(find_collision(ga!(1 / 2 / 1), &inventory).is_none());
        assert!(find_collision(ga!(2 / 1 / 1), &inventory).is_none());
    }

    #[test]
    fn test_zero_address_never_collides() {
        // Even when 0/0/0 itself is in the inventory
        let inventory = [CollisionEntry::new(ga!(0 / 0 / 0), "bogus")];
        assert!(find_collision(ga!(0 / 0 / 0), &inventory).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let inventory = [
            CollisionEntry::new(ga!(1 / 1 / 1), "switching - on/off"),
            CollisionEntry::new(ga!(1 / 1 / 1), "dimming - value"),
        ];
        let hit = find_collision(ga!(1 / 1 / 1), &inventory).unwrap();
        assert_eq!(hit.owner, "switching - on/off");
    }

    #[test]
    fn test_category_order_is_fixed() {
        let labels: std::vec::Vec<std::string::String> =
            Category::ALL.iter().map(|c| format!("{c}")).collect();
        assert_eq!(labels, ["switching", "dimming", "shading", "hvac"]);
    }
}
