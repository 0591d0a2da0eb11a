//! Address generation from an analyzed pattern.
//!
//! Pure arithmetic: given a [`GroupPattern`], which object within the device
//! and which device/zone, compute the resulting main/middle/sub triple. The
//! generator never fails and never clamps; [`Placement::to_group_address`]
//! performs the range check when the caller needs a hard guarantee.

use crate::addressing::GroupAddress;
use crate::error::Result;

use super::{GroupPattern, MiddleGroupPattern, SubGroupPattern};

/// Whether a placement followed the recorded pattern or a defensive fallback.
///
/// Estimated placements come from the degraded branches: an object index
/// beyond the recorded middle groups, a pattern without recorded middle
/// groups, or an irregular sub sequence replayed as a plain increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exactness {
    /// The placement follows the recorded pattern
    Exact,
    /// The placement is a best-effort guess
    Estimated,
}

/// A generated main/middle/sub triple.
///
/// `middle` and `sub` are wider than their KNX ranges because large device
/// indices or offsets can walk past them; the generator reports what the
/// pattern produces and leaves range enforcement to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    /// Main group (always the pattern's fixed main, 0-31)
    pub main: u8,
    /// Middle group; may exceed 7 for fallback placements
    pub middle: u32,
    /// Sub group; may exceed 255 for large device indices
    pub sub: u32,
    /// Pattern-exact or best-effort
    pub exactness: Exactness,
}

impl Placement {
    /// Whether this placement followed the recorded pattern.
    pub const fn is_exact(&self) -> bool {
        matches!(self.exactness, Exactness::Exact)
    }

    /// Convert into a validated [`GroupAddress`].
    ///
    /// # Errors
    ///
    /// Returns an addressing error when the generated middle or sub group
    /// walked past its KNX range.
    pub fn to_group_address(&self) -> Result<GroupAddress> {
        if self.middle > u32::from(GroupAddress::MAX_MIDDLE)
            || self.sub > u32::from(GroupAddress::MAX_SUB)
        {
            return Err(crate::error::PlanError::address_out_of_range());
        }
        GroupAddress::new(self.main, self.middle as u8, self.sub as u8)
    }
}

/// Generate the address of one object instance.
///
/// * `object_index` - which object within the device (0-based)
/// * `device_index` - which device/zone (0-based)
///
/// Deterministic and total: repeated calls with the same inputs return the
/// same placement, and no input panics (arithmetic saturates).
pub fn generate_address(
    pattern: &GroupPattern,
    object_index: usize,
    device_index: u32,
) -> Placement {
    let mut exactness = Exactness::Exact;

    let middle: u32 = match pattern.middle_pattern {
        MiddleGroupPattern::Same => match pattern.middle_groups.first() {
            Some(&middle) => middle.into(),
            // Degenerate: analysis always records at least one middle group
            None => {
                exactness = Exactness::Estimated;
                1
            }
        },
        MiddleGroupPattern::PerType => match pattern.middle_groups.get(object_index) {
            Some(&middle) => middle.into(),
            None => {
                // Best-effort for an object index beyond the recorded list
                exactness = Exactness::Estimated;
                match pattern.middle_groups.first() {
                    Some(&middle) => middle.into(),
                    None => 1u32.saturating_add(index_as_u32(object_index)),
                }
            }
        },
    };

    let start_sub = u32::from(pattern.start_sub);
    let sub = match pattern.sub_pattern {
        SubGroupPattern::Increment => start_sub.saturating_add(device_index),
        SubGroupPattern::Offset(offset) => {
            start_sub.saturating_add(device_index.saturating_mul(u32::from(offset)))
        }
        SubGroupPattern::Sequence => {
            // The original irregular sequence is not replayed; fall back to
            // +1 per device and tag the result as estimated.
            exactness = Exactness::Estimated;
            start_sub.saturating_add(device_index)
        }
    };

    Placement {
        main: pattern.fixed_main,
        middle,
        sub,
        exactness,
    }
}

fn index_as_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
