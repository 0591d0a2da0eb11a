//! HVAC zone capacity and overflow placement.
//!
//! HVAC patterns place one zone per middle group. Middle groups run 0-7, so
//! a main group holds `8 - start_middle` zones; extra main groups can be
//! configured for the zones past that. Capacity numbers are advisory and do
//! not stop a caller from generating more zones than fit.

use crate::pattern::{ExampleAddress, ExtraMainGroup};

/// The number of middle groups in one main group (0-7).
const MIDDLE_GROUPS_PER_MAIN: u16 = 8;

/// The main/middle pair a zone lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneSlot {
    /// Main group of the zone
    pub main: u8,
    /// Middle group of the zone
    pub middle: u8,
}

/// Total number of zones the configured main groups can hold.
///
/// The primary main group contributes `max(0, 8 - start_middle)` zones, and
/// each extra main group contributes `max(0, 8 - middle)` more.
///
/// ```
/// use knx_planner::zones::zone_capacity;
/// use knx_planner::pattern::ExtraMainGroup;
///
/// // Starting at middle group 5 leaves 3 zones; an extra main group
/// // starting at middle 2 adds 6 more.
/// let extra = [ExtraMainGroup { main: 3, middle: 2 }];
/// assert_eq!(zone_capacity(5, &extra), 9);
/// ```
pub fn zone_capacity(start_middle: u8, extra_main_groups: &[ExtraMainGroup]) -> u16 {
    let primary = MIDDLE_GROUPS_PER_MAIN.saturating_sub(u16::from(start_middle));
    extra_main_groups.iter().fold(primary, |total, group| {
        total + MIDDLE_GROUPS_PER_MAIN.saturating_sub(u16::from(group.middle))
    })
}

/// Map a global zone counter to the main/middle pair it lands in.
///
/// Zones walk the middle groups of the primary main group starting at
/// `start_middle`, wrapping modulo 8. From the eighth zone on, placement
/// moves into the configured extra main groups, each starting at its own
/// middle group. With no extra main groups configured the middle group
/// simply keeps wrapping within the primary main.
pub fn zone_slot(
    fixed_main: u8,
    start_middle: u8,
    extra_main_groups: &[ExtraMainGroup],
    zone_counter: u16,
) -> ZoneSlot {
    let start = u16::from(start_middle);
    let wrapped = (start + zone_counter % MIDDLE_GROUPS_PER_MAIN) % MIDDLE_GROUPS_PER_MAIN;

    if zone_counter >= MIDDLE_GROUPS_PER_MAIN && !extra_main_groups.is_empty() {
        let primary_zones = MIDDLE_GROUPS_PER_MAIN.saturating_sub(start);
        let extra_index = usize::from((zone_counter - primary_zones) / MIDDLE_GROUPS_PER_MAIN);
        if let Some(group) = extra_main_groups.get(extra_index) {
            let remaining =
                zone_counter - (extra_index as u16) * MIDDLE_GROUPS_PER_MAIN - primary_zones;
            return ZoneSlot {
                main: group.main,
                middle: ((u16::from(group.middle) + remaining) % MIDDLE_GROUPS_PER_MAIN) as u8,
            };
        }
    }

    ZoneSlot {
        main: fixed_main,
        middle: wrapped as u8,
    }
}

/// Apply an example object's per-zone increments for the given zone index.
///
/// Returns the raw `(main, middle, sub)` triple without range clamping;
/// callers validate against the KNX ranges where needed.
pub fn increment_address(example: &ExampleAddress, zone_index: u16) -> (u16, u16, u16) {
    let step = |base: u16, increment: u8| -> u16 {
        base.saturating_add(u16::from(increment).saturating_mul(zone_index))
    };
    (
        step(example.main, example.main_increment),
        step(example.middle, example.middle_increment),
        step(example.sub, example.sub_increment),
    )
}
