//! Teach-by-example addressing patterns.
//!
//! A user fully addresses one reference device (the "example"); the analyzer
//! infers a [`GroupPattern`] from it and the generator mechanically derives
//! addresses for every further device or zone of the same kind.
//!
//! ## Usage
//!
//! ```
//! use knx_planner::pattern::{analyze_group_pattern, generate_address, ExampleAddress};
//!
//! let examples = [
//!     ExampleAddress::new("on/off", 1, 1, 1),
//!     ExampleAddress::new("on/off status", 1, 1, 2),
//! ];
//! let pattern = analyze_group_pattern(&examples)?;
//!
//! // Fourth device, first object
//! let placement = generate_address(&pattern, 0, 3);
//! assert_eq!(placement.sub, 4);
//! # Ok::<(), knx_planner::PlanError>(())
//! ```

use heapless::{String, Vec};

mod analyzer;
mod generator;

pub use analyzer::analyze_group_pattern;
pub use generator::{generate_address, Exactness, Placement};

/// Maximum number of example objects in one analysis batch.
pub const MAX_OBJECTS_PER_DEVICE: usize = 32;

/// Maximum number of distinct middle groups (the full 0-7 range).
pub const MAX_MIDDLE_GROUPS: usize = 8;

/// Maximum number of extra main groups a pattern can overflow into.
pub const MAX_EXTRA_MAIN_GROUPS: usize = 8;

/// One object of the user's reference device.
///
/// The three levels are `u16` on purpose: form input can be out of range and
/// the analyzer, not the type system, rejects it with a message naming the
/// offending object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleAddress {
    /// Free-text object label ("on/off", "position status", ...)
    pub object_name: String<32>,
    /// Main group as entered (valid range 0-31)
    pub main: u16,
    /// Middle group as entered (valid range 0-7)
    pub middle: u16,
    /// Sub group as entered (valid range 0-255)
    pub sub: u16,
    /// Datapoint type identifier, opaque to the engine ("1.001", ...)
    pub dpt: String<16>,
    /// Whether this object participates in generation
    pub enabled: bool,
    /// Main group delta applied per following device/zone
    pub main_increment: u8,
    /// Middle group delta applied per following device/zone
    pub middle_increment: u8,
    /// Sub group delta applied per following device/zone
    pub sub_increment: u8,
}

impl ExampleAddress {
    /// Create an enabled example object with the given label and levels.
    ///
    /// Labels longer than the internal capacity are truncated.
    pub fn new(object_name: &str, main: u16, middle: u16, sub: u16) -> Self {
        Self {
            object_name: clip(object_name),
            main,
            middle,
            sub,
            dpt: String::new(),
            enabled: true,
            main_increment: 0,
            middle_increment: 0,
            sub_increment: 0,
        }
    }

    /// Set the datapoint type identifier.
    pub fn with_dpt(mut self, dpt: &str) -> Self {
        self.dpt = clip(dpt);
        self
    }

    /// Set the per-device increments for main, middle and sub group.
    pub fn with_increments(mut self, main: u8, middle: u8, sub: u8) -> Self {
        self.main_increment = main;
        self.middle_increment = middle;
        self.sub_increment = sub;
        self
    }
}

/// Copy a string into a bounded buffer, truncating at a char boundary.
fn clip<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// How the middle group varies across the objects of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MiddleGroupPattern {
    /// Every object shares one middle group
    Same,
    /// Each object type keeps its own middle group across devices
    PerType,
}

/// How the sub group advances from one device/zone to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubGroupPattern {
    /// Sub group advances by 1 per device
    Increment,
    /// Sub group advances by a constant stride per device (e.g. 5, 105, 205)
    Offset(u16),
    /// Irregular example sequence; generation falls back to +1 per device
    Sequence,
}

impl SubGroupPattern {
    /// The constant stride, if this is an offset pattern.
    pub const fn offset(self) -> Option<u16> {
        match self {
            Self::Offset(value) => Some(value),
            _ => None,
        }
    }
}

/// An additional main/middle pair that HVAC zones overflow into once the
/// primary main group's middle range (0-7) is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtraMainGroup {
    /// Main group of the overflow range (0-31)
    pub main: u8,
    /// First middle group used within that main group (0-7)
    pub middle: u8,
}

/// The addressing scheme inferred from one example device.
///
/// Produced once per analysis and immutable afterwards; parameter changes
/// (like configuring extra main groups) build a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupPattern {
    /// The single main group shared by all objects of this device type
    pub fixed_main: u8,
    /// Shared vs per-object middle group
    pub middle_pattern: MiddleGroupPattern,
    /// Distinct middle groups observed, in order of first occurrence.
    /// Exactly one element for [`MiddleGroupPattern::Same`].
    pub middle_groups: Vec<u8, MAX_MIDDLE_GROUPS>,
    /// How the sub group advances per device
    pub sub_pattern: SubGroupPattern,
    /// Lowest sub value among the examples; base for generation
    pub start_sub: u8,
    /// Number of example objects in the analyzed batch
    pub objects_per_device: usize,
    /// HVAC only: overflow ranges for additional zones. Populated out of
    /// band after analysis; empty otherwise.
    pub extra_main_groups: Vec<ExtraMainGroup, MAX_EXTRA_MAIN_GROUPS>,
}
