//! KNX addressing value types.
//!
//! The planner deals with two address kinds:
//! - Group addresses (Main/Middle/Sub) that the pattern engine generates
//! - Individual addresses (Area.Line.Device) entered per physical device

pub mod group;
pub mod individual;

pub use group::GroupAddress;
pub use individual::IndividualAddress;
