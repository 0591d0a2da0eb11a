#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # knx-planner
//!
//! Pattern inference and address generation for KNX group addresses.
//!
//! A user fully addresses one example device; the engine infers the
//! addressing scheme and mechanically derives the addresses of every further
//! device or zone of the same kind, checking candidates against the rest of
//! the installation for collisions.
//!
//! ## Features
//!
//! - Pattern analysis of example addresses (fixed main, shared vs per-object
//!   middle group, increment/offset/irregular sub group)
//! - Deterministic address generation for arbitrary device and zone indices
//! - Collision detection against the full address inventory
//! - HVAC zone capacity and overflow into extra main groups
//! - `no_std`, allocation-free (bounded `heapless` collections)
//!
//! ## Example
//!
//! ```rust
//! use knx_planner::pattern::{analyze_group_pattern, generate_address, ExampleAddress};
//!
//! let examples = [
//!     ExampleAddress::new("on/off", 1, 1, 1),
//!     ExampleAddress::new("on/off status", 1, 1, 2),
//! ];
//! let pattern = analyze_group_pattern(&examples)?;
//! let placement = generate_address(&pattern, 0, 3);
//! assert_eq!(placement.sub, 4);
//! # Ok::<(), knx_planner::PlanError>(())
//! ```

pub mod addressing;
pub mod collision;
pub mod error;
pub mod naming;
pub mod pattern;
pub mod zones;

// Macro modules (must be declared before use)
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::{GroupAddress, IndividualAddress};
#[doc(inline)]
pub use collision::{find_collision, Category, CollisionEntry};
#[doc(inline)]
pub use error::{PlanError, Result};
#[doc(inline)]
pub use pattern::{
    analyze_group_pattern, generate_address, ExampleAddress, GroupPattern, MiddleGroupPattern,
    SubGroupPattern,
};
