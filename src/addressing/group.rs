//! KNX Group Address implementation.
//!
//! Group addresses identify functional datapoints on the bus using the
//! 3-level notation Main/Middle/Sub.
//!
//! Internally stored as 16 bits:
//! - Main: 5 bits (0-31)
//! - Middle: 3 bits (0-7)
//! - Sub: 8 bits (0-255)
//!
//! The all-zero address `0/0/0` is valid at the type level but is treated by
//! the planner as "not yet filled in" (see [`GroupAddress::is_unassigned`]).

use crate::error::{PlanError, Result};
use core::fmt;

/// KNX Group Address (Main/Middle/Sub)
///
/// # Examples
///
/// ```
/// use knx_planner::GroupAddress;
///
/// let addr = GroupAddress::new(1, 2, 3).unwrap();
/// assert_eq!(addr.main(), 1);
/// assert_eq!(addr.middle(), 2);
/// assert_eq!(addr.sub(), 3);
/// assert_eq!(addr.to_string(), "1/2/3");
///
/// // Parse from string
/// let addr: GroupAddress = "5/3/100".parse().unwrap();
/// assert_eq!(addr.main(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAddress {
    raw: u16,
}

impl GroupAddress {
    /// Maximum main group value (5 bits)
    pub const MAX_MAIN: u8 = 31;
    /// Maximum middle group value (3 bits)
    pub const MAX_MIDDLE: u8 = 7;
    /// Maximum sub group value (8 bits)
    pub const MAX_SUB: u8 = 255;

    /// Create a new 3-level Group Address.
    ///
    /// # Arguments
    ///
    /// * `main` - Main group (0-31)
    /// * `middle` - Middle group (0-7)
    /// * `sub` - Sub group (0-255)
    ///
    /// # Errors
    ///
    /// Returns an addressing error if any component is out of range.
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > Self::MAX_MAIN {
            return Err(PlanError::address_out_of_range());
        }
        if middle > Self::MAX_MIDDLE {
            return Err(PlanError::address_out_of_range());
        }
        // sub is u8, so it's always in range

        let raw = (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub);
        Ok(Self { raw })
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the main group component (0-31).
    #[inline(always)]
    pub const fn main(self) -> u8 {
        ((self.raw >> 11) & 0x1F) as u8
    }

    /// Get the middle group component (0-7).
    #[inline(always)]
    pub const fn middle(self) -> u8 {
        ((self.raw >> 8) & 0x07) as u8
    }

    /// Get the sub group component (0-255).
    #[inline(always)]
    pub const fn sub(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Whether this is the all-zero address `0/0/0`.
    ///
    /// The planner treats `0/0/0` as a placeholder for an address the user
    /// has not filled in yet; it is excluded from collision detection.
    #[inline(always)]
    pub const fn is_unassigned(self) -> bool {
        self.raw == 0
    }
}

impl From<u16> for GroupAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<GroupAddress> for u16 {
    #[inline(always)]
    fn from(addr: GroupAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl core::str::FromStr for GroupAddress {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        // Zero-allocation parsing using iterators
        let mut parts = s.split('/');

        let main = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_group_address)?;

        let middle = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_group_address)?;

        let sub = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_group_address)?;

        // Ensure no extra parts
        if parts.next().is_some() {
            return Err(PlanError::invalid_group_address());
        }

        Self::new(main, middle, sub)
    }
}
