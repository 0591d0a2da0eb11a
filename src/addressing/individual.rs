//! KNX Individual (physical) Address implementation.
//!
//! Individual addresses identify physical devices: Area.Line.Device, with
//! area and line 0-15 and device 0-255. The planner only validates and
//! formats them; assigning physical addresses to devices is caller business.

use crate::error::{PlanError, Result};
use core::fmt;

/// KNX Individual Address (Area.Line.Device)
///
/// # Examples
///
/// ```
/// use knx_planner::IndividualAddress;
///
/// let addr: IndividualAddress = "1.1.5".parse().unwrap();
/// assert_eq!(addr.area(), 1);
/// assert_eq!(addr.line(), 1);
/// assert_eq!(addr.device(), 5);
/// assert_eq!(addr.to_string(), "1.1.5");
///
/// // User input validation
/// assert!(IndividualAddress::is_valid("15.15.255"));
/// assert!(!IndividualAddress::is_valid("16.0.0"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualAddress {
    raw: u16,
}

impl IndividualAddress {
    /// Maximum area value (4 bits)
    pub const MAX_AREA: u8 = 15;
    /// Maximum line value (4 bits)
    pub const MAX_LINE: u8 = 15;

    /// Create a new Individual Address from components.
    ///
    /// # Errors
    ///
    /// Returns an addressing error if area or line exceed 15.
    pub fn new(area: u8, line: u8, device: u8) -> Result<Self> {
        if area > Self::MAX_AREA || line > Self::MAX_LINE {
            return Err(PlanError::address_out_of_range());
        }
        // device is u8, so it's always in range

        let raw = (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(device);
        Ok(Self { raw })
    }

    /// Check whether a user-entered string is a well-formed physical address.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the area component (0-15).
    #[inline(always)]
    pub const fn area(self) -> u8 {
        ((self.raw >> 12) & 0x0F) as u8
    }

    /// Get the line component (0-15).
    #[inline(always)]
    pub const fn line(self) -> u8 {
        ((self.raw >> 8) & 0x0F) as u8
    }

    /// Get the device component (0-255).
    #[inline(always)]
    pub const fn device(self) -> u8 {
        (self.raw & 0xFF) as u8
    }
}

impl fmt::Display for IndividualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

impl From<u16> for IndividualAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<IndividualAddress> for u16 {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> u16 {
        addr.raw
    }
}

impl core::str::FromStr for IndividualAddress {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split('.');

        let area = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_individual_address)?;

        let line = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_individual_address)?;

        let device = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(PlanError::invalid_individual_address)?;

        // Ensure no extra parts
        if parts.next().is_some() {
            return Err(PlanError::invalid_individual_address());
        }

        Self::new(area, line, device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let addr = IndividualAddress::new(1, 2, 3).unwrap();
        assert_eq!(addr.area(), 1);
        assert_eq!(addr.line(), 2);
        assert_eq!(addr.device(), 3);
    }

    #[test]
    fn test_new_invalid_area() {
        assert!(IndividualAddress::new(16, 0, 0).is_err());
    }

    #[test]
    fn test_new_invalid_line() {
        assert!(IndividualAddress::new(0, 16, 0).is_err());
    }

    #[test]
    fn test_display() {
        let addr = IndividualAddress::new(1, 2, 3).unwrap();
        assert_eq!(format!("{addr}"), "1.2.3");
    }

    #[test]
    fn test_is_valid() {
        assert!(IndividualAddress::is_valid("1.1.5"));
        assert!(IndividualAddress::is_valid(" 15.15.255 "));
        assert!(!IndividualAddress::is_valid("16.0.0"));
        assert!(!IndividualAddress::is_valid("1.2"));
        assert!(!IndividualAddress::is_valid("1.2.3.4"));
        assert!(!IndividualAddress::is_valid("a.b.c"));
        assert!(!IndividualAddress::is_valid(""));
    }

    #[test]
    fn test_raw_round_trip() {
        let addr = IndividualAddress::new(1, 1, 250).unwrap();
        assert_eq!(addr.raw(), 0x11FA);
        assert_eq!(IndividualAddress::from(0x11FAu16), addr);
    }
}
