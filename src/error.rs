//! Error types for the address planning engine.
//!
//! This module provides structured error types with backtraces (when std is
//! enabled) and human-readable messages through `Display`. Validation errors
//! carry enough detail to tell the user exactly which example object is wrong
//! and why.

use core::fmt;

use heapless::{String, Vec};

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for planning operations.
pub type Result<T> = core::result::Result<T, PlanError>;

/// Maximum number of range violations reported in a single error.
///
/// Violations past this limit are dropped; the first ones are the ones the
/// user has to fix first anyway.
pub const MAX_REPORTED_VIOLATIONS: usize = 16;

/// Maximum number of distinct main groups reported in a single error.
pub const MAX_REPORTED_MAINS: usize = 16;

// =============================================================================
// Error Kind Enums
// =============================================================================

/// The address level an invalid value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressField {
    /// Main group (0-31)
    Main,
    /// Middle group (0-7)
    Middle,
    /// Sub group (0-255)
    Sub,
}

impl AddressField {
    /// Largest valid value for this level.
    pub const fn max(self) -> u16 {
        match self {
            Self::Main => 31,
            Self::Middle => 7,
            Self::Sub => 255,
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main group"),
            Self::Middle => write!(f, "middle group"),
            Self::Sub => write!(f, "sub group"),
        }
    }
}

/// One out-of-range field in an example address batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeViolation {
    /// 1-based position of the offending object in the batch
    pub position: usize,
    /// Object label as entered by the user (may be empty)
    pub object_name: String<32>,
    /// Which address level is out of range
    pub field: AddressField,
    /// The rejected value
    pub value: u16,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = if self.object_name.is_empty() {
            "unnamed"
        } else {
            &self.object_name
        };
        write!(
            f,
            "object {} ({}): {} {} is invalid (must be between 0 and {})",
            self.position,
            name,
            self.field,
            self.value,
            self.field.max()
        )
    }
}

/// Validation error variants (internal)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ValidationErrorKind {
    /// The example batch was empty
    NoExamples,
    /// The example batch exceeds the supported batch size
    TooManyObjects { count: usize },
    /// One or more address fields are outside their valid numeric domain
    RangeViolations(Vec<RangeViolation, MAX_REPORTED_VIOLATIONS>),
    /// The examples do not all share the same main group
    InconsistentMain(Vec<u16, MAX_REPORTED_MAINS>),
}

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressingErrorKind {
    InvalidGroupAddress,
    InvalidIndividualAddress,
    OutOfRange,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Address planning error.
///
/// This is the main error type returned by the engine. It contains a
/// backtrace (when the std feature is enabled) and detailed error
/// information through helper methods.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanError {
    /// Example batch validation errors (pattern analysis)
    Validation(ValidationError),
    /// Address format/range errors (parsing, construction)
    Addressing(AddressingError),
}

/// Validation error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidationError {
    kind: ValidationErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the batch was empty
    pub fn is_no_examples(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::NoExamples)
    }

    /// Check if one or more fields were out of range
    pub fn is_range_violation(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::RangeViolations(_))
    }

    /// Check if the examples disagreed on the main group
    pub fn is_inconsistent_main(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InconsistentMain(_))
    }

    /// The individual range violations, if any.
    pub fn range_violations(&self) -> &[RangeViolation] {
        match &self.kind {
            ValidationErrorKind::RangeViolations(v) => v,
            _ => &[],
        }
    }

    /// The distinct main groups found, if the batch disagreed on them.
    pub fn distinct_mains(&self) -> &[u16] {
        match &self.kind {
            ValidationErrorKind::InconsistentMain(v) => v,
            _ => &[],
        }
    }
}

/// Addressing error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressingError {
    kind: AddressingErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AddressingError {
    pub(crate) fn new(kind: AddressingErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if an address component is out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::OutOfRange)
    }
}

// =============================================================================
// Convenience Constructors for PlanError
// =============================================================================

impl PlanError {
    // Validation errors
    pub(crate) fn no_examples() -> Self {
        Self::Validation(ValidationError::new(ValidationErrorKind::NoExamples))
    }

    pub(crate) fn too_many_objects(count: usize) -> Self {
        Self::Validation(ValidationError::new(ValidationErrorKind::TooManyObjects {
            count,
        }))
    }

    pub(crate) fn range_violations(
        violations: Vec<RangeViolation, MAX_REPORTED_VIOLATIONS>,
    ) -> Self {
        Self::Validation(ValidationError::new(ValidationErrorKind::RangeViolations(
            violations,
        )))
    }

    pub(crate) fn inconsistent_main(mains: Vec<u16, MAX_REPORTED_MAINS>) -> Self {
        Self::Validation(ValidationError::new(ValidationErrorKind::InconsistentMain(
            mains,
        )))
    }

    // Addressing errors
    pub(crate) fn invalid_group_address() -> Self {
        Self::Addressing(AddressingError::new(
            AddressingErrorKind::InvalidGroupAddress,
        ))
    }

    pub(crate) fn invalid_individual_address() -> Self {
        Self::Addressing(AddressingError::new(
            AddressingErrorKind::InvalidIndividualAddress,
        ))
    }

    pub(crate) fn address_out_of_range() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::OutOfRange))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an addressing error
    pub fn is_addressing(&self) -> bool {
        matches!(self, Self::Addressing(_))
    }

    /// The validation details, if this is a validation error.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Addressing(_) => None,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::NoExamples => write!(f, "no example addresses provided"),
            ValidationErrorKind::TooManyObjects { count } => write!(
                f,
                "too many example addresses: {count} (at most {} objects per device)",
                crate::pattern::MAX_OBJECTS_PER_DEVICE
            ),
            ValidationErrorKind::RangeViolations(violations) => {
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
            ValidationErrorKind::InconsistentMain(mains) => {
                write!(
                    f,
                    "not all addresses share the same main group. Found main groups: "
                )?;
                for (i, main) in mains.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{main}")?;
                }
                write!(f, ". All objects must use the same main group.")
            }
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Validation(e) => write!(f, "Validation error: {e}"),
            PlanError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_violation_message() {
        let violation = RangeViolation {
            position: 3,
            object_name: String::try_from("status").unwrap(),
            field: AddressField::Main,
            value: 32,
        };
        assert_eq!(
            format!("{violation}"),
            "object 3 (status): main group 32 is invalid (must be between 0 and 31)"
        );
    }

    #[test]
    fn test_range_violation_unnamed() {
        let violation = RangeViolation {
            position: 1,
            object_name: String::new(),
            field: AddressField::Middle,
            value: 9,
        };
        let msg = format!("{violation}");
        assert!(msg.contains("(unnamed)"));
        assert!(msg.contains("middle group 9"));
    }

    #[test]
    fn test_inconsistent_main_lists_values() {
        let mut mains = Vec::new();
        mains.push(1u16).unwrap();
        mains.push(2u16).unwrap();
        let err = PlanError::inconsistent_main(mains);
        let msg = format!("{err}");
        assert!(msg.contains('1'));
        assert!(msg.contains('2'));
        assert!(err.is_validation());
    }

    #[test]
    fn test_field_max() {
        assert_eq!(AddressField::Main.max(), 31);
        assert_eq!(AddressField::Middle.max(), 7);
        assert_eq!(AddressField::Sub.max(), 255);
    }
}
