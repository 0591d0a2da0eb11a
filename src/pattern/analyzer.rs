//! Pattern analysis for the teach-by-example flow.
//!
//! Consumes the example addresses of one fully-specified reference device and
//! classifies the addressing scheme: fixed main group, shared or per-object
//! middle group, and how the sub group advances per device.

use heapless::Vec;

use crate::error::{
    AddressField, PlanError, RangeViolation, Result, MAX_REPORTED_MAINS, MAX_REPORTED_VIOLATIONS,
};
use crate::plan_log;

use super::{
    ExampleAddress, GroupPattern, MiddleGroupPattern, SubGroupPattern, MAX_MIDDLE_GROUPS,
    MAX_OBJECTS_PER_DEVICE,
};

/// Analyze the example addresses of one device and infer its [`GroupPattern`].
///
/// Validation runs first and fails fast: every out-of-range field in the
/// batch is collected into a single error, then all examples must agree on
/// one main group. No partial pattern is ever returned.
///
/// Classification of the sub groups (sorted ascending, duplicates kept):
/// - every consecutive gap exactly 1 → increment
/// - otherwise, a constant positive multiple-of-100 distance from the lowest
///   value (e.g. 5, 105) → offset
/// - anything else → irregular sequence
///
/// Pure function; analyzing the same batch twice yields identical patterns.
///
/// # Errors
///
/// Returns a validation error for an empty or oversized batch, out-of-range
/// fields, or inconsistent main groups.
pub fn analyze_group_pattern(examples: &[ExampleAddress]) -> Result<GroupPattern> {
    if examples.is_empty() {
        return Err(PlanError::no_examples());
    }
    if examples.len() > MAX_OBJECTS_PER_DEVICE {
        return Err(PlanError::too_many_objects(examples.len()));
    }

    // Collect every out-of-range field before failing so the user sees the
    // whole batch's problems at once.
    let mut violations: Vec<RangeViolation, MAX_REPORTED_VIOLATIONS> = Vec::new();
    for (i, addr) in examples.iter().enumerate() {
        for (field, value) in [
            (AddressField::Main, addr.main),
            (AddressField::Middle, addr.middle),
            (AddressField::Sub, addr.sub),
        ] {
            if value > field.max() {
                // Past the report capacity further violations are dropped
                let _ = violations.push(RangeViolation {
                    position: i + 1,
                    object_name: addr.object_name.clone(),
                    field,
                    value,
                });
            }
        }
    }
    if !violations.is_empty() {
        return Err(PlanError::range_violations(violations));
    }

    // All addresses must share one main group
    let mut mains: Vec<u16, MAX_REPORTED_MAINS> = Vec::new();
    for addr in examples {
        if !mains.contains(&addr.main) {
            let _ = mains.push(addr.main);
        }
    }
    if mains.len() != 1 {
        return Err(PlanError::inconsistent_main(mains));
    }
    let fixed_main = mains[0] as u8;

    // Distinct middle groups, first-seen order. Values are validated, so at
    // most 8 distinct entries exist and pushes cannot fail.
    let mut middle_groups: Vec<u8, MAX_MIDDLE_GROUPS> = Vec::new();
    for addr in examples {
        let middle = addr.middle as u8;
        if !middle_groups.contains(&middle) {
            let _ = middle_groups.push(middle);
        }
    }
    let middle_pattern = if middle_groups.len() == 1 {
        MiddleGroupPattern::Same
    } else {
        MiddleGroupPattern::PerType
    };

    // Sub groups sorted ascending; duplicates are kept at this stage
    let mut subs: Vec<u8, MAX_OBJECTS_PER_DEVICE> = Vec::new();
    for addr in examples {
        let _ = subs.push(addr.sub as u8);
    }
    subs.sort_unstable();

    let sub_pattern = classify_sub_pattern(&subs);
    let start_sub = subs[0];

    plan_log!(
        debug,
        "pattern analyzed: main={} middles={} start_sub={} objects={}",
        fixed_main,
        middle_groups.len(),
        start_sub,
        examples.len()
    );

    Ok(GroupPattern {
        fixed_main,
        middle_pattern,
        middle_groups,
        sub_pattern,
        start_sub,
        objects_per_device: examples.len(),
        extra_main_groups: Vec::new(),
    })
}

/// Classify how the sub group advances, given the ascending sub values.
fn classify_sub_pattern(subs: &[u8]) -> SubGroupPattern {
    if subs.len() == 1 {
        // Only one object, assume increment pattern
        return SubGroupPattern::Increment;
    }

    let sequential = subs
        .windows(2)
        .all(|pair| u16::from(pair[1]) == u16::from(pair[0]) + 1);

    if sequential {
        let gap = u16::from(subs[1]) - u16::from(subs[0]);
        return if gap == 1 {
            SubGroupPattern::Increment
        } else {
            SubGroupPattern::Offset(gap)
        };
    }

    // Non-sequential: look for a constant multiple-of-100 distance from the
    // lowest value (e.g. command 5, status 105).
    let first = u16::from(subs[0]);
    let mut candidate: Option<u16> = None;
    let mut consistent = true;
    for &sub in &subs[1..] {
        let diff = u16::from(sub) - first;
        if diff > 0 && diff % 100 == 0 {
            match candidate {
                None => candidate = Some(diff),
                Some(seen) if seen == diff => {}
                Some(_) => {
                    consistent = false;
                    break;
                }
            }
        }
    }

    match candidate {
        Some(offset) if consistent => SubGroupPattern::Offset(offset),
        // Irregular sequence; generation falls back to +1 per device
        _ => SubGroupPattern::Sequence,
    }
}
