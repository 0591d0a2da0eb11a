//! Integration tests for the knx-planner library
//!
//! These tests walk the full teach-by-example flow the way the surrounding
//! application would: analyze the example device of each category, generate
//! addresses for further devices, and check candidates against the flattened
//! inventory of everything placed so far.

use knx_planner::collision::{find_collision, Category, CollisionEntry};
use knx_planner::pattern::{
    analyze_group_pattern, generate_address, ExampleAddress, ExtraMainGroup, MiddleGroupPattern,
    SubGroupPattern,
};
use knx_planner::zones::{zone_capacity, zone_slot};
use knx_planner::{ga, GroupAddress};

fn example(name: &str, main: u16, middle: u16, sub: u16) -> ExampleAddress {
    ExampleAddress::new(name, main, middle, sub)
}

#[test]
fn test_switching_increment_flow() {
    // Scenario A: two sequential subs in one middle group
    let examples = [
        example("on/off", 1, 1, 1),
        example("on/off status", 1, 1, 2),
    ];
    let pattern = analyze_group_pattern(&examples).expect("analysis failed");

    assert_eq!(pattern.fixed_main, 1);
    assert_eq!(pattern.middle_pattern, MiddleGroupPattern::Same);
    assert_eq!(pattern.sub_pattern, SubGroupPattern::Increment);
    assert_eq!(pattern.start_sub, 1);

    let placement = generate_address(&pattern, 0, 3);
    assert_eq!(placement.sub, 4);
}

#[test]
fn test_dimming_offset_flow() {
    // Scenario B: command at sub 5, status at 105
    let examples = [
        example("value", 2, 3, 5),
        example("value status", 2, 3, 105),
    ];
    let pattern = analyze_group_pattern(&examples).expect("analysis failed");

    assert_eq!(pattern.sub_pattern, SubGroupPattern::Offset(100));
    assert_eq!(pattern.start_sub, 5);
    assert_eq!(generate_address(&pattern, 0, 2).sub, 205);
}

#[test]
fn test_inconsistent_mains_reported_with_values() {
    // Scenario C: mains 1 and 2 must both appear in the message
    let examples = [example("up/down", 1, 1, 1), example("position", 2, 1, 2)];
    let err = analyze_group_pattern(&examples).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('1'), "message should list main 1: {msg}");
    assert!(msg.contains('2'), "message should list main 2: {msg}");
}

#[test]
fn test_per_type_middle_groups_flow() {
    // Scenario D: one middle group per object type
    let examples = [example("up/down", 1, 1, 0), example("stop", 1, 2, 0)];
    let pattern = analyze_group_pattern(&examples).expect("analysis failed");

    assert_eq!(pattern.middle_pattern, MiddleGroupPattern::PerType);
    assert_eq!(pattern.middle_groups.as_slice(), &[1, 2]);

    // Each object keeps its middle group across devices
    for device in 0..4 {
        assert_eq!(generate_address(&pattern, 0, device).middle, 1);
        assert_eq!(generate_address(&pattern, 1, device).middle, 2);
    }
}

#[test]
fn test_hvac_zone_capacity() {
    // Scenario E: start middle 5 plus one extra group at middle 2 -> 9 zones
    let extra = [ExtraMainGroup { main: 3, middle: 2 }];
    assert_eq!(zone_capacity(5, &extra), 9);
}

#[test]
fn test_main_out_of_range_message() {
    // Scenario F: main 32 names the violation
    let examples = [example("setpoint", 32, 0, 0)];
    let err = analyze_group_pattern(&examples).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("main group 32"), "unexpected message: {msg}");
    assert!(msg.contains("setpoint"), "unexpected message: {msg}");
}

#[test]
fn test_cross_category_collision_flow() {
    // Analyze two categories, flatten everything placed so far, then check a
    // generated candidate against it.
    let switching = analyze_group_pattern(&[
        example("on/off", 1, 1, 1),
        example("on/off status", 1, 1, 2),
    ])
    .unwrap();
    let dimming = analyze_group_pattern(&[
        example("value", 1, 2, 1),
        example("value status", 1, 2, 101),
    ])
    .unwrap();

    // Inventory assembled in the fixed category order, then device order,
    // with the fixed addresses last.
    let mut owners: Vec<String> = Vec::new();
    for category in Category::ALL {
        let objects = match category {
            Category::Switching | Category::Dimming => 2usize,
            _ => continue,
        };
        for device in 0..3u32 {
            for object in 0..objects {
                owners.push(format!("{category} - device {device} - object {object}"));
            }
        }
    }

    let mut inventory: Vec<CollisionEntry<'_>> = Vec::new();
    let mut owner_index = 0;
    for category in Category::ALL {
        let (pattern, objects) = match category {
            Category::Switching => (&switching, 2usize),
            Category::Dimming => (&dimming, 2usize),
            _ => continue,
        };
        for device in 0..3u32 {
            for object in 0..objects {
                let addr = generate_address(pattern, object, device)
                    .to_group_address()
                    .expect("generated address out of range");
                inventory.push(CollisionEntry::new(addr, &owners[owner_index]));
                owner_index += 1;
            }
        }
    }
    // Manually defined fixed address
    inventory.push(CollisionEntry::new(ga!(0 / 3 / 17), "central - all off"));

    // The next switching device would land on 1/1/4, which is free
    let candidate = generate_address(&switching, 0, 3).to_group_address().unwrap();
    assert!(find_collision(candidate, &inventory).is_none());

    // An already-generated dimming address collides, and the owner label
    // points at the dimming category
    let taken = generate_address(&dimming, 0, 1).to_group_address().unwrap();
    let hit = find_collision(taken, &inventory).expect("expected a collision");
    assert!(hit.owner.starts_with("dimming"), "owner: {}", hit.owner);

    // The fixed address collides too
    let hit = find_collision(ga!(0 / 3 / 17), &inventory).unwrap();
    assert_eq!(hit.owner, "central - all off");

    // The unassigned placeholder never collides
    assert!(find_collision(ga!(0 / 0 / 0), &inventory).is_none());
}

#[test]
fn test_editing_excludes_own_address() {
    // The caller rebuilds the inventory without the address being edited, so
    // re-saving an unchanged address does not flag itself.
    let all = [
        CollisionEntry::new(ga!(1 / 1 / 1), "switching - on/off"),
        CollisionEntry::new(ga!(1 / 1 / 2), "switching - status"),
    ];
    let editing = ga!(1 / 1 / 2);
    let without_edited: Vec<CollisionEntry<'_>> = all
        .iter()
        .filter(|entry| entry.address != editing)
        .copied()
        .collect();

    assert!(find_collision(editing, &all).is_some());
    assert!(find_collision(editing, &without_edited).is_none());
}

#[test]
fn test_hvac_overflow_generation() {
    // A zone pattern starting at middle 5 with one overflow main group.
    let examples = [
        example("setpoint", 2, 5, 0),
        example("actual temperature", 2, 5, 1),
    ];
    let pattern = analyze_group_pattern(&examples).unwrap();
    let extra = [ExtraMainGroup { main: 3, middle: 0 }];

    assert_eq!(zone_capacity(5, &extra), 3 + 8);

    // First zones stay in the primary main group
    let slot = zone_slot(pattern.fixed_main, 5, &extra, 0);
    assert_eq!((slot.main, slot.middle), (2, 5));
    let slot = zone_slot(pattern.fixed_main, 5, &extra, 2);
    assert_eq!((slot.main, slot.middle), (2, 7));

    // Later zones overflow into the extra main group
    let slot = zone_slot(pattern.fixed_main, 5, &extra, 8);
    assert_eq!(slot.main, 3);
}

#[test]
fn test_generated_addresses_are_valid_knx() {
    let pattern = analyze_group_pattern(&[
        example("on/off", 5, 3, 10),
        example("status", 5, 3, 11),
    ])
    .unwrap();

    for device in 0..20u32 {
        let addr: GroupAddress = generate_address(&pattern, 0, device)
            .to_group_address()
            .expect("address within range");
        assert_eq!(addr.main(), 5);
        assert_eq!(addr.middle(), 3);
        assert_eq!(u32::from(addr.sub()), 10 + device);
    }
}
