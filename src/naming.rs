//! Actuator channel naming conventions.
//!
//! Different manufacturers label actuator channels differently in their ETS
//! application programs; generated object names follow the same convention
//! so the output matches what the installer sees in ETS.

use core::fmt::Write;

use heapless::String;

/// Generate a channel label for the given manufacturer and 1-based channel
/// index.
///
/// Conventions:
/// - Gira, Jung: `A1`, `A2`, ...
/// - MDT, ABB: `A`, `B`, `C`, ...
/// - Theben, Hager, Zennio, Berker: `C1`, `C2`, ...
/// - Dimmers with more than 8 channels: `Da1.1` .. `Da1.16`, `Da2.1`, ...
/// - Anything else (Siemens included): `K1`, `K2`, ...
///
/// ```
/// use knx_planner::naming::channel_name;
///
/// assert_eq!(channel_name("Gira", 3, false, 4).as_str(), "A3");
/// assert_eq!(channel_name("MDT", 2, false, 4).as_str(), "B");
/// assert_eq!(channel_name("Siemens", 1, false, 4).as_str(), "K1");
/// assert_eq!(channel_name("MDT", 17, true, 24).as_str(), "Da2.1");
/// ```
pub fn channel_name(
    manufacturer: &str,
    channel_index: u8,
    is_dimmer: bool,
    channel_count: u8,
) -> String<8> {
    let mut name = String::new();
    let index0 = channel_index.saturating_sub(1);

    // Large dimmer actuators group their channels in blocks of 16
    if is_dimmer && channel_count > 8 {
        let group = index0 / 16 + 1;
        let channel_in_group = index0 % 16 + 1;
        let _ = write!(name, "Da{group}.{channel_in_group}");
        return name;
    }

    if eq_ignore_case(manufacturer, "gira") || eq_ignore_case(manufacturer, "jung") {
        let _ = write!(name, "A{channel_index}");
    } else if eq_ignore_case(manufacturer, "mdt") || eq_ignore_case(manufacturer, "abb") {
        // Alphabetic channels: A, B, C, ...
        let letter = (b'A' + index0 % 26) as char;
        let _ = name.push(letter);
    } else if eq_ignore_case(manufacturer, "theben")
        || eq_ignore_case(manufacturer, "hager")
        || eq_ignore_case(manufacturer, "zennio")
        || eq_ignore_case(manufacturer, "berker")
    {
        let _ = write!(name, "C{channel_index}");
    } else {
        let _ = write!(name, "K{channel_index}");
    }

    name
}

fn eq_ignore_case(manufacturer: &str, reference: &str) -> bool {
    manufacturer.trim().eq_ignore_ascii_case(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gira_jung_numbered_a() {
        assert_eq!(channel_name("Gira", 1, false, 8).as_str(), "A1");
        assert_eq!(channel_name("jung", 12, false, 12).as_str(), "A12");
    }

    #[test]
    fn test_mdt_abb_alphabetic() {
        assert_eq!(channel_name("MDT", 1, false, 8).as_str(), "A");
        assert_eq!(channel_name("abb", 4, false, 8).as_str(), "D");
    }

    #[test]
    fn test_c_prefix_manufacturers() {
        assert_eq!(channel_name("Theben", 2, false, 8).as_str(), "C2");
        assert_eq!(channel_name("Hager", 3, false, 8).as_str(), "C3");
        assert_eq!(channel_name("Zennio", 4, false, 8).as_str(), "C4");
        assert_eq!(channel_name("berker", 5, false, 8).as_str(), "C5");
    }

    #[test]
    fn test_default_k_prefix() {
        assert_eq!(channel_name("Siemens", 1, false, 8).as_str(), "K1");
        assert_eq!(channel_name("Somebody Else", 7, false, 8).as_str(), "K7");
    }

    #[test]
    fn test_large_dimmer_blocks() {
        assert_eq!(channel_name("MDT", 1, true, 24).as_str(), "Da1.1");
        assert_eq!(channel_name("MDT", 16, true, 24).as_str(), "Da1.16");
        assert_eq!(channel_name("MDT", 17, true, 24).as_str(), "Da2.1");
    }

    #[test]
    fn test_small_dimmer_uses_manufacturer_convention() {
        assert_eq!(channel_name("Gira", 2, true, 4).as_str(), "A2");
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        assert_eq!(channel_name(" GIRA ", 1, false, 8).as_str(), "A1");
    }
}
