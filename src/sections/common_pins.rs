//! Common PIN section - checks if the PIN is on the well-known list.

use super::SectionResult;
use crate::common_pins::is_common_pin;
use crate::dates::Demographics;
use crate::normalize::Pin;
use crate::types::{Finding, FindingCategory};

/// Flags PINs found in the loaded common PIN list.
pub fn common_pin_section(pin: &Pin, _dates: &Demographics) -> SectionResult {
    if is_common_pin(pin.expose()) {
        return vec![Finding::new(
            FindingCategory::CommonPin,
            "PIN is on the list of most commonly used PINs",
        )];
    }
    Vec::new()
}
