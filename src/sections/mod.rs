//! MPIN evaluation sections
//!
//! Each section inspects a validated PIN for one family of weaknesses and
//! returns its findings in a stable order.

mod common_pins;
mod demographic;
mod keypad;
mod sequence;

pub use common_pins::common_pin_section;
pub use demographic::demographic_section;
pub use keypad::keypad_section;
pub use sequence::sequence_section;

use crate::dates::Demographics;
use crate::normalize::Pin;
use crate::types::Finding;

/// Findings reported by one section, empty when the section passes.
pub type SectionResult = Vec<Finding>;

/// Signature shared by all sections.
pub type Section = fn(&Pin, &Demographics) -> SectionResult;

#[cfg(test)]
pub(crate) fn pin(text: &str) -> Pin {
    use secrecy::SecretString;
    crate::normalize::normalize(&SecretString::new(text.into())).expect("valid test pin")
}
