//! Evaluation result types: findings, score and strength classification.

use std::fmt;

use crate::dates::{DateEncoding, DateRole};
use crate::scorer;

/// Keypad geometry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadFamily {
    Horizontal,
    Vertical,
    Diagonal,
    Corner,
}

impl KeypadFamily {
    pub const ALL: [KeypadFamily; 4] = [
        KeypadFamily::Horizontal,
        KeypadFamily::Vertical,
        KeypadFamily::Diagonal,
        KeypadFamily::Corner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeypadFamily::Horizontal => "horizontal",
            KeypadFamily::Vertical => "vertical",
            KeypadFamily::Diagonal => "diagonal",
            KeypadFamily::Corner => "corner",
        }
    }
}

/// What kind of weakness a [`Finding`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingCategory {
    CommonPin,
    Keypad(KeypadFamily),
    /// A 6-digit PIN made of one 3-digit keypad trace typed twice.
    RepeatedKeypad(KeypadFamily),
    Repetitive,
    ArithmeticAscending,
    ArithmeticDescending,
    Arithmetic,
    Geometric,
    SortedAscending,
    SortedDescending,
    RepeatedPair,
    RepeatedSequence,
    Demographic {
        role: DateRole,
        encoding: DateEncoding,
    },
    DemographicContains {
        role: DateRole,
        encoding: DateEncoding,
    },
    DemographicCombined {
        first: DateRole,
        second: DateRole,
    },
}

impl FindingCategory {
    /// Points this category subtracts from the base score.
    pub fn deduction(self) -> u32 {
        scorer::deduction_for(self)
    }

    pub fn is_demographic(self) -> bool {
        matches!(
            self,
            FindingCategory::Demographic { .. }
                | FindingCategory::DemographicContains { .. }
                | FindingCategory::DemographicCombined { .. }
        )
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::CommonPin => f.write_str("Common PIN"),
            FindingCategory::Keypad(family) => write!(f, "Keypad {}", family.name()),
            FindingCategory::RepeatedKeypad(family) => {
                write!(f, "Keypad {} repeated sequence", family.name())
            }
            FindingCategory::Repetitive => f.write_str("Repetitive"),
            FindingCategory::ArithmeticAscending => f.write_str("Arithmetic ascending"),
            FindingCategory::ArithmeticDescending => f.write_str("Arithmetic descending"),
            FindingCategory::Arithmetic => f.write_str("Arithmetic progression"),
            FindingCategory::Geometric => f.write_str("Geometric progression"),
            FindingCategory::SortedAscending => f.write_str("Ascending order"),
            FindingCategory::SortedDescending => f.write_str("Descending order"),
            FindingCategory::RepeatedPair => f.write_str("Repeated pair"),
            FindingCategory::RepeatedSequence => f.write_str("Repeated sequence"),
            FindingCategory::Demographic { role, encoding } => {
                write!(f, "Demographic {} {}", role, encoding.label())
            }
            FindingCategory::DemographicContains { role, encoding } => {
                write!(f, "Demographic {} contains {}", role, encoding.label())
            }
            FindingCategory::DemographicCombined { first, second } => {
                write!(f, "Demographic combined {} + {}", first, second)
            }
        }
    }
}

/// A single detected weakness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub category: FindingCategory,
    pub reason: String,
    pub deduction: u32,
}

impl Finding {
    pub fn new(category: FindingCategory, reason: impl Into<String>) -> Self {
        Self {
            category,
            reason: reason.into(),
            deduction: category.deduction(),
        }
    }
}

/// Strength classification of a PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PinStrength {
    Invalid,
    VeryWeak,
    Weak,
    Strong,
}

impl fmt::Display for PinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PinStrength::Invalid => "Invalid",
            PinStrength::VeryWeak => "Very Weak",
            PinStrength::Weak => "Weak",
            PinStrength::Strong => "Strong",
        })
    }
}

/// Score in `0..=100` after deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinScore(u8);

impl PinScore {
    pub const MAX: PinScore = PinScore(100);

    /// Builds a score, clamping the raw value into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, i64::from(Self::MAX.0)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn strength(self) -> PinStrength {
        scorer::classify(self)
    }
}

impl fmt::Display for PinScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of evaluating a valid PIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEvaluation {
    pub score: PinScore,
    /// Findings in detector execution order.
    pub findings: Vec<Finding>,
}

impl PinEvaluation {
    pub fn strength(&self) -> PinStrength {
        self.score.strength()
    }

    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|f| f.reason.as_str())
    }

    pub fn has_category(&self, category: FindingCategory) -> bool {
        self.findings.iter().any(|f| f.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_into_range() {
        assert_eq!(PinScore::new(-35).value(), 0);
        assert_eq!(PinScore::new(250), PinScore::MAX);
        assert_eq!(PinScore::new(64).value(), 64);
    }

    #[test]
    fn test_strength_ordering() {
        assert!(PinStrength::Invalid < PinStrength::VeryWeak);
        assert!(PinStrength::VeryWeak < PinStrength::Weak);
        assert!(PinStrength::Weak < PinStrength::Strong);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(
            FindingCategory::ArithmeticAscending.to_string(),
            "Arithmetic ascending"
        );
        assert_eq!(
            FindingCategory::RepeatedKeypad(KeypadFamily::Horizontal).to_string(),
            "Keypad horizontal repeated sequence"
        );
        let category = FindingCategory::Demographic {
            role: DateRole::SelfDob,
            encoding: DateEncoding::Ddmm,
        };
        assert_eq!(category.to_string(), "Demographic self DOB DDMM");
        assert!(category.is_demographic());
    }

    #[test]
    fn test_finding_takes_category_weight() {
        let finding = Finding::new(FindingCategory::Repetitive, "All digits are the same (1)");
        assert_eq!(finding.deduction, FindingCategory::Repetitive.deduction());
        assert!(finding.deduction > 0);
    }
}
