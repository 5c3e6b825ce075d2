//! Scorer - deduction weights, aggregation and classification.

use crate::dates::DateEncoding;
use crate::types::{Finding, FindingCategory, PinScore, PinStrength};

pub const BASE_SCORE: i64 = 100;

/// Scores at or above this are `Strong`.
pub const STRONG_THRESHOLD: u8 = 70;
/// Scores at or above this (and below `STRONG_THRESHOLD`) are `Weak`.
pub const WEAK_THRESHOLD: u8 = 40;

pub const REPETITIVE: u32 = 70;
pub const ARITHMETIC_UNIT_STEP: u32 = 65;
pub const ARITHMETIC: u32 = 40;
pub const GEOMETRIC: u32 = 30;
pub const SORTED: u32 = 20;
pub const REPEATED_PAIR: u32 = 50;
pub const REPEATED_SEQUENCE: u32 = 35;
pub const KEYPAD: u32 = 35;
pub const KEYPAD_REPEAT_BONUS: u32 = 15;
pub const DEMOGRAPHIC_EXACT: u32 = 40;
pub const DEMOGRAPHIC_YEAR: u32 = 20;
pub const DEMOGRAPHIC_CONTAINS: u32 = 20;
pub const DEMOGRAPHIC_COMBINED: u32 = 15;
pub const COMMON_PIN: u32 = 40;

pub(crate) fn deduction_for(category: FindingCategory) -> u32 {
    match category {
        FindingCategory::CommonPin => COMMON_PIN,
        FindingCategory::Keypad(_) => KEYPAD,
        FindingCategory::RepeatedKeypad(_) => KEYPAD + KEYPAD_REPEAT_BONUS,
        FindingCategory::Repetitive => REPETITIVE,
        FindingCategory::ArithmeticAscending | FindingCategory::ArithmeticDescending => {
            ARITHMETIC_UNIT_STEP
        }
        FindingCategory::Arithmetic => ARITHMETIC,
        FindingCategory::Geometric => GEOMETRIC,
        FindingCategory::SortedAscending | FindingCategory::SortedDescending => SORTED,
        FindingCategory::RepeatedPair => REPEATED_PAIR,
        FindingCategory::RepeatedSequence => REPEATED_SEQUENCE,
        FindingCategory::Demographic {
            encoding: DateEncoding::Yyyy,
            ..
        } => DEMOGRAPHIC_YEAR,
        FindingCategory::Demographic { .. } => DEMOGRAPHIC_EXACT,
        FindingCategory::DemographicContains { .. } => DEMOGRAPHIC_CONTAINS,
        FindingCategory::DemographicCombined { .. } => DEMOGRAPHIC_COMBINED,
    }
}

/// Subtracts every finding's deduction from the base score, floored at 0.
pub fn score(findings: &[Finding]) -> PinScore {
    let total: i64 = findings.iter().map(|f| i64::from(f.deduction)).sum();
    PinScore::new(BASE_SCORE - total)
}

pub fn classify(score: PinScore) -> PinStrength {
    match score.value() {
        s if s >= STRONG_THRESHOLD => PinStrength::Strong,
        s if s >= WEAK_THRESHOLD => PinStrength::Weak,
        _ => PinStrength::VeryWeak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::DateRole;
    use crate::types::KeypadFamily;

    #[test]
    fn test_no_findings_is_full_score() {
        let s = score(&[]);
        assert_eq!(s.value(), 100);
        assert_eq!(classify(s), PinStrength::Strong);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let findings = vec![
            Finding::new(FindingCategory::Repetitive, "a"),
            Finding::new(FindingCategory::ArithmeticAscending, "b"),
        ];
        assert_eq!(score(&findings).value(), 0);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(PinScore::new(70)), PinStrength::Strong);
        assert_eq!(classify(PinScore::new(69)), PinStrength::Weak);
        assert_eq!(classify(PinScore::new(40)), PinStrength::Weak);
        assert_eq!(classify(PinScore::new(39)), PinStrength::VeryWeak);
        assert_eq!(classify(PinScore::new(0)), PinStrength::VeryWeak);
    }

    #[test]
    fn test_heaviest_weights_alone_are_very_weak() {
        for category in [
            FindingCategory::Repetitive,
            FindingCategory::ArithmeticAscending,
            FindingCategory::ArithmeticDescending,
        ] {
            let s = score(&[Finding::new(category, "")]);
            assert_eq!(classify(s), PinStrength::VeryWeak, "{category}");
        }
    }

    #[test]
    fn test_repeated_keypad_adds_bonus() {
        assert_eq!(
            deduction_for(FindingCategory::RepeatedKeypad(KeypadFamily::Diagonal)),
            KEYPAD + KEYPAD_REPEAT_BONUS
        );
    }

    #[test]
    fn test_combined_demographic_is_lightest() {
        let combined = deduction_for(FindingCategory::DemographicCombined {
            first: DateRole::SelfDob,
            second: DateRole::SpouseDob,
        });
        let year = deduction_for(FindingCategory::Demographic {
            role: DateRole::SelfDob,
            encoding: DateEncoding::Yyyy,
        });
        assert!(combined < year);
        assert!(combined < SORTED);
        assert!(combined < DEMOGRAPHIC_CONTAINS);
    }
}
