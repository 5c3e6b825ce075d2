//! Sequence section - detects repetition and numeric progressions.

use super::SectionResult;
use crate::dates::Demographics;
use crate::normalize::Pin;
use crate::types::{Finding, FindingCategory};

/// Constant step between consecutive digits, if there is one.
fn constant_step(digits: &[i8]) -> Option<i8> {
    let step = digits[1] - digits[0];
    digits.windows(2).all(|w| w[1] - w[0] == step).then_some(step)
}

/// Integer ratio `r >= 2` with every digit equal to the previous one times `r`.
fn constant_ratio(digits: &[i8]) -> Option<i8> {
    let first = digits[0];
    if first == 0 || digits[1] % first != 0 {
        return None;
    }
    let ratio = digits[1] / first;
    if ratio < 2 {
        return None;
    }
    digits
        .windows(2)
        .all(|w| w[0] * ratio == w[1])
        .then_some(ratio)
}

/// Smallest block length `p >= 2` such that the PIN is that block repeated.
fn repeated_block(text: &str) -> Option<&str> {
    let len = text.len();
    (2..=len / 2)
        .filter(|p| len % p == 0)
        .find(|&p| text.as_bytes().chunks(p).all(|chunk| chunk == &text.as_bytes()[..p]))
        .map(|p| &text[..p])
}

/// Checks repetition, arithmetic, geometric, sorted and repeated-block
/// patterns, in that order.
pub fn sequence_section(pin: &Pin, _dates: &Demographics) -> SectionResult {
    let text = pin.expose();
    let digits = pin.digits();
    let mut findings = Vec::new();

    if digits.iter().all(|&d| d == digits[0]) {
        findings.push(Finding::new(
            FindingCategory::Repetitive,
            format!("All digits are the same ({})", digits[0]),
        ));
        return findings;
    }

    let mut progression = false;

    match constant_step(&digits) {
        Some(1) => {
            findings.push(Finding::new(
                FindingCategory::ArithmeticAscending,
                "Digits ascend one by one",
            ));
            progression = true;
        }
        Some(-1) => {
            findings.push(Finding::new(
                FindingCategory::ArithmeticDescending,
                "Digits descend one by one",
            ));
            progression = true;
        }
        Some(step) => {
            findings.push(Finding::new(
                FindingCategory::Arithmetic,
                format!("Arithmetic progression with difference {}", step),
            ));
            progression = true;
        }
        None => {}
    }

    let reversed: Vec<i8> = digits.iter().rev().copied().collect();
    if let Some(ratio) = constant_ratio(&digits) {
        findings.push(Finding::new(
            FindingCategory::Geometric,
            format!("Geometric progression with ratio {}", ratio),
        ));
        progression = true;
    } else if let Some(ratio) = constant_ratio(&reversed) {
        findings.push(Finding::new(
            FindingCategory::Geometric,
            format!("Descending geometric progression with ratio {}", ratio),
        ));
        progression = true;
    }

    if !progression {
        if digits.windows(2).all(|w| w[0] <= w[1]) {
            findings.push(Finding::new(
                FindingCategory::SortedAscending,
                "Digits are in ascending order",
            ));
        } else if digits.windows(2).all(|w| w[0] >= w[1]) {
            findings.push(Finding::new(
                FindingCategory::SortedDescending,
                "Digits are in descending order",
            ));
        }
    }

    if let Some(block) = repeated_block(text) {
        let category = if block.len() == 2 {
            FindingCategory::RepeatedPair
        } else {
            FindingCategory::RepeatedSequence
        };
        let label = if block.len() == 2 { "pair" } else { "sequence" };
        // A pair block is also a repeated sequence; one finding covers both
        findings.push(Finding::new(
            category,
            format!(
                "Repeated {} pattern ({} repeated {} times)",
                label,
                block,
                text.len() / block.len()
            ),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::pin;

    fn categories(text: &str) -> Vec<FindingCategory> {
        sequence_section(&pin(text), &Demographics::new())
            .into_iter()
            .map(|f| f.category)
            .collect()
    }

    #[test]
    fn test_sequence_all_same() {
        let findings = sequence_section(&pin("1111"), &Demographics::new());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::Repetitive);
        assert_eq!(findings[0].reason, "All digits are the same (1)");

        assert_eq!(categories("000000"), vec![FindingCategory::Repetitive]);
    }

    #[test]
    fn test_sequence_unit_steps() {
        assert_eq!(categories("1234"), vec![FindingCategory::ArithmeticAscending]);
        assert_eq!(categories("456789"), vec![FindingCategory::ArithmeticAscending]);
        assert_eq!(categories("4321"), vec![FindingCategory::ArithmeticDescending]);
        assert_eq!(categories("0123"), vec![FindingCategory::ArithmeticAscending]);
    }

    #[test]
    fn test_sequence_other_steps() {
        assert_eq!(categories("1357"), vec![FindingCategory::Arithmetic]);
        assert_eq!(categories("9630"), vec![FindingCategory::Arithmetic]);
        assert_eq!(categories("024680"), Vec::<FindingCategory>::new());
    }

    #[test]
    fn test_sequence_geometric_both_directions() {
        assert_eq!(categories("1248"), vec![FindingCategory::Geometric]);
        let findings = sequence_section(&pin("8421"), &Demographics::new());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::Geometric);
        assert!(findings[0].reason.starts_with("Descending geometric"));
    }

    #[test]
    fn test_sequence_sorted_runs() {
        assert_eq!(categories("1358"), vec![FindingCategory::SortedAscending]);
        assert_eq!(categories("975310"), vec![FindingCategory::SortedDescending]);
    }

    #[test]
    fn test_sequence_sorted_allows_equal_neighbours() {
        assert_eq!(categories("1123"), vec![FindingCategory::SortedAscending]);
        assert_eq!(categories("0019"), vec![FindingCategory::SortedAscending]);
        assert_eq!(categories("5589"), vec![FindingCategory::SortedAscending]);
        assert_eq!(categories("995520"), vec![FindingCategory::SortedDescending]);
        // All-same stays a single repetition finding
        assert_eq!(categories("1111"), vec![FindingCategory::Repetitive]);
    }

    #[test]
    fn test_sequence_repeated_blocks() {
        assert_eq!(categories("1212"), vec![FindingCategory::RepeatedPair]);
        assert_eq!(categories("121212"), vec![FindingCategory::RepeatedPair]);
        assert_eq!(categories("123123"), vec![FindingCategory::RepeatedSequence]);
        assert_eq!(categories("907907"), vec![FindingCategory::RepeatedSequence]);
        assert!(categories("1221").is_empty());

        let findings = sequence_section(&pin("121212"), &Demographics::new());
        assert_eq!(findings[0].reason, "Repeated pair pattern (12 repeated 3 times)");
        let findings = sequence_section(&pin("907907"), &Demographics::new());
        assert_eq!(findings[0].reason, "Repeated sequence pattern (907 repeated 2 times)");
    }

    #[test]
    fn test_sequence_clean_pin() {
        assert!(categories("748650").is_empty());
        assert!(categories("2702").is_empty());
    }

    #[test]
    fn test_helpers() {
        assert_eq!(constant_step(&[5, 3, 1]), Some(-2));
        assert_eq!(constant_step(&[5, 3, 2]), None);
        assert_eq!(constant_ratio(&[1, 3, 9]), Some(3));
        assert_eq!(constant_ratio(&[0, 0, 0]), None);
        assert_eq!(constant_ratio(&[2, 2, 2]), None);
        assert_eq!(repeated_block("4545"), Some("45"));
        assert_eq!(repeated_block("454545"), Some("45"));
        assert_eq!(repeated_block("454554"), None);
    }
}
