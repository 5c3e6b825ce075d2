//! Demographic section - detects PINs derived from personal dates.

use super::SectionResult;
use crate::dates::{
    COMBINED_ENCODINGS, DateComponent, DateEncoding, DateInfo, DateRole, Demographics, Side,
    encode_combined,
};
use crate::normalize::Pin;
use crate::types::{Finding, FindingCategory};

/// Human-readable description of the parts of a combined encoding.
fn describe_combined(
    encoding: &[(Side, DateComponent)],
    first: DateRole,
    second: DateRole,
) -> String {
    encoding
        .iter()
        .map(|(side, component)| {
            let role = match side {
                Side::First => first,
                Side::Second => second,
            };
            format!("{} {}", role, component.name())
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn single_date_findings(text: &str, role: DateRole, date: &DateInfo) -> Vec<Finding> {
    let exact: Vec<Finding> = DateEncoding::ALL
        .into_iter()
        .filter(|encoding| encoding.digit_count() == text.len())
        .filter(|encoding| encoding.encode(date) == text)
        .map(|encoding| {
            Finding::new(
                FindingCategory::Demographic { role, encoding },
                format!("Matches {} in {} format", role, encoding.label()),
            )
        })
        .collect();

    if !exact.is_empty() || text.len() != 6 {
        return exact;
    }

    DateEncoding::ALL
        .into_iter()
        .filter(|encoding| encoding.digit_count() == 4)
        .filter(|encoding| text.contains(encoding.encode(date).as_str()))
        .map(|encoding| {
            Finding::new(
                FindingCategory::DemographicContains { role, encoding },
                format!("Contains {} in {} format", role, encoding.label()),
            )
        })
        .collect()
}

fn combined_findings(
    text: &str,
    (first_role, first): (DateRole, DateInfo),
    (second_role, second): (DateRole, DateInfo),
) -> Vec<Finding> {
    COMBINED_ENCODINGS
        .iter()
        .filter(|encoding| encode_combined(encoding, &first, &second) == text)
        .map(|encoding| {
            Finding::new(
                FindingCategory::DemographicCombined {
                    first: first_role,
                    second: second_role,
                },
                format!(
                    "Matches combined pattern ({})",
                    describe_combined(encoding, first_role, second_role)
                ),
            )
        })
        .collect()
}

/// Matches the PIN against every supplied date, then every pair of dates.
///
/// Returns no findings when no dates are supplied.
pub fn demographic_section(pin: &Pin, dates: &Demographics) -> SectionResult {
    let text = pin.expose();
    let supplied = dates.dates();
    let mut findings = Vec::new();

    for (role, date) in &supplied {
        findings.extend(single_date_findings(text, *role, date));
    }

    for (i, first) in supplied.iter().enumerate() {
        for second in &supplied[i + 1..] {
            findings.extend(combined_findings(text, *first, *second));
        }
    }

    #[cfg(feature = "tracing")]
    {
        if !findings.is_empty() {
            tracing::debug!(
                "Demographic section: {} match(es) across {} date(s)",
                findings.len(),
                supplied.len()
            );
        }
    }

    findings
}
