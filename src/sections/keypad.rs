//! Keypad section - detects geometric traces on a phone keypad.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! * 0 #
//! ```

use std::cmp::Reverse;
use std::sync::LazyLock;

use super::SectionResult;
use crate::dates::Demographics;
use crate::normalize::Pin;
use crate::types::{Finding, FindingCategory, KeypadFamily};

/// Straight lines of three or more keys, top-left to bottom-right.
const LINES: [(KeypadFamily, &str); 8] = [
    (KeypadFamily::Horizontal, "123"),
    (KeypadFamily::Horizontal, "456"),
    (KeypadFamily::Horizontal, "789"),
    (KeypadFamily::Vertical, "147"),
    (KeypadFamily::Vertical, "2580"),
    (KeypadFamily::Vertical, "369"),
    (KeypadFamily::Diagonal, "159"),
    (KeypadFamily::Diagonal, "357"),
];

/// Corner keys in clockwise order.
const CORNER_CYCLE: [u8; 4] = *b"1397";

#[derive(Debug, Clone)]
struct Trace {
    family: KeypadFamily,
    digits: String,
}

impl Trace {
    fn new(family: KeypadFamily, digits: &[u8]) -> Self {
        Self {
            family,
            digits: digits.iter().map(|&b| b as char).collect(),
        }
    }
}

struct KeypadTables {
    /// Flag a PIN that contains them. Longest first within each family.
    contained: Vec<Trace>,
    /// 3-digit traces that flag a 6-digit PIN typing them twice.
    repeatable: Vec<Trace>,
}

static TABLES: LazyLock<KeypadTables> = LazyLock::new(build_tables);

fn build_tables() -> KeypadTables {
    let mut contained = Vec::new();
    let mut repeatable = Vec::new();

    for (family, line) in LINES {
        let forward: Vec<u8> = line.bytes().collect();
        let backward: Vec<u8> = forward.iter().rev().copied().collect();
        for cells in [forward, backward] {
            for len in (3..=cells.len()).rev() {
                for window in cells.windows(len) {
                    let trace = Trace::new(family, window);
                    if len == 3 {
                        repeatable.push(trace.clone());
                    }
                    contained.push(trace);
                }
            }
        }
    }

    // Walks around the corner cycle, clockwise (step 1) and counter-clockwise (step 3)
    for start in 0..CORNER_CYCLE.len() {
        for step in [1, 3] {
            let walk = |n: usize| -> Vec<u8> {
                (0..n).map(|i| CORNER_CYCLE[(start + i * step) % 4]).collect()
            };
            contained.push(Trace::new(KeypadFamily::Corner, &walk(4)));
            repeatable.push(Trace::new(KeypadFamily::Corner, &walk(3)));
        }
    }

    contained.sort_by_key(|t| (t.family as u8, Reverse(t.digits.len())));

    KeypadTables {
        contained,
        repeatable,
    }
}

fn title(family: KeypadFamily) -> &'static str {
    match family {
        KeypadFamily::Horizontal => "Horizontal",
        KeypadFamily::Vertical => "Vertical",
        KeypadFamily::Diagonal => "Diagonal",
        KeypadFamily::Corner => "Corner",
    }
}

/// The 3-digit trace a 6-digit PIN repeats, if it belongs to `family`.
fn repeated_trace<'a>(text: &str, family: KeypadFamily, tables: &'a KeypadTables) -> Option<&'a str> {
    if text.len() != 6 || text[..3] != text[3..] {
        return None;
    }
    tables
        .repeatable
        .iter()
        .find(|t| t.family == family && t.digits == text[..3])
        .map(|t| t.digits.as_str())
}

/// A PIN typed on corner keys alone, using at least two of them.
fn corners_only(text: &str) -> Option<Finding> {
    if !text.bytes().all(|b| CORNER_CYCLE.contains(&b)) {
        return None;
    }
    let mut used: Vec<char> = text.chars().collect();
    used.sort_unstable();
    used.dedup();

    let reason = match used.len() {
        4 => "Corner keypad pattern using all four corners".to_string(),
        n @ 2..=3 => {
            let list: Vec<String> = used.iter().map(char::to_string).collect();
            let count = if n == 3 { "three" } else { "two" };
            format!("Corner keypad pattern using {} corners: {}", count, list.join(", "))
        }
        _ => return None,
    };
    Some(Finding::new(FindingCategory::Keypad(KeypadFamily::Corner), reason))
}

/// Reports at most one finding per keypad family.
///
/// A 6-digit PIN made of a 3-digit trace typed twice is reported as a
/// repeated keypad pattern instead of the plain family finding. A corner
/// walk names the walk; any other PIN made of two or more corner keys names
/// the corners used.
pub fn keypad_section(pin: &Pin, _dates: &Demographics) -> SectionResult {
    let text = pin.expose();
    let tables = &*TABLES;

    KeypadFamily::ALL
        .into_iter()
        .filter_map(|family| {
            if let Some(trace) = repeated_trace(text, family, tables) {
                return Some(Finding::new(
                    FindingCategory::RepeatedKeypad(family),
                    format!("Repeated {} keypad pattern ({})", family.name(), trace),
                ));
            }
            let walk = tables
                .contained
                .iter()
                .filter(|t| t.family == family)
                .find(|t| text.contains(t.digits.as_str()))
                .map(|t| {
                    Finding::new(
                        FindingCategory::Keypad(family),
                        format!("{} keypad pattern ({})", title(family), t.digits),
                    )
                });
            match family {
                KeypadFamily::Corner => walk.or_else(|| corners_only(text)),
                _ => walk,
            }
        })
        .collect()
}
