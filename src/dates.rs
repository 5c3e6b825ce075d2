//! Personal dates and their digit encodings.
//!
//! A [`DateInfo`] is turned into candidate PIN strings through the
//! enumerated [`DateEncoding`] list (single date) and [`COMBINED_ENCODINGS`]
//! (components from two different dates).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Text format accepted by [`DateInfo::from_str`].
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Invalid calendar date: {day:02}-{month:02}-{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },
    #[error("Year must have 4 digits, got {0}")]
    YearOutOfRange(i32),
    #[error("Failed to parse date (expected DD-MM-YYYY): {0}")]
    Parse(#[from] chrono::ParseError),
}

/// A validated calendar date with a 4-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInfo {
    day: u32,
    month: u32,
    year: i32,
}

impl DateInfo {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateError::InvalidDate { day, month, year })?;
        Self::try_from(date)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl TryFrom<NaiveDate> for DateInfo {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = date.year();
        if !(1000..=9999).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        Ok(Self {
            day: date.day(),
            month: date.month(),
            year,
        })
    }
}

impl FromStr for DateInfo {
    type Err = DateError;

    /// Parses `DD-MM-YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?;
        Self::try_from(date)
    }
}

impl fmt::Display for DateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

/// Whose date it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRole {
    SelfDob,
    SpouseDob,
    Anniversary,
}

impl fmt::Display for DateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateRole::SelfDob => "self DOB",
            DateRole::SpouseDob => "spouse DOB",
            DateRole::Anniversary => "anniversary",
        })
    }
}

/// Optional personal dates supplied with an evaluation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demographics {
    pub self_dob: Option<DateInfo>,
    pub spouse_dob: Option<DateInfo>,
    pub anniversary: Option<DateInfo>,
}

impl Demographics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_dob(mut self, date: DateInfo) -> Self {
        self.self_dob = Some(date);
        self
    }

    pub fn with_spouse_dob(mut self, date: DateInfo) -> Self {
        self.spouse_dob = Some(date);
        self
    }

    pub fn with_anniversary(mut self, date: DateInfo) -> Self {
        self.anniversary = Some(date);
        self
    }

    /// Supplied dates in fixed role order: self, spouse, anniversary.
    pub fn dates(&self) -> Vec<(DateRole, DateInfo)> {
        [
            (DateRole::SelfDob, self.self_dob),
            (DateRole::SpouseDob, self.spouse_dob),
            (DateRole::Anniversary, self.anniversary),
        ]
        .into_iter()
        .filter_map(|(role, date)| date.map(|d| (role, d)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.self_dob.is_none() && self.spouse_dob.is_none() && self.anniversary.is_none()
    }
}

/// One zero-padded piece of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateComponent {
    Day,
    Month,
    Year,
    ShortYear,
}

impl DateComponent {
    pub fn render(self, date: &DateInfo) -> String {
        match self {
            DateComponent::Day => format!("{:02}", date.day),
            DateComponent::Month => format!("{:02}", date.month),
            DateComponent::Year => format!("{:04}", date.year),
            DateComponent::ShortYear => format!("{:02}", date.year.rem_euclid(100)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DateComponent::Day => "day",
            DateComponent::Month => "month",
            DateComponent::Year | DateComponent::ShortYear => "year",
        }
    }
}

/// Single-date digit encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateEncoding {
    Ddmm,
    Mmdd,
    Yyyy,
    Yymm,
    Mmyy,
    Yydd,
    Ddyy,
    Ddmmyy,
    Yymmdd,
    Mmddyy,
    Yyddmm,
    Yyyymm,
    Mmyyyy,
}

impl DateEncoding {
    pub const ALL: [DateEncoding; 13] = [
        DateEncoding::Ddmm,
        DateEncoding::Mmdd,
        DateEncoding::Yyyy,
        DateEncoding::Yymm,
        DateEncoding::Mmyy,
        DateEncoding::Yydd,
        DateEncoding::Ddyy,
        DateEncoding::Ddmmyy,
        DateEncoding::Yymmdd,
        DateEncoding::Mmddyy,
        DateEncoding::Yyddmm,
        DateEncoding::Yyyymm,
        DateEncoding::Mmyyyy,
    ];

    pub fn components(self) -> &'static [DateComponent] {
        use DateComponent::*;
        match self {
            DateEncoding::Ddmm => &[Day, Month],
            DateEncoding::Mmdd => &[Month, Day],
            DateEncoding::Yyyy => &[Year],
            DateEncoding::Yymm => &[ShortYear, Month],
            DateEncoding::Mmyy => &[Month, ShortYear],
            DateEncoding::Yydd => &[ShortYear, Day],
            DateEncoding::Ddyy => &[Day, ShortYear],
            DateEncoding::Ddmmyy => &[Day, Month, ShortYear],
            DateEncoding::Yymmdd => &[ShortYear, Month, Day],
            DateEncoding::Mmddyy => &[Month, Day, ShortYear],
            DateEncoding::Yyddmm => &[ShortYear, Day, Month],
            DateEncoding::Yyyymm => &[Year, Month],
            DateEncoding::Mmyyyy => &[Month, Year],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateEncoding::Ddmm => "DDMM",
            DateEncoding::Mmdd => "MMDD",
            DateEncoding::Yyyy => "YYYY",
            DateEncoding::Yymm => "YYMM",
            DateEncoding::Mmyy => "MMYY",
            DateEncoding::Yydd => "YYDD",
            DateEncoding::Ddyy => "DDYY",
            DateEncoding::Ddmmyy => "DDMMYY",
            DateEncoding::Yymmdd => "YYMMDD",
            DateEncoding::Mmddyy => "MMDDYY",
            DateEncoding::Yyddmm => "YYDDMM",
            DateEncoding::Yyyymm => "YYYYMM",
            DateEncoding::Mmyyyy => "MMYYYY",
        }
    }

    /// Digit count of every string this encoding produces.
    pub fn digit_count(self) -> usize {
        self.label().len()
    }

    pub fn encode(self, date: &DateInfo) -> String {
        self.components().iter().map(|c| c.render(date)).collect()
    }
}

/// Which of the two dates in a combination a component is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

pub type CombinedEncoding = &'static [(Side, DateComponent)];

/// Encodings built from components of two different dates.
pub const COMBINED_ENCODINGS: &[CombinedEncoding] = {
    use DateComponent::{Day as D, Month as M, ShortYear as Y};
    use Side::{First as A, Second as B};
    &[
        &[(A, D), (B, D)],
        &[(B, D), (A, D)],
        &[(A, M), (B, M)],
        &[(B, M), (A, M)],
        &[(A, D), (B, M)],
        &[(B, M), (A, D)],
        &[(A, M), (B, D)],
        &[(B, D), (A, M)],
        &[(A, Y), (B, Y)],
        &[(B, Y), (A, Y)],
        &[(A, D), (B, Y)],
        &[(B, Y), (A, D)],
        &[(A, M), (B, Y)],
        &[(B, Y), (A, M)],
        &[(B, D), (A, Y)],
        &[(A, Y), (B, D)],
        &[(B, M), (A, Y)],
        &[(A, Y), (B, M)],
        &[(A, D), (A, M), (B, Y)],
        &[(B, Y), (A, D), (A, M)],
        &[(B, D), (B, M), (A, Y)],
        &[(A, Y), (B, D), (B, M)],
    ]
};

/// Renders a combined encoding for a pair of dates.
pub fn encode_combined(
    encoding: &[(Side, DateComponent)],
    first: &DateInfo,
    second: &DateInfo,
) -> String {
    encoding
        .iter()
        .map(|(side, component)| match side {
            Side::First => component.render(first),
            Side::Second => component.render(second),
        })
        .collect()
}
