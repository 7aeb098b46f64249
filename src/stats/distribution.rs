//! Change Distribution Module
//! Range buckets for absolute daily change and per-bucket counts.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Half-open absolute change range. Lower bound inclusive, upper exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeRange {
    /// [0, 2)
    UpToTwo,
    /// [2, 3)
    TwoToThree,
    /// [3, 4)
    ThreeToFour,
    /// [4, +inf)
    FourPlus,
}

impl ChangeRange {
    /// Canonical display order.
    pub const ALL: [ChangeRange; 4] = [
        ChangeRange::UpToTwo,
        ChangeRange::TwoToThree,
        ChangeRange::ThreeToFour,
        ChangeRange::FourPlus,
    ];

    /// Bucket an absolute change value.
    ///
    /// The value must already be non-negative. Negative or NaN input has no
    /// bucket and yields `None`.
    pub fn categorize(value: f64) -> Option<Self> {
        if value.is_nan() || value < 0.0 {
            return None;
        }
        let range = if value < 2.0 {
            ChangeRange::UpToTwo
        } else if value < 3.0 {
            ChangeRange::TwoToThree
        } else if value < 4.0 {
            ChangeRange::ThreeToFour
        } else {
            ChangeRange::FourPlus
        };
        Some(range)
    }

    pub fn label(self) -> &'static str {
        match self {
            ChangeRange::UpToTwo => "0-2%",
            ChangeRange::TwoToThree => "2-3%",
            ChangeRange::ThreeToFour => "3-4%",
            ChangeRange::FourPlus => "4%+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChangeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChangeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeRange::ALL
            .into_iter()
            .find(|range| range.label() == s)
            .ok_or_else(|| format!("unknown change range: {s}"))
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeCount {
    pub range: &'static str,
    pub count: usize,
}

/// Record counts per change range, plus rows that had no usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: [usize; 4],
    missing: usize,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a sequence of optional ranges; `None` is a missing row.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = Option<ChangeRange>>,
    {
        let mut dist = Self::new();
        for range in ranges {
            dist.record(range);
        }
        dist
    }

    pub fn record(&mut self, range: Option<ChangeRange>) {
        match range {
            Some(range) => self.counts[range.index()] += 1,
            None => self.missing += 1,
        }
    }

    pub fn count(&self, range: ChangeRange) -> usize {
        self.counts[range.index()]
    }

    /// Rows excluded from every bucket.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Rows that landed in a bucket.
    pub fn categorized(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn total_rows(&self) -> usize {
        self.categorized() + self.missing
    }

    /// All four buckets in canonical order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (ChangeRange, usize)> + '_ {
        ChangeRange::ALL
            .into_iter()
            .map(move |range| (range, self.count(range)))
    }

    pub fn to_rows(&self) -> Vec<RangeCount> {
        self.iter()
            .map(|(range, count)| RangeCount {
                range: range.label(),
                count,
            })
            .collect()
    }
}
