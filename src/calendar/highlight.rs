use std::collections::BTreeSet;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

static YYYYMMDD_FMT: &[FormatItem<'_>] = format_description!("[year][month][day]");

/// Parse a highlight date written as `YYYYMMDD`
pub(crate) fn parse_ymd(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YYYYMMDD_FMT)
}

/// Dates to emphasize in the calendar, optionally limited to a fixed number
/// of entries
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighlightSet {
    dates: BTreeSet<Date>,
    limit: Option<usize>,
}

impl HighlightSet {
    pub(crate) fn new() -> HighlightSet {
        HighlightSet::default()
    }

    pub(crate) fn bounded(limit: usize) -> HighlightSet {
        HighlightSet {
            dates: BTreeSet::new(),
            limit: Some(limit),
        }
    }

    /// Add a date to the set.  Returns `Ok(false)` if the date was already
    /// present.
    pub(crate) fn insert(&mut self, date: Date) -> Result<bool, HighlightsFull> {
        if self.dates.contains(&date) {
            return Ok(false);
        }
        if let Some(limit) = self.limit {
            if self.dates.len() >= limit {
                return Err(HighlightsFull(limit));
            }
        }
        Ok(self.dates.insert(date))
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    pub(crate) fn len(&self) -> usize {
        self.dates.len()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("highlight set is already at its limit of {0} dates")]
pub(crate) struct HighlightsFull(pub(crate) usize);
