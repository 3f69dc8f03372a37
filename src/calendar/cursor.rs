use super::util::days_in_month;
use crate::clock::Clock;
use thiserror::Error;
use time::{Date, Month};

/// First year the cursor may enter.  The `time` crate stops at year -9999;
/// keeping a year of slack means the grid around any cursor position never
/// runs off the end of time.
pub(crate) const MIN_YEAR: i32 = -9998;

/// Last year the cursor may enter
pub(crate) const MAX_YEAR: i32 = 9998;

const DAYS_PER_WEEK: i64 = 7;

const MONTHS_PER_YEAR: i64 = 12;

/// The date currently displayed & selected by the calendar.
///
/// Every step either lands on a valid date between [`MIN_YEAR`] and
/// [`MAX_YEAR`] (inclusive) or fails with [`DateRangeError`], in which case
/// the cursor is left untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateCursor {
    date: Date,
}

impl DateCursor {
    pub(crate) fn new(date: Date) -> Result<DateCursor, DateRangeError> {
        Ok(DateCursor {
            date: check_range(date)?,
        })
    }

    pub(crate) fn get(&self) -> Date {
        self.date
    }

    pub(crate) fn step_days(&mut self, n: i64) -> Result<(), DateRangeError> {
        let jd = i64::from(self.date.to_julian_day())
            .checked_add(n)
            .ok_or(DateRangeError)?;
        let jd = i32::try_from(jd).map_err(|_| DateRangeError)?;
        let date = Date::from_julian_day(jd).map_err(|_| DateRangeError)?;
        self.set(date)
    }

    pub(crate) fn step_weeks(&mut self, n: i64) -> Result<(), DateRangeError> {
        self.step_days(n.checked_mul(DAYS_PER_WEEK).ok_or(DateRangeError)?)
    }

    /// Move `n` months forwards (or backwards, if negative).  If the current
    /// day of the month does not exist in the target month, the last day of
    /// the target month is used instead.
    pub(crate) fn step_months(&mut self, n: i64) -> Result<(), DateRangeError> {
        let index = i64::from(self.date.year()) * MONTHS_PER_YEAR
            + i64::from(u8::from(self.date.month()))
            - 1;
        let index = index.checked_add(n).ok_or(DateRangeError)?;
        let year = i32::try_from(index.div_euclid(MONTHS_PER_YEAR)).map_err(|_| DateRangeError)?;
        let month = u8::try_from(index.rem_euclid(MONTHS_PER_YEAR) + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(DateRangeError)?;
        let day = self.date.day().min(days_in_month(year, month));
        let date = Date::from_calendar_date(year, month, day).map_err(|_| DateRangeError)?;
        self.set(date)
    }

    pub(crate) fn jump_to_today<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
    ) -> Result<(), DateRangeError> {
        self.set(clock.today())
    }

    fn set(&mut self, date: Date) -> Result<(), DateRangeError> {
        self.date = check_range(date)?;
        Ok(())
    }
}

fn check_range(date: Date) -> Result<Date, DateRangeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(DateRangeError)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of navigable time")]
pub(crate) struct DateRangeError;
