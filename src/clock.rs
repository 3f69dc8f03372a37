use time::{Date, OffsetDateTime, UtcOffset};

/// Source of "today" for the calendar
pub(crate) trait Clock {
    fn today(&self) -> Date;
}

/// The host's wall clock, read in the local time zone.
///
/// The local UTC offset can only be determined reliably while the process is
/// single-threaded, so it is captured once at startup and reused for every
/// reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LocalClock {
    offset: UtcOffset,
}

impl LocalClock {
    pub(crate) fn new(offset: UtcOffset) -> LocalClock {
        LocalClock { offset }
    }
}

impl Clock for LocalClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.offset).date()
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FixedClock(pub(crate) Date);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_clock_matches_offset() {
        let offset = UtcOffset::from_hms(5, 30, 0).unwrap();
        let clock = LocalClock::new(offset);
        let before = OffsetDateTime::now_utc().to_offset(offset).date();
        let today = clock.today();
        let after = OffsetDateTime::now_utc().to_offset(offset).date();
        assert!(before <= today && today <= after);
    }
}
