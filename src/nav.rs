use crate::calendar::{DateCursor, DateRangeError};
use crate::clock::Clock;
use time::Date;

/// Input commands understood by the calendar, independent of the key or
/// button that produced them
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Today,
    DayBack,
    DayForward,
    WeekBack,
    WeekForward,
    MonthBack,
    MonthForward,
    Redraw,
}

/// What the caller should do after a command has been handled
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Redraw,
    Quit,
}

/// Applies [`Command`]s to the date cursor.  Each command is handled to
/// completion before the next one is accepted; there is no pending state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NavigationController<C> {
    cursor: DateCursor,
    clock: C,
}

impl<C: Clock> NavigationController<C> {
    pub(crate) fn new(cursor: DateCursor, clock: C) -> Self {
        NavigationController { cursor, clock }
    }

    pub(crate) fn date(&self) -> Date {
        self.cursor.get()
    }

    pub(crate) fn today(&self) -> Date {
        self.clock.today()
    }

    /// On error, the cursor is left where it was.
    pub(crate) fn handle(&mut self, command: Command) -> Result<Flow, DateRangeError> {
        log::debug!("Handling {command:?} at {}", self.cursor.get());
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Today => self.cursor.jump_to_today(&self.clock)?,
            Command::DayBack => self.cursor.step_days(-1)?,
            Command::DayForward => self.cursor.step_days(1)?,
            Command::WeekBack => self.cursor.step_weeks(-1)?,
            Command::WeekForward => self.cursor.step_weeks(1)?,
            Command::MonthBack => self.cursor.step_months(-1)?,
            Command::MonthForward => self.cursor.step_months(1)?,
            Command::Redraw => (),
        }
        Ok(Flow::Redraw)
    }
}
