use super::util::{first_of_month, WeekdayExt, DAYS_IN_WEEK};
use std::iter::successors;
use time::{Date, Duration, Month};

/// Number of weeks displayed for every month, no matter how many it spans
pub(crate) const WEEKS_IN_GRID: usize = 6;

pub(crate) const GRID_CELLS: usize = WEEKS_IN_GRID * DAYS_IN_WEEK;

const COLUMNS: u16 = 7;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridCell {
    pub(crate) date: Date,
    /// Whether the date lies in the month the grid was generated for
    pub(crate) in_month: bool,
}

impl GridCell {
    pub(crate) fn day_text(&self) -> String {
        format!("{:02}", self.date.day())
    }
}

/// Six Sunday-first weeks covering a single month, padded out with days from
/// the neighboring months
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    year: i32,
    month: Month,
    cells: [GridCell; GRID_CELLS],
}

impl Grid {
    /// Build the grid for the month containing `reference`.
    ///
    /// `reference` must lie at least a month inside the range of dates
    /// representable by `time`, which [`DateCursor`](super::DateCursor)
    /// guarantees.
    pub(crate) fn generate(reference: Date) -> Grid {
        let (year, month) = (reference.year(), reference.month());
        let first = first_of_month(reference);
        let start = first
            .checked_sub(Duration::days(first.weekday().index0().into()))
            .expect("grid should not start before the beginning of time");
        let mut days = successors(Some(start), |d| d.next_day());
        let cells = std::array::from_fn(|_| {
            let date = days
                .next()
                .expect("grid should not run past the end of time");
            GridCell {
                date,
                in_month: (date.year(), date.month()) == (year, month),
            }
        });
        Grid { year, month, cells }
    }

    /// The header text for the grid, e.g. "February 2024"
    pub(crate) fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    pub(crate) fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.cells
    }

    /// Iterate over the cells in row-major order together with their zero-based
    /// `(row, column)` coordinates
    pub(crate) fn positioned(&self) -> impl Iterator<Item = ((u16, u16), &GridCell)> + '_ {
        std::iter::zip(0u16.., self.cells()).map(|(i, cell)| ((i / COLUMNS, i % COLUMNS), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::util::days_in_month;
    use time::{macros::date, Weekday};

    fn every_month(years: &[i32]) -> Vec<Date> {
        let mut dates = Vec::new();
        for &year in years {
            let mut month = Month::January;
            for _ in 0..12 {
                dates.push(Date::from_calendar_date(year, month, 15).unwrap());
                month = month.next();
            }
        }
        dates
    }

    const SAMPLE_YEARS: &[i32] = &[1900, 1999, 2000, 2023, 2024, 2026, 2100];

    #[test]
    fn test_february_2024() {
        let grid = Grid::generate(date!(2024 - 02 - 01));
        let cells = grid.cells();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, date!(2024 - 01 - 28));
        assert_eq!(cells[0].date.weekday(), Weekday::Sunday);
        assert!(!cells[0].in_month);
        assert_eq!(cells[4].date, date!(2024 - 02 - 01));
        assert!(cells[4].in_month);
        assert_eq!(cells[32].date, date!(2024 - 02 - 29));
        assert!(cells[32].in_month);
        assert_eq!(cells[33].date, date!(2024 - 03 - 01));
        assert!(!cells[33].in_month);
        assert_eq!(cells[41].date, date!(2024 - 03 - 09));
        let in_month = cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 29);
        assert_eq!(grid.title(), "February 2024");
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // No leading days, and the remaining two weeks come from March
        let grid = Grid::generate(date!(2026 - 02 - 17));
        let cells = grid.cells();
        assert_eq!(cells[0].date, date!(2026 - 02 - 01));
        assert_eq!(cells[27].date, date!(2026 - 02 - 28));
        assert_eq!(cells[28].date, date!(2026 - 03 - 01));
        assert_eq!(cells[41].date, date!(2026 - 03 - 14));
    }

    #[test]
    fn test_month_starting_on_saturday() {
        let grid = Grid::generate(date!(2023 - 07 - 04));
        let cells = grid.cells();
        assert_eq!(cells[0].date, date!(2023 - 06 - 25));
        assert_eq!(cells[6].date, date!(2023 - 07 - 01));
        assert_eq!(cells[36].date, date!(2023 - 07 - 31));
        assert_eq!(cells[41].date, date!(2023 - 08 - 05));
    }

    #[test]
    fn test_every_grid_starts_on_sunday() {
        for reference in every_month(SAMPLE_YEARS) {
            let grid = Grid::generate(reference);
            assert_eq!(
                grid.cells()[0].date.weekday(),
                Weekday::Sunday,
                "grid for {reference}"
            );
            assert!(grid.cells()[0].date <= first_of_month(reference));
        }
    }

    #[test]
    fn test_consecutive_days() {
        for reference in every_month(SAMPLE_YEARS) {
            let grid = Grid::generate(reference);
            for pair in grid.cells().windows(2) {
                assert_eq!(pair[0].date.next_day(), Some(pair[1].date));
            }
        }
    }

    #[test]
    fn test_month_containment() {
        for reference in every_month(SAMPLE_YEARS) {
            let grid = Grid::generate(reference);
            let (year, month) = (reference.year(), reference.month());
            let in_month = grid
                .cells()
                .iter()
                .filter(|c| c.in_month)
                .map(|c| c.date)
                .collect::<Vec<_>>();
            let expected = (1..=days_in_month(year, month))
                .map(|day| Date::from_calendar_date(year, month, day).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(in_month, expected, "grid for {reference}");
            for cell in grid.cells() {
                assert_eq!(
                    cell.in_month,
                    (cell.date.year(), cell.date.month()) == (year, month)
                );
            }
        }
    }

    #[test]
    fn test_reference_day_is_irrelevant() {
        let grid = Grid::generate(date!(2024 - 02 - 01));
        assert_eq!(Grid::generate(date!(2024 - 02 - 29)), grid);
        assert_eq!(Grid::generate(date!(2024 - 02 - 14)), grid);
    }

    #[test]
    fn test_idempotent() {
        let reference = date!(2025 - 11 - 30);
        assert_eq!(Grid::generate(reference), Grid::generate(reference));
    }

    #[test]
    fn test_grid_at_ends_of_navigable_time() {
        let grid = Grid::generate(date!(9998 - 12 - 31));
        assert_eq!(grid.cells()[41].date, date!(9999 - 01 - 09));
        let grid = Grid::generate(date!(-9998 - 01 - 01));
        assert_eq!(grid.cells()[0].date.year(), -9999);
    }

    #[test]
    fn test_positioned() {
        let grid = Grid::generate(date!(2024 - 02 - 01));
        let positioned = grid.positioned().collect::<Vec<_>>();
        assert_eq!(positioned.len(), 42);
        assert_eq!(positioned[0].0, (0, 0));
        assert_eq!(positioned[4].0, (0, 4));
        assert_eq!(positioned[4].1.date, date!(2024 - 02 - 01));
        assert_eq!(positioned[7].0, (1, 0));
        assert_eq!(positioned[41].0, (5, 6));
    }

    #[test]
    fn test_day_text() {
        let grid = Grid::generate(date!(2024 - 02 - 01));
        assert_eq!(grid.cells()[4].day_text(), "01");
        assert_eq!(grid.cells()[32].day_text(), "29");
    }
}
