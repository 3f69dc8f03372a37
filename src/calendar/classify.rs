use super::grid::GridCell;
use super::highlight::HighlightSet;
use time::Date;

/// How a grid cell should be displayed
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DisplayCategory {
    Selected,
    Highlighted,
    Today,
    CurrentMonth,
    OtherMonth,
}

/// Assigns each grid cell exactly one [`DisplayCategory`].
///
/// A classifier is a snapshot for a single render pass: "today" and the
/// selected date are fixed when it is constructed so that every cell of a
/// grid is judged against the same values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CellClassifier<'a> {
    selected: Option<Date>,
    highlights: &'a HighlightSet,
    today: Date,
}

impl<'a> CellClassifier<'a> {
    /// `selected` should be `None` when keyboard navigation is disabled.
    pub(crate) fn new(
        selected: Option<Date>,
        highlights: &'a HighlightSet,
        today: Date,
    ) -> CellClassifier<'a> {
        CellClassifier {
            selected,
            highlights,
            today,
        }
    }

    // The first matching category wins.
    pub(crate) fn classify(&self, cell: &GridCell) -> DisplayCategory {
        if self.selected == Some(cell.date) {
            DisplayCategory::Selected
        } else if self.highlights.contains(cell.date) {
            DisplayCategory::Highlighted
        } else if cell.date == self.today {
            DisplayCategory::Today
        } else if cell.in_month {
            DisplayCategory::CurrentMonth
        } else {
            DisplayCategory::OtherMonth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::Grid;
    use time::macros::date;

    fn cell(date: Date, in_month: bool) -> GridCell {
        GridCell { date, in_month }
    }

    #[test]
    fn test_priority() {
        let d = date!(2024 - 02 - 14);
        let mut highlights = HighlightSet::new();
        highlights.insert(d).unwrap();
        let c = cell(d, true);
        assert_eq!(
            CellClassifier::new(Some(d), &highlights, d).classify(&c),
            DisplayCategory::Selected
        );
        assert_eq!(
            CellClassifier::new(None, &highlights, d).classify(&c),
            DisplayCategory::Highlighted
        );
        let empty = HighlightSet::new();
        assert_eq!(
            CellClassifier::new(None, &empty, d).classify(&c),
            DisplayCategory::Today
        );
        assert_eq!(
            CellClassifier::new(None, &empty, date!(2024 - 02 - 15)).classify(&c),
            DisplayCategory::CurrentMonth
        );
        assert_eq!(
            CellClassifier::new(None, &empty, date!(2024 - 02 - 15)).classify(&cell(d, false)),
            DisplayCategory::OtherMonth
        );
    }

    #[test]
    fn test_selected_beats_today() {
        let d = date!(2024 - 02 - 14);
        let highlights = HighlightSet::new();
        assert_eq!(
            CellClassifier::new(Some(d), &highlights, d).classify(&cell(d, true)),
            DisplayCategory::Selected
        );
    }

    #[test]
    fn test_highlight_outside_month() {
        let d = date!(2024 - 03 - 02);
        let mut highlights = HighlightSet::new();
        highlights.insert(d).unwrap();
        let classifier = CellClassifier::new(None, &highlights, date!(2024 - 02 - 14));
        assert_eq!(
            classifier.classify(&cell(d, false)),
            DisplayCategory::Highlighted
        );
    }

    #[test]
    fn test_classify_grid() {
        let grid = Grid::generate(date!(2024 - 02 - 01));
        let mut highlights = HighlightSet::new();
        highlights.insert(date!(2024 - 02 - 29)).unwrap();
        highlights.insert(date!(2024 - 03 - 09)).unwrap();
        let classifier = CellClassifier::new(
            Some(date!(2024 - 02 - 01)),
            &highlights,
            date!(2024 - 02 - 14),
        );
        let categories = grid
            .cells()
            .iter()
            .map(|c| classifier.classify(c))
            .collect::<Vec<_>>();
        assert_eq!(categories[0], DisplayCategory::OtherMonth);
        assert_eq!(categories[3], DisplayCategory::OtherMonth);
        assert_eq!(categories[4], DisplayCategory::Selected);
        assert_eq!(categories[5], DisplayCategory::CurrentMonth);
        assert_eq!(categories[17], DisplayCategory::Today);
        assert_eq!(categories[32], DisplayCategory::Highlighted);
        assert_eq!(categories[33], DisplayCategory::OtherMonth);
        assert_eq!(categories[41], DisplayCategory::Highlighted);
        let count = |cat: DisplayCategory| categories.iter().filter(|&&c| c == cat).count();
        assert_eq!(count(DisplayCategory::Selected), 1);
        assert_eq!(count(DisplayCategory::Today), 1);
        assert_eq!(count(DisplayCategory::Highlighted), 2);
        assert_eq!(count(DisplayCategory::CurrentMonth), 26);
        assert_eq!(count(DisplayCategory::OtherMonth), 12);
        let again = grid
            .cells()
            .iter()
            .map(|c| classifier.classify(c))
            .collect::<Vec<_>>();
        assert_eq!(categories, again);
    }
}
