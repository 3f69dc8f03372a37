use super::classify::{CellClassifier, DisplayCategory};
use super::grid::Grid;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};

static WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Width of the calendar proper, not counting the padding around it
const CAL_WIDTH: u16 = 20;

/// Number of lines taken up by the title and the weekday names
const HEADER_LINES: u16 = 2;

const WEEK_LINES: u16 = 6;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 3;

/// Blank cells on every side of the calendar
const PADDING: u16 = 1;

const POPUP_WIDTH: u16 = CAL_WIDTH + 2 * PADDING;

const POPUP_HEIGHT: u16 = HEADER_LINES + WEEK_LINES + 2 * PADDING;

/// Receiver of the drawing calls for one render pass of the calendar
pub(crate) trait Painter {
    fn draw_header(&mut self, title: &str);

    /// `row` and `col` are the cell's zero-based position in the grid; `text`
    /// is the two-digit day of the month.
    fn draw_cell(&mut self, row: u16, col: u16, text: &str, category: DisplayCategory);
}

/// Classify every cell of `grid` and hand the results to `painter`
pub(crate) fn paint<P: Painter + ?Sized>(
    grid: &Grid,
    classifier: &CellClassifier<'_>,
    painter: &mut P,
) {
    painter.draw_header(&grid.title());
    for ((row, col), cell) in grid.positioned() {
        painter.draw_cell(row, col, &cell.day_text(), classifier.classify(cell));
    }
}

/// Which corner of the screen the popup is pinned to
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Placement {
    pub(crate) bottom: bool,
    pub(crate) left: bool,
}

impl Placement {
    fn locate(self, area: Rect) -> Rect {
        let width = POPUP_WIDTH.min(area.width);
        let height = POPUP_HEIGHT.min(area.height);
        let x = if self.left {
            area.x
        } else {
            area.right() - width
        };
        let y = if self.bottom {
            area.bottom() - height
        } else {
            area.y
        };
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a> {
    grid: Grid,
    classifier: CellClassifier<'a>,
    theme: &'a Theme,
    placement: Placement,
}

impl<'a> Calendar<'a> {
    pub(crate) fn new(
        grid: Grid,
        classifier: CellClassifier<'a>,
        theme: &'a Theme,
        placement: Placement,
    ) -> Calendar<'a> {
        Calendar {
            grid,
            classifier,
            theme,
            placement,
        }
    }
}

impl Widget for Calendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.placement.locate(area);
        Clear.render(popup, buf);
        Block::new().style(self.theme.base()).render(popup, buf);
        let inner = popup.inner(Margin::new(PADDING, PADDING));
        let mut canvas = BufferCanvas::new(inner, buf, self.theme);
        paint(&self.grid, &self.classifier, &mut canvas);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    theme: &'a Theme,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer, theme: &'a Theme) -> Self {
        Self { area, buf, theme }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }
}

impl Painter for BufferCanvas<'_> {
    fn draw_header(&mut self, title: &str) {
        let width = u16::try_from(Line::raw(title).width()).unwrap_or(u16::MAX);
        let x = CAL_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, self.theme.title());
        self.mvprint(1, 0, WEEKDAY_HEADER, self.theme.base());
    }

    fn draw_cell(&mut self, row: u16, col: u16, text: &str, category: DisplayCategory) {
        self.mvprint(
            HEADER_LINES + row,
            DAY_WIDTH * col,
            text,
            self.theme.category(category),
        );
    }
}
