mod classify;
mod cursor;
mod grid;
mod highlight;
mod util;
mod widget;
pub(crate) use self::classify::{CellClassifier, DisplayCategory};
pub(crate) use self::cursor::{DateCursor, DateRangeError};
pub(crate) use self::grid::Grid;
pub(crate) use self::highlight::{parse_ymd, HighlightSet};
pub(crate) use self::widget::{Calendar, Placement};
