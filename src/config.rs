use crate::calendar::{parse_ymd, HighlightSet, Placement};
use crate::theme::Theme;

/// Default number of dates that can be highlighted at once
pub(crate) const DEFAULT_HIGHLIGHT_LIMIT: usize = 32;

/// Settings fixed for the lifetime of the program
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    /// Whether the keyboard can move the cursor.  When false, the cursor's
    /// date is never shown as selected.
    pub(crate) navigation: bool,
    pub(crate) highlights: HighlightSet,
    pub(crate) theme: Theme,
    pub(crate) placement: Placement,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            navigation: true,
            highlights: HighlightSet::bounded(DEFAULT_HIGHLIGHT_LIMIT),
            theme: Theme::default(),
            placement: Placement::default(),
        }
    }
}

/// Build a highlight set from `YYYYMMDD` strings.  Malformed entries and
/// entries beyond `limit` are skipped with a warning.  A `limit` of `None`
/// means no limit.
pub(crate) fn load_highlights<S: AsRef<str>>(entries: &[S], limit: Option<usize>) -> HighlightSet {
    let mut highlights = match limit {
        Some(n) => HighlightSet::bounded(n),
        None => HighlightSet::new(),
    };
    for entry in entries {
        let entry = entry.as_ref();
        match parse_ymd(entry) {
            Ok(date) => {
                if let Err(e) = highlights.insert(date) {
                    log::warn!("Ignoring highlight date {entry:?}: {e}");
                }
            }
            Err(e) => log::warn!("Ignoring malformed highlight date {entry:?}: {e}"),
        }
    }
    highlights
}
