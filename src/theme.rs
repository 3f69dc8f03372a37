use crate::calendar::DisplayCategory;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const DEFAULT_BACKGROUND: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

pub(crate) const DEFAULT_CURRENT_FG: Color = Color::Rgb(0x00, 0x00, 0x00);

pub(crate) const DEFAULT_OTHER_FG: Color = Color::Rgb(0xff, 0xff, 0xff);

pub(crate) const DEFAULT_HIGHLIGHT_FG: Color = Color::Red;

/// Colors of the calendar popup
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background: Color,
    /// Foreground for days in the displayed month
    pub(crate) current_fg: Color,
    /// Foreground for days spilling over from adjacent months
    pub(crate) other_fg: Color,
    pub(crate) highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            background: DEFAULT_BACKGROUND,
            current_fg: DEFAULT_CURRENT_FG,
            other_fg: DEFAULT_OTHER_FG,
            highlight_fg: DEFAULT_HIGHLIGHT_FG,
        }
    }
}

impl Theme {
    pub(crate) fn base(&self) -> Style {
        Style::new().fg(self.current_fg).bg(self.background)
    }

    pub(crate) fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn category(&self, category: DisplayCategory) -> Style {
        match category {
            // Inverted, like a text cursor
            DisplayCategory::Selected => Style::new().fg(self.background).bg(self.current_fg),
            DisplayCategory::Highlighted => self
                .base()
                .fg(self.highlight_fg)
                .add_modifier(Modifier::BOLD),
            DisplayCategory::Today => self
                .base()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
            DisplayCategory::CurrentMonth => self.base(),
            DisplayCategory::OtherMonth => self.base().fg(self.other_fg),
        }
    }
}
