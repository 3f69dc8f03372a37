use crate::calendar::{Calendar, CellClassifier, Grid};
use crate::clock::Clock;
use crate::config::Config;
use crate::help::Help;
use crate::nav::{Command, Flow, NavigationController};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<'a, C> {
    config: &'a Config,
    nav: NavigationController<C>,
    state: AppState,
}

impl<'a, C: Clock> App<'a, C> {
    pub(crate) fn new(config: &'a Config, nav: NavigationController<C>) -> App<'a, C> {
        App {
            config,
            nav,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let event = read()?;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = event.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        } else if let Event::Mouse(MouseEvent { kind, .. }) = event {
            if !self.handle_mouse(kind) {
                self.beep()?;
            }
        } else if matches!(event, Event::Resize(..) | Event::FocusGained) {
            self.dispatch(Command::Redraw);
        }
        // else: We might as well redraw on other stuff too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => {
                if key == KeyCode::Char('?') {
                    self.state = AppState::Helping;
                    true
                } else if let Some(command) = key_command(key, self.config.navigation) {
                    self.dispatch(command)
                } else {
                    false
                }
            }
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    // Scrolling steps through months even when keyboard navigation is
    // disabled.  Other mouse activity only causes a redraw.
    fn handle_mouse(&mut self, kind: MouseEventKind) -> bool {
        if self.state != AppState::Calendar {
            return true;
        }
        match mouse_command(kind) {
            Some(command) => self.dispatch(command),
            None => true,
        }
    }

    fn dispatch(&mut self, command: Command) -> bool {
        match self.nav.handle(command) {
            Ok(Flow::Redraw) => true,
            Ok(Flow::Quit) => {
                self.state = AppState::Quitting;
                true
            }
            Err(e) => {
                log::debug!("Rejected {command:?}: {e}");
                false
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<C: Clock> Widget for &App<'_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // One snapshot of "today" and the selection per pass
        let date = self.nav.date();
        let classifier = CellClassifier::new(
            self.config.navigation.then_some(date),
            &self.config.highlights,
            self.nav.today(),
        );
        Calendar::new(
            Grid::generate(date),
            classifier,
            &self.config.theme,
            self.config.placement,
        )
        .render(area, buf);
        if self.state == AppState::Helping {
            Help(self.config.theme.base()).render(area, buf);
        }
    }
}

fn key_command(key: KeyCode, navigation: bool) -> Option<Command> {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ if !navigation => None,
        KeyCode::Char(' ') => Some(Command::Today),
        KeyCode::Char('h') | KeyCode::Left => Some(Command::DayBack),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::DayForward),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::WeekBack),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::WeekForward),
        KeyCode::Char('K') | KeyCode::PageUp => Some(Command::MonthBack),
        KeyCode::Char('J') | KeyCode::PageDown => Some(Command::MonthForward),
        _ => None,
    }
}

fn mouse_command(kind: MouseEventKind) -> Option<Command> {
    match kind {
        MouseEventKind::ScrollUp => Some(Command::MonthBack),
        MouseEventKind::ScrollDown => Some(Command::MonthForward),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
