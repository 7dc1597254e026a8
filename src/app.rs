use crate::help::Help;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;
use weekstrip::{
    theme::{BASE_STYLE, SELECTED_STYLE},
    DefaultRenderer, Gregorian, WeekDelta, WeekStrip, WeekStripState,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    strip: WeekStripState<Gregorian>,
    renderer: DefaultRenderer,
    today: Date,
    state: AppState,
}

impl App {
    pub(crate) fn new(strip: WeekStripState<Gregorian>, today: Date) -> App {
        App {
            strip,
            renderer: DefaultRenderer::new().today(today),
            today,
            state: AppState::Strip,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        self.handle_event(read()?)
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind == KeyEventKind::Press => {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                    self.beep()?;
                }
            }
            Event::Mouse(event) if self.state == AppState::Strip => {
                self.strip.handle_mouse(event);
            }
            // Redraw on resize and anything else
            _ => (),
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Strip => match key {
                KeyCode::Char('h') | KeyCode::Left => self.shift(WeekDelta::Backward),
                KeyCode::Char('l') | KeyCode::Right => self.shift(WeekDelta::Forward),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.strip.set_date(self.today);
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    // The help overlay swallows mouse events, so a release
                    // made while it is open never reaches the strip
                    self.strip.cancel_drag();
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Strip;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn shift(&mut self, delta: WeekDelta) -> bool {
        self.strip.shift_weeks(delta).is_ok()
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        WeekStrip::new(&self.renderer)
            .selected_style(SELECTED_STYLE)
            .render(area, buf, &mut self.strip);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Strip,
    Helping,
    Quitting,
}
