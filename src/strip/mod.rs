mod render;
mod widget;
pub use self::render::{DefaultRenderer, FnRenderer, StripRenderer};
pub use self::widget::WeekStrip;
use crate::calendar::{CalendarSystem, DateArithmeticError};
use crate::gesture::{DragEnded, DragRecognizer, Point, WeekDelta};
use crate::window::{build_week, WeekWindow};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use time::Date;

/// Host-owned state of a [`WeekStrip`]: the reference date, the week shown
/// around it, and any drag in progress
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeekStripState<C> {
    calendar: C,
    date: Date,
    window: WeekWindow,
    drag: DragRecognizer,
    // Where the day cells were last drawn; drags only start inside it
    pub(crate) row_area: Option<Rect>,
}

impl<C: CalendarSystem> WeekStripState<C> {
    pub fn new(calendar: C, date: Date) -> Self {
        let mut state = WeekStripState {
            calendar,
            date,
            window: WeekWindow::EMPTY,
            drag: DragRecognizer::default(),
            row_area: None,
        };
        state.rebuild();
        state
    }

    pub fn min_drag_distance(mut self, distance: u16) -> Self {
        self.drag = DragRecognizer::new(distance);
        self
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn window(&self) -> &WeekWindow {
        &self.window
    }

    pub fn drag(&self) -> &DragRecognizer {
        &self.drag
    }

    pub fn set_date(&mut self, date: Date) {
        if date != self.date {
            self.date = date;
            self.rebuild();
        }
    }

    /// Moves the reference date by `delta`.  On failure the reference date
    /// is left as it was.
    pub fn shift_weeks(&mut self, delta: WeekDelta) -> Result<Date, DateArithmeticError> {
        if delta == WeekDelta::Stay {
            return Ok(self.date);
        }
        match self.calendar.add_weeks(self.date, delta.weeks()) {
            Ok(date) => {
                tracing::debug!(from = %self.date, to = %date, "moved reference date");
                self.set_date(date);
                Ok(date)
            }
            Err(e) => {
                tracing::warn!(error = %e, "keeping reference date");
                Err(e)
            }
        }
    }

    /// Applies a finished swipe.  Returns the new reference date, or `None`
    /// if the swipe did not change it.
    pub fn drag_ended(&mut self, ended: DragEnded) -> Option<Date> {
        match WeekDelta::from(ended) {
            WeekDelta::Stay => None,
            delta => self.shift_weeks(delta).ok(),
        }
    }

    /// Feeds a terminal mouse event to the drag recognizer.  Returns the new
    /// reference date if the event completed a swipe that changed it.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Date> {
        let at = Point::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = Position::new(event.column, event.row);
                if self.row_area.is_some_and(|area| area.contains(pos)) {
                    self.drag.begin(at);
                } else {
                    self.drag.reset();
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let ended = self.drag.end(at)?;
                self.drag_ended(ended)
            }
            _ => None,
        }
    }

    /// Abandons any drag in progress, e.g. when something is drawn over the
    /// strip and the release may never reach it
    pub fn cancel_drag(&mut self) {
        self.drag.reset();
    }

    fn rebuild(&mut self) {
        self.window = build_week(&self.calendar, self.date);
        if self.window.is_empty() {
            tracing::debug!(date = %self.date, "no week could be resolved around reference date");
        }
    }
}
