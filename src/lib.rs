//! A one-week calendar strip for [`ratatui`] applications.
//!
//! The strip shows a header for a *reference date* above the seven days of
//! the week containing it.  Dragging across the days with the mouse moves the
//! reference date a week at a time: a drag towards the left shows the next
//! week, a drag towards the right the previous one.
//!
//! ```no_run
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
//! use time::macros::date;
//! use weekstrip::{DefaultRenderer, Gregorian, WeekStrip, WeekStripState};
//!
//! let mut state = WeekStripState::new(Gregorian::default(), date!(2023 - 11 - 15));
//! let renderer = DefaultRenderer::new();
//! let area = Rect::new(0, 0, 35, 4);
//! let mut buf = Buffer::empty(area);
//! WeekStrip::new(&renderer).render(area, &mut buf, &mut state);
//! ```
pub mod calendar;
pub mod gesture;
pub mod strip;
pub mod theme;
pub mod window;
pub use crate::calendar::{CalendarSystem, DateArithmeticError, DateInterval, Gregorian};
pub use crate::gesture::{DragEnded, DragRecognizer, WeekDelta, MIN_DRAG_DISTANCE};
pub use crate::strip::{DefaultRenderer, FnRenderer, StripRenderer, WeekStrip, WeekStripState};
pub use crate::window::{build_week, WeekWindow};
