use super::{StripRenderer, WeekStripState};
use crate::calendar::{CalendarSystem, DAYS_IN_WEEK};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use std::marker::PhantomData;

/// Number of lines taken up by the header
const HEADER_LINES: u16 = 1;

/// Number of lines taken up by the rule under the day cells
const DIVIDER_LINES: u16 = 1;

const COLUMNS: [Constraint; DAYS_IN_WEEK] = [Constraint::Ratio(1, 7); DAYS_IN_WEEK];

/// Draws a header line, a row of seven equally-wide day cells, and a
/// horizontal rule, top to bottom.
///
/// The row of cells is also where swipes are recognized: rendering records
/// its location in the [`WeekStripState`] so that
/// [`WeekStripState::handle_mouse`] only starts drags that begin on a day.
#[derive(Debug)]
pub struct WeekStrip<'a, R, C> {
    renderer: &'a R,
    selected_style: Style,
    _calendar: PhantomData<C>,
}

impl<'a, R: StripRenderer, C: CalendarSystem> WeekStrip<'a, R, C> {
    pub fn new(renderer: &'a R) -> Self {
        WeekStrip {
            renderer,
            selected_style: Style::new(),
            _calendar: PhantomData,
        }
    }

    /// Style patched over the cell of the reference date
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }
}

impl<R: StripRenderer, C: CalendarSystem> StatefulWidget for WeekStrip<'_, R, C> {
    type State = WeekStripState<C>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = self.renderer.header(state.date());
        let cells = state
            .window()
            .iter()
            .map(|date| (date, self.renderer.cell(date)))
            .collect::<Vec<_>>();
        let cell_lines = cells.iter().map(|(_, text)| text.height()).max().unwrap_or(0);
        let cell_lines = u16::try_from(cell_lines).unwrap_or(u16::MAX);
        let [header_area, row_area, divider_area, _] = Layout::vertical([
            Constraint::Length(HEADER_LINES),
            Constraint::Length(cell_lines),
            Constraint::Length(DIVIDER_LINES),
            Constraint::Min(0),
        ])
        .areas(area);
        header.render(header_area, buf);
        let columns = Layout::horizontal(COLUMNS).split(row_area);
        for ((date, text), &cell_area) in std::iter::zip(cells, columns.iter()) {
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .render(cell_area, buf);
            if date == state.date() {
                buf.set_style(cell_area, self.selected_style);
            }
        }
        state.row_area = Some(row_area);
        Block::new().borders(Borders::TOP).render(divider_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DateArithmeticError, DateInterval, Gregorian};
    use crate::strip::{DefaultRenderer, FnRenderer};
    use crate::theme::{BASE_STYLE, HEADER_STYLE, SELECTED_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
    use ratatui::text::{Line, Text};
    use std::cell::RefCell;
    use time::macros::date;
    use time::{Date, Weekday};

    fn plain_renderer() -> FnRenderer<impl Fn(Date) -> Line<'static>, impl Fn(Date) -> Text<'static>>
    {
        FnRenderer::new(
            |d: Date| Line::raw(format!("{} {}", d.month(), d.year())),
            |d: Date| Text::raw(d.day().to_string()),
        )
    }

    struct Broken;

    impl CalendarSystem for Broken {
        fn week_interval(&self, _date: Date) -> Option<DateInterval> {
            None
        }

        fn add_weeks(&self, date: Date, weeks: i32) -> Result<Date, DateArithmeticError> {
            Err(DateArithmeticError { date, weeks })
        }
    }

    #[test]
    fn test_render_plain() {
        let renderer = plain_renderer();
        let mut state = WeekStripState::new(Gregorian::default(), date!(2023 - 11 - 15));
        let area = Rect::new(0, 0, 35, 3);
        let mut buffer = Buffer::empty(area);
        WeekStrip::new(&renderer).render(area, &mut buffer, &mut state);
        let expected = Buffer::with_lines([
            "November 2023                      ",
            " 12   13   14   15   16   17   18  ",
            "───────────────────────────────────",
        ]);
        assert_eq!(buffer, expected);
        assert_eq!(state.row_area, Some(Rect::new(0, 1, 35, 1)));
    }

    #[test]
    fn test_render_monday_start() {
        let renderer = plain_renderer();
        let mut state =
            WeekStripState::new(Gregorian::new(Weekday::Monday), date!(2024 - 12 - 29));
        let area = Rect::new(0, 0, 35, 3);
        let mut buffer = Buffer::empty(area);
        WeekStrip::new(&renderer).render(area, &mut buffer, &mut state);
        let expected = Buffer::with_lines([
            "December 2024                      ",
            " 23   24   25   26   27   28   29  ",
            "───────────────────────────────────",
        ]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_empty_window() {
        let renderer = plain_renderer();
        let mut state = WeekStripState::new(Broken, date!(2023 - 11 - 15));
        let area = Rect::new(0, 0, 35, 3);
        let mut buffer = Buffer::empty(area);
        WeekStrip::new(&renderer).render(area, &mut buffer, &mut state);
        let expected = Buffer::with_lines([
            "November 2023                      ",
            "───────────────────────────────────",
            "                                   ",
        ]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_default() {
        let renderer = DefaultRenderer::new().today(date!(2023 - 11 - 15));
        let mut state = WeekStripState::new(Gregorian::default(), date!(2023 - 11 - 15));
        let area = Rect::new(0, 0, 35, 4);
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, BASE_STYLE);
        WeekStrip::new(&renderer)
            .selected_style(SELECTED_STYLE)
            .render(area, &mut buffer, &mut state);
        let mut expected = Buffer::with_lines([
            "November 2023                      ",
            " Su   Mo   Tu   We   Th   Fr   Sa  ",
            " 12   13   14  [15]  16   17   18  ",
            "───────────────────────────────────",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(0, 0, 13, 1), HEADER_STYLE);
        for x in (1..35).step_by(5) {
            expected.set_style(Rect::new(x, 1, 2, 1), WEEKDAY_STYLE);
        }
        expected.set_style(Rect::new(15, 2, 4, 1), TODAY_STYLE);
        expected.set_style(Rect::new(15, 1, 5, 2), SELECTED_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_callbacks() {
        let headers = RefCell::new(Vec::new());
        let cells = RefCell::new(Vec::new());
        let renderer = FnRenderer::new(
            |d: Date| {
                headers.borrow_mut().push(d);
                Line::default()
            },
            |d: Date| {
                cells.borrow_mut().push(d);
                Text::default()
            },
        );
        let mut state = WeekStripState::new(Gregorian::default(), date!(2023 - 11 - 15));
        let area = Rect::new(0, 0, 35, 3);
        let mut buffer = Buffer::empty(area);
        WeekStrip::new(&renderer).render(area, &mut buffer, &mut state);
        assert_eq!(headers.into_inner(), [date!(2023 - 11 - 15)]);
        assert_eq!(
            cells.into_inner(),
            [
                date!(2023 - 11 - 12),
                date!(2023 - 11 - 13),
                date!(2023 - 11 - 14),
                date!(2023 - 11 - 15),
                date!(2023 - 11 - 16),
                date!(2023 - 11 - 17),
                date!(2023 - 11 - 18),
            ]
        );
    }
}
