use crate::theme::{HEADER_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};
use std::fmt;
use time::{Date, Weekday};

/// Produces the content of the strip: one header for the reference date and
/// one cell per day of the visible week
pub trait StripRenderer {
    fn header(&self, date: Date) -> Line<'static>;

    fn cell(&self, date: Date) -> Text<'static>;
}

impl<T: StripRenderer + ?Sized> StripRenderer for &T {
    fn header(&self, date: Date) -> Line<'static> {
        (**self).header(date)
    }

    fn cell(&self, date: Date) -> Text<'static> {
        (**self).cell(date)
    }
}

/// A [`StripRenderer`] built from a pair of closures
pub struct FnRenderer<H, C> {
    header: H,
    cell: C,
}

impl<H, C> FnRenderer<H, C>
where
    H: Fn(Date) -> Line<'static>,
    C: Fn(Date) -> Text<'static>,
{
    pub fn new(header: H, cell: C) -> Self {
        FnRenderer { header, cell }
    }
}

impl<H, C> StripRenderer for FnRenderer<H, C>
where
    H: Fn(Date) -> Line<'static>,
    C: Fn(Date) -> Text<'static>,
{
    fn header(&self, date: Date) -> Line<'static> {
        (self.header)(date)
    }

    fn cell(&self, date: Date) -> Text<'static> {
        (self.cell)(date)
    }
}

impl<H, C> fmt::Debug for FnRenderer<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRenderer").finish_non_exhaustive()
    }
}

/// Renders the month & year of the reference date as the header and each
/// day as a two-letter weekday over its day number.  Today's date, if set,
/// is shown in brackets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultRenderer {
    today: Option<Date>,
}

impl DefaultRenderer {
    pub fn new() -> DefaultRenderer {
        DefaultRenderer::default()
    }

    pub fn today(mut self, today: Date) -> DefaultRenderer {
        self.today = Some(today);
        self
    }
}

impl StripRenderer for DefaultRenderer {
    fn header(&self, date: Date) -> Line<'static> {
        Line::from(Span::styled(
            format!("{} {}", date.month(), date.year()),
            HEADER_STYLE,
        ))
    }

    fn cell(&self, date: Date) -> Text<'static> {
        let (day, style) = if self.today == Some(date) {
            (format!("[{:2}]", date.day()), TODAY_STYLE)
        } else {
            (format!(" {:2} ", date.day()), Style::new())
        };
        Text::from_iter([
            Line::from(Span::styled(abbreviation(date.weekday()), WEEKDAY_STYLE)),
            Line::from(Span::styled(day, style)),
        ])
    }
}

fn abbreviation(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}
