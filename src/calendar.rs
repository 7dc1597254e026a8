//! Calendar systems: where weeks begin and end, and checked arithmetic on
//! dates measured in weeks
use std::iter::successors;
use thiserror::Error;
use time::{Date, Duration, Weekday};

pub const DAYS_IN_WEEK: usize = 7;

/// The calendar rules the strip is laid out with.
///
/// Implementations are treated as immutable configuration; every method must
/// fail softly (by returning `None` or `Err`) rather than panic when a date
/// is near the edges of the representable range.
pub trait CalendarSystem {
    /// Returns the week containing `date`, or `None` if the week's bounds
    /// cannot be represented
    fn week_interval(&self, date: Date) -> Option<DateInterval>;

    /// Returns `date` moved by `weeks` weeks (negative values move backwards)
    fn add_weeks(&self, date: Date, weeks: i32) -> Result<Date, DateArithmeticError>;
}

impl<T: CalendarSystem + ?Sized> CalendarSystem for &T {
    fn week_interval(&self, date: Date) -> Option<DateInterval> {
        (**self).week_interval(date)
    }

    fn add_weeks(&self, date: Date, weeks: i32) -> Result<Date, DateArithmeticError> {
        (**self).add_weeks(date, weeks)
    }
}

/// A half-open span of days, `start` included and `end` excluded
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
// Invariant: start < end
pub struct DateInterval {
    start: Date,
    end: Date,
}

impl DateInterval {
    /// Returns `None` if the interval would contain no days
    pub fn new(start: Date, end: Date) -> Option<DateInterval> {
        (start < end).then_some(DateInterval { start, end })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// The final day inside the interval
    pub fn last_day(&self) -> Date {
        self.end.previous_day().unwrap_or(self.start)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }

    /// Smallest interval covering both `self` and `other`
    pub fn union(&self, other: &DateInterval) -> DateInterval {
        DateInterval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Iterates over every day in the interval in order, beginning with
    /// `start`
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        successors(Some(self.start), |d| d.next_day()).take_while(move |&d| d < end)
    }
}

/// The proleptic Gregorian calendar with a configurable first day of the
/// week
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Gregorian {
    first_weekday: Weekday,
}

impl Gregorian {
    pub const fn new(first_weekday: Weekday) -> Gregorian {
        Gregorian { first_weekday }
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    // Number of days between the start of the week and `date`
    fn days_into_week(&self, date: Date) -> u8 {
        let day = date.weekday().number_days_from_sunday();
        let first = self.first_weekday.number_days_from_sunday();
        (day + 7 - first) % 7
    }
}

impl Default for Gregorian {
    fn default() -> Gregorian {
        Gregorian::new(Weekday::Sunday)
    }
}

impl CalendarSystem for Gregorian {
    fn week_interval(&self, date: Date) -> Option<DateInterval> {
        let start = date.checked_sub(Duration::days(self.days_into_week(date).into()))?;
        let end = start.checked_add(Duration::WEEK)?;
        DateInterval::new(start, end)
    }

    fn add_weeks(&self, date: Date, weeks: i32) -> Result<Date, DateArithmeticError> {
        date.checked_add(Duration::weeks(weeks.into()))
            .ok_or(DateArithmeticError { date, weeks })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("moving {date} by {weeks} week(s) runs past the end of time")]
pub struct DateArithmeticError {
    pub date: Date,
    pub weeks: i32,
}
