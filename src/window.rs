use crate::calendar::{CalendarSystem, DAYS_IN_WEEK};
use time::Date;

/// The seven days shown by the strip, in chronological order.
///
/// A window is either full or empty; it is empty when the calendar could not
/// work out where the week around the reference date begins or ends.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct WeekWindow(Option<[Date; DAYS_IN_WEEK]>);

impl WeekWindow {
    pub const EMPTY: WeekWindow = WeekWindow(None);

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.dates().len()
    }

    pub fn dates(&self) -> &[Date] {
        match &self.0 {
            Some(days) => days.as_slice(),
            None => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates().iter().copied()
    }

    pub fn first(&self) -> Option<Date> {
        self.dates().first().copied()
    }

    pub fn last(&self) -> Option<Date> {
        self.dates().last().copied()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.dates().contains(&date)
    }
}

/// Computes the week window containing `date`.
///
/// The week around `date` is unioned with the week around that week's last
/// day, so a calendar whose week boundaries drift still yields one block of
/// consecutive days; the first seven of those are kept.  If either week
/// cannot be resolved, or fewer than seven days can be enumerated, the
/// result is empty.
pub fn build_week<C: CalendarSystem + ?Sized>(calendar: &C, date: Date) -> WeekWindow {
    WeekWindow(week_days(calendar, date))
}

fn week_days<C: CalendarSystem + ?Sized>(calendar: &C, date: Date) -> Option<[Date; DAYS_IN_WEEK]> {
    let first = calendar.week_interval(date)?;
    let last = calendar.week_interval(first.last_day())?;
    let mut days = first.union(&last).days();
    let mut week = [first.start(); DAYS_IN_WEEK];
    for slot in &mut week {
        *slot = days.next()?;
    }
    Some(week)
}
