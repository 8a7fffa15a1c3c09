//! Calendar domain logic for the booking page.
//!
//! Builds the month grid shown to visitors: six weeks of seven days, with the
//! displayed month padded by fill days from the adjacent months. Which days can
//! be picked depends on the host's blocked rules and on the evaluation instant,
//! which callers pass in explicitly so that the result is reproducible.
//!
//! Months are 1-based throughout (1 = January), matching the blocked-dates
//! endpoint.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};
use shared::{BlockedDatesQuery, BlockedDatesResponse, CalendarCell, CalendarDayType, CalendarWeek};

use crate::locale;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
/// Cells in every grid, regardless of how many fill days a month needs
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// The (year, month) pair currently displayed by the calendar.
///
/// Stored as the first day of the month, so it can never hold an invalid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReferenceMonth {
    first_day: NaiveDate,
}

impl ReferenceMonth {
    /// `month` is 1-based. Returns `None` for months outside 1..=12 or years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    /// The month of the local wall clock
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day + Days::new(u64::from(self.days_in_month() - 1))
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month(), self.year())
    }

    /// Week day of the 1st (0 = Sunday .. 6 = Saturday)
    pub fn first_weekday(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Previous month, rolling back over January. Saturates at the earliest
    /// month chrono can represent.
    pub fn previous(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Next month, rolling over December. Saturates at the latest month chrono
    /// can represent.
    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Header text: month name and year, e.g. `("março", "2024")`
    pub fn title(&self) -> (&'static str, String) {
        let name = locale::month_name(self.month()).unwrap_or_default();
        (name, self.year().to_string())
    }

    /// Query sent to the blocked-dates endpoint for this month
    pub fn query(&self) -> BlockedDatesQuery {
        BlockedDatesQuery {
            year: self.year(),
            month: self.month(),
        }
    }
}

impl Default for ReferenceMonth {
    fn default() -> Self {
        Self::current()
    }
}

/// Get days in a 1-based month, accounting for leap years
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Unavailability rules of one displayed month.
///
/// Immutable once received; a month change replaces them wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockedRules {
    blocked_week_days: BTreeSet<u32>,
    blocked_dates: BTreeSet<u32>,
}

impl BlockedRules {
    /// `week_days` are 0 = Sunday .. 6 = Saturday, `dates` are day-of-month numbers
    pub fn new(
        week_days: impl IntoIterator<Item = u32>,
        dates: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            blocked_week_days: week_days.into_iter().collect(),
            blocked_dates: dates.into_iter().collect(),
        }
    }

    pub fn blocks_week_day(&self, week_day: u32) -> bool {
        self.blocked_week_days.contains(&week_day)
    }

    pub fn blocks_day_number(&self, day: u32) -> bool {
        self.blocked_dates.contains(&day)
    }

    /// Whether either rule blocks a date of the displayed month
    pub fn blocks(&self, date: NaiveDate) -> bool {
        self.blocks_week_day(date.weekday().num_days_from_sunday())
            || self.blocks_day_number(date.day())
    }
}

impl From<BlockedDatesResponse> for BlockedRules {
    fn from(response: BlockedDatesResponse) -> Self {
        Self::new(response.blocked_week_days, response.blocked_dates)
    }
}

/// A day is past once its end-of-day instant has elapsed, i.e. from the next
/// calendar day on. Today is never past.
pub fn is_past(date: NaiveDate, now: NaiveDateTime) -> bool {
    date < now.date()
}

/// Build the 6 x 7 grid for `reference`.
///
/// Returns an empty grid while `rules` is `None`: without the blocked rules
/// the grid would offer blocked days for selection. `now` must be in the same
/// local calendar as the cell dates.
pub fn build_month_grid(
    reference: ReferenceMonth,
    rules: Option<&BlockedRules>,
    now: NaiveDateTime,
) -> Vec<CalendarWeek> {
    let Some(rules) = rules else {
        return Vec::new();
    };

    let first_day = reference.first_day();
    let last_day = reference.last_day();
    let leading = reference.first_weekday() as usize;
    let in_month = reference.days_in_month() as usize;
    let trailing = GRID_CELLS - (leading + in_month);

    log::debug!(
        "Building grid for {}/{}: {} leading, {} in month, {} trailing",
        reference.month(),
        reference.year(),
        leading,
        in_month,
        trailing
    );

    let Some(grid_start) = first_day.checked_sub_days(Days::new(leading as u64)) else {
        log::warn!(
            "Grid for {}/{} starts before the representable range",
            reference.month(),
            reference.year()
        );
        return Vec::new();
    };

    let cells: Vec<CalendarCell> = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let day_type = if date < first_day {
                CalendarDayType::PaddingBefore
            } else if date > last_day {
                CalendarDayType::PaddingAfter
            } else {
                CalendarDayType::MonthDay
            };

            let disabled = match day_type {
                CalendarDayType::MonthDay => is_past(date, now) || rules.blocks(date),
                CalendarDayType::PaddingBefore | CalendarDayType::PaddingAfter => true,
            };

            CalendarCell {
                date,
                day_type,
                disabled,
            }
        })
        .collect();

    if cells.len() != GRID_CELLS {
        log::warn!(
            "Grid for {}/{} ends past the representable range",
            reference.month(),
            reference.year()
        );
        return Vec::new();
    }

    cells
        .chunks(DAYS_PER_WEEK)
        .zip(1u32..)
        .map(|(days, week)| CalendarWeek {
            week,
            days: days.to_vec(),
        })
        .collect()
}
