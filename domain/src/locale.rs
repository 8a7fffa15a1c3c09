//! pt-BR names for week days and months.

use chrono::Weekday;

const WEEK_DAYS_LONG: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const WEEK_DAYS_SHORT: [&str; 7] = ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."];

const WEEK_DAYS_NARROW: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Width of the week day names returned by [`get_week_days`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekDayFormat {
    #[default]
    Long,
    Short,
    Narrow,
}

impl WeekDayFormat {
    fn names(self) -> &'static [&'static str; 7] {
        match self {
            WeekDayFormat::Long => &WEEK_DAYS_LONG,
            WeekDayFormat::Short => &WEEK_DAYS_SHORT,
            WeekDayFormat::Narrow => &WEEK_DAYS_NARROW,
        }
    }
}

/// The seven week day names, Sunday first.
pub fn get_week_days(format: WeekDayFormat, to_uppercase: bool) -> Vec<String> {
    format
        .names()
        .iter()
        .map(|name| {
            if to_uppercase {
                name.to_uppercase()
            } else {
                name.to_string()
            }
        })
        .collect()
}

/// Long name of a week day index (0 = Sunday)
pub fn week_day_name(week_day: u32) -> Option<&'static str> {
    WEEK_DAYS_LONG.get(week_day as usize).copied()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEK_DAYS_LONG[weekday.num_days_from_sunday() as usize]
}

/// Name of a 1-based month
pub fn month_name(month: u32) -> Option<&'static str> {
    month.checked_sub(1).and_then(|index| MONTHS.get(index as usize)).copied()
}
