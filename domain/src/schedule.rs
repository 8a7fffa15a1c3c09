//! Time slots and pt-BR descriptions for the booking steps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use shared::AvailabilityResponse;

use crate::locale;

/// One hour offered by the time picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: u32,
    pub available: bool,
}

impl TimeSlot {
    /// Button label, e.g. `"09:00h"`
    pub fn label(&self) -> String {
        format!("{:02}:00h", self.hour)
    }
}

/// Start of the slot at `hour` on `date`
pub fn scheduling_instant(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
}

/// Every possible hour of `date`; a slot is available when the host has it
/// free and it has not started yet.
pub fn time_slots(
    date: NaiveDate,
    availability: &AvailabilityResponse,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    availability
        .possible_times
        .iter()
        .map(|&hour| {
            let free = availability.available_times.contains(&hour);
            let upcoming = scheduling_instant(date, hour).is_some_and(|start| start > now);
            TimeSlot {
                hour,
                available: free && upcoming,
            }
        })
        .collect()
}

/// `"10 de março de 2024"`
pub fn describe_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        locale::month_name(date.month()).unwrap_or_default(),
        date.year()
    )
}

/// `"14:00h"`
pub fn describe_time(instant: NaiveDateTime) -> String {
    format!("{:02}:{:02}h", instant.hour(), instant.minute())
}

/// Time picker header: week day and day/month, e.g. `("terça-feira", "12 de março")`
pub fn describe_picker_header(date: NaiveDate) -> (&'static str, String) {
    let described = format!(
        "{:02} de {}",
        date.day(),
        locale::month_name(date.month()).unwrap_or_default()
    );
    (locale::weekday_name(date.weekday()), described)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_describe_date_and_time() {
        assert_eq!(describe_date(date(2024, 3, 10)), "10 de março de 2024");
        assert_eq!(describe_date(date(2024, 1, 5)), "05 de janeiro de 2024");

        let instant = scheduling_instant(date(2024, 3, 10), 9).unwrap();
        assert_eq!(describe_time(instant), "09:00h");
    }

    #[test]
    fn test_describe_picker_header() {
        assert_eq!(
            describe_picker_header(date(2024, 3, 12)),
            ("terça-feira", "12 de março".to_string())
        );
    }

    #[test]
    fn test_scheduling_instant_rejects_invalid_hours() {
        assert!(scheduling_instant(date(2024, 3, 10), 24).is_none());
        assert_eq!(
            scheduling_instant(date(2024, 3, 10), 14),
            date(2024, 3, 10).and_hms_opt(14, 0, 0)
        );
    }

    #[test]
    fn test_time_slots() {
        let availability = AvailabilityResponse {
            possible_times: vec![8, 9, 10, 11],
            available_times: vec![8, 10, 11],
        };
        let now = date(2024, 3, 12).and_hms_opt(9, 30, 0).unwrap();

        let slots = time_slots(date(2024, 3, 12), &availability, now);

        assert_eq!(
            slots,
            vec![
                TimeSlot { hour: 8, available: false },
                TimeSlot { hour: 9, available: false },
                TimeSlot { hour: 10, available: true },
                TimeSlot { hour: 11, available: true },
            ]
        );
        assert_eq!(slots[2].label(), "10:00h");
    }

    #[test]
    fn test_time_slots_on_a_future_day() {
        let availability = AvailabilityResponse {
            possible_times: vec![8, 9],
            available_times: vec![9],
        };
        let now = date(2024, 3, 11).and_hms_opt(23, 0, 0).unwrap();

        let slots = time_slots(date(2024, 3, 12), &availability, now);

        assert!(!slots[0].available);
        assert!(slots[1].available);
    }
}
