use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month-scoped unavailability rules returned by
/// `GET /users/{username}/blocked-dates?year=YYYY&month=M` (month is 1-based).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDatesResponse {
    /// Week days blocked in every week of the month (0 = Sunday .. 6 = Saturday)
    pub blocked_week_days: Vec<u32>,
    /// Day-of-month numbers (1..31) blocked in this month only
    pub blocked_dates: Vec<u32>,
}

/// Query parameters of the blocked-dates endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDatesQuery {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u32,
}

/// Hourly slots of a single day returned by
/// `GET /users/{username}/availability?date=YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// Every hour the host works on that week day
    pub possible_times: Vec<u32>,
    /// Hours that are not already booked
    pub available_times: Vec<u32>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// One available interval of a week day, in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub week_day: u32,
    pub start_time_in_minutes: u32,
    pub end_time_in_minutes: u32,
}

/// Body of `POST /users/time-intervals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeIntervalsRequest {
    pub intervals: Vec<TimeInterval>,
}

/// Body of `PUT /users/profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub bio: String,
}

/// Body of `POST /users/{username}/schedule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchedulingRequest {
    pub name: String,
    pub email: String,
    pub observations: Option<String>,
    /// Start of the booked slot (RFC 3339)
    pub date: DateTime<FixedOffset>,
}

/// Where a calendar cell sits relative to the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Fill day from the previous month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Fill day from the next month
    PaddingAfter,
}

/// A single cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day_type: CalendarDayType,
    /// Fill, past or blocked cells cannot be selected
    pub disabled: bool,
}

impl CalendarCell {
    pub fn is_fill(&self) -> bool {
        self.day_type != CalendarDayType::MonthDay
    }

    /// Date a click on this cell selects; disabled and fill cells select nothing
    pub fn selectable_date(&self) -> Option<NaiveDate> {
        (!self.disabled && !self.is_fill()).then_some(self.date)
    }
}

/// One row of the month grid, always 7 cells starting on Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// 1-based row number
    pub week: u32,
    pub days: Vec<CalendarCell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blocked_dates_wire_names() {
        let json = r#"{"blockedWeekDays":[0,6],"blockedDates":[15,22]}"#;
        let parsed: BlockedDatesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.blocked_week_days, vec![0, 6]);
        assert_eq!(parsed.blocked_dates, vec![15, 22]);
    }

    #[test]
    fn test_availability_wire_names() {
        let json = r#"{"possibleTimes":[8,9,10],"availableTimes":[9]}"#;
        let parsed: AvailabilityResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.possible_times, vec![8, 9, 10]);
        assert_eq!(parsed.available_times, vec![9]);
    }

    #[test]
    fn test_time_intervals_serialization() {
        let request = TimeIntervalsRequest {
            intervals: vec![TimeInterval {
                week_day: 1,
                start_time_in_minutes: 480,
                end_time_in_minutes: 1080,
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["intervals"][0]["weekDay"], 1);
        assert_eq!(value["intervals"][0]["startTimeInMinutes"], 480);
        assert_eq!(value["intervals"][0]["endTimeInMinutes"], 1080);
    }

    #[test]
    fn test_scheduling_request_date_is_rfc3339() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let request = CreateSchedulingRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            observations: None,
            date: offset.with_ymd_and_hms(2024, 3, 12, 14, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date"], "2024-03-12T14:00:00-03:00");
        assert!(value["observations"].is_null());
    }

    #[test]
    fn test_calendar_cell_is_fill() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let month_day = CalendarCell {
            date,
            day_type: CalendarDayType::MonthDay,
            disabled: true,
        };
        let padding = CalendarCell {
            date,
            day_type: CalendarDayType::PaddingAfter,
            disabled: true,
        };

        assert!(!month_day.is_fill());
        assert!(padding.is_fill());
    }

    #[test]
    fn test_calendar_cell_selectable_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let cell = |day_type, disabled| CalendarCell {
            date,
            day_type,
            disabled,
        };

        assert_eq!(cell(CalendarDayType::MonthDay, false).selectable_date(), Some(date));
        assert_eq!(cell(CalendarDayType::MonthDay, true).selectable_date(), None);
        assert_eq!(cell(CalendarDayType::PaddingBefore, true).selectable_date(), None);
        // Fill cells never select, even if built enabled
        assert_eq!(cell(CalendarDayType::PaddingAfter, false).selectable_date(), None);
    }
}
