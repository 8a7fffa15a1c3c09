pub mod use_availability;
pub mod use_blocked_dates;
