pub mod connect_calendar;
pub mod home;
pub mod not_found;
pub mod register;
pub mod schedule;
pub mod time_intervals;
pub mod update_profile;
