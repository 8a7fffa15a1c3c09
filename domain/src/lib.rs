//! Domain logic for Ignite Call.
//!
//! Everything here is plain computation over `shared` types: the booking
//! calendar's month grid, the blocked-dates cache, pt-BR date naming and the
//! validation behind each form. The Yew frontend only renders what these
//! functions return.

pub mod blocked_dates;
pub mod calendar;
pub mod forms;
pub mod locale;
pub mod schedule;

pub use blocked_dates::{BlockedDatesCache, RequestTicket};
pub use calendar::{build_month_grid, BlockedRules, ReferenceMonth};
