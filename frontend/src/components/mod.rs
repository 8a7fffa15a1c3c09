pub mod calendar;
pub mod confirm_step;
pub mod form_error;
pub mod multi_step;
pub mod time_picker;
