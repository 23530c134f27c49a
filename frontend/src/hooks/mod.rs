pub mod use_calendar;
pub mod use_lectures;
pub mod use_local_storage;
