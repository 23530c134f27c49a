pub mod calendar;
pub mod forms;
pub mod header;
pub mod lecture_modal;
