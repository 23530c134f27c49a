//! Shared domain logic for the lecture calendar.
//!
//! Everything in this crate is independent of the browser so it can be
//! unit tested on the host. The frontend crate only handles presentation,
//! local storage access and console logging.

pub mod calendar;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod lecture;
pub mod storage;

pub use calendar::{
    aggregate, daily_total, month_grid, CalendarCell, CalendarDayType, CalendarMonth, DaySelection,
    MonthCursor, MonthSummary, GRID_CELLS,
};
pub use config::CalendarConfig;
pub use editor::{DayEditor, EditorView, FormTarget, SaveLecture};
pub use error::{LectureValidationError, StorageError};
pub use format::{format_amount, format_korean_long_date, format_month_year, month_name};
pub use lecture::{date_key, parse_date_key, validate_lecture_input, Lecture, LectureBook};
pub use storage::{KeyValueStore, MemoryStore, PersistentSlot};
