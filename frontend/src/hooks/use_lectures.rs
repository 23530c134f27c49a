use chrono::NaiveDate;
use shared::{CalendarConfig, LectureBook, SaveLecture};
use yew::prelude::*;

use super::use_local_storage::{use_local_storage, Snapshot};
use crate::services::date_utils::now_millis;
use crate::services::logging::Logger;

pub struct UseLecturesResult {
    pub book: Snapshot<LectureBook>,
    pub actions: UseLecturesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLecturesActions {
    /// Save a validated lecture for the given day
    pub save: Callback<(NaiveDate, SaveLecture)>,
    /// Delete a lecture by ID
    pub delete: Callback<String>,
}

/// The persisted lecture collection and the only way to mutate it
#[hook]
pub fn use_lectures(config: &CalendarConfig) -> UseLecturesResult {
    let lectures = use_local_storage(&config.storage_key, LectureBook::new);

    let save = {
        let set = lectures.set.clone();
        use_callback(
            lectures.value.clone(),
            move |(date, save): (NaiveDate, SaveLecture), book| {
                let mut book = LectureBook::clone(book);
                match save.apply_to(&mut book, date, now_millis()) {
                    Some(id) => {
                        log::info!(target: "lectures", "Saved lecture {}", id);
                        set.emit(book);
                    }
                    None => Logger::warn_with_component(
                        "lectures",
                        "Save ignored, lecture no longer exists",
                    ),
                }
            },
        )
    };

    let delete = {
        let set = lectures.set.clone();
        use_callback(lectures.value.clone(), move |id: String, book| {
            let mut book = LectureBook::clone(book);
            if book.remove(&id) {
                set.emit(book);
            }
        })
    };

    UseLecturesResult {
        book: lectures.value,
        actions: UseLecturesActions { save, delete },
    }
}
